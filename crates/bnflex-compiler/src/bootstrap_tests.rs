use bnflex_core::{TraversalOrder, TreePrinter};
use bnflex_vm::Lexer;

use crate::BnfCompiler;
use crate::bootstrap::dialect;

#[test]
fn dialect_grammar_is_valid() {
    let (grammar, root) = dialect();

    assert!(Lexer::new(grammar, root).is_ok());
}

#[test]
fn dialect_accepts_documented_example() {
    let (grammar, root) = dialect();
    let lexer = Lexer::new(grammar, root).unwrap();
    let source = r#"root ::= object
sep ::= [ \t\n]*
integer ::= [0-9]+
boolean ::= "true" | "false"
list ::= "[" sep (object ("," sep object)*)? sep "]"
"#;

    let tree = lexer.tokenize(source).unwrap();

    let names: Vec<&str> = tree
        .all_by_name(tree.root(), TraversalOrder::RootFirst, "sentence")
        .into_iter()
        .filter_map(|s| tree.first_by_name(s, "word"))
        .map(|w| tree.value(w))
        .collect();
    assert_eq!(names, ["root", "sep", "integer", "boolean", "list"]);
}

#[test]
fn culled_tree_shape() {
    let tree = BnfCompiler::global()
        .parse(r#"root ::= !"a"+ | [^b-c]"#)
        .unwrap();

    insta::assert_snapshot!(TreePrinter::new(&tree).dump(), @r#"
    grammar
      sentence
        word "root"
        statement
          token
            ! "!"
            string
              strOpt
                strOpt
                  strChar "a"
            modifier "+"
          statementOpt
            pipeOpt
              | "|"
              token
                chargroup
                  ^ "^"
                  rangeStart
                    rangeChar "b"
                  rangeEnd
                    rangeChar "c"
    "#);
}

#[test]
fn groups_and_sets_in_culled_tree() {
    let tree = BnfCompiler::global()
        .parse(r#"r ::= ("\n" [xy])? EOF"#)
        .unwrap();

    insta::assert_snapshot!(TreePrinter::new(&tree).dump(), @r#"
    grammar
      sentence
        word "r"
        statement
          nested
            statement
              token
                string
                  strOpt
                    strOpt
                      escapeSequence
                        escape "\\"
                        anyChar "n"
              statementOpt
                spaceOpt
                  token
                    charset
                      setOpt
                        setOpt
                          setChar "x"
                          setChar "y"
            modifier "?"
          statementOpt
            spaceOpt
              token
                eof "EOF"
    "#);
}

#[test]
fn rule_boundaries_need_no_separator() {
    let tree = BnfCompiler::global()
        .parse("a ::= b c d ::= e")
        .unwrap();

    let sentences = tree.all_by_name(tree.root(), TraversalOrder::RootFirst, "sentence");
    assert_eq!(sentences.len(), 2);
    assert_eq!(tree.value(sentences[0]), "a ::= b c ");
    assert_eq!(tree.value(sentences[1]), "d ::= e");
}
