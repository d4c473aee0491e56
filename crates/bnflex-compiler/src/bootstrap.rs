//! The BNF dialect, written directly as a grammar graph.
//!
//! Node names here are what the lowering passes look for: they cull, lift
//! and query the bootstrap parse tree by these names. Unnamed nodes are
//! scaffolding and get culled right after tokenizing.
//!
//! ```text
//! grammar     ::= gap sentence* EOF
//! sentence    ::= word gap "::=" gap statement gap
//! statement   ::= element (pipeOpt | spaceOpt)*
//! pipeOpt     ::= gap "|" gap !(word gap "::=") element
//! spaceOpt    ::= gap !(word gap "::=") element
//! element     ::= token | nested
//! token       ::= "!"? atom [+*?]?
//! nested      ::= "!"? "(" gap statement gap ")" [+*?]?
//! atom        ::= string | chargroup | charset | eof | word
//! ```

use bnflex_core::{Grammar, NodeId};

const WORD_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

/// Build the dialect grammar and return it with its root.
pub fn dialect() -> (Grammar, NodeId) {
    let mut g = Grammar::new();

    let word_char = g.char_set(WORD_CHARS, false);
    let word = g.repeat(word_char);
    let word = g.named(word, "word");

    // Layout: whitespace and `#` comments, in any mix.
    let space = g.char_set(" \t\r\n", false);
    let whitespace = g.repeat(space);
    let whitespace = g.named(whitespace, "whitespace");
    let hash = g.literal("#");
    let line_char = g.char_set("\n", true);
    let line = g.repeat(line_char);
    let line = g.optional(line);
    let comment = g.sequence([hash, line]);
    let comment = g.named(comment, "comment");
    let blank = g.choice([whitespace, comment]);
    let blanks = g.repeat(blank);
    let gap = g.optional(blanks);

    let escape = g.literal("\\");
    let escape = g.named(escape, "escape");
    let any_char = g.char_set("", true);
    let any_char = g.named(any_char, "anyChar");
    let escape_sequence = g.sequence([escape, any_char]);
    let escape_sequence = g.named(escape_sequence, "escapeSequence");

    let quote = g.literal("\"");
    let str_char = g.char_set("\"\\", true);
    let str_char = g.named(str_char, "strChar");
    let str_piece = g.choice([escape_sequence, str_char]);
    let str_body = g.repeat(str_piece);
    let str_body = g.named(str_body, "strOpt");
    let str_opt = g.optional(str_body);
    let str_opt = g.named(str_opt, "strOpt");
    let string = g.sequence([quote, str_opt, quote]);
    let string = g.named(string, "string");

    let open = g.literal("[");
    let close = g.literal("]");
    let caret = g.literal("^");
    let caret = g.named(caret, "^");
    let negated = g.optional(caret);
    let negated = g.named(negated, "modifiers");

    let set_char = g.char_set("]\\", true);
    let set_char = g.named(set_char, "setChar");
    let set_piece = g.choice([escape_sequence, set_char]);
    let set_body = g.repeat(set_piece);
    let set_body = g.named(set_body, "setOpt");
    let set_opt = g.optional(set_body);
    let set_opt = g.named(set_opt, "setOpt");
    let charset = g.sequence([open, negated, set_opt, close]);
    let charset = g.named(charset, "charset");

    let range_char = g.char_set("]\\-", true);
    let range_char = g.named(range_char, "rangeChar");
    let range_piece = g.choice([escape_sequence, range_char]);
    let range_start = g.sequence([range_piece]);
    let range_start = g.named(range_start, "rangeStart");
    let range_end = g.sequence([range_piece]);
    let range_end = g.named(range_end, "rangeEnd");
    let dash = g.literal("-");
    let chargroup = g.sequence([open, negated, range_start, dash, range_end, close]);
    let chargroup = g.named(chargroup, "chargroup");

    // `EOF` is reserved, but `EOFs` is still a rule name.
    let eof_keyword = g.literal("EOF");
    let word_ends = g.negation(word_char);
    let eof = g.sequence([eof_keyword, word_ends]);
    let eof = g.named(eof, "eof");

    let atom = g.choice([string, chargroup, charset, eof, word]);

    let bang = g.literal("!");
    let bang = g.named(bang, "!");
    let prefix = g.optional(bang);
    let prefix = g.named(prefix, "modifiers");
    let modifier = g.char_set("+*?", false);
    let modifier = g.named(modifier, "modifier");
    let postfix = g.optional(modifier);
    let postfix = g.named(postfix, "modifiers");

    let token = g.sequence([prefix, atom, postfix]);
    let token = g.named(token, "token");

    // Groups contain statements, which contain groups. Tie the knot once
    // `statement` exists.
    let pending = g.reference("statement");
    let lparen = g.literal("(");
    let rparen = g.literal(")");
    let nested = g.sequence([prefix, lparen, gap, pending, gap, rparen, postfix]);
    let nested = g.named(nested, "nested");

    let element = g.choice([token, nested]);

    let define = g.literal("::=");
    let define = g.named(define, "::=");
    let head = g.sequence([word, gap, define]);
    let not_head = g.negation(head);

    let pipe = g.literal("|");
    let pipe = g.named(pipe, "|");
    let pipe_opt = g.sequence([gap, pipe, gap, not_head, element]);
    let pipe_opt = g.named(pipe_opt, "pipeOpt");
    let space_opt = g.sequence([gap, not_head, element]);
    let space_opt = g.named(space_opt, "spaceOpt");
    let continuation = g.choice([pipe_opt, space_opt]);
    let statement_opt = g.sequence([continuation]);
    let statement_opt = g.named(statement_opt, "statementOpt");
    let continuations = g.repeat(statement_opt);
    let continuations = g.named(continuations, "statementList");
    let continuations = g.optional(continuations);
    let continuations = g.named(continuations, "statementList");

    let statement = g.sequence([element, continuations]);
    let statement = g.named(statement, "statement");
    for edge in g.children_mut(nested) {
        if *edge == pending {
            *edge = statement;
        }
    }

    let sentence = g.sequence([word, gap, define, gap, statement, gap]);
    let sentence = g.named(sentence, "sentence");
    let sentences = g.repeat(sentence);
    let sentences = g.named(sentences, "statementList");
    let sentences = g.optional(sentences);
    let sentences = g.named(sentences, "statementList");

    let end = g.end_of_input();
    let root = g.sequence([gap, sentences, end]);
    let root = g.named(root, "grammar");

    (g, root)
}
