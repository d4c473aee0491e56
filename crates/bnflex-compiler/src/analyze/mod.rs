//! Rule-level analysis of a lowered grammar.

mod rules;


pub(crate) use rules::RuleTable;
