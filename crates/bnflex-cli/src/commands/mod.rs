pub mod check;
pub mod dump;
pub mod loader;
pub mod run_common;
pub mod tokenize;
pub mod trace;

#[cfg(test)]
mod loader_tests;
