pub mod check;
pub mod dump;
pub mod exec;
pub mod input;

#[cfg(test)]
mod input_tests;
