pub mod password_gen;
pub mod prompt;
