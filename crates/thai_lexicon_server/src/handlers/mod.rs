pub mod health;
pub mod tokenize;
