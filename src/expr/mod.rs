//! The arithmetic expression language: its tokens, its operators,
//! and the two stages which turn text into a number.

pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod token;

pub use evaluator::{evaluate, EvalError};
pub use lexer::{tokenize, LexError};
pub use operator::BinaryOp;
pub use token::{Token, TokenData};
