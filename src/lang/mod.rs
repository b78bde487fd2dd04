/*!
# Language Module

Lexical analysis for the NV command language.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use token::Token;
pub use token::Word;
