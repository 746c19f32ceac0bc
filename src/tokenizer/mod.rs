//! # Tokenizer Component
//!
//! Turns a CAVP response file into a lazy stream of [`Token`]s, one physical line at a time.
//! The tokenizer knows nothing about suites or cases; it only splits lines into words and
//! the `[`, `]`, `=` delimiters, and closes every terminated line with a
//! [`Token::Newline`]. Blank lines and comment lines (`#`) produce that `Newline` alone, so
//! the parser can see block boundaries.
//!
//! ## Component Structure
//!
//! * [`token`]: token types and the [`Tokenizer`] iterator
//! * [`line`]: nom scanners for the remainder of a single line
//!
//! ## Usage Example
//!
//! ```rust
//! use std::io::Cursor;
//! use cavp_kdf::tokenizer::{Token, Tokenizer};
//!
//! let tokens: Vec<Token> = Tokenizer::new(Cursor::new("COUNT = 0\n"))
//!     .map(|span| span.map(|s| s.token))
//!     .collect::<std::io::Result<_>>()
//!     .unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert!(tokens[3].is_newline());
//! ```

pub mod line;
pub mod token;

pub use token::{Delimiter, Token, TokenSpan, Tokenizer};
