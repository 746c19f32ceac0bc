//! # Line Scanning
//!
//! Scanners for the unconsumed remainder of a single physical line. The [`Tokenizer`]
//! calls [`scan`] repeatedly against the same line until it reports the end of the line.
//!
//! ## Lexical Rules
//!
//! * Leading whitespace before every token is skipped.
//! * A remainder that is empty or starts with `#` is the end of the line. This applies at
//!   any token boundary, so `[RLEN=32_BITS] # note` ends after the `]`.
//! * `[`, `]` and `=` are single-character [`Delimiter`] tokens.
//! * Anything else runs up to the next delimiter or the end of the line and becomes a
//!   [`Token::Word`] with trailing whitespace removed.
//!
//! [`Tokenizer`]: super::token::Tokenizer

use nom::{
    branch::alt,
    bytes::complete::{take_till1, take_while},
    character::complete::char,
    combinator::{eof, map, rest, value},
    error::{context, VerboseError},
    sequence::preceded,
    IResult,
};

use super::token::{Delimiter, Token};

pub type LineResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// A token found in a line remainder, with byte offsets relative to that remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    /// Offset of the first byte of the token.
    pub start: usize,
    /// Offset just past the consumed text, including any trailing whitespace of a word.
    pub end: usize,
}

/// Scans the next token out of `input`, or returns `None` once the line has no more tokens.
///
/// ```
/// # use cavp_kdf::tokenizer::line::scan;
/// # use cavp_kdf::tokenizer::token::Token;
/// let lexeme = scan("  KI = 00ff").unwrap();
/// assert_eq!(lexeme.token, Token::Word("KI".to_string()));
/// assert_eq!((lexeme.start, lexeme.end), (2, 5));
/// assert!(scan("   # trailing comment").is_none());
/// ```
pub fn scan(input: &str) -> Option<Lexeme> {
    let (body, _) = parse_space(input).ok()?;
    if parse_line_end(body).is_ok() {
        return None;
    }
    let start = input.len() - body.len();
    let (remaining, token) = match parse_token(body) {
        Ok(parsed) => parsed,
        // body is non-empty and starts with a non-space character, so one of the
        // alternatives always matches; keep the rest of the line as a word regardless.
        Err(_) => ("", Token::Word(body.trim_end().to_string())),
    };
    Some(Lexeme {
        token,
        start,
        end: input.len() - remaining.len(),
    })
}

pub fn parse_space(input: &str) -> LineResult<&str> {
    take_while(char::is_whitespace)(input)
}

/// Matches an exhausted line or a comment running to the end of it.
pub fn parse_line_end(input: &str) -> LineResult<()> {
    context(
        "end of line",
        value((), alt((eof, preceded(char('#'), rest)))),
    )(input)
}

pub fn parse_delimiter(input: &str) -> LineResult<Token> {
    context(
        "delimiter",
        map(
            alt((
                value(Delimiter::OpenBracket, char('[')),
                value(Delimiter::CloseBracket, char(']')),
                value(Delimiter::Equal, char('=')),
            )),
            Token::Delimiter,
        ),
    )(input)
}

pub fn parse_word(input: &str) -> LineResult<Token> {
    context(
        "word",
        map(take_till1(Delimiter::is_delimiter_char), |word: &str| {
            Token::Word(word.trim_end().to_string())
        }),
    )(input)
}

fn parse_token(input: &str) -> LineResult<Token> {
    alt((parse_delimiter, parse_word))(input)
}
