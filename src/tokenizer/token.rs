use std::io::{self, BufRead};
use std::iter::FusedIterator;

use strum_macros::{AsRefStr, Display, EnumString};

use super::line::scan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Any run of text between delimiters, trimmed of surrounding whitespace.
    Word(String),
    Delimiter(Delimiter),
    /// End of a physical line. Blank and comment-only lines consist of this token alone.
    Newline,
}

impl Token {
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{}", word),
            Token::Delimiter(delimiter) => write!(f, "{}", delimiter),
            Token::Newline => write!(f, "newline"),
        }
    }
}

/// Structural characters of the response file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum Delimiter {
    /// Opens a suite header (`[`)
    #[strum(serialize = "[")]
    OpenBracket,
    /// Closes a suite header (`]`)
    #[strum(serialize = "]")]
    CloseBracket,
    /// Separates a field name from its value (`=`)
    #[strum(serialize = "=")]
    Equal,
}

impl Delimiter {
    pub fn is_delimiter_char(c: char) -> bool {
        matches!(c, '[' | ']' | '=')
    }
}

/// A token with the 1-based line and byte column it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpan {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` at line {}, column {}",
            self.token, self.line, self.column
        )
    }
}

/// Lazy token stream over a buffered reader.
///
/// Only the current physical line is held in memory. Each call to [`Iterator::next`]
/// either yields the next token of that line, closes the line with [`Token::Newline`], or
/// reads the following line. A final line without a terminator yields its tokens but no
/// closing `Newline`.
///
/// The only failure is a read error from the underlying reader (including invalid UTF-8),
/// after which the stream ends.
#[derive(Debug)]
pub struct Tokenizer<R> {
    reader: R,
    line: String,
    offset: usize,
    line_number: usize,
    terminated: bool,
    in_line: bool,
    finished: bool,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            offset: 0,
            line_number: 0,
            terminated: false,
            in_line: false,
            finished: false,
        }
    }

    /// Number of physical lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        self.terminated = self.line.ends_with('\n');
        if self.terminated {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        self.offset = 0;
        self.in_line = true;
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = io::Result<TokenSpan>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if !self.in_line {
                match self.read_line() {
                    Ok(true) => {}
                    Ok(false) => {
                        self.finished = true;
                        return None;
                    }
                    Err(e) => {
                        self.finished = true;
                        tracing::debug!(line = self.line_number + 1, "read failed: {}", e);
                        return Some(Err(e));
                    }
                }
            }

            match scan(&self.line[self.offset..]) {
                Some(lexeme) => {
                    let column = self.offset + lexeme.start + 1;
                    self.offset += lexeme.end;
                    return Some(Ok(TokenSpan {
                        token: lexeme.token,
                        line: self.line_number,
                        column,
                    }));
                }
                None => {
                    self.in_line = false;
                    if self.terminated {
                        return Some(Ok(TokenSpan {
                            token: Token::Newline,
                            line: self.line_number,
                            column: self.line.len() + 1,
                        }));
                    }
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Tokenizer<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn tokenize(input: &str) -> Vec<Token> {
        Tokenizer::new(Cursor::new(input))
            .map(|span| span.unwrap().token)
            .collect()
    }

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    const OPEN: Token = Token::Delimiter(Delimiter::OpenBracket);
    const CLOSE: Token = Token::Delimiter(Delimiter::CloseBracket);
    const EQUAL: Token = Token::Delimiter(Delimiter::Equal);

    #[test]
    fn test_header_and_block() {
        let input = "[PRF=HMAC_SHA1]\n\nL = 160\nKI = aa\n\n";
        assert_eq!(
            tokenize(input),
            vec![
                OPEN,
                word("PRF"),
                EQUAL,
                word("HMAC_SHA1"),
                CLOSE,
                Token::Newline,
                Token::Newline,
                word("L"),
                EQUAL,
                word("160"),
                Token::Newline,
                word("KI"),
                EQUAL,
                word("aa"),
                Token::Newline,
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_blank_and_comment_lines_yield_one_newline() {
        let input = "# CAVS 14.4\n   \n\t# indented comment\n\n";
        assert_eq!(tokenize(input), vec![Token::Newline; 4]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "[RLEN=8_BITS]\r\n\r\n";
        assert_eq!(
            tokenize(input),
            vec![
                OPEN,
                word("RLEN"),
                EQUAL,
                word("8_BITS"),
                CLOSE,
                Token::Newline,
                Token::Newline
            ]
        );
    }

    #[test]
    fn test_unterminated_last_line_has_no_newline() {
        assert_eq!(tokenize("KI ="), vec![word("KI"), EQUAL]);
        assert_eq!(tokenize("KI =\n"), vec![word("KI"), EQUAL, Token::Newline]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("# no newline").is_empty());
    }

    #[test]
    fn test_positions() {
        let spans: Vec<TokenSpan> = Tokenizer::new(Cursor::new("\n  KO = 9f\n"))
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!((spans[0].line, spans[0].column), (1, 1));
        assert_eq!(spans[1].token, word("KO"));
        assert_eq!((spans[1].line, spans[1].column), (2, 3));
        assert_eq!((spans[2].line, spans[2].column), (2, 6));
        assert_eq!((spans[3].line, spans[3].column), (2, 8));
        assert_eq!(spans[4].token, Token::Newline);
        assert_eq!((spans[4].line, spans[4].column), (2, 10));
    }

    #[test]
    fn test_lazy_line_reads() {
        let mut tokenizer = Tokenizer::new(Cursor::new("a\nb\nc\n"));
        assert_eq!(tokenizer.next().unwrap().unwrap().token, word("a"));
        assert_eq!(tokenizer.line_number(), 1);
        assert!(tokenizer.next().unwrap().unwrap().token.is_newline());
        assert_eq!(tokenizer.line_number(), 1);
        assert_eq!(tokenizer.next().unwrap().unwrap().token, word("b"));
        assert_eq!(tokenizer.line_number(), 2);
    }

    #[test]
    fn test_read_error_ends_stream() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }
        }

        let mut tokenizer = Tokenizer::new(BufReader::new(Broken));
        assert!(tokenizer.next().unwrap().is_err());
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let mut tokenizer = Tokenizer::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        let err = tokenizer.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_display() {
        assert_eq!(OPEN.to_string(), "[");
        assert_eq!(Token::Newline.to_string(), "newline");
        assert_eq!("=".parse::<Delimiter>().unwrap(), Delimiter::Equal);
    }
}
