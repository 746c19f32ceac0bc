//! # Grammar State Machine
//!
//! Builds a [`Document`] from the token stream of a response file.
//!
//! ```text
//! document   := ( NEWLINE | suite )*
//! suite      := header-line+ NEWLINE? block*
//! header-line:= ( '[' NAME '=' NAME ']' )+ NEWLINE
//! block      := assignment+ NEWLINE
//! assignment := NAME '=' NAME? NEWLINE
//! ```
//!
//! The grammar is driven by [`Machine::step`], a single dispatch over the current [`State`]
//! and the incoming token. [`Parser`] pulls tokens from a [`Tokenizer`] one at a time and
//! feeds them to the machine. The first violation aborts the parse; no partial document is
//! returned.
//!
//! Input may only end right after a `NEWLINE`. A block still open at that point never saw
//! its closing blank line and is dropped.

use std::io::{self, BufRead, Cursor};

use strum_macros::{Display, EnumIter};
use thiserror::Error;
use tracing::{debug, trace};

use crate::ast::{Case, Document, Suite};
use crate::tokenizer::{Delimiter, Token, TokenSpan, Tokenizer};

/// Grammar positions. The display text names the production used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum State {
    /// Top scope, between suites or between case blocks.
    #[strum(serialize = "document")]
    Document,
    #[strum(serialize = "suite header name")]
    HeaderName,
    #[strum(serialize = "suite header '='")]
    HeaderEqual,
    #[strum(serialize = "suite header value")]
    HeaderValue,
    #[strum(serialize = "suite header ']'")]
    HeaderClose,
    /// After `]`: another `[` on the same line, or the end of the header line.
    #[strum(serialize = "suite header line")]
    HeaderLineEnd,
    /// After a complete header line: more headers, the first case, or a blank line.
    #[strum(serialize = "suite body")]
    SuiteBody,
    #[strum(serialize = "case field '='")]
    CaseEqual,
    #[strum(serialize = "case field value")]
    CaseValue,
    #[strum(serialize = "case field line")]
    CaseLineEnd,
    /// Inside an open case, at the start of a line.
    #[strum(serialize = "case block")]
    CaseBlock,
}

impl State {
    /// Whether the input may end in this state: only right after a `Newline`.
    pub fn accepts_end(self) -> bool {
        matches!(self, State::Document | State::SuiteBody | State::CaseBlock)
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unexpected token `{found}` at line {line}, column {column} in {state}")]
    UnexpectedToken {
        found: Token,
        state: State,
        line: usize,
        column: usize,
    },
    #[error("unexpected end of input after line {line} in {state}")]
    UnexpectedEndOfInput { state: State, line: usize },
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parser context: the grammar state plus the suite and case under construction.
///
/// The open suite is always the last one in `suites`; the open case lives in
/// `current_case` until a blank line seals it into that suite.
#[derive(Debug)]
pub struct Machine {
    state: State,
    suites: Vec<Suite>,
    current_case: Option<Case>,
    current_name: String,
    last_line: usize,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    pub fn new() -> Self {
        Self {
            state: State::Document,
            suites: Vec::new(),
            current_case: None,
            current_name: String::new(),
            last_line: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    pub fn current_case(&self) -> Option<&Case> {
        self.current_case.as_ref()
    }

    /// Feeds one token to the machine and moves to the next state.
    pub fn step(&mut self, span: TokenSpan) -> ParseResult<()> {
        use Delimiter::*;
        use State::*;

        trace!(state = %self.state, token = %span.token, line = span.line, "step");
        self.last_line = span.line;

        let next = match (self.state, &span.token) {
            (Document, Token::Newline) => Document,
            (Document, Token::Delimiter(OpenBracket)) => {
                self.suites.push(Suite::new());
                debug!(line = span.line, index = self.suites.len() - 1, "suite opened");
                HeaderName
            }
            (Document, Token::Word(name)) if !self.suites.is_empty() => self.open_case(name),

            (HeaderName, Token::Word(name)) => {
                self.current_name = name.clone();
                HeaderEqual
            }
            (HeaderEqual, Token::Delimiter(Equal)) => HeaderValue,
            (HeaderValue, Token::Word(value)) => {
                if let Some(suite) = self.suites.last_mut() {
                    suite.set(&self.current_name, value);
                }
                HeaderClose
            }
            (HeaderClose, Token::Delimiter(CloseBracket)) => HeaderLineEnd,
            (HeaderLineEnd, Token::Delimiter(OpenBracket)) => HeaderName,
            (HeaderLineEnd, Token::Newline) => SuiteBody,

            (SuiteBody, Token::Newline) => Document,
            (SuiteBody, Token::Delimiter(OpenBracket)) => HeaderName,
            (SuiteBody, Token::Word(name)) => self.open_case(name),

            (CaseBlock, Token::Newline) => {
                self.seal_case();
                Document
            }
            (CaseBlock, Token::Word(name)) => {
                self.current_name = name.clone();
                CaseEqual
            }
            (CaseEqual, Token::Delimiter(Equal)) => CaseValue,
            (CaseValue, Token::Word(value)) => {
                if let Some(case) = self.current_case.as_mut() {
                    case.set(&self.current_name, value);
                }
                CaseLineEnd
            }
            // `IV = ` leaves the field empty
            (CaseValue, Token::Newline) => CaseBlock,
            (CaseLineEnd, Token::Newline) => CaseBlock,

            (state, _) => {
                return Err(ParseError::UnexpectedToken {
                    found: span.token,
                    state,
                    line: span.line,
                    column: span.column,
                })
            }
        };

        self.state = next;
        Ok(())
    }

    /// Ends the parse. A case that was never closed by a blank line is dropped.
    pub fn finish(self) -> ParseResult<Document> {
        if !self.state.accepts_end() {
            return Err(ParseError::UnexpectedEndOfInput {
                state: self.state,
                line: self.last_line,
            });
        }
        if let Some(case) = &self.current_case {
            debug!(line = self.last_line, key = %case.key, "dropping unterminated case");
        }
        Ok(Document {
            suites: self.suites,
        })
    }

    fn open_case(&mut self, name: &str) -> State {
        self.current_case = Some(Case::new());
        self.current_name = name.to_string();
        State::CaseEqual
    }

    fn seal_case(&mut self) {
        if let (Some(case), Some(suite)) = (self.current_case.take(), self.suites.last_mut()) {
            suite.cases.push(case);
            debug!(
                line = self.last_line,
                index = suite.cases.len() - 1,
                "case sealed"
            );
        }
    }
}

/// Drives a [`Machine`] over a token source until the source is exhausted.
pub struct Parser<I> {
    tokens: I,
    machine: Machine,
}

impl<R: BufRead> Parser<Tokenizer<R>> {
    pub fn from_reader(reader: R) -> Self {
        Self::new(Tokenizer::new(reader))
    }
}

impl<I> Parser<I>
where
    I: Iterator<Item = io::Result<TokenSpan>>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            machine: Machine::new(),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(self) -> ParseResult<Document> {
        let Parser {
            tokens,
            mut machine,
        } = self;

        for span in tokens {
            machine.step(span?)?;
        }

        let document = machine.finish()?;
        debug!(
            suites = document.len(),
            cases = document.case_count(),
            "parsed document"
        );
        Ok(document)
    }
}

/// Parses a response file from any buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<Document> {
    Parser::from_reader(reader).run()
}

/// Parses a response file held in memory.
pub fn parse_str(input: &str) -> ParseResult<Document> {
    parse_reader(Cursor::new(input))
}
