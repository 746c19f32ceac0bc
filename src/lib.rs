//! Reader for NIST CAVP KDF response files (`*.rsp`) and a generator that renders their
//! test vectors into test source through string templates.
//!
//! ```rust
//! let document = cavp_kdf::parse_str(
//!     "[PRF=HMAC_SHA1]\n[CTRLOCATION=BEFORE_FIXED]\n[RLEN=32_BITS]\n\nL = 160\nKI = aa\n\n",
//! )
//! .unwrap();
//! assert_eq!(document.suites[0].prf, "HMAC_SHA1");
//! assert_eq!(document.suites[0].cases[0].key, "aa");
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod gen;
pub mod parser;
pub mod runner;
pub mod templates;
pub mod tokenizer;

// Re-exports
pub use ast::{Case, Document, Suite};
pub use error::{Error, Result};
pub use parser::{parse_reader, parse_str, ParseError, Parser};
