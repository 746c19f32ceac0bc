//! Data model produced by the [`Parser`](crate::parser::Parser).
//!
//! All values are kept as the raw text found in the response file. Hex decoding and length
//! checks belong to whoever consumes the vectors.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// One bracketed section of a response file and the test vectors that follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    pub prf: String,
    pub ctr_location: String,
    pub rlen: String,
    pub cases: Vec<Case>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a header value. Names other than `PRF`, `CTRLOCATION` and `RLEN` are ignored.
    pub fn set(&mut self, name: &str, value: &str) {
        match name.parse::<SuiteField>() {
            Ok(SuiteField::Prf) => self.prf = value.to_string(),
            Ok(SuiteField::CtrLocation) => self.ctr_location = value.to_string(),
            Ok(SuiteField::Rlen) => self.rlen = value.to_string(),
            Err(_) => tracing::trace!(name, "ignoring suite field"),
        }
    }
}

/// One test vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub l: String,
    pub key: String,
    pub iv: String,
    pub fixed: String,
    pub expected: String,
}

impl Case {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a block value. Names other than `L`, `KI`, `IV`, `FixedInputData` and `KO` are
    /// ignored.
    pub fn set(&mut self, name: &str, value: &str) {
        let slot = match name.parse::<CaseField>() {
            Ok(CaseField::L) => &mut self.l,
            Ok(CaseField::Key) => &mut self.key,
            Ok(CaseField::Iv) => &mut self.iv,
            Ok(CaseField::Fixed) => &mut self.fixed,
            Ok(CaseField::Expected) => &mut self.expected,
            Err(_) => {
                tracing::trace!(name, "ignoring case field");
                return;
            }
        };
        *slot = value.to_string();
    }
}

/// Header names that map onto [`Suite`] attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum SuiteField {
    #[strum(serialize = "PRF")]
    Prf,
    #[strum(serialize = "CTRLOCATION")]
    CtrLocation,
    #[strum(serialize = "RLEN")]
    Rlen,
}

/// Block field names that map onto [`Case`] attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum CaseField {
    #[strum(serialize = "L")]
    L,
    #[strum(serialize = "KI")]
    Key,
    #[strum(serialize = "IV")]
    Iv,
    #[strum(serialize = "FixedInputData")]
    Fixed,
    #[strum(serialize = "KO")]
    Expected,
}

/// Suites in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub suites: Vec<Suite>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suite> {
        self.suites.iter()
    }

    /// Total number of cases across all suites.
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Suite;
    type IntoIter = std::slice::Iter<'a, Suite>;

    fn into_iter(self) -> Self::IntoIter {
        self.suites.iter()
    }
}

impl IntoIterator for Document {
    type Item = Suite;
    type IntoIter = std::vec::IntoIter<Suite>;

    fn into_iter(self) -> Self::IntoIter {
        self.suites.into_iter()
    }
}
