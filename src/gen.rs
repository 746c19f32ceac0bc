//! Test source generation from parsed vectors.
//!
//! A [`Templates`] pair is rendered once per selected suite and once per case. Placeholders
//! are written `{name}`; see [`SUITE_PLACEHOLDERS`] and [`TEST_PLACEHOLDERS`] for the names
//! each template understands.

use std::collections::BTreeMap;
use std::io::Write;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ast::{Case, Document, Suite};

pub const SUITE_PLACEHOLDERS: &[&str] = &["prf", "prf_expr"];
pub const TEST_PLACEHOLDERS: &[&str] = &["prf", "index", "key", "fixed", "iv", "l", "expected"];

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder `{{{name}}}` in {template} template")]
    UnknownPlaceholder { name: String, template: &'static str },
}

/// Maps PRF names found in response files to the expression that constructs them in the
/// generated source. Suites whose PRF is missing from the table are not generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrfTable(BTreeMap<String, String>);

impl PrfTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, prf: &str) -> Option<&str> {
        self.0.get(prf).map(String::as_str)
    }

    pub fn insert(&mut self, prf: impl Into<String>, expr: impl Into<String>) {
        self.0.insert(prf.into(), expr.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PrfTable {
    fn default() -> Self {
        [
            ("HMAC_SHA1", "NewHMACPRF(crypto.SHA1)"),
            ("HMAC_SHA224", "NewHMACPRF(crypto.SHA224)"),
            ("HMAC_SHA256", "NewHMACPRF(crypto.SHA256)"),
            ("HMAC_SHA384", "NewHMACPRF(crypto.SHA384)"),
            ("HMAC_SHA512", "NewHMACPRF(crypto.SHA512)"),
        ]
        .into_iter()
        .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PrfTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Suite mode parameters a generation job is interested in. An empty string selects suites
/// that carry no such header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSelector {
    #[serde(default)]
    pub ctr_location: String,
    #[serde(default)]
    pub rlen: String,
}

impl SuiteSelector {
    pub fn new(ctr_location: impl Into<String>, rlen: impl Into<String>) -> Self {
        Self {
            ctr_location: ctr_location.into(),
            rlen: rlen.into(),
        }
    }

    pub fn matches(&self, suite: &Suite) -> bool {
        suite.ctr_location == self.ctr_location && suite.rlen == self.rlen
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Templates {
    /// Rendered once per selected suite.
    pub suite: String,
    /// Rendered once per case of a selected suite.
    pub test: String,
}

impl Templates {
    pub fn new(suite: impl Into<String>, test: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            test: test.into(),
        }
    }

    /// Rejects templates that use placeholders they will never be given.
    pub fn validate(&self) -> Result<(), TemplateError> {
        check_placeholders(&self.suite, SUITE_PLACEHOLDERS, "suite")?;
        check_placeholders(&self.test, TEST_PLACEHOLDERS, "test")
    }

    pub fn render_suite(&self, prf: &str, prf_expr: &str) -> Result<String, TemplateError> {
        render(&self.suite, "suite", |name| match name {
            "prf" => Some(prf.to_string()),
            "prf_expr" => Some(prf_expr.to_string()),
            _ => None,
        })
    }

    pub fn render_test(
        &self,
        prf: &str,
        index: usize,
        case: &Case,
    ) -> Result<String, TemplateError> {
        render(&self.test, "test", |name| match name {
            "prf" => Some(prf.to_string()),
            "index" => Some(index.to_string()),
            "key" => Some(case.key.clone()),
            "fixed" => Some(case.fixed.clone()),
            "iv" => Some(case.iv.clone()),
            "l" => Some(case.l.clone()),
            "expected" => Some(case.expected.clone()),
            _ => None,
        })
    }
}

fn check_placeholders(
    text: &str,
    known: &[&str],
    template: &'static str,
) -> Result<(), TemplateError> {
    match PLACEHOLDER
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .find(|name| !known.contains(&name.as_str()))
    {
        Some(name) => Err(TemplateError::UnknownPlaceholder { name, template }),
        None => Ok(()),
    }
}

fn render<F>(text: &str, template: &'static str, lookup: F) -> Result<String, TemplateError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut unknown = None;
    let rendered = PLACEHOLDER.replace_all(text, |caps: &Captures| {
        lookup(&caps[1]).unwrap_or_else(|| {
            unknown.get_or_insert_with(|| caps[1].to_string());
            caps[0].to_string()
        })
    });

    match unknown {
        Some(name) => Err(TemplateError::UnknownPlaceholder { name, template }),
        None => Ok(rendered.into_owned()),
    }
}

/// Writes the rendered templates for every suite `selector` and `prfs` accept, in document
/// order. Returns the number of tests written.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate_tests<W: Write + ?Sized>(
    out: &mut W,
    document: &Document,
    selector: &SuiteSelector,
    prfs: &PrfTable,
    templates: &Templates,
) -> crate::Result<usize> {
    templates.validate()?;

    let mut written = 0;
    for suite in document {
        if !selector.matches(suite) {
            continue;
        }
        let Some(prf_expr) = prfs.get(&suite.prf) else {
            debug!(prf = %suite.prf, "no generator for PRF, skipping suite");
            continue;
        };

        out.write_all(templates.render_suite(&suite.prf, prf_expr)?.as_bytes())?;
        for (index, case) in suite.cases.iter().enumerate() {
            out.write_all(templates.render_test(&suite.prf, index, case)?.as_bytes())?;
        }
        written += suite.cases.len();
        debug!(prf = %suite.prf, tests = suite.cases.len(), "generated suite");
    }

    Ok(written)
}
