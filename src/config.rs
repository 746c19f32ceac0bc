use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::gen::{PrfTable, SuiteSelector, TemplateError, Templates};
use crate::templates::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("job {index} ({vectors}): {source}")]
    InvalidJob {
        index: usize,
        vectors: String,
        #[source]
        source: TemplateError,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the generator needs: where the prologue and output live, the PRF table and
/// the list of response files to render.
///
/// Every field has a default, so `{}` is a valid config equivalent to [`GenConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Copied verbatim to the start of the output.
    #[serde(default = "default_prologue")]
    pub prologue: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub prfs: PrfTable,

    #[serde(default = "default_jobs")]
    pub jobs: Vec<JobConfig>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            prologue: default_prologue(),
            output: default_output(),
            prfs: PrfTable::default(),
            jobs: default_jobs(),
        }
    }
}

/// One response file and the suites to render from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub vectors: PathBuf,

    #[serde(default)]
    pub ctr_location: String,

    #[serde(default)]
    pub rlen: String,

    pub suite_template: String,

    pub test_template: String,
}

impl JobConfig {
    pub fn new(
        vectors: impl Into<PathBuf>,
        ctr_location: &str,
        rlen: &str,
        suite_template: &str,
        test_template: &str,
    ) -> Self {
        Self {
            vectors: vectors.into(),
            ctr_location: ctr_location.to_string(),
            rlen: rlen.to_string(),
            suite_template: suite_template.to_string(),
            test_template: test_template.to_string(),
        }
    }

    pub fn selector(&self) -> SuiteSelector {
        SuiteSelector::new(&self.ctr_location, &self.rlen)
    }

    pub fn templates(&self) -> Templates {
        Templates::new(&self.suite_template, &self.test_template)
    }
}

impl GenConfig {
    /// Reads a JSON config. Relative paths inside it are resolved against the directory
    /// holding the config file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config: GenConfig = serde_json::from_str(&content)?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.resolve_paths(base);
        }
        config.validate()?;

        tracing::debug!(path = %path.display(), jobs = config.jobs.len(), "config loaded");
        Ok(config)
    }

    /// Checks every job's templates before any output is produced.
    pub fn validate(&self) -> ConfigResult<()> {
        for (index, job) in self.jobs.iter().enumerate() {
            job.templates()
                .validate()
                .map_err(|source| ConfigError::InvalidJob {
                    index,
                    vectors: job.vectors.display().to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.prologue);
        resolve(&mut self.output);
        for job in &mut self.jobs {
            resolve(&mut job.vectors);
        }
    }
}

fn default_prologue() -> PathBuf {
    PathBuf::from("testdata/kdf_test.go.in")
}

fn default_output() -> PathBuf {
    PathBuf::from("kdf_test.go")
}

fn default_jobs() -> Vec<JobConfig> {
    vec![
        JobConfig::new(
            "testdata/KDFCTR_gen.rsp",
            "BEFORE_FIXED",
            "32_BITS",
            COUNTER_SUITE,
            COUNTER_TEST,
        ),
        JobConfig::new(
            "testdata/FeedbackModenocounter/KDFFeedback_gen.rsp",
            "",
            "",
            FEEDBACK_NO_COUNTER_SUITE,
            FEEDBACK_NO_COUNTER_TEST,
        ),
        JobConfig::new(
            "testdata/FeedbackModeNOzeroiv/KDFFeedback_gen.rsp",
            "AFTER_ITER",
            "32_BITS",
            FEEDBACK_NO_ZERO_IV_SUITE,
            FEEDBACK_NO_ZERO_IV_TEST,
        ),
        JobConfig::new(
            "testdata/FeedbackModewzeroiv/KDFFeedback_gen.rsp",
            "AFTER_ITER",
            "32_BITS",
            FEEDBACK_ZERO_IV_SUITE,
            FEEDBACK_ZERO_IV_TEST,
        ),
        JobConfig::new(
            "testdata/PipelineModewithCounter/KDFDblPipeline_gen.rsp",
            "AFTER_ITER",
            "32_BITS",
            PIPELINE_SUITE,
            PIPELINE_TEST,
        ),
        JobConfig::new(
            "testdata/PipelineModeWOCounterr/KDFDblPipeline_gen.rsp",
            "",
            "",
            PIPELINE_NO_COUNTER_SUITE,
            PIPELINE_NO_COUNTER_TEST,
        ),
    ]
}
