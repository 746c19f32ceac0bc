//! Runs a [`GenConfig`]: prologue first, then every job in order, into one output file that
//! is only replaced once everything succeeded.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::ast::Document;
use crate::config::{GenConfig, JobConfig};
use crate::error::{Result, WithPath};
use crate::gen::generate_tests;
use crate::parser::parse_reader;

pub struct Runner {
    config: GenConfig,
}

impl Runner {
    pub fn new(config: GenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Generates into the configured output file. Returns the number of tests written.
    #[tracing::instrument(level = "info", skip(self), fields(output = %self.config.output.display()))]
    pub fn run(&self) -> Result<usize> {
        let written = write_atomically(&self.config.output, |out| self.generate(out))?;
        info!(tests = written, "output written");
        Ok(written)
    }

    /// Writes the prologue and every job to `out`.
    pub fn generate<W: Write + ?Sized>(&self, out: &mut W) -> Result<usize> {
        let prologue = &self.config.prologue;
        let mut source = File::open(prologue).with_path(prologue)?;
        io::copy(&mut source, out).with_path(prologue)?;
        debug!(path = %prologue.display(), "prologue copied");

        let mut written = 0;
        for job in &self.config.jobs {
            written += self.run_job(job, out)?;
        }
        Ok(written)
    }

    pub fn run_job<W: Write + ?Sized>(&self, job: &JobConfig, out: &mut W) -> Result<usize> {
        let document = parse_file(&job.vectors)?;
        let written = generate_tests(
            out,
            &document,
            &job.selector(),
            &self.config.prfs,
            &job.templates(),
        )
        .with_path(&job.vectors)?;

        info!(
            vectors = %job.vectors.display(),
            suites = document.len(),
            tests = written,
            "job done"
        );
        Ok(written)
    }
}

/// Parses one response file, streaming it through the tokenizer.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let file = File::open(path).with_path(path)?;
    parse_reader(BufReader::new(file)).with_path(path)
}

/// Runs `write` against a temporary file next to `path` and renames it into place on
/// success. On failure the temporary file is removed and `path` is left untouched.
pub fn write_atomically<T, F>(path: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut dyn Write) -> Result<T>,
{
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::Builder::new()
        .prefix(".gentest")
        .tempfile_in(dir)
        .with_path(dir)?;

    let tmp_path = tmp.path().to_path_buf();
    let value = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let value = write(&mut writer)?;
        writer.flush().with_path(&tmp_path)?;
        value
    };

    tmp.persist(path).map_err(|e| e.error).with_path(path)?;
    Ok(value)
}
