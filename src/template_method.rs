//! Template Method: a fixed mining skeleton with per-format steps.
//!
//! Variants implement [`DataMiner`] (open, extract, close). The skeleton and
//! the shared analysis live in [`Mine`], which is blanket-implemented for
//! every miner and so cannot be overridden.

use std::fmt;

use crate::error::{MinerStep, PatternError, Result};
use crate::narrate::Narrator;

pub mod demo {
    use super::{CsvDataMiner, Mine, PdfDataMiner};
    use crate::error::Result;
    use crate::narrate::Narrator;

    pub const CSV_PATH: &str = "data.csv";
    pub const PDF_PATH: &str = "report.pdf";

    pub fn run(out: &dyn Narrator) -> Result<()> {
        out.say("--- Processing CSV ---");
        let csv = CsvDataMiner.mine(CSV_PATH, out)?;
        out.say(&csv.to_string());

        out.say("");
        out.say("--- Processing PDF ---");
        let pdf = PdfDataMiner.mine(PDF_PATH, out)?;
        out.say(&pdf.to_string());
        Ok(())
    }
}

/// Opaque handle to a simulated open resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle(String);

impl FileHandle {
    pub fn new(name: impl Into<String>) -> Self {
        FileHandle(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    record_count: usize,
}

impl Analysis {
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Analysis result: {} records", self.record_count)
    }
}

// =============================================================================
// Abstract steps + fixed skeleton
// =============================================================================

pub trait DataMiner {
    fn open_file(&self, path: &str, out: &dyn Narrator) -> FileHandle;
    fn extract_data(&self, file: &FileHandle, out: &dyn Narrator) -> Vec<String>;
    fn close_file(&self, file: FileHandle, out: &dyn Narrator);
}

pub trait Mine: DataMiner {
    fn analyze_data(&self, records: &[String], out: &dyn Narrator) -> Analysis {
        out.say("  -> Analyzing data...");
        Analysis {
            record_count: records.len(),
        }
    }

    /// open -> extract -> analyze -> close, always in that order.
    fn mine(&self, path: &str, out: &dyn Narrator) -> Result<Analysis> {
        if path.trim().is_empty() {
            return Err(PatternError::EmptySource);
        }

        let file = self.open_file(path, out);
        let records = self.extract_data(&file, out);
        let analysis = self.analyze_data(&records, out);
        self.close_file(file, out);

        tracing::debug!(path = %path, records = analysis.record_count(), "mined source");
        Ok(analysis)
    }
}

impl<T: DataMiner + ?Sized> Mine for T {}

// =============================================================================
// Variants
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvDataMiner;

impl DataMiner for CsvDataMiner {
    fn open_file(&self, path: &str, out: &dyn Narrator) -> FileHandle {
        out.say(&format!("Opening CSV file: {}", path));
        FileHandle::new("CSV_FILE_HANDLE")
    }

    fn extract_data(&self, _file: &FileHandle, out: &dyn Narrator) -> Vec<String> {
        out.say("  -> Extracting rows from CSV");
        vec!["row1".into(), "row2".into(), "row3".into()]
    }

    fn close_file(&self, _file: FileHandle, out: &dyn Narrator) {
        out.say("Closed CSV file");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfDataMiner;

impl DataMiner for PdfDataMiner {
    fn open_file(&self, path: &str, out: &dyn Narrator) -> FileHandle {
        out.say(&format!("Opening PDF file: {}", path));
        FileHandle::new("PDF_FILE_HANDLE")
    }

    fn extract_data(&self, _file: &FileHandle, out: &dyn Narrator) -> Vec<String> {
        out.say("  -> Extracting text from PDF");
        vec!["text_block1".into(), "text_block2".into()]
    }

    fn close_file(&self, _file: FileHandle, out: &dyn Narrator) {
        out.say("Closed PDF file");
    }
}

// =============================================================================
// Miners assembled at runtime
// =============================================================================

type OpenFn = Box<dyn Fn(&str, &dyn Narrator) -> FileHandle>;
type ExtractFn = Box<dyn Fn(&FileHandle, &dyn Narrator) -> Vec<String>>;
type CloseFn = Box<dyn Fn(FileHandle, &dyn Narrator)>;

/// Builds a miner from closures. `build` refuses to produce a miner with a
/// missing step.
pub struct MinerBuilder {
    name: String,
    open: Option<OpenFn>,
    extract: Option<ExtractFn>,
    close: Option<CloseFn>,
}

impl MinerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        MinerBuilder {
            name: name.into(),
            open: None,
            extract: None,
            close: None,
        }
    }

    pub fn open(mut self, f: impl Fn(&str, &dyn Narrator) -> FileHandle + 'static) -> Self {
        self.open = Some(Box::new(f));
        self
    }

    pub fn extract(
        mut self,
        f: impl Fn(&FileHandle, &dyn Narrator) -> Vec<String> + 'static,
    ) -> Self {
        self.extract = Some(Box::new(f));
        self
    }

    pub fn close(mut self, f: impl Fn(FileHandle, &dyn Narrator) + 'static) -> Self {
        self.close = Some(Box::new(f));
        self
    }

    pub fn build(self) -> Result<AssembledMiner> {
        let MinerBuilder {
            name,
            open,
            extract,
            close,
        } = self;

        let Some(open) = open else {
            return Err(PatternError::not_implemented(name, MinerStep::Open));
        };
        let Some(extract) = extract else {
            return Err(PatternError::not_implemented(name, MinerStep::Extract));
        };
        let Some(close) = close else {
            return Err(PatternError::not_implemented(name, MinerStep::Close));
        };

        Ok(AssembledMiner {
            name,
            open,
            extract,
            close,
        })
    }
}

pub struct AssembledMiner {
    name: String,
    open: OpenFn,
    extract: ExtractFn,
    close: CloseFn,
}

impl AssembledMiner {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for AssembledMiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssembledMiner")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl DataMiner for AssembledMiner {
    fn open_file(&self, path: &str, out: &dyn Narrator) -> FileHandle {
        (self.open)(path, out)
    }

    fn extract_data(&self, file: &FileHandle, out: &dyn Narrator) -> Vec<String> {
        (self.extract)(file, out)
    }

    fn close_file(&self, file: FileHandle, out: &dyn Narrator) {
        (self.close)(file, out)
    }
}
