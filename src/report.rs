use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::ConvertError;
use crate::tools::{Invocation, ToolOutcome};

#[derive(Debug, Clone, Serialize)]
pub struct InvocationRecord {
    pub program: String,
    pub command_line: String,
    /// Destination handed to the tool, skeleton or animation file.
    pub target: Option<String>,
    pub outcome: ToolOutcome,
}

impl InvocationRecord {
    pub fn new(invocation: &Invocation, target_flag: &str, outcome: ToolOutcome) -> Self {
        Self {
            program: invocation.program.clone(),
            command_line: invocation.command_line(),
            target: invocation.flag_value(target_flag),
            outcome,
        }
    }
}

/// Everything one batch run asked the external tools to do.
///
/// Paths are stored as display strings, so any non-UTF-8 bytes in them show
/// up as U+FFFD here. The tools themselves still receive the raw names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub skeleton: String,
    pub archive: String,
    pub skeleton_run: Option<InvocationRecord>,
    pub animations: Vec<InvocationRecord>,
}

impl BatchReport {
    pub fn failures(&self) -> usize {
        self.skeleton_run
            .iter()
            .chain(&self.animations)
            .filter(|r| !r.outcome.succeeded())
            .count()
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ConvertError> {
        let write = || -> Result<(), ConvertError> {
            let mut out = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut out, self)?;
            out.write_all(b"\n")?;
            out.flush()?;
            Ok(())
        };
        write().map_err(|e| ConvertError::write_report(path, e))
    }
}
