#![warn(missing_docs)]
//! Deterministic testing surfaces (layout event stream + snapshot helpers).

mod approx;
mod snapshot;

use anyhow::Result;
use cuboid_layout_core::LayoutPass;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use approx::*;
pub use snapshot::*;

/// One layout event, written as a single JSON line.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a> {
    /// Layout pass count after the event was handled.
    pub pass: LayoutPass,
    /// Signal name (e.g. "ready", "resize").
    pub kind: &'a str,
    /// Free-form detail.
    pub payload: &'a str,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append an event to the log.
    pub fn write(&mut self, event: &EventRecord<'_>) -> Result<()> {
        let line = serde_json::to_string(event)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}
