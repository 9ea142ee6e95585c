//! Run manifest listing every node file written in a run.

use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::GeneratorSettings;
use crate::error::GenerationError;

pub const MANIFEST_FILE: &str = "manifest.json";

/// One generated node file
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ManifestEntry {
    pub scenario: usize,
    pub backoff_type: i32,
    pub path: PathBuf,
    pub station_counts: Vec<usize>,
    pub rows: usize,
}

/// Everything needed to trace a set of node files back to its inputs
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub input_path: PathBuf,
    pub settings: GeneratorSettings,
    pub files: Vec<ManifestEntry>,
}

impl RunManifest {
    pub fn new(input_path: &Path, settings: &GeneratorSettings) -> Self {
        RunManifest {
            input_path: input_path.to_path_buf(),
            settings: settings.clone(),
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: ManifestEntry) {
        self.files.push(entry);
    }

    /// Writes the manifest as pretty JSON into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, GenerationError> {
        let path = dir.join(MANIFEST_FILE);
        let file = File::create(&path).map_err(|e| GenerationError::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| GenerationError::io(&path, e))?;

        info!("Manifest with {} files written to {:?}", self.files.len(), path);
        Ok(path)
    }
}
