//! Node file output.
//!
//! This module flattens WLANs into one record per node, writes them to the
//! semicolon-separated files read by the simulator, and records a manifest of
//! every file produced in a run.

pub mod records;
pub mod writer;
pub mod manifest;

pub use records::{header, NodeRecord, NodeType};
pub use writer::write_scenario_file;
pub use manifest::{ManifestEntry, RunManifest};
