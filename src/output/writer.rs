//! Node file writer.

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::config::ColumnSet;
use crate::error::GenerationError;
use crate::output::records::{header, NodeRecord};
use crate::wlan::Wlan;

/// Writes one node file and returns the number of node rows.
///
/// Any existing file at `path` is removed first. The header is followed by
/// the AP row and then the STA rows of each WLAN, in container order. Lines
/// end in `\r\n`. A failure midway may leave a truncated file behind.
pub fn write_scenario_file(
    path: &Path,
    wlans: &[Wlan],
    columns: ColumnSet,
) -> Result<usize, GenerationError> {
    info!("Generating simulation file {:?}", path);

    if path.exists() {
        debug!("Removing previous file {:?}", path);
        fs::remove_file(path).map_err(|e| GenerationError::io(path, e))?;
    }

    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    csv.write_record(header(columns))?;

    let mut rows = 0;
    for wlan in wlans {
        for record in NodeRecord::from_wlan(wlan) {
            csv.write_record(record.fields(columns))?;
            rows += 1;
        }
    }

    csv.flush().map_err(|e| GenerationError::io(path, e))?;

    info!("File saved in {:?} ({} nodes)", path, rows);
    Ok(rows)
}
