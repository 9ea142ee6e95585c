//! Errors raised while generating and writing scenarios.

/// Failures during scenario generation. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid station range: num_sta_min ({min}) is greater than num_sta_max ({max})")]
    InvalidStationRange { min: u32, max: u32 },
    #[error("Could not place AP {index} at least {d_min_ap_ap} m from the others after {attempts} attempts")]
    ApPlacementExhausted {
        index: usize,
        d_min_ap_ap: f64,
        attempts: usize,
    },
    #[error("Station position list covers {positions} WLANs but {aps} APs were placed")]
    ScenarioMismatch { positions: usize, aps: usize },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl GenerationError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        GenerationError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
