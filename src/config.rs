use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Number of fields expected in the input data row
pub const INPUT_FIELD_COUNT: usize = 26;

/// Parameters read from the single data row of the input constructor file.
///
/// Values are taken verbatim from the file. Range problems (e.g. a minimum
/// above its maximum) are reported by [`InputConfig::consistency_warnings`]
/// and otherwise surface during sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    pub map_width: f64,
    pub map_height: f64,
    /// Informational only, the WLAN count is a generator setting
    pub num_wlans: u32,
    pub num_sta_min: u32,
    pub num_sta_max: u32,
    pub d_min_ap_ap: f64,
    pub d_min_ap_sta: f64,
    pub d_max_ap_sta: f64,
    pub legacy_ratio: f64,
    pub c_sys_width: i32,
    pub tpc_default: i32,
    pub cca_default: i32,
    pub channel_bonding_model: i32,
    pub central_freq: f64,
    pub traffic_model: i32,
    pub traffic_load: i32,
    pub packet_length: i32,
    pub num_packets_aggregated: i32,
    pub capture_effect_model: i32,
    pub capture_effect_thr: f64,
    pub constant_per: f64,
    pub pifs_activated: i32,
    pub bss_color: i32,
    pub spatial_reuse_group: i32,
    pub non_srg_obss_pd: i32,
    pub srg_obss_pd: i32,
}

impl InputConfig {
    /// Inconsistencies that do not prevent generation but will produce odd scenarios
    pub fn consistency_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.map_width <= 0.0 || self.map_height <= 0.0 {
            warnings.push(format!(
                "map size {}x{} is not positive",
                self.map_width, self.map_height
            ));
        }
        if self.num_sta_min > self.num_sta_max {
            warnings.push(format!(
                "num_sta_min ({}) is greater than num_sta_max ({})",
                self.num_sta_min, self.num_sta_max
            ));
        }
        if self.d_min_ap_sta > self.d_max_ap_sta {
            warnings.push(format!(
                "d_min_AP_STA ({}) is greater than d_max_AP_STA ({})",
                self.d_min_ap_sta, self.d_max_ap_sta
            ));
        }
        if !(0.0..=1.0).contains(&self.legacy_ratio) {
            warnings.push(format!("legacy_ratio ({}) is outside [0, 1]", self.legacy_ratio));
        }

        warnings
    }
}

/// Kind of value a field of the input row must hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Integer,
    Unsigned,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Float => write!(f, "float"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Unsigned => write!(f, "unsigned integer"),
        }
    }
}

/// A single field of the input row that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub position: usize,
    pub name: &'static str,
    pub expected: FieldKind,
    /// Raw text, `None` when the row is too short
    pub value: Option<String>,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(
                f,
                "field {} ({}): expected {}, found '{}'",
                self.position, self.name, self.expected, value
            ),
            None => write!(
                f,
                "field {} ({}): expected {}, found nothing",
                self.position, self.name, self.expected
            ),
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ")
}

/// Errors produced while reading generator inputs
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed input file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Input file has no data row after the comment line")]
    MissingDataRow,
    #[error("Invalid input row:\n  {}", join_field_errors(.0))]
    InvalidFields(Vec<FieldError>),
    #[error("Invalid settings file: {0}")]
    Settings(#[from] serde_yaml::Error),
    #[error("Invalid generator settings: {0}")]
    InvalidSettings(String),
}

/// How access points are laid out on the map
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApPlacement {
    /// One AP at the centre of every grid cell
    #[default]
    Grid,
    /// Uniformly random positions at least `d_min_AP_AP` apart
    Random,
}

/// Extra columns appended to every node row
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnSet {
    #[default]
    Standard,
    /// Adds BSS color, SRG and OBSS-PD columns
    WithSpatialReuse,
}

/// Contention window parameters shared by every generated file
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CwSettings {
    pub adaptation: i32,
    pub min: i32,
    pub max: i32,
    pub stage: i32,
}

impl Default for CwSettings {
    fn default() -> Self {
        CwSettings {
            adaptation: 1,
            min: 0,
            max: 15,
            stage: 5,
        }
    }
}

/// Fixed generator parameters. Defaults reproduce the reference scenario set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    pub seed: u64,
    pub num_wlans: usize,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub frequency_reuse: u32,
    pub num_scenarios: usize,
    pub plot_enabled: bool,
    pub backoff_approaches: Vec<i32>,
    pub cw: CwSettings,
    pub placement: ApPlacement,
    pub columns: ColumnSet,
    pub output_dir: PathBuf,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            seed: 1,
            num_wlans: 9,
            grid_rows: 3,
            grid_cols: 3,
            frequency_reuse: 3,
            num_scenarios: 100,
            plot_enabled: false,
            backoff_approaches: vec![0],
            cw: CwSettings::default(),
            placement: ApPlacement::Grid,
            columns: ColumnSet::Standard,
            output_dir: PathBuf::from("./output"),
        }
    }
}

impl GeneratorSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(ConfigError::InvalidSettings(
                "grid_rows and grid_cols must be at least 1".to_string(),
            ));
        }
        if self.placement == ApPlacement::Grid && self.num_wlans > self.grid_rows * self.grid_cols {
            return Err(ConfigError::InvalidSettings(format!(
                "{} WLANs do not fit in a {}x{} grid",
                self.num_wlans, self.grid_rows, self.grid_cols
            )));
        }
        if self.frequency_reuse == 0 {
            return Err(ConfigError::InvalidSettings(
                "frequency_reuse must be at least 1".to_string(),
            ));
        }
        if self.backoff_approaches.is_empty() {
            return Err(ConfigError::InvalidSettings(
                "backoff_approaches cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory holding the node files of this run
    pub fn scenario_dir(&self) -> PathBuf {
        self.output_dir
            .join(format!("input_{}bss_fullbuffer", self.num_wlans))
    }

    /// File name for one scenario and backoff approach
    pub fn scenario_file_name(&self, scenario: usize, backoff_approach: i32) -> String {
        format!(
            "input_nodes_sce{:02}_FREQUENCY_REUSE_{}_BO_{}.csv",
            scenario, self.frequency_reuse, backoff_approach
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_reference_constants() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.seed, 1);
        assert_eq!(settings.num_wlans, 9);
        assert_eq!((settings.grid_rows, settings.grid_cols), (3, 3));
        assert_eq!(settings.frequency_reuse, 3);
        assert_eq!(settings.num_scenarios, 100);
        assert!(!settings.plot_enabled);
        assert_eq!(settings.backoff_approaches, vec![0]);
        assert_eq!(settings.cw, CwSettings { adaptation: 1, min: 0, max: 15, stage: 5 });
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_scenario_paths() {
        let settings = GeneratorSettings::default();
        assert_eq!(
            settings.scenario_dir(),
            PathBuf::from("./output/input_9bss_fullbuffer")
        );
        assert_eq!(
            settings.scenario_file_name(7, 0),
            "input_nodes_sce07_FREQUENCY_REUSE_3_BO_0.csv"
        );
        assert_eq!(
            settings.scenario_file_name(42, 2),
            "input_nodes_sce42_FREQUENCY_REUSE_3_BO_2.csv"
        );
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = GeneratorSettings::default();
        settings.num_wlans = 10;
        assert!(settings.validate().is_err());

        // Random placement is not bound by the grid
        settings.placement = ApPlacement::Random;
        assert!(settings.validate().is_ok());

        let mut settings = GeneratorSettings::default();
        settings.backoff_approaches.clear();
        assert!(settings.validate().is_err());

        let mut settings = GeneratorSettings::default();
        settings.frequency_reuse = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_settings_yaml_uses_defaults() {
        let yaml = r#"
seed: 42
num_scenarios: 5
backoff_approaches: [0, 1]
cw:
  max: 31
"#;
        let settings: GeneratorSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.num_scenarios, 5);
        assert_eq!(settings.backoff_approaches, vec![0, 1]);
        assert_eq!(settings.cw.max, 31);
        assert_eq!(settings.cw.min, 0);
        assert_eq!(settings.num_wlans, 9);
        assert_eq!(settings.placement, ApPlacement::Grid);
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError {
            position: 3,
            name: "num_sta_min",
            expected: FieldKind::Unsigned,
            value: Some("abc".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "field 3 (num_sta_min): expected unsigned integer, found 'abc'"
        );
    }
}
