use crate::config::{ConfigError, FieldError, FieldKind, GeneratorSettings, InputConfig, INPUT_FIELD_COUNT};
use csv::StringRecord;
use log::{info, warn};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Load the input constructor file.
///
/// The first line is a comment and is skipped; the second line holds the
/// semicolon-separated values. Every field is checked before returning, so a
/// malformed row reports all of its bad fields at once.
pub fn load_input_config(input_path: &Path) -> Result<InputConfig, ConfigError> {
    info!("Reading input file {:?}", input_path);

    let file = File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = reader.records();
    // Comment line
    records.next().transpose()?;
    let row = records.next().transpose()?.ok_or(ConfigError::MissingDataRow)?;

    if row.len() > INPUT_FIELD_COUNT {
        warn!(
            "Input row has {} fields, ignoring everything after the first {}",
            row.len(),
            INPUT_FIELD_COUNT
        );
    }

    let config = parse_input_row(&row)?;
    log_input_config(&config);
    Ok(config)
}

/// Parse the data row into an [`InputConfig`]
pub fn parse_input_row(row: &StringRecord) -> Result<InputConfig, ConfigError> {
    let mut p = RowParser::new(row);

    let config = InputConfig {
        map_width: p.field(0, "map_width", FieldKind::Float),
        map_height: p.field(1, "map_height", FieldKind::Float),
        num_wlans: p.field(2, "num_wlans", FieldKind::Unsigned),
        num_sta_min: p.field(3, "num_sta_min", FieldKind::Unsigned),
        num_sta_max: p.field(4, "num_sta_max", FieldKind::Unsigned),
        d_min_ap_ap: p.field(5, "d_min_AP_AP", FieldKind::Float),
        d_min_ap_sta: p.field(6, "d_min_AP_STA", FieldKind::Float),
        d_max_ap_sta: p.field(7, "d_max_AP_STA", FieldKind::Float),
        legacy_ratio: p.field(8, "legacy_ratio", FieldKind::Float),
        c_sys_width: p.field(9, "c_sys_width", FieldKind::Integer),
        tpc_default: p.field(10, "tpc_default", FieldKind::Integer),
        cca_default: p.field(11, "cca_default", FieldKind::Integer),
        channel_bonding_model: p.field(12, "channel_bonding_model", FieldKind::Integer),
        central_freq: p.field(13, "central_freq", FieldKind::Float),
        traffic_model: p.field(14, "traffic_model", FieldKind::Integer),
        traffic_load: p.field(15, "traffic_load", FieldKind::Integer),
        packet_length: p.field(16, "packet_length", FieldKind::Integer),
        num_packets_aggregated: p.field(17, "num_packets_aggregated", FieldKind::Integer),
        capture_effect_model: p.field(18, "capture_effect_model", FieldKind::Integer),
        capture_effect_thr: p.field(19, "capture_effect_thr", FieldKind::Float),
        constant_per: p.field(20, "constant_PER", FieldKind::Float),
        pifs_activated: p.field(21, "pifs_activated", FieldKind::Integer),
        bss_color: p.field(22, "bss_color", FieldKind::Integer),
        spatial_reuse_group: p.field(23, "spatial_reuse_group", FieldKind::Integer),
        non_srg_obss_pd: p.field(24, "non_srg_obss_pd", FieldKind::Integer),
        srg_obss_pd: p.field(25, "srg_obss_pd", FieldKind::Integer),
    };

    p.finish().map(|_| config)
}

/// Collects parse failures instead of stopping at the first one
struct RowParser<'a> {
    row: &'a StringRecord,
    errors: Vec<FieldError>,
}

impl<'a> RowParser<'a> {
    fn new(row: &'a StringRecord) -> Self {
        RowParser { row, errors: Vec::new() }
    }

    fn field<T: FromStr + Default>(&mut self, position: usize, name: &'static str, expected: FieldKind) -> T {
        let raw = self.row.get(position).map(str::trim);
        match raw.map(str::parse::<T>) {
            Some(Ok(value)) => value,
            _ => {
                self.errors.push(FieldError {
                    position,
                    name,
                    expected,
                    value: raw.map(str::to_string),
                });
                T::default()
            }
        }
    }

    fn finish(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::InvalidFields(self.errors))
        }
    }
}

fn log_input_config(config: &InputConfig) {
    info!(
        "Input:\
        \n- map_width: {}\
        \n- map_height: {}\
        \n- num_wlans: {}\
        \n- num_sta_min: {}\
        \n- num_sta_max: {}\
        \n- d_min_AP_AP: {}\
        \n- d_min_AP_STA: {}\
        \n- d_max_AP_STA: {}\
        \n- legacy_ratio: {}\
        \n- c_sys_width: {}\
        \n- tpc_default: {}\
        \n- cca_default: {}\
        \n- bss_color: {}\
        \n- spatial_reuse_group: {}\
        \n- non_srg_obss_pd: {}\
        \n- srg_obss_pd: {}",
        config.map_width,
        config.map_height,
        config.num_wlans,
        config.num_sta_min,
        config.num_sta_max,
        config.d_min_ap_ap,
        config.d_min_ap_sta,
        config.d_max_ap_sta,
        config.legacy_ratio,
        config.c_sys_width,
        config.tpc_default,
        config.cca_default,
        config.bss_color,
        config.spatial_reuse_group,
        config.non_srg_obss_pd,
        config.srg_obss_pd,
    );
}

/// Load generator settings from a YAML file. Missing keys keep their defaults.
pub fn load_settings(settings_path: &Path) -> Result<GeneratorSettings, ConfigError> {
    info!("Loading generator settings from: {:?}", settings_path);

    let file = File::open(settings_path)?;
    let settings: GeneratorSettings = serde_yaml::from_reader(file)?;
    settings.validate()?;

    Ok(settings)
}
