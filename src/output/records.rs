//! Flat per-node rows.

use crate::config::ColumnSet;
use crate::topology::Point3;
use crate::wlan::Wlan;

/// Columns of every node file, in order
pub const NODE_COLUMNS: [&str; 26] = [
    "node_code",
    "node_type",
    "wlan_code",
    "x(m)",
    "y(m)",
    "z(m)",
    "central_freq(GHz)",
    "channel_bonding_model",
    "primary_channel",
    "min_channel_allowed",
    "max_channel_allowed",
    "tx_power",
    "sensitivity",
    "traffic_model",
    "traffic_load(pkt/s)",
    "packet_length",
    "num_packets_aggregated",
    "capture_effect_model",
    "capture_effect_thr",
    "constant_PER",
    "pifs_activated",
    "backoff_type",
    "cw_adaptation",
    "cw_min",
    "cw_max",
    "cw_stage",
];

/// Columns appended by [`ColumnSet::WithSpatialReuse`]
pub const SPATIAL_REUSE_COLUMNS: [&str; 4] =
    ["bss_color", "spatial_reuse_group", "non_srg_obss_pd", "srg_obss_pd"];

/// Header row for the given column set
pub fn header(columns: ColumnSet) -> Vec<&'static str> {
    let mut header = NODE_COLUMNS.to_vec();
    if columns == ColumnSet::WithSpatialReuse {
        header.extend_from_slice(&SPATIAL_REUSE_COLUMNS);
    }
    header
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    AccessPoint,
    Station,
}

impl NodeType {
    pub fn flag(self) -> u8 {
        match self {
            NodeType::AccessPoint => 0,
            NodeType::Station => 1,
        }
    }
}

/// One output row: a node and the attributes of the WLAN it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord<'a> {
    pub node_code: &'a str,
    pub node_type: NodeType,
    pub position: Point3,
    pub wlan: &'a Wlan,
}

impl<'a> NodeRecord<'a> {
    /// AP row followed by one row per STA
    pub fn from_wlan(wlan: &'a Wlan) -> impl Iterator<Item = NodeRecord<'a>> + 'a {
        let ap = NodeRecord {
            node_code: &wlan.ap_code,
            node_type: NodeType::AccessPoint,
            position: wlan.ap_position,
            wlan,
        };
        let stas = wlan
            .sta_codes
            .iter()
            .zip(&wlan.sta_positions)
            .map(move |(code, position)| NodeRecord {
                node_code: code,
                node_type: NodeType::Station,
                position: *position,
                wlan,
            });

        std::iter::once(ap).chain(stas)
    }

    /// Field values in column order
    pub fn fields(&self, columns: ColumnSet) -> Vec<String> {
        let wlan = self.wlan;
        let params = &wlan.params;
        let backoff = &wlan.backoff;

        let mut fields = vec![
            self.node_code.to_string(),
            self.node_type.flag().to_string(),
            wlan.code.clone(),
            format_coordinate(self.position.x),
            format_coordinate(self.position.y),
            format_coordinate(self.position.z),
            format_float(params.central_freq),
            params.channel_bonding_model.to_string(),
            wlan.channel.primary.to_string(),
            wlan.channel.min_allowed.to_string(),
            wlan.channel.max_allowed.to_string(),
            params.tpc_default.to_string(),
            params.cca_default.to_string(),
            params.traffic_model.to_string(),
            params.traffic_load.to_string(),
            params.packet_length.to_string(),
            params.num_packets_aggregated.to_string(),
            params.capture_effect_model.to_string(),
            format_float(params.capture_effect_thr),
            format_float(params.constant_per),
            params.pifs_activated.to_string(),
            backoff.backoff_type.to_string(),
            backoff.cw_adaptation.to_string(),
            backoff.cw_min.to_string(),
            backoff.cw_max.to_string(),
            backoff.cw_stage.to_string(),
        ];

        if columns == ColumnSet::WithSpatialReuse {
            let sr = &wlan.spatial_reuse;
            fields.extend([
                sr.bss_color.to_string(),
                sr.spatial_reuse_group.to_string(),
                sr.non_srg_obss_pd.to_string(),
                sr.srg_obss_pd.to_string(),
            ]);
        }

        fields
    }
}

/// Positions always carry four decimals
fn format_coordinate(value: f64) -> String {
    format!("{:.4}", value)
}

/// Shortest round-trip form, integral values keep a trailing `.0`.
///
/// Exponents carry a sign and at least two digits (`1e+20`, `1e-07`).
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
