//! WLAN construction.
//!
//! A WLAN groups one AP with its stations, the channel it operates on and
//! the traffic, backoff and capture-effect attributes copied from the input
//! row. WLANs are built once per scenario and backoff approach.

pub mod codes;

pub use codes::{ap_code, sta_code, wlan_code};

use log::debug;
use rand::Rng;

use crate::config::{CwSettings, InputConfig};
use crate::error::GenerationError;
use crate::sampler::Scenario;
use crate::topology::Point3;

/// Channel range of a WLAN. All three are equal for single-channel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAllocation {
    pub primary: u32,
    pub min_allowed: u32,
    pub max_allowed: u32,
}

impl ChannelAllocation {
    pub fn single(channel: u32) -> Self {
        ChannelAllocation {
            primary: channel,
            min_allowed: channel,
            max_allowed: channel,
        }
    }
}

/// Backoff settings that vary per generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffParameters {
    pub backoff_type: i32,
    pub cw_adaptation: i32,
    pub cw_min: i32,
    pub cw_max: i32,
    pub cw_stage: i32,
}

impl BackoffParameters {
    pub fn new(backoff_type: i32, cw: &CwSettings) -> Self {
        BackoffParameters {
            backoff_type,
            cw_adaptation: cw.adaptation,
            cw_min: cw.min,
            cw_max: cw.max,
            cw_stage: cw.stage,
        }
    }
}

/// Attributes shared by every node of a WLAN, copied from the input row
#[derive(Debug, Clone, PartialEq)]
pub struct WlanParameters {
    pub central_freq: f64,
    pub channel_bonding_model: i32,
    pub tpc_default: i32,
    pub cca_default: i32,
    pub traffic_model: i32,
    pub traffic_load: i32,
    pub packet_length: i32,
    pub num_packets_aggregated: i32,
    pub capture_effect_model: i32,
    pub capture_effect_thr: f64,
    pub constant_per: f64,
    pub pifs_activated: i32,
}

impl From<&InputConfig> for WlanParameters {
    fn from(config: &InputConfig) -> Self {
        WlanParameters {
            central_freq: config.central_freq,
            channel_bonding_model: config.channel_bonding_model,
            tpc_default: config.tpc_default,
            cca_default: config.cca_default,
            traffic_model: config.traffic_model,
            traffic_load: config.traffic_load,
            packet_length: config.packet_length,
            num_packets_aggregated: config.num_packets_aggregated,
            capture_effect_model: config.capture_effect_model,
            capture_effect_thr: config.capture_effect_thr,
            constant_per: config.constant_per,
            pifs_activated: config.pifs_activated,
        }
    }
}

/// 802.11ax spatial reuse attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialReuse {
    pub bss_color: i32,
    pub spatial_reuse_group: i32,
    pub non_srg_obss_pd: i32,
    pub srg_obss_pd: i32,
}

impl SpatialReuse {
    /// A non-zero input enables colouring, each WLAN then gets `id + 1`
    fn for_wlan(config: &InputConfig, wlan_id: usize) -> Self {
        let own = wlan_id as i32 + 1;
        SpatialReuse {
            bss_color: if config.bss_color != 0 { own } else { 0 },
            spatial_reuse_group: if config.spatial_reuse_group != 0 { own } else { 0 },
            non_srg_obss_pd: config.non_srg_obss_pd,
            srg_obss_pd: config.srg_obss_pd,
        }
    }
}

/// One AP and its associated stations
#[derive(Debug, Clone, PartialEq)]
pub struct Wlan {
    pub id: usize,
    pub code: String,
    pub ap_code: String,
    pub sta_codes: Vec<String>,
    pub ap_position: Point3,
    pub sta_positions: Vec<Point3>,
    pub channel: ChannelAllocation,
    pub params: WlanParameters,
    pub backoff: BackoffParameters,
    pub spatial_reuse: SpatialReuse,
}

impl Wlan {
    pub fn num_stas(&self) -> usize {
        self.sta_positions.len()
    }
}

/// Builds the WLANs of a scenario.
///
/// The operating channel of each WLAN is drawn uniformly from
/// `[0, frequency_reuse - 1]`, one draw per WLAN in order. Neighbouring WLANs
/// may end up on the same channel.
pub fn generate_wlans<R: Rng + ?Sized>(
    rng: &mut R,
    config: &InputConfig,
    frequency_reuse: u32,
    backoff: BackoffParameters,
    scenario: &Scenario,
) -> Result<Vec<Wlan>, GenerationError> {
    if scenario.station_positions.len() != scenario.ap_positions.len() {
        return Err(GenerationError::ScenarioMismatch {
            positions: scenario.station_positions.len(),
            aps: scenario.ap_positions.len(),
        });
    }

    let params = WlanParameters::from(config);
    let mut wlans = Vec::with_capacity(scenario.ap_positions.len());

    for (w, (ap_position, stations)) in scenario
        .ap_positions
        .iter()
        .zip(&scenario.station_positions)
        .enumerate()
    {
        let code = wlan_code(w);
        let sta_codes = (1..=stations.len()).map(|n| sta_code(&code, n)).collect();

        let channel = ChannelAllocation::single(rng.gen_range(0..frequency_reuse));
        debug!("WLAN {} ({}) on channel {}", w, code, channel.primary);

        wlans.push(Wlan {
            id: w,
            ap_code: ap_code(&code),
            code,
            sta_codes,
            ap_position: *ap_position,
            sta_positions: stations.clone(),
            channel,
            params: params.clone(),
            backoff,
            spatial_reuse: SpatialReuse::for_wlan(config, w),
        });
    }

    Ok(wlans)
}
