//! Scenario plots for visual inspection.
//!
//! Plotting is off by default and never touches the random stream.

use log::debug;
use plotly::color::NamedColor;
use plotly::common::{Marker, MarkerSymbol, Mode};
use plotly::{Plot, Scatter};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerationError;
use crate::sampler::Scenario;
use crate::wlan::wlan_code;

const COLORS: [NamedColor; 9] = [
    NamedColor::Red,
    NamedColor::Green,
    NamedColor::Blue,
    NamedColor::Cyan,
    NamedColor::Magenta,
    NamedColor::Yellow,
    NamedColor::Black,
    NamedColor::DarkOrange,
    NamedColor::DeepPink,
];

/// File name of the plot of a scenario
pub fn plot_file_name(scenario: usize) -> String {
    format!("scenario_{:02}.html", scenario)
}

/// Builds the AP/STA scatter plot of a scenario
pub fn scenario_plot(scenario: &Scenario) -> Plot {
    let mut plot = Plot::new();

    for (w, (ap, stations)) in scenario
        .ap_positions
        .iter()
        .zip(&scenario.station_positions)
        .enumerate()
    {
        let color = COLORS[w % COLORS.len()].clone();
        let code = wlan_code(w);

        let ap_trace = Scatter::new(vec![ap.x], vec![ap.y])
            .mode(Mode::Markers)
            .name(&format!("AP_{}", code))
            .marker(Marker::new().size(15).color(color.clone()));
        plot.add_trace(ap_trace);

        let sta_trace = Scatter::new(
            stations.iter().map(|s| s.x).collect(),
            stations.iter().map(|s| s.y).collect(),
        )
        .mode(Mode::Markers)
        .name(&format!("STA_{}", code))
        .marker(Marker::new().size(10).symbol(MarkerSymbol::X).color(color));
        plot.add_trace(sta_trace);
    }

    plot
}

/// Writes the plot of `scenario` as HTML into `dir`
pub fn plot_scenario(dir: &Path, scenario: &Scenario) -> Result<PathBuf, GenerationError> {
    let path = dir.join(plot_file_name(scenario.index));
    debug!("Plotting scenario {} to {:?}", scenario.index, path);
    fs::write(&path, scenario_plot(scenario).to_html()).map_err(|e| GenerationError::io(&path, e))?;
    Ok(path)
}
