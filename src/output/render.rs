//! Result rendering
//!
//! Turns a finished search into text, JSON, or CSV output, mirroring
//! the card layout the facility list is presented in.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::facility::{catalog, Facility};
use crate::geo::Position;
use crate::output::links::FacilityLinks;
use crate::search::{LocatorResult, SearchState};
use crate::types::OutputFormat;

/// A search result plus the deep links derived from it, for JSON output
#[derive(Debug, Clone, Serialize)]
struct FacilityReport<'a> {
    #[serde(flatten)]
    facility: &'a Facility,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<FacilityLinks>,
}

/// Render the search results in the requested format
pub fn render(
    state: &SearchState,
    format: OutputFormat,
    show_links: bool,
) -> LocatorResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(state, show_links)),
        OutputFormat::Json => render_json(state, show_links),
        OutputFormat::Csv => Ok(render_csv(state)),
    }
}

/// Render results as a human-readable facility list
pub fn render_text(state: &SearchState, show_links: bool) -> String {
    let mut out = String::new();
    let info = catalog::info(state.filter);

    if let Some(position) = &state.position {
        let _ = writeln!(
            out,
            "📍 현재 위치 ({:.4}, {:.4})",
            position.lat, position.lng
        );
    }
    let _ = writeln!(
        out,
        "주변 {} {}곳",
        info.display_name,
        state.facilities.len()
    );

    if state.facilities.is_empty() {
        let _ = writeln!(out, "주변에 시설이 없습니다.");
        return out;
    }

    for facility in &state.facilities {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} {}", info.icon, facility.name);
        let _ = writeln!(out, "  📍 {}", facility.address);
        let _ = writeln!(out, "  📏 거리: {}", facility.distance_display());
        let _ = writeln!(out, "  📞 {}", facility.phone);
        if show_links {
            if let Some(position) = &state.position {
                let links = FacilityLinks::for_facility(position, facility);
                let _ = writeln!(out, "  🗺️ {}", links.google_directions);
                let _ = writeln!(out, "  🗺️ {}", links.naver_directions);
                let _ = writeln!(out, "  📞 {}", links.phone);
            }
        }
    }

    out
}

/// Render results as pretty-printed JSON
pub fn render_json(state: &SearchState, show_links: bool) -> LocatorResult<String> {
    #[derive(Serialize)]
    struct JsonOutput<'a> {
        category: crate::types::FacilityCategory,
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<&'a Position>,
        count: usize,
        facilities: Vec<FacilityReport<'a>>,
    }

    let facilities = state
        .facilities
        .iter()
        .map(|facility| FacilityReport {
            facility,
            links: match (&state.position, show_links) {
                (Some(position), true) => {
                    Some(FacilityLinks::for_facility(position, facility))
                }
                _ => None,
            },
        })
        .collect();

    let output = JsonOutput {
        category: state.filter,
        position: state.position.as_ref(),
        count: state.facilities.len(),
        facilities,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Render results as CSV with a header row
pub fn render_csv(state: &SearchState) -> String {
    let mut out = String::from("name,address,distance_m,category,phone,lat,lng\n");
    for facility in &state.facilities {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            facility.name,
            facility.address,
            facility.distance_m,
            facility.category,
            facility.phone,
            facility.lat,
            facility.lng
        );
    }
    out
}

/// Write rendered output to a file
pub fn write_output(path: impl AsRef<Path>, content: &str) -> LocatorResult<()> {
    fs::write(path.as_ref(), content)?;
    Ok(())
}
