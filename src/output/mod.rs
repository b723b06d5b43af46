//! Result presentation
//!
//! Deep links to external map and phone services, plus rendering of
//! search results in text, JSON, and CSV formats.

pub mod links;
pub mod render;

pub use links::FacilityLinks;
pub use render::{render, render_csv, render_json, render_text, write_output};
