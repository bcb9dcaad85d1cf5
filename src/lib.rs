//! bar-chart-rs: headless bar chart engine.
//!
//! The crate is split the way a rendering pipeline reads: `core` turns a
//! series and a viewport into pixel geometry, `interaction` tracks which bar
//! is hovered, `render` materializes a backend-agnostic frame (and ships an
//! SVG backend), and `api` wires everything behind `BarChartEngine`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarChartConfig, BarChartEngine};
pub use error::{ChartError, ChartResult};
