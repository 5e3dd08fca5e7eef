//! # Ring Chart Module
//!
//! This module provides the nested animated progress ring chart with a legend.
//!
//! ## Key Components:
//! - `data.rs` - Ring entries, validated datasets, and the error taxonomy
//! - `layout.rs` - Ring geometry and capacity calculations
//! - `animation.rs` - Easing curves and the one-shot fill clock
//! - `renderer.rs` - Chart rendering using egui painting primitives
//! - `legend.rs` - Legend rows built from bullet point rows
//!
//! ## Purpose:
//! The chart gives an at-a-glance reading of several bounded values at once:
//! each entry becomes a concentric ring that fills toward its target the first
//! time the chart appears, with a legend mapping rings back to their labels.

pub mod animation;
pub mod data;
pub mod layout;
pub mod legend;
pub mod renderer;

pub use animation::{Easing, FillAnimation};
pub use data::{RingDataError, RingDataset, RingDatum};
pub use layout::{ring_capacity, ring_diameter, RingLayoutConfig};
pub use legend::draw_legend;
pub use renderer::{RingChart, RingChartStyle};
