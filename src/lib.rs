//! # Activity Rings
//!
//! Animated nested ring progress charts for egui, plus the small bullet point
//! row the legend is built from. Both components are plain values that render
//! into any `egui::Ui`; the chart owns a one-shot fill animation that runs the
//! first time it becomes visible.

pub mod ui;

pub use ui::components::{
    BulletPointRow, BulletPointRowConfig, RingChart, RingChartStyle, RingDataError, RingDataset,
    RingDatum, RingLayoutConfig,
};
