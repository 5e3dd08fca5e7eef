//! # UI Components Module
//!
//! This module organizes the UI components of the ring dashboard.
//!
//! ## Module Organization:
//! - `bullet_point_row` - Colored capsule indicator beside arbitrary content
//! - `ring_chart` - Nested animated progress rings with a legend
//! - `styling` - Visual styling and color constants

pub mod bullet_point_row;
pub mod ring_chart;
pub mod styling;

pub use bullet_point_row::{BulletPointRow, BulletPointRowConfig};
pub use ring_chart::{
    RingChart, RingChartStyle, RingDataError, RingDataset, RingDatum, RingLayoutConfig,
};
pub use styling::setup_dashboard_style;
