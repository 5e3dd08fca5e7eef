//! # App Module
//!
//! This module contains the demo dashboard application that embeds the ring
//! chart. It feeds the chart a sample dataset parsed from JSON, the same way
//! a real caller would hand it values pulled from elsewhere.

use anyhow::{Context as _, Result};
use eframe::egui;
use log::info;

use activity_rings_egui::ui::components::styling::{self, colors};
use activity_rings_egui::ui::components::{RingChart, RingDatum};

/// Sample dataset for the demo dashboard
const SAMPLE_RINGS: &str = r#"[
    { "label": "Steps",    "value": 80.0, "color": [10, 132, 255] },
    { "label": "Calories", "value": 91.0, "color": [48, 209, 88] },
    { "label": "Distance", "value": 63.0, "color": [255, 159, 10] }
]"#;

/// Main application struct for the ring dashboard demo
pub struct RingDashboardApp {
    chart: RingChart,
}

impl RingDashboardApp {
    /// Create the app and its chart from the sample dataset
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        styling::setup_dashboard_style(&cc.egui_ctx);

        let rings: Vec<RingDatum> =
            serde_json::from_str(SAMPLE_RINGS).context("parsing sample ring dataset")?;
        info!("loaded {} sample rings", rings.len());

        let mut chart = RingChart::new(rings);
        chart.set_center_label("Today");

        Ok(Self { chart })
    }
}

impl eframe::App for RingDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("Daily Activity");
                ui.label(
                    egui::RichText::new("Progress toward each goal").color(colors::TEXT_SECONDARY),
                );
                ui.add_space(16.0);
                self.chart.render(ui);
            });
        });
    }
}
