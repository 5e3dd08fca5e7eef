//! # Ring Chart Legend
//!
//! This module draws the legend that pairs each ring with its color, label,
//! and value. Every group is a bullet point row so the legend stays visually
//! consistent with other bulleted content in the host layout.

use eframe::egui;

use super::data::RingDatum;
use crate::ui::components::bullet_point_row::BulletPointRow;

/// Draw one legend group per entry, left to right in input order
pub fn draw_legend(ui: &mut egui::Ui, entries: &[RingDatum], group_spacing: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = group_spacing;
        for datum in entries {
            draw_legend_entry(ui, datum);
        }
    });
}

/// One bullet, the label, and the value truncated to a whole number
fn draw_legend_entry(ui: &mut egui::Ui, datum: &RingDatum) {
    BulletPointRow::new(datum.color).show(ui, |ui| {
        ui.label(datum.label.clone());
        ui.label(egui::RichText::new(format!("{}", datum.value.trunc() as i64)).strong());
    });
}
