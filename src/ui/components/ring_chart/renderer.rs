//! # Ring Chart Renderer
//!
//! This module renders the nested animated progress rings using egui's
//! painting primitives. Each entry is drawn as a full low-opacity track plus a
//! foreground arc that sweeps clockwise from 12 o'clock, and the legend maps
//! every ring back to its label and value.

use eframe::egui;
use log::debug;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::animation::{Easing, FillAnimation};
use super::data::{RingDataset, RingDatum};
use super::layout::{ring_diameter, RingLayoutConfig};
use super::legend::draw_legend;

/// Style configuration for chart appearance
#[derive(Debug, Clone)]
pub struct RingChartStyle {
    /// Alpha of the background track (38 ≈ 15% of the ring color)
    pub track_alpha: u8,
    /// Font size of the center label
    pub center_font_size: f32,
    /// Horizontal gap between legend groups
    pub legend_spacing: f32,
    /// Vertical gap between the rings and the legend
    pub legend_gap: f32,
    /// Seconds to wait after first visibility before filling
    pub fill_delay: f32,
    /// Seconds the fill interpolation runs
    pub fill_duration: f32,
}

impl Default for RingChartStyle {
    fn default() -> Self {
        Self {
            track_alpha: 38,
            center_font_size: 24.0,
            legend_spacing: 16.0,
            legend_gap: 12.0,
            fill_delay: 0.2,
            fill_duration: 1.2,
        }
    }
}

/// Nested animated progress rings with a legend
///
/// The chart owns its animation clock: rings start empty and fill to their
/// target values once, the first time the chart becomes visible. Rebuilding
/// the chart from the same entries yields identical static geometry with an
/// independent clock.
#[derive(Debug)]
pub struct RingChart {
    layout: RingLayoutConfig,
    style: RingChartStyle,
    dataset: RingDataset,
    animation: FillAnimation,
    center_label: String,
}

impl RingChart {
    /// Create a chart with the default layout and style
    pub fn new(entries: Vec<RingDatum>) -> Self {
        Self::with_config(entries, RingLayoutConfig::default(), RingChartStyle::default())
    }

    /// Create a chart with custom layout and style
    pub fn with_config(
        entries: Vec<RingDatum>,
        layout: RingLayoutConfig,
        style: RingChartStyle,
    ) -> Self {
        let dataset = RingDataset::new(entries, &layout);
        let animation = FillAnimation::new(style.fill_delay, style.fill_duration, Easing::EaseOut);
        Self {
            layout,
            style,
            dataset,
            animation,
            center_label: "Demo".to_owned(),
        }
    }

    /// Replace the placeholder text drawn at the geometric center
    pub fn set_center_label(&mut self, label: impl Into<String>) {
        self.center_label = label.into();
    }

    /// Entries that survived layout validation, in input order
    pub fn dataset(&self) -> &RingDataset {
        &self.dataset
    }

    /// Render the rings, the center label, and the legend
    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            self.render_rings(ui);
            if !self.dataset.is_empty() {
                ui.add_space(self.style.legend_gap);
                draw_legend(ui, self.dataset.entries(), self.style.legend_spacing);
            }
        });
    }

    /// Render the concentric rings and the center label
    fn render_rings(&mut self, ui: &mut egui::Ui) {
        let side = self.layout.chart_size();
        let (rect, _response) = ui.allocate_exact_size(egui::Vec2::splat(side), egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        // First visible frame arms the one-shot fill clock
        let now = ui.input(|i| i.time);
        if !self.animation.has_started() {
            self.animation.start(now);
            debug!("ring chart fill animation started");
        }
        let progress = self.animation.progress(now);
        if self.animation.is_running() {
            ui.ctx().request_repaint();
        }

        let painter = ui.painter();
        let center = rect.center();

        for (index, datum) in self.dataset.entries().iter().enumerate() {
            let radius = ring_diameter(&self.layout, index) / 2.0;
            let color = datum.color;

            // Full background track at reduced opacity
            let track_color = egui::Color32::from_rgba_unmultiplied(
                color.r(),
                color.g(),
                color.b(),
                self.style.track_alpha,
            );
            painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(self.layout.ring_width, track_color),
            );

            // Foreground arc up to the animated fill fraction
            let fill = progress * datum.fill_fraction(self.layout.max_value);
            if fill > 0.0 {
                draw_ring_arc(painter, center, radius, self.layout.ring_width, fill, color);
            }
        }

        // Center label is independent of ring data
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &self.center_label,
            egui::FontId::new(self.style.center_font_size, egui::FontFamily::Proportional),
            ui.style().visuals.strong_text_color(),
        );
    }
}

/// Draw a partial ring stroke with rounded caps
///
/// egui has no native arc primitive, so the arc is tessellated into short
/// line segments and capped with filled circles at both ends.
fn draw_ring_arc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    stroke_width: f32,
    fill_fraction: f32,
    color: egui::Color32,
) {
    let start_angle = -FRAC_PI_2; // 12 o'clock
    let sweep = TAU * fill_fraction.clamp(0.0, 1.0);
    let end_angle = start_angle + sweep;

    // Roughly 3 pixels per segment for a smooth curve
    let num_segments = ((sweep * radius / 3.0).ceil() as i32).clamp(8, 200);
    let angle_step = sweep / num_segments as f32;

    let stroke = egui::Stroke::new(stroke_width, color);
    for i in 0..num_segments {
        let a1 = start_angle + angle_step * i as f32;
        let a2 = start_angle + angle_step * (i + 1) as f32;
        painter.line_segment(
            [
                point_on_circle(center, radius, a1),
                point_on_circle(center, radius, a2),
            ],
            stroke,
        );
    }

    let cap_radius = stroke_width / 2.0;
    painter.circle_filled(point_on_circle(center, radius, start_angle), cap_radius, color);
    painter.circle_filled(point_on_circle(center, radius, end_angle), cap_radius, color);
}

fn point_on_circle(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    egui::pos2(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;

    fn sample_entries() -> Vec<RingDatum> {
        vec![
            RingDatum::new("A", 80.0, Color32::from_rgb(10, 132, 255)),
            RingDatum::new("B", 91.0, Color32::from_rgb(48, 209, 88)),
            RingDatum::new("C", 63.0, Color32::from_rgb(255, 159, 10)),
        ]
    }

    #[test]
    fn test_chart_keeps_one_ring_per_entry() {
        let chart = RingChart::new(sample_entries());

        assert_eq!(chart.dataset().len(), 3);
    }

    #[test]
    fn test_chart_accepts_empty_input() {
        let chart = RingChart::new(Vec::new());

        assert!(chart.dataset().is_empty());
    }

    #[test]
    fn test_animation_is_pending_until_first_visible_frame() {
        let mut chart = RingChart::new(sample_entries());

        assert!(!chart.animation.has_started());
        assert_eq!(chart.animation.progress(123.0), 0.0);
    }

    #[test]
    fn test_charts_from_equal_input_have_independent_clocks() {
        let entries = sample_entries();
        let mut first = RingChart::new(entries.clone());
        let second = RingChart::new(entries);

        first.animation.start(5.0);
        assert!(first.animation.has_started());
        assert!(!second.animation.has_started());
    }

    #[test]
    fn test_center_label_defaults_to_placeholder() {
        let mut chart = RingChart::new(Vec::new());
        assert_eq!(chart.center_label, "Demo");

        chart.set_center_label("Today");
        assert_eq!(chart.center_label, "Today");
    }
}
