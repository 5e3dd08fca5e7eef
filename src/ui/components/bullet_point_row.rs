//! # Bullet Point Row Component
//!
//! This module contains a small reusable row: a colored vertical capsule
//! indicator followed by arbitrary caller-supplied content, laid out
//! horizontally. The ring chart legend is built from these rows, but the
//! component is independent and can be embedded in any layout.

use eframe::egui;

/// Configuration for bullet point row appearance
#[derive(Debug, Clone)]
pub struct BulletPointRowConfig {
    /// Width of the capsule indicator
    pub bullet_width: f32,
    /// Height of the capsule indicator
    pub bullet_height: f32,
    /// Horizontal gap between the capsule and the content
    pub content_spacing: f32,
    /// Default font size imposed on the content (subheadline weight)
    pub content_font_size: f32,
}

impl Default for BulletPointRowConfig {
    fn default() -> Self {
        Self {
            bullet_width: 4.0,
            bullet_height: 12.0,
            content_spacing: 6.0,
            content_font_size: 14.0,
        }
    }
}

/// A colored capsule indicator beside caller-provided content
///
/// The content slot accepts any closure that draws into the row's `Ui`, so a
/// row can hold a single label, a label/value pair, or anything else. Content
/// inherits a subheadline-sized proportional font unless it overrides the
/// style itself.
pub struct BulletPointRow {
    color: egui::Color32,
    config: BulletPointRowConfig,
}

impl BulletPointRow {
    /// Create a row with the default capsule dimensions
    pub fn new(color: egui::Color32) -> Self {
        Self {
            color,
            config: BulletPointRowConfig::default(),
        }
    }

    /// Create a row with custom dimensions
    pub fn with_config(color: egui::Color32, config: BulletPointRowConfig) -> Self {
        Self { color, config }
    }

    /// Draw the capsule and the caller's content horizontally
    pub fn show<R>(self, ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = self.config.content_spacing;

            let bullet_size = egui::vec2(self.config.bullet_width, self.config.bullet_height);
            let (rect, _response) = ui.allocate_exact_size(bullet_size, egui::Sense::hover());
            ui.painter().rect_filled(
                rect,
                egui::Rounding::same(self.config.bullet_width / 2.0),
                self.color,
            );

            ui.scope(|ui| {
                ui.style_mut().override_font_id = Some(egui::FontId::new(
                    self.config.content_font_size,
                    egui::FontFamily::Proportional,
                ));
                add_contents(ui)
            })
            .inner
        })
        .inner
    }
}
