//! # Styling Module
//!
//! This module contains the styling function and color constants for the ring
//! dashboard. It provides a consistent dark, chart-friendly look for the demo
//! application and shared text colors for the components.
//!
//! ## Key Functions:
//! - `setup_dashboard_style()` - Configure global egui styling
//!
//! ## Color Palette:
//! The colors module contains the color constants used throughout the app:
//! - Dark dashboard backdrop
//! - Primary and secondary text colors

use eframe::egui;

/// Setup dashboard styling for the entire application
pub fn setup_dashboard_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = colors::BACKGROUND;
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);

        // Larger text for dashboard readability
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);

        style
    });
}

/// Color constants for the dashboard theme
pub mod colors {
    use eframe::egui::Color32;

    // Backdrop
    pub const BACKGROUND: Color32 = Color32::from_rgb(28, 28, 30); // Near-black dashboard gray

    // Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 245);   // Off-white
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(142, 142, 147); // Muted gray
}
