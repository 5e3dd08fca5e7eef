//! # Ring Layout System
//!
//! This module provides the layout configuration and geometry calculations for
//! the nested ring chart. All sizing concerns are handled here so the renderer
//! only deals with painting.

/// Centralized configuration for ring chart sizing
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayoutConfig {
    /// Value that corresponds to a completely filled ring
    pub max_value: f64,
    /// Centerline diameter of the outermost ring
    pub outer_diameter: f32,
    /// Stroke width of each ring
    pub ring_width: f32,
    /// Radial gap between the stroke edges of adjacent rings
    pub ring_spacing: f32,
}

impl Default for RingLayoutConfig {
    fn default() -> Self {
        Self {
            max_value: 100.0,
            outer_diameter: 250.0,
            ring_width: 25.0,
            ring_spacing: 10.0,
        }
    }
}

impl RingLayoutConfig {
    /// Diameter reduction between one ring and the next one inward
    pub fn ring_step(&self) -> f32 {
        (self.ring_width + self.ring_spacing) * 2.0
    }

    /// Side length of the square the painted chart occupies
    ///
    /// The stroke is centered on the ring diameter, so it extends half a
    /// stroke width past the outermost centerline on every side.
    pub fn chart_size(&self) -> f32 {
        self.outer_diameter + self.ring_width
    }
}

/// Centerline diameter of the ring at `index`
///
/// The entry at position 0 takes the full outer diameter; each later entry
/// nests one step inward.
pub fn ring_diameter(layout: &RingLayoutConfig, index: usize) -> f32 {
    layout.outer_diameter - index as f32 * layout.ring_step()
}

/// Number of rings that keep a positive diameter under `layout`
///
/// Entries past this count would render with zero or inverted geometry and
/// must not be drawn.
pub fn ring_capacity(layout: &RingLayoutConfig) -> usize {
    if layout.outer_diameter <= 0.0 {
        return 0;
    }
    let step = layout.ring_step();
    if step <= 0.0 {
        // Degenerate spacing keeps every ring at the same diameter
        return usize::MAX;
    }
    (layout.outer_diameter / step).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_reference_dimensions() {
        let layout = RingLayoutConfig::default();

        assert_eq!(layout.ring_step(), 70.0);
        assert_eq!(ring_diameter(&layout, 0), 250.0);
        assert_eq!(ring_diameter(&layout, 1), 180.0);
        assert_eq!(ring_diameter(&layout, 2), 110.0);
    }

    #[test]
    fn test_diameters_strictly_decrease_with_position() {
        let layout = RingLayoutConfig::default();
        let capacity = ring_capacity(&layout);

        for index in 1..capacity {
            assert!(ring_diameter(&layout, index) < ring_diameter(&layout, index - 1));
            assert!(ring_diameter(&layout, index) > 0.0);
        }
    }

    #[test]
    fn test_capacity_counts_positive_diameters() {
        let layout = RingLayoutConfig::default();

        // 250 / 70 leaves room for a fourth ring at diameter 40
        assert_eq!(ring_capacity(&layout), 4);
        assert!(ring_diameter(&layout, 3) > 0.0);
        assert!(ring_diameter(&layout, 4) < 0.0);
    }

    #[test]
    fn test_capacity_excludes_zero_diameter_ring() {
        let layout = RingLayoutConfig {
            outer_diameter: 280.0,
            ..RingLayoutConfig::default()
        };

        // 280 is an exact multiple of the step; the ring at index 4 would
        // have diameter 0 and is not counted.
        assert_eq!(ring_capacity(&layout), 4);
    }

    #[test]
    fn test_capacity_of_empty_geometry_is_zero() {
        let layout = RingLayoutConfig {
            outer_diameter: 0.0,
            ..RingLayoutConfig::default()
        };

        assert_eq!(ring_capacity(&layout), 0);
    }

    #[test]
    fn test_chart_size_includes_stroke_overhang() {
        let layout = RingLayoutConfig::default();

        assert_eq!(layout.chart_size(), 275.0);
    }
}
