//! # Ring Chart Data Model
//!
//! This module contains the entries the chart visualizes and the validated
//! collection they live in. Construction is where the two boundary rules are
//! enforced: values outside the chart's range clamp at render time, and
//! entries that would not fit the layout geometry are never rendered.

use eframe::egui::Color32;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::layout::{ring_capacity, RingLayoutConfig};

/// Errors reported by the strict dataset constructor
#[derive(Debug, Error)]
pub enum RingDataError {
    #[error("value {value} for ring \"{label}\" is not finite")]
    NonFiniteValue { label: String, value: f64 },

    #[error("value {value} for ring \"{label}\" is outside 0..={max_value}")]
    ValueOutOfRange {
        label: String,
        value: f64,
        max_value: f64,
    },

    #[error("{requested} rings requested but only {capacity} fit an outer diameter of {outer_diameter}")]
    CapacityExceeded {
        requested: usize,
        capacity: usize,
        outer_diameter: f32,
    },
}

/// One entry visualized as a ring and a legend row
///
/// The id is generated when the datum is constructed and stays stable across
/// chart rebuilds, so duplicate labels never collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingDatum {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub label: String,
    pub value: f64,
    #[serde(with = "color_rgb")]
    pub color: Color32,
}

impl RingDatum {
    pub fn new(label: impl Into<String>, value: f64, color: Color32) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            value,
            color,
        }
    }

    /// Proportion of the ring circumference this entry fills, clamped to [0, 1]
    ///
    /// Out-of-range values saturate rather than overflowing the circle.
    pub fn fill_fraction(&self, max_value: f64) -> f32 {
        if max_value <= 0.0 || !self.value.is_finite() {
            return 0.0;
        }
        (self.value / max_value).clamp(0.0, 1.0) as f32
    }
}

/// Serde adapter storing a display color as `[r, g, b]`
mod color_rgb {
    use eframe::egui::Color32;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        [color.r(), color.g(), color.b()].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let [r, g, b] = <[u8; 3]>::deserialize(deserializer)?;
        Ok(Color32::from_rgb(r, g, b))
    }
}

/// Ordered collection of ring entries validated against a layout
///
/// Ordering determines nesting depth; the entry at position 0 takes the
/// outermost ring and later entries nest inward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingDataset {
    entries: Vec<RingDatum>,
}

impl RingDataset {
    /// Keep the entries that fit `layout`, dropping the over-capacity suffix
    ///
    /// The drop is reported once, here, rather than on every frame.
    pub fn new(mut entries: Vec<RingDatum>, layout: &RingLayoutConfig) -> Self {
        let capacity = ring_capacity(layout);
        if entries.len() > capacity {
            warn!(
                "dropping {} ring(s): only {} fit an outer diameter of {}",
                entries.len() - capacity,
                capacity,
                layout.outer_diameter
            );
            entries.truncate(capacity);
        }
        Self { entries }
    }

    /// Reject out-of-contract entries instead of repairing them
    pub fn try_new(
        entries: Vec<RingDatum>,
        layout: &RingLayoutConfig,
    ) -> Result<Self, RingDataError> {
        let capacity = ring_capacity(layout);
        if entries.len() > capacity {
            return Err(RingDataError::CapacityExceeded {
                requested: entries.len(),
                capacity,
                outer_diameter: layout.outer_diameter,
            });
        }
        for datum in &entries {
            if !datum.value.is_finite() {
                return Err(RingDataError::NonFiniteValue {
                    label: datum.label.clone(),
                    value: datum.value,
                });
            }
            if datum.value < 0.0 || datum.value > layout.max_value {
                return Err(RingDataError::ValueOutOfRange {
                    label: datum.label.clone(),
                    value: datum.value,
                    max_value: layout.max_value,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Entries in input order
    pub fn entries(&self) -> &[RingDatum] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries(count: usize) -> Vec<RingDatum> {
        (0..count)
            .map(|i| RingDatum::new(format!("ring {i}"), 50.0, Color32::from_rgb(10, 132, 255)))
            .collect()
    }

    #[test]
    fn test_ids_are_unique_even_for_duplicate_labels() {
        let a = RingDatum::new("Steps", 80.0, Color32::BLUE);
        let b = RingDatum::new("Steps", 80.0, Color32::BLUE);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ids_survive_cloning_and_rebuilds() {
        let datum = RingDatum::new("Steps", 80.0, Color32::BLUE);
        let layout = RingLayoutConfig::default();

        let first = RingDataset::new(vec![datum.clone()], &layout);
        let second = RingDataset::new(vec![datum.clone()], &layout);

        assert_eq!(first.entries()[0].id, second.entries()[0].id);
    }

    #[test]
    fn test_fill_fraction_clamps_out_of_range_values() {
        let over = RingDatum::new("over", 130.0, Color32::RED);
        let under = RingDatum::new("under", -20.0, Color32::RED);
        let in_range = RingDatum::new("ok", 63.0, Color32::RED);

        assert_eq!(over.fill_fraction(100.0), 1.0);
        assert_eq!(under.fill_fraction(100.0), 0.0);
        assert_eq!(in_range.fill_fraction(100.0), 0.63);
    }

    #[test]
    fn test_fill_fraction_of_degenerate_maximum_is_zero() {
        let datum = RingDatum::new("ok", 63.0, Color32::RED);

        assert_eq!(datum.fill_fraction(0.0), 0.0);
    }

    #[test]
    fn test_dataset_keeps_in_capacity_lists_intact() {
        let layout = RingLayoutConfig::default();

        for count in 0..=ring_capacity(&layout) {
            let dataset = RingDataset::new(sample_entries(count), &layout);
            assert_eq!(dataset.len(), count);
        }
    }

    #[test]
    fn test_dataset_drops_exactly_the_over_capacity_suffix() {
        let layout = RingLayoutConfig::default();
        let dataset = RingDataset::new(sample_entries(7), &layout);

        assert_eq!(dataset.len(), ring_capacity(&layout));
        assert_eq!(dataset.entries()[0].label, "ring 0");
        assert_eq!(dataset.entries().last().unwrap().label, "ring 3");
    }

    #[test]
    fn test_dataset_preserves_input_order() {
        let layout = RingLayoutConfig::default();
        let dataset = RingDataset::new(sample_entries(3), &layout);

        let labels: Vec<&str> = dataset.entries().iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["ring 0", "ring 1", "ring 2"]);
    }

    #[test]
    fn test_try_new_rejects_over_capacity_lists() {
        let layout = RingLayoutConfig::default();
        let result = RingDataset::try_new(sample_entries(7), &layout);

        assert!(matches!(
            result,
            Err(RingDataError::CapacityExceeded {
                requested: 7,
                capacity: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_try_new_rejects_out_of_range_values() {
        let layout = RingLayoutConfig::default();
        let entries = vec![RingDatum::new("over", 130.0, Color32::RED)];

        assert!(matches!(
            RingDataset::try_new(entries, &layout),
            Err(RingDataError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_try_new_rejects_non_finite_values() {
        let layout = RingLayoutConfig::default();
        let entries = vec![RingDatum::new("nan", f64::NAN, Color32::RED)];

        assert!(matches!(
            RingDataset::try_new(entries, &layout),
            Err(RingDataError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_datum_serde_round_trip() {
        let datum = RingDatum::new("Calories", 91.0, Color32::from_rgb(48, 209, 88));

        let json = serde_json::to_string(&datum).unwrap();
        let back: RingDatum = serde_json::from_str(&json).unwrap();

        assert_eq!(back, datum);
    }

    #[test]
    fn test_datum_deserializes_without_id() {
        let json = r#"{ "label": "Steps", "value": 80.0, "color": [10, 132, 255] }"#;
        let datum: RingDatum = serde_json::from_str(json).unwrap();

        assert_eq!(datum.label, "Steps");
        assert_eq!(datum.value, 80.0);
        assert_eq!(datum.color, Color32::from_rgb(10, 132, 255));
    }
}
