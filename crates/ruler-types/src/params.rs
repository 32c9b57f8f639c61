use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::roles::{RingVariant, YearPlacement};
use crate::units::{MAX_BED_MM, MAX_SERIAL, MAX_ZERO_FILL, RING_SIZE_RANGE};

/// Everything needed to produce one batch of rings.
///
/// Lengths are in millimetres; `unit_scale` converts them to host units once,
/// when the ring dimensions are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerParams {
    /// Nominal ring size. A size-15 ring fits a 15 mm mandrel.
    pub ring_size: u32,
    /// Free text engraved first on every ring.
    pub label: String,
    /// First serial number (inclusive).
    pub begin: u32,
    /// Last serial number (inclusive).
    pub end: u32,
    /// Two-digit year.
    pub year: u32,
    /// Minimum number of digits for serial numbers.
    pub zero_fill: usize,
    /// Usable print bed width.
    pub bed_width_mm: f64,
    /// Usable print bed depth.
    pub bed_height_mm: f64,
    /// Gap kept around each ring on the bed.
    pub margin_mm: f64,
    /// Height of the ring band.
    pub ring_height_mm: f64,
    /// Millimetres to host units.
    pub unit_scale: f64,
    /// Font asset name; `None` keeps the host default.
    pub font: Option<String>,
    pub variant: RingVariant,
    pub year_placement: YearPlacement,
}

impl Default for RulerParams {
    fn default() -> Self {
        Self {
            ring_size: 15,
            label: "CH".to_string(),
            begin: 1,
            end: 3,
            year: (chrono::Utc::now().year() % 100) as u32,
            zero_fill: 4,
            bed_width_mm: 200.0,
            bed_height_mm: 200.0,
            margin_mm: 3.0,
            ring_height_mm: 8.0,
            unit_scale: 0.001,
            font: None,
            variant: RingVariant::default(),
            year_placement: YearPlacement::default(),
        }
    }
}

impl RulerParams {
    /// Check every field against the ranges the parameter form allows.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !RING_SIZE_RANGE.contains(&self.ring_size) {
            return Err(ParamError::OutOfRange {
                field: "ring_size",
                value: self.ring_size as f64,
                min: *RING_SIZE_RANGE.start() as f64,
                max: *RING_SIZE_RANGE.end() as f64,
            });
        }
        for (field, value) in [("begin", self.begin), ("end", self.end)] {
            if value > MAX_SERIAL {
                return Err(ParamError::OutOfRange {
                    field,
                    value: value as f64,
                    min: 0.0,
                    max: MAX_SERIAL as f64,
                });
            }
        }
        if self.year > 99 {
            return Err(ParamError::OutOfRange {
                field: "year",
                value: self.year as f64,
                min: 0.0,
                max: 99.0,
            });
        }
        if self.zero_fill > MAX_ZERO_FILL {
            return Err(ParamError::OutOfRange {
                field: "zero_fill",
                value: self.zero_fill as f64,
                min: 0.0,
                max: MAX_ZERO_FILL as f64,
            });
        }
        for (field, value) in [
            ("bed_width_mm", self.bed_width_mm),
            ("bed_height_mm", self.bed_height_mm),
        ] {
            if !(0.0..=MAX_BED_MM).contains(&value) {
                return Err(ParamError::OutOfRange {
                    field,
                    value,
                    min: 0.0,
                    max: MAX_BED_MM,
                });
            }
        }
        if !(self.margin_mm >= 0.0) {
            return Err(ParamError::Negative {
                field: "margin_mm",
                value: self.margin_mm,
            });
        }
        for (field, value) in [
            ("ring_height_mm", self.ring_height_mm),
            ("unit_scale", self.unit_scale),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ParamError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// Number of serials in the requested range. Zero when `begin > end`.
    pub fn serial_count(&self) -> usize {
        if self.begin > self.end {
            0
        } else {
            (self.end - self.begin) as usize + 1
        }
    }
}

/// A parameter outside what the form accepts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = RulerParams::default();
        assert!(params.validate().is_ok());
        assert!(params.year <= 99);
        assert_eq!(params.serial_count(), 3);
    }

    #[test]
    fn ring_size_outside_form_range_rejected() {
        let params = RulerParams {
            ring_size: 21,
            ..RulerParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::OutOfRange {
                field: "ring_size",
                ..
            })
        ));
    }

    #[test]
    fn zero_fill_limit_is_six() {
        let mut params = RulerParams {
            zero_fill: 6,
            ..RulerParams::default()
        };
        assert!(params.validate().is_ok());
        params.zero_fill = 7;
        assert!(params.validate().is_err());
    }

    #[test]
    fn non_positive_scale_rejected() {
        let params = RulerParams {
            unit_scale: 0.0,
            ..RulerParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::NotPositive {
                field: "unit_scale",
                value: 0.0
            })
        );
    }

    #[test]
    fn reversed_range_is_empty_not_invalid() {
        let params = RulerParams {
            begin: 10,
            end: 2,
            ..RulerParams::default()
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.serial_count(), 0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let params: RulerParams =
            serde_json::from_str(r#"{"ring_size": 12, "label": "ZH"}"#).unwrap();
        assert_eq!(params.ring_size, 12);
        assert_eq!(params.label, "ZH");
        assert_eq!(params.zero_fill, 4);
        assert_eq!(params.variant, RingVariant::Instanced);
    }
}
