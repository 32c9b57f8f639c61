//! Turning a parameter record into a batch of rings.

use std::rc::Rc;

use ring_ops::{HostBundle, InstancedRing, Ring, RingDimensions, RingPrototype, StandaloneRing};
use ruler_types::{RingVariant, RulerParams, YearPlacement};
use scene_host::FontRef;
use tracing::{debug, warn};

use crate::types::FactoryError;

/// Engravings for one ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engraving {
    pub text: String,
    /// Set when the year goes on its own band.
    pub year: Option<String>,
}

/// Two-digit year.
pub fn year_label(year: u32) -> String {
    format!("{:02}", year)
}

/// Serial number zero-filled to `zero_fill` digits.
pub fn serial_label(serial: u32, zero_fill: usize) -> String {
    format!("{:0width$}", serial, width = zero_fill)
}

/// Primary engraving for one serial number.
pub fn ring_label(params: &RulerParams, serial: u32) -> String {
    let serial = serial_label(serial, params.zero_fill);
    match params.year_placement {
        YearPlacement::Band => format!("{} {} {}", params.label, params.ring_size, serial),
        YearPlacement::Inline => format!(
            "{} {} {} {}",
            params.label,
            params.ring_size,
            year_label(params.year),
            serial
        ),
    }
}

/// One engraving per serial in `begin..=end`. Empty when `begin > end`.
pub fn engravings(params: &RulerParams) -> Vec<Engraving> {
    let year = match params.year_placement {
        YearPlacement::Band => Some(year_label(params.year)),
        YearPlacement::Inline => None,
    };
    (params.begin..=params.end)
        .map(|serial| Engraving {
            text: ring_label(params, serial),
            year: year.clone(),
        })
        .collect()
}

/// Look up the requested font, falling back to the host default.
pub fn resolve_font(host: &dyn HostBundle, name: Option<&str>) -> Option<FontRef> {
    let name = name?;
    let font = host.find_font(name);
    if font.is_none() {
        warn!(font = name, "font not found, using host default");
    }
    font
}

/// Rings of one batch, plus the prototype they share when instanced.
pub struct Batch {
    pub rings: Vec<Box<dyn Ring>>,
    pub prototype: Option<Rc<RingPrototype>>,
}

/// Define every ring of the batch. Nothing is created in the scene yet.
pub fn define_rings(params: &RulerParams, host: &dyn HostBundle) -> Result<Batch, FactoryError> {
    let dims = RingDimensions::new(params.ring_size, params.ring_height_mm, params.unit_scale)?;
    let font = resolve_font(host, params.font.as_deref());
    let engravings = engravings(params);
    debug!(count = engravings.len(), variant = ?params.variant, "defining rings");

    let batch = match params.variant {
        RingVariant::Instanced => {
            let prototype = Rc::new(
                RingPrototype::new(dims, font)
                    .with_year_band(params.year_placement == YearPlacement::Band),
            );
            let rings = engravings
                .into_iter()
                .map(|e| {
                    let ring = InstancedRing::new(prototype.clone(), e.text);
                    let ring = match e.year {
                        Some(year) => ring.with_year(year),
                        None => ring,
                    };
                    Box::new(ring) as Box<dyn Ring>
                })
                .collect();
            Batch {
                rings,
                prototype: Some(prototype),
            }
        }
        RingVariant::Standalone => {
            let rings = engravings
                .into_iter()
                .map(|e| {
                    let ring = StandaloneRing::new(dims.clone(), font.clone(), e.text);
                    let ring = match e.year {
                        Some(year) => ring.with_year(year),
                        None => ring,
                    };
                    Box::new(ring) as Box<dyn Ring>
                })
                .collect();
            Batch {
                rings,
                prototype: None,
            }
        }
    };
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RulerParams {
        RulerParams {
            year: 26,
            ..RulerParams::default()
        }
    }

    #[test]
    fn serials_are_zero_filled() {
        let labels: Vec<String> = engravings(&params()).into_iter().map(|e| e.text).collect();
        assert_eq!(labels, vec!["CH 15 0001", "CH 15 0002", "CH 15 0003"]);
    }

    #[test]
    fn zero_fill_of_zero_keeps_digits() {
        assert_eq!(serial_label(42, 0), "42");
        assert_eq!(serial_label(123456, 4), "123456");
    }

    #[test]
    fn inline_year_goes_between_size_and_serial() {
        let params = RulerParams {
            year: 7,
            year_placement: YearPlacement::Inline,
            ..RulerParams::default()
        };
        let e = engravings(&params);
        assert_eq!(e[0].text, "CH 15 07 0001");
        assert_eq!(e[0].year, None);
    }

    #[test]
    fn band_year_is_separate() {
        let e = engravings(&params());
        assert!(e.iter().all(|e| e.year.as_deref() == Some("26")));
    }

    #[test]
    fn reversed_range_is_empty() {
        let params = RulerParams {
            begin: 5,
            end: 2,
            ..RulerParams::default()
        };
        assert!(engravings(&params).is_empty());
    }
}
