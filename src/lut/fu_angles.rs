use std::fmt::Display;

use crate::error::FuiError;
use crate::forel_ule::constants::{FU_MAX, FU_MIN, FU_UNDEFINED};

const TABLE_NAME: &str = "Forel-Ule angle";

/// One row of the Forel-Ule boundary table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuBoundary {
    pub class_id: u8,
    pub angle: f64,
}

/// Hue-angle boundaries of the Forel-Ule classes, ordered by increasing class
/// and strictly decreasing angle.
#[derive(Debug, Clone, PartialEq)]
pub struct FuAngleTable {
    class_ids: Vec<u8>,
    angles: Vec<f64>,
}

impl FuAngleTable {
    pub fn new(rows: Vec<FuBoundary>) -> Result<Self, FuiError> {
        if rows.len() < 2 {
            return Err(FuiError::malformed(
                TABLE_NAME,
                "at least two boundaries are required",
            ));
        }

        for (i, row) in rows.iter().enumerate() {
            if !(FU_MIN..=FU_MAX).contains(&row.class_id) {
                return Err(FuiError::malformed(
                    TABLE_NAME,
                    format!(
                        "class {} at row {} is outside {}..={}",
                        row.class_id,
                        i + 1,
                        FU_MIN,
                        FU_MAX
                    ),
                ));
            }
            if !row.angle.is_finite() {
                return Err(FuiError::malformed(
                    TABLE_NAME,
                    format!("angle at row {} is not finite", i + 1),
                ));
            }
        }

        for (i, pair) in rows.windows(2).enumerate() {
            if pair[1].class_id <= pair[0].class_id {
                return Err(FuiError::malformed(
                    TABLE_NAME,
                    format!("class ids must increase (row {})", i + 2),
                ));
            }
            if pair[1].angle >= pair[0].angle {
                return Err(FuiError::malformed(
                    TABLE_NAME,
                    format!(
                        "angles must strictly decrease ({} after {} at row {})",
                        pair[1].angle,
                        pair[0].angle,
                        i + 2
                    ),
                ));
            }
        }

        let (class_ids, angles) = rows.iter().map(|row| (row.class_id, row.angle)).unzip();
        Ok(Self { class_ids, angles })
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn class_ids(&self) -> &[u8] {
        &self.class_ids
    }

    pub fn first_angle(&self) -> f64 {
        self.angles[0]
    }

    pub fn last_angle(&self) -> f64 {
        self.angles[self.angles.len() - 1]
    }

    /// Forel-Ule class of a hue angle in degrees.
    ///
    /// Exactly one rule applies, checked in order:
    /// - NaN → 0
    /// - `angle >= first boundary` → 1
    /// - `angle <= last boundary` → 21
    /// - `boundary[c + 1] < angle <= boundary[c]` → class id of row `c`
    pub fn class_of(&self, angle: f64) -> u8 {
        if angle.is_nan() {
            return FU_UNDEFINED;
        }
        if angle >= self.first_angle() {
            return FU_MIN;
        }
        if angle <= self.last_angle() {
            return FU_MAX;
        }

        // First boundary strictly below the angle; always in 1..len-1 here
        let upper = self.angles.partition_point(|&boundary| boundary >= angle);
        self.class_ids[upper - 1]
    }
}

impl Display for FuAngleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FU angle table: {} boundaries, {}° down to {}°",
            self.len(),
            self.first_angle(),
            self.last_angle()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> FuAngleTable {
        let rows = (1..=21)
            .map(|class_id| FuBoundary {
                class_id,
                angle: 230.0 - 10.5 * (class_id - 1) as f64,
            })
            .collect();
        FuAngleTable::new(rows).unwrap()
    }

    #[test]
    fn test_extremes_and_nan() {
        let table = sample_table();
        assert_eq!(table.class_of(f64::NAN), 0);
        assert_eq!(table.class_of(359.9), 1);
        assert_eq!(table.class_of(230.0), 1);
        assert_eq!(table.class_of(20.0), 21);
        assert_eq!(table.class_of(0.0), 21);
    }

    #[test]
    fn test_interior_bands_are_closed_above() {
        let table = sample_table();

        // (219.5, 230.0) → 1, (209.0, 219.5] → 2
        assert_eq!(table.class_of(225.0), 1);
        assert_eq!(table.class_of(219.5), 2);
        assert_eq!(table.class_of(219.4), 2);
        assert_eq!(table.class_of(209.0), 3);

        // Just above the terminal boundary
        assert_eq!(table.class_of(20.1), 20);
        assert_eq!(table.class_of(30.5), 20);
        assert_eq!(table.class_of(30.6), 19);
    }

    #[test]
    fn test_every_finite_angle_gets_one_class() {
        let table = sample_table();
        let mut previous = FU_MIN;

        // Walking the angle downwards never skips back to a bluer class
        for step in 0..=3600 {
            let angle = 360.0 - step as f64 * 0.1;
            let class = table.class_of(angle);
            assert!((FU_MIN..=FU_MAX).contains(&class), "{angle} -> {class}");
            assert!(class >= previous, "{angle} -> {class} after {previous}");
            previous = class;
        }
        assert_eq!(previous, FU_MAX);
    }

    #[test]
    fn test_malformed_tables() {
        let increasing = FuAngleTable::new(vec![
            FuBoundary {
                class_id: 1,
                angle: 20.0,
            },
            FuBoundary {
                class_id: 2,
                angle: 30.0,
            },
        ]);
        assert!(matches!(increasing, Err(FuiError::MalformedTable { .. })));

        let out_of_range = FuAngleTable::new(vec![
            FuBoundary {
                class_id: 0,
                angle: 30.0,
            },
            FuBoundary {
                class_id: 22,
                angle: 20.0,
            },
        ]);
        assert!(matches!(out_of_range, Err(FuiError::MalformedTable { .. })));

        let single = FuAngleTable::new(vec![FuBoundary {
            class_id: 1,
            angle: 30.0,
        }]);
        assert!(matches!(single, Err(FuiError::MalformedTable { .. })));
    }
}
