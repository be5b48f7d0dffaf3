//! Lean/fat mass and protein target estimation.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyComposition {
    pub fat_mass: Option<f32>,
    pub lean_mass: Option<f32>,
    pub body_fat_pct: Option<f32>,
    pub protein_min: i32,
    pub protein_max: i32,
}

impl BodyComposition {
    /// Estimate body composition from weight in kilograms and an optional
    /// body-fat percentage.
    ///
    /// With a body-fat percentage in the exclusive range (0, 100) the protein
    /// target of 1.6-2.2 g/kg is applied to lean mass; otherwise it falls back
    /// to bodyweight and no mass breakdown is reported. Out-of-range
    /// percentages are treated the same as absent ones.
    ///
    /// Returns `None` for a non-positive or non-finite weight.
    #[must_use]
    pub fn estimate(weight: f32, body_fat_pct: Option<f32>) -> Option<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            return None;
        }

        if let Some(bf) = body_fat_pct {
            if bf.is_finite() && bf > 0.0 && bf < 100.0 {
                let fat_mass = weight * (bf / 100.0);
                let lean_mass = weight - fat_mass;
                return Some(Self {
                    fat_mass: Some(fat_mass),
                    lean_mass: Some(lean_mass),
                    body_fat_pct: Some(bf),
                    protein_min: round(lean_mass * 1.6),
                    protein_max: round(lean_mass * 2.2),
                });
            }
        }

        Some(Self {
            fat_mass: None,
            lean_mass: None,
            body_fat_pct: None,
            protein_min: round(weight * 1.6),
            protein_max: round(weight * 2.2),
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round(value: f32) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_estimate_with_body_fat() {
        let composition = BodyComposition::estimate(80.0, Some(20.0)).unwrap();
        assert_approx_eq!(composition.fat_mass.unwrap(), 16.0, 0.001);
        assert_approx_eq!(composition.lean_mass.unwrap(), 64.0, 0.001);
        assert_eq!(composition.protein_min, 102);
        assert_eq!(composition.protein_max, 141);
    }

    #[rstest]
    #[case::absent(None)]
    #[case::zero(Some(0.0))]
    #[case::negative(Some(-5.0))]
    #[case::hundred(Some(100.0))]
    #[case::above_hundred(Some(150.0))]
    #[case::nan(Some(f32::NAN))]
    fn test_estimate_bodyweight_fallback(#[case] body_fat_pct: Option<f32>) {
        let composition = BodyComposition::estimate(80.0, body_fat_pct).unwrap();
        assert_eq!(composition.fat_mass, None);
        assert_eq!(composition.lean_mass, None);
        assert_eq!(composition.body_fat_pct, None);
        assert_eq!(composition.protein_min, 128);
        assert_eq!(composition.protein_max, 176);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-80.0)]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    fn test_estimate_invalid_weight(#[case] weight: f32) {
        assert_eq!(BodyComposition::estimate(weight, Some(20.0)), None);
    }
}
