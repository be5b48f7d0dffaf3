//! Conversions between metric and imperial weight/height representations.

const KG_PER_LB: f32 = 0.453_592;
const CM_PER_FOOT: f32 = 30.48;
const CM_PER_INCH: f32 = 2.54;

#[must_use]
pub fn lbs_to_kg(lbs: f32) -> f32 {
    lbs * KG_PER_LB
}

#[must_use]
pub fn kg_to_lbs(kg: f32) -> f32 {
    kg / KG_PER_LB
}

#[must_use]
pub fn feet_inches_to_cm(feet: u32, inches: u32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    {
        feet as f32 * CM_PER_FOOT + inches as f32 * CM_PER_INCH
    }
}

/// Convert a height in centimeters into whole feet and rounded inches.
///
/// Inches that round up to 12 are carried into the feet component,
/// so 182.8 cm yields 6 ft 0 in rather than 5 ft 12 in.
#[must_use]
pub fn cm_to_feet_inches(cm: f32) -> (u32, u32) {
    let total_inches = cm / CM_PER_INCH;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut feet = (total_inches / 12.0).floor() as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut inches = (total_inches % 12.0).round() as u32;
    if inches == 12 {
        feet += 1;
        inches = 0;
    }
    (feet, inches)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0)]
    #[case(45.0)]
    #[case(83.2)]
    #[case(225.5)]
    fn test_weight_round_trip(#[case] kg: f32) {
        assert_approx_eq!(lbs_to_kg(kg_to_lbs(kg)), kg, 0.001);
    }

    #[rstest]
    #[case(100.0, 220.462_3)]
    #[case(45.359_2, 100.0)]
    fn test_kg_to_lbs(#[case] kg: f32, #[case] lbs: f32) {
        assert_approx_eq!(kg_to_lbs(kg), lbs, 0.001);
    }

    #[rstest]
    #[case(5, 9, 175.26)]
    #[case(6, 0, 182.88)]
    #[case(0, 0, 0.0)]
    fn test_feet_inches_to_cm(#[case] feet: u32, #[case] inches: u32, #[case] cm: f32) {
        assert_approx_eq!(feet_inches_to_cm(feet, inches), cm, 0.001);
    }

    #[rstest]
    #[case(175.26, 5, 9)]
    #[case(182.88, 6, 0)]
    #[case(182.5, 6, 0)] // 71.85 in rounds to 72, carried into feet
    #[case(30.0, 1, 0)]
    fn test_cm_to_feet_inches(#[case] cm: f32, #[case] feet: u32, #[case] inches: u32) {
        assert_eq!(cm_to_feet_inches(cm), (feet, inches));
    }

    #[rstest]
    #[case(5, 9)]
    #[case(6, 0)]
    #[case(5, 11)]
    fn test_height_round_trip(#[case] feet: u32, #[case] inches: u32) {
        assert_eq!(cm_to_feet_inches(feet_inches_to_cm(feet, inches)), (feet, inches));
    }
}
