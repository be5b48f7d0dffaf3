use crate::{
    ActivityLevel, EnergyInput, Gender, Goal, ReadError, UpdateError,
};

#[allow(async_fn_in_trait)]
pub trait ProfileService {
    async fn get_profile(&self) -> Result<Option<Profile>, ReadError>;
    /// Creates or replaces the user's profile. No history is kept.
    async fn save_profile(&self, profile: Profile) -> Result<Profile, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    async fn read_profile(&self) -> Result<Option<Profile>, ReadError>;
    async fn save_profile(&self, profile: Profile) -> Result<Profile, UpdateError>;
}

/// The user's calculator inputs together with the values computed from them at
/// save time. One record per user, replaced on every save.
///
/// The stored `bmr`, `tdee` and targets are snapshots. They go stale when the
/// inputs change and are only refreshed by the next [`Profile::compute`].
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub height_cm: f32,
    pub weight_kg: f32,
    pub age: u8,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub body_fat_pct: Option<f32>,
    pub bmr: i32,
    pub tdee: i32,
    pub goal: Goal,
    pub target_calories: i32,
    pub protein_target: i32,
    pub carbs_target: i32,
    pub fat_target: i32,
    pub use_imperial: bool,
}

impl Profile {
    /// Derives a profile from validated calculator input.
    ///
    /// The macro targets come from the unadjusted TDEE while `target_calories`
    /// is goal-adjusted, so the two are deliberately inconsistent for cutting
    /// and bulking goals.
    #[must_use]
    pub fn compute(
        input: &EnergyInput,
        goal: Goal,
        body_fat_pct: Option<f32>,
        use_imperial: bool,
    ) -> Self {
        let report = input.report();
        Self {
            height_cm: input.height(),
            weight_kg: input.weight(),
            age: input.age(),
            gender: input.gender(),
            activity_level: input.activity_level(),
            body_fat_pct,
            bmr: report.bmr,
            tdee: report.tdee,
            goal,
            target_calories: report.goal_calories(goal),
            protein_target: report.macros.protein,
            carbs_target: report.macros.carbs,
            fat_target: report.macros.fat,
            use_imperial,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn input() -> EnergyInput {
        EnergyInput::new(30, Gender::Male, 70.0, 175.0, ActivityLevel::Moderate).unwrap()
    }

    #[rstest]
    #[case(Goal::Cutting, 2056)]
    #[case(Goal::Maintenance, 2556)]
    #[case(Goal::Bulking, 3056)]
    fn test_compute_target_calories(#[case] goal: Goal, #[case] expected: i32) {
        let profile = Profile::compute(&input(), goal, None, false);
        assert_eq!(profile.target_calories, expected);
    }

    #[test]
    fn test_compute_snapshots_inputs() {
        let profile = Profile::compute(&input(), Goal::Maintenance, Some(18.5), true);
        assert_eq!(profile.age, 30);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.height_cm, 175.0);
        assert_eq!(profile.body_fat_pct, Some(18.5));
        assert_eq!(profile.bmr, 1649);
        assert_eq!(profile.tdee, 2556);
        assert!(profile.use_imperial);
    }

    #[test]
    fn test_macros_track_tdee_not_goal() {
        let cutting = Profile::compute(&input(), Goal::Cutting, None, false);
        let bulking = Profile::compute(&input(), Goal::Bulking, None, false);
        assert_eq!(
            (cutting.protein_target, cutting.carbs_target, cutting.fat_target),
            (bulking.protein_target, bulking.carbs_target, bulking.fat_target)
        );
        assert_eq!(cutting.protein_target, 192);
    }
}
