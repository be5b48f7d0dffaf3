//! Basal metabolic rate and daily energy expenditure (Mifflin-St Jeor).

use std::{fmt, slice::Iter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl TryFrom<&str> for Gender {
    type Error = EnergyInputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            _ => Err(EnergyInputError::InvalidGender),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gender::Female => "female",
                Gender::Male => "male",
            }
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn iter() -> Iter<'static, ActivityLevel> {
        static LEVELS: [ActivityLevel; 5] = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        LEVELS.iter()
    }

    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::Active => "Very Active",
            ActivityLevel::VeryActive => "Extra Active",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise, desk job",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise, physical job",
        }
    }
}

impl TryFrom<&str> for ActivityLevel {
    type Error = EnergyInputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "veryActive" => Ok(ActivityLevel::VeryActive),
            _ => Err(EnergyInputError::InvalidActivityLevel),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ActivityLevel::Sedentary => "sedentary",
                ActivityLevel::Light => "light",
                ActivityLevel::Moderate => "moderate",
                ActivityLevel::Active => "active",
                ActivityLevel::VeryActive => "veryActive",
            }
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Cutting,
    #[default]
    Maintenance,
    Bulking,
}

impl Goal {
    /// Calorie offset relative to maintenance (a 500 kcal deficit or surplus).
    #[must_use]
    pub fn offset(self) -> f32 {
        match self {
            Goal::Cutting => -500.0,
            Goal::Maintenance => 0.0,
            Goal::Bulking => 500.0,
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = EnergyInputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "cutting" => Ok(Goal::Cutting),
            "maintenance" => Ok(Goal::Maintenance),
            "bulking" => Ok(Goal::Bulking),
            _ => Err(EnergyInputError::InvalidGoal),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Goal::Cutting => "cutting",
                Goal::Maintenance => "maintenance",
                Goal::Bulking => "bulking",
            }
        )
    }
}

/// Validated input to the energy calculator.
///
/// Construction rejects out-of-range values; no report can be produced from
/// malformed input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyInput {
    age: u8,
    gender: Gender,
    weight: f32,
    height: f32,
    activity_level: ActivityLevel,
}

impl EnergyInput {
    pub fn new(
        age: u8,
        gender: Gender,
        weight: f32,
        height: f32,
        activity_level: ActivityLevel,
    ) -> Result<Self, EnergyInputError> {
        if !(15..=100).contains(&age) {
            return Err(EnergyInputError::AgeOutOfRange(age));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(EnergyInputError::InvalidWeight);
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(EnergyInputError::InvalidHeight);
        }
        Ok(Self {
            age,
            gender,
            weight,
            height,
            activity_level,
        })
    }

    #[must_use]
    pub fn age(&self) -> u8 {
        self.age
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Basal metabolic rate in kcal/day (Mifflin-St Jeor).
    #[must_use]
    pub fn bmr(&self) -> f32 {
        let base = 10.0 * self.weight + 6.25 * self.height - 5.0 * f32::from(self.age);
        match self.gender {
            Gender::Male => base + 5.0,
            Gender::Female => base - 161.0,
        }
    }

    /// Total daily energy expenditure at the chosen activity level.
    #[must_use]
    pub fn tdee(&self) -> f32 {
        self.bmr() * self.activity_level.multiplier()
    }

    #[must_use]
    pub fn report(&self) -> EnergyReport {
        let bmr = self.bmr();
        let tdee = self.tdee();
        EnergyReport {
            bmr: round(bmr),
            tdee: round(tdee),
            sedentary: round(bmr * ActivityLevel::Sedentary.multiplier()),
            lightly_active: round(bmr * ActivityLevel::Light.multiplier()),
            moderately_active: round(bmr * ActivityLevel::Moderate.multiplier()),
            very_active: round(bmr * ActivityLevel::Active.multiplier()),
            extra_active: round(bmr * ActivityLevel::VeryActive.multiplier()),
            cutting: round(tdee + Goal::Cutting.offset()),
            maintenance: round(tdee),
            bulking: round(tdee + Goal::Bulking.offset()),
            macros: MacroSplit::from_calories(tdee),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EnergyInputError {
    #[error("Age must be in the range 15 to 100 ({0})")]
    AgeOutOfRange(u8),
    #[error("Weight must be a positive number")]
    InvalidWeight,
    #[error("Height must be a positive number")]
    InvalidHeight,
    #[error("Gender must be \"female\" or \"male\"")]
    InvalidGender,
    #[error("Unknown activity level")]
    InvalidActivityLevel,
    #[error("Unknown goal")]
    InvalidGoal,
}

/// Complete calculator output, all values in kcal/day or grams, rounded to the
/// nearest integer. Goal calories are not clamped, so extreme inputs may yield
/// negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyReport {
    pub bmr: i32,
    pub tdee: i32,
    pub sedentary: i32,
    pub lightly_active: i32,
    pub moderately_active: i32,
    pub very_active: i32,
    pub extra_active: i32,
    pub cutting: i32,
    pub maintenance: i32,
    pub bulking: i32,
    pub macros: MacroSplit,
}

impl EnergyReport {
    #[must_use]
    pub fn goal_calories(&self, goal: Goal) -> i32 {
        match goal {
            Goal::Cutting => self.cutting,
            Goal::Maintenance => self.maintenance,
            Goal::Bulking => self.bulking,
        }
    }
}

/// Macronutrient gram targets: 30% protein, 40% carbs, 30% fat of the given
/// calories, at 4 kcal/g for protein and carbs and 9 kcal/g for fat.
///
/// The report derives the split from the unadjusted TDEE, not from the
/// goal-adjusted calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

impl MacroSplit {
    #[must_use]
    pub fn from_calories(calories: f32) -> Self {
        Self {
            protein: round(calories * 0.30 / 4.0),
            carbs: round(calories * 0.40 / 4.0),
            fat: round(calories * 0.30 / 9.0),
        }
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

    fn input(age: u8, gender: Gender, weight: f32, height: f32, level: ActivityLevel) -> EnergyInput {
        EnergyInput::new(age, gender, weight, height, level).unwrap()
    }

    #[rstest]
    #[case(Gender::Male, 1648.75)]
    #[case(Gender::Female, 1482.75)]
    fn test_bmr(#[case] gender: Gender, #[case] expected: f32) {
        let input = input(30, gender, 70.0, 175.0, ActivityLevel::Moderate);
        assert_approx_eq!(input.bmr(), expected, 0.001);
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1979)]
    #[case(ActivityLevel::Light, 2267)]
    #[case(ActivityLevel::Moderate, 2556)]
    #[case(ActivityLevel::Active, 2844)]
    #[case(ActivityLevel::VeryActive, 3133)]
    fn test_tdee_per_level(#[case] level: ActivityLevel, #[case] expected: i32) {
        let report = input(30, Gender::Male, 70.0, 175.0, level).report();
        assert_eq!(report.tdee, expected);
    }

    #[test]
    fn test_report() {
        let report = input(30, Gender::Male, 70.0, 175.0, ActivityLevel::Moderate).report();
        assert_eq!(
            report,
            EnergyReport {
                bmr: 1649,
                tdee: 2556,
                sedentary: 1979,
                lightly_active: 2267,
                moderately_active: 2556,
                very_active: 2844,
                extra_active: 3133,
                cutting: 2056,
                maintenance: 2556,
                bulking: 3056,
                macros: MacroSplit {
                    protein: 192,
                    carbs: 256,
                    fat: 85,
                },
            }
        );
    }

    #[rstest]
    #[case(Goal::Cutting, 2056)]
    #[case(Goal::Maintenance, 2556)]
    #[case(Goal::Bulking, 3056)]
    fn test_goal_calories(#[case] goal: Goal, #[case] expected: i32) {
        let report = input(30, Gender::Male, 70.0, 175.0, ActivityLevel::Moderate).report();
        assert_eq!(report.goal_calories(goal), expected);
    }

    #[test]
    fn test_macro_split_energy_sums_to_calories() {
        for calories in [1200.0, 1979.0, 2556.0, 3133.0] {
            let macros = MacroSplit::from_calories(calories);
            let total = macros.protein * 4 + macros.carbs * 4 + macros.fat * 9;
            #[allow(clippy::cast_possible_truncation)]
            let calories = calories.round() as i32;
            assert!((total - calories).abs() <= 9, "{total} vs {calories}");
        }
    }

    #[test]
    fn test_report_idempotent() {
        let input = input(42, Gender::Female, 61.5, 168.0, ActivityLevel::Light);
        assert_eq!(input.report(), input.report());
    }

    #[rstest]
    #[case(14, 70.0, 175.0, EnergyInputError::AgeOutOfRange(14))]
    #[case(101, 70.0, 175.0, EnergyInputError::AgeOutOfRange(101))]
    #[case(30, 0.0, 175.0, EnergyInputError::InvalidWeight)]
    #[case(30, -70.0, 175.0, EnergyInputError::InvalidWeight)]
    #[case(30, f32::NAN, 175.0, EnergyInputError::InvalidWeight)]
    #[case(30, 70.0, 0.0, EnergyInputError::InvalidHeight)]
    #[case(30, 70.0, f32::INFINITY, EnergyInputError::InvalidHeight)]
    fn test_invalid_input(
        #[case] age: u8,
        #[case] weight: f32,
        #[case] height: f32,
        #[case] expected: EnergyInputError,
    ) {
        assert_eq!(
            EnergyInput::new(age, Gender::Male, weight, height, ActivityLevel::Moderate),
            Err(expected)
        );
    }

    #[rstest]
    #[case("sedentary", Ok(ActivityLevel::Sedentary))]
    #[case("veryActive", Ok(ActivityLevel::VeryActive))]
    #[case("extreme", Err(EnergyInputError::InvalidActivityLevel))]
    fn test_activity_level_from_str(
        #[case] value: &str,
        #[case] expected: Result<ActivityLevel, EnergyInputError>,
    ) {
        assert_eq!(ActivityLevel::try_from(value), expected);
    }

    #[test]
    fn test_round_trip_labels() {
        for level in ActivityLevel::iter() {
            assert_eq!(
                ActivityLevel::try_from(level.to_string().as_str()).unwrap(),
                *level
            );
        }
    }
}
