use chrono::{NaiveDate, NaiveDateTime};
use liftlog_domain as domain;

pub fn users() -> Vec<domain::User> {
    vec![user(), user_2()]
}

pub fn user() -> domain::User {
    domain::User {
        id: 1.into(),
        name: domain::Name::new("Alice").unwrap(),
        email: "alice@example.com".to_string(),
        image: None,
    }
}

pub fn user_2() -> domain::User {
    domain::User {
        id: 2.into(),
        name: domain::Name::new("Bob").unwrap(),
        email: "bob@example.com".to_string(),
        image: Some("https://example.com/bob.png".to_string()),
    }
}

pub fn datetime(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
}

pub fn workout_set(total_weight: f32, day: u32) -> domain::WorkoutSet {
    domain::WorkoutSet::new(
        5.into(),
        domain::Name::new("Bench Press").unwrap(),
        domain::Weight::new(total_weight / 2.0).unwrap(),
        domain::Reps::new(8).unwrap(),
        domain::Sets::new(3).unwrap(),
        datetime(day),
        domain::SetType::Normal,
        None,
        Some(90),
    )
}

pub fn profile(weight_kg: f32) -> domain::Profile {
    domain::Profile::compute(
        &domain::EnergyInput::new(
            30,
            domain::Gender::Male,
            weight_kg,
            175.0,
            domain::ActivityLevel::Moderate,
        )
        .unwrap(),
        domain::Goal::Maintenance,
        None,
        false,
    )
}
