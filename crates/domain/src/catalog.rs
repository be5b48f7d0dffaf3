//! The default exercise catalog seeded for every user.

use crate::{Exercise, Name};

struct Entry {
    id: u128,
    name: &'static str,
    category: &'static str,
}

const ENTRIES: [Entry; 15] = [
    // Legs
    Entry { id: 0x01, name: "Barbell Squat", category: "Legs" },
    Entry { id: 0x02, name: "Leg Press", category: "Legs" },
    Entry { id: 0x03, name: "Lunges", category: "Legs" },
    Entry { id: 0x04, name: "Deadlift", category: "Back/Legs" },
    // Chest
    Entry { id: 0x05, name: "Bench Press", category: "Chest" },
    Entry { id: 0x06, name: "Incline Bench Press", category: "Chest" },
    Entry { id: 0x07, name: "Push Ups", category: "Chest" },
    Entry { id: 0x08, name: "Dumbbell Flys", category: "Chest" },
    // Back
    Entry { id: 0x09, name: "Pull Ups", category: "Back" },
    Entry { id: 0x0A, name: "Barbell Row", category: "Back" },
    Entry { id: 0x0B, name: "Lat Pulldown", category: "Back" },
    // Shoulders
    Entry { id: 0x0C, name: "Overhead Press", category: "Shoulders" },
    Entry { id: 0x0D, name: "Lateral Raise", category: "Shoulders" },
    // Arms
    Entry { id: 0x0E, name: "Barbell Curl", category: "Biceps" },
    Entry { id: 0x0F, name: "Tricep Extension", category: "Triceps" },
];

/// All catalog exercises, in display order.
pub fn exercises() -> impl Iterator<Item = Exercise> {
    ENTRIES.iter().map(|entry| Exercise {
        id: entry.id.into(),
        name: Name::new(entry.name).unwrap_or_else(|_| unreachable!("catalog names are valid")),
        category: entry.category.to_string(),
        is_custom: false,
    })
}
