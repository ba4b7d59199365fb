use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

// Relative weights, they do not need to sum to 100.
const FISH_TYPES: [(&str, u32); 6] = [
    ("Bass", 35),
    ("Trout", 25),
    ("Pike", 15),
    ("Salmon", 10),
    ("Carp", 10),
    ("Catfish", 5),
];
const BEST_TIMES: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];
const BAITS: [&str; 5] = ["Worms", "Lures", "Flies", "Corn", "Shrimp"];
const TECHNIQUES: [&str; 4] = [
    "Bottom fishing",
    "Float fishing",
    "Spinning",
    "Trolling",
];

#[derive(Serialize, Deserialize, Debug)]
pub struct FishCard {
    pub probability: u32,
    pub details: FishDetails,
    pub fish_type: String,
}

// Keys are display labels, rendered as-is by the frontend.
#[derive(Serialize, Deserialize, Debug)]
pub struct FishDetails {
    #[serde(rename = "Best time")]
    pub best_time: String,
    #[serde(rename = "Bait recommended")]
    pub bait: String,
    #[serde(rename = "Depth")]
    pub depth: String,
    #[serde(rename = "Technique")]
    pub technique: String,
}

/// Roll up a fresh mock fish card. Every field is sampled independently, the
/// shallow and deep depth bounds come from disjoint ranges so the shallow one
/// is always smaller.
pub fn generate_fish_card() -> FishCard {
    let mut rng = rand::rng();

    let details = FishDetails {
        best_time: choose(&BEST_TIMES, &mut rng),
        bait: choose(&BAITS, &mut rng),
        depth: format!(
            "{}-{}m",
            rng.random_range(1..=10),
            rng.random_range(11..=20)
        ),
        technique: choose(&TECHNIQUES, &mut rng),
    };

    let (fish_type, _) = FISH_TYPES
        .choose_weighted(&mut rng, |(_, weight)| *weight)
        .expect("Weights are fixed and non-zero");

    FishCard {
        probability: rng.random_range(10..=95),
        details,
        fish_type: fish_type.to_string(),
    }
}

fn choose(options: &[&str], rng: &mut impl Rng) -> String {
    options
        .choose(rng)
        .expect("Options are never empty")
        .to_string()
}
