use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coords::{FULL_CIRCLE, Location};

pub const DEFAULT_SPOT_COUNT: usize = 15;

const MIN_DISTANCE_KM: f64 = 2.0;
const MAX_DISTANCE_KM: f64 = 50.0;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Hotspot {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
}

/// Scatter `count` mock hotspots around `origin`, each at a uniformly random
/// bearing and distance. The reported distance is the sampled value rounded
/// to one decimal, not the recomputed distance to the offset point.
pub fn generate_hotspots(origin: Location, count: usize) -> Vec<Hotspot> {
    let mut rng = rand::rng();
    (1..=count)
        .map(|i| {
            let angle = rng.random_range(0.0..FULL_CIRCLE);
            let distance = rng.random_range(MIN_DISTANCE_KM..=MAX_DISTANCE_KM);
            let position = origin.offset_km(angle, distance);
            Hotspot {
                id: format!("Spot {}", i),
                lat: position.lat,
                lon: position.lon,
                distance_km: (distance * 10.0).round() / 10.0,
            }
        })
        .collect()
}
