use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

const CONDITIONS: [&str; 5] = ["Sunny", "Cloudy", "Rainy", "Windy", "Foggy"];

// Fixed provenance label shown by the frontend. No real provider is queried.
const SOURCE: &str = "OpenWeatherMap";

#[derive(Serialize, Deserialize, Debug)]
pub struct WeatherCard {
    pub wind_speed: f64,
    pub temp: i32,
    pub condition: String,
    pub source: String,
}

pub fn generate_weather() -> WeatherCard {
    let mut rng = rand::rng();
    WeatherCard {
        wind_speed: (rng.random_range(0.0..=15.0) * 10.0_f64).round() / 10.0,
        temp: rng.random_range(5..=30),
        condition: CONDITIONS
            .choose(&mut rng)
            .expect("Conditions are never empty")
            .to_string(),
        source: SOURCE.to_string(),
    }
}
