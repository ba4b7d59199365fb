use axum::extract::{Json, Path};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::fish::{FishCard, generate_fish_card};
use crate::weather::{WeatherCard, generate_weather};

pub fn routes() -> Router {
    Router::new().route("/{token}/{spot_id}", get(get_spot_details))
}

#[derive(Serialize, Deserialize, Debug)]
struct SpotDetails {
    fish_card: FishCard,
    weather_card: WeatherCard,
}

// Token and spot id are accepted as opaque strings. A real service would
// validate the token and look the spot up, this one generates fresh data for
// whatever the caller asks about.
async fn get_spot_details(Path((token, spot_id)): Path<(String, String)>) -> Json<SpotDetails> {
    log::trace!("spot details for {} (token {})", spot_id, token);
    Json(SpotDetails {
        fish_card: generate_fish_card(),
        weather_card: generate_weather(),
    })
}
