use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// One degree of latitude is close to 111 km anywhere on Earth. Offsets here
// stay below 50 km, so the flat-Earth approximation is fine and we never
// bother with geodesics.
pub const KM_PER_DEGREE: f64 = 111.0;
pub const FULL_CIRCLE: f64 = 2.0 * PI;

#[derive(Serialize, Deserialize, PartialEq, Debug, Copy, Clone)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Move `distance_km` from this location in the direction `angle`
    /// (radians), converting the polar offset to approximate degrees.
    pub fn offset_km(&self, angle: f64, distance_km: f64) -> Location {
        let lat_offset = (distance_km / KM_PER_DEGREE) * angle.cos();
        let lon_offset = (distance_km / KM_PER_DEGREE) * angle.sin();
        Location {
            lat: self.lat + lat_offset,
            lon: self.lon + lon_offset,
        }
    }
}
