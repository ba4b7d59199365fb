use axum::extract::Json;
use axum::extract::rejection::JsonRejection;
use axum::{Router, routing::post};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::coords::Location;
use crate::error::ApiError;
use crate::hotspots::{DEFAULT_SPOT_COUNT, Hotspot, generate_hotspots};

pub fn routes() -> Router {
    Router::new().route("/", post(get_hotspots))
}

#[derive(Deserialize, Debug)]
struct HotspotRequest {
    origin: Option<Location>,
}

#[derive(Serialize, Deserialize, Debug)]
struct HotspotResponse {
    token: String,
    spots: Vec<Hotspot>,
}

// A missing body, a body that is not JSON and a body without an origin all
// collapse into the same client error.
async fn get_hotspots(
    request: Result<Json<HotspotRequest>, JsonRejection>,
) -> Result<Json<HotspotResponse>, ApiError> {
    let Ok(Json(HotspotRequest {
        origin: Some(origin),
    })) = request
    else {
        return Err(ApiError::OriginRequired);
    };

    let spots = generate_hotspots(origin, DEFAULT_SPOT_COUNT);
    let token = issue_token();
    log::debug!("issued token {} for {} spots", token, spots.len());

    Ok(Json(HotspotResponse { token, spots }))
}

// The token carries no session semantics, nothing ever validates or resolves
// it. Kept because the frontend echoes it back in the spot-detail path.
fn issue_token() -> String {
    Utc::now().timestamp().to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{
        body::Body,
        http::{self, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_hotspots() {
        let app = routes();

        let response = app
            .oneshot(
                Request::builder()
                    .method(http::Method::POST)
                    .uri("/")
                    .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                    .body(Body::from(r#"{"origin": {"lat": 40.0, "lon": -74.0}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response: HotspotResponse = serde_json::from_slice(&body).unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.spots.len(), DEFAULT_SPOT_COUNT);
        for (i, spot) in response.spots.iter().enumerate() {
            assert_eq!(spot.id, format!("Spot {}", i + 1));
            assert!((2.0..=50.0).contains(&spot.distance_km));
            assert!((spot.lat - 40.0).abs() <= 50.0 / 111.0 + 1e-9);
            assert!((spot.lon + 74.0).abs() <= 50.0 / 111.0 + 1e-9);
        }
    }

    #[tokio::test]
    async fn test_get_hotspots_without_origin() {
        let app = routes();

        let response = app
            .oneshot(
                Request::builder()
                    .method(http::Method::POST)
                    .uri("/")
                    .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error, serde_json::json!({"error": "Origin required"}));
    }

    #[tokio::test]
    async fn test_get_hotspots_without_body() {
        let app = routes();

        let response = app
            .oneshot(
                Request::builder()
                    .method(http::Method::POST)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error, serde_json::json!({"error": "Origin required"}));
    }
}
