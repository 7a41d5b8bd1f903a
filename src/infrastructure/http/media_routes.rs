//! Generated media API routes - Raw bytes for the audio player and images

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::{session_handle, RouteError};
use crate::domain::value_objects::MediaAsset;
use crate::infrastructure::state::AppState;

/// Music generated for the session's last symphony
pub async fn get_music(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let music = handle
        .lock()
        .await
        .music
        .clone()
        .ok_or_else(|| (StatusCode::NOT_FOUND, "No music generated".to_string()))?;
    let content_type = music.audio_content_type();
    Ok(media_response(music, content_type))
}

/// Image drawn from the session's story
pub async fn get_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let image = handle
        .lock()
        .await
        .image
        .clone()
        .ok_or_else(|| (StatusCode::NOT_FOUND, "No image generated".to_string()))?;
    let content_type = image.image_content_type();
    Ok(media_response(image, content_type))
}

/// Illustration of one endangered species
pub async fn get_species_image(
    State(state): State<Arc<AppState>>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Response, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let image = handle
        .lock()
        .await
        .species
        .get(index)
        .and_then(|entry| entry.image.clone())
        .ok_or_else(|| (StatusCode::NOT_FOUND, "No image for this species".to_string()))?;
    let content_type = image.image_content_type();
    Ok(media_response(image, content_type))
}

fn media_response(asset: MediaAsset, content_type: &'static str) -> Response {
    tracing::debug!(len = asset.bytes().len(), content_type, "Serving media");
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "no-store"),
        ],
        asset.into_bytes(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::ports::outbound::mock::{
        MockMedia, MockWeather, ScriptedLlm, PNG_BYTES, WAV_BYTES,
    };
    use crate::domain::value_objects::WeatherSnapshot;
    use crate::infrastructure::http::create_routes;

    async fn call(app: &Router, method: Method, uri: String, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_media_bytes_and_content_types() {
        let state = AppState::with_ports(
            Arc::new(MockWeather::ok(WeatherSnapshot::new(28.0, 40.0, "Clear"))),
            Arc::new(ScriptedLlm::default()),
            Arc::new(MockMedia::default()),
        );
        let app = create_routes().with_state(Arc::new(state));

        let created = call(&app, Method::POST, "/api/sessions".to_string(), None).await;
        let bytes = to_bytes(created.into_body(), usize::MAX).await.unwrap();
        let view: Value = serde_json::from_slice(&bytes).unwrap();
        let id = view["session_id"].as_str().unwrap().to_string();

        let missing = call(&app, Method::GET, format!("/api/sessions/{}/media/music", id), None).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        call(
            &app,
            Method::POST,
            format!("/api/sessions/{}/symphony", id),
            Some(json!({ "city": "Cairo" })),
        )
        .await;

        let music = call(&app, Method::GET, format!("/api/sessions/{}/media/music", id), None).await;
        assert_eq!(music.status(), StatusCode::OK);
        assert_eq!(music.headers()[header::CONTENT_TYPE], "audio/wav");
        let body = to_bytes(music.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], WAV_BYTES);

        let image = call(&app, Method::GET, format!("/api/sessions/{}/media/image", id), None).await;
        assert_eq!(image.headers()[header::CONTENT_TYPE], "image/png");
        let body = to_bytes(image.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], PNG_BYTES);

        let species = call(
            &app,
            Method::GET,
            format!("/api/sessions/{}/media/species/0", id),
            None,
        )
        .await;
        assert_eq!(species.status(), StatusCode::NOT_FOUND);
    }
}
