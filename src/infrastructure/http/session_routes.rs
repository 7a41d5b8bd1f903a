//! Session API routes
//!
//! Every handler locks its session for the whole action, runs one service
//! operation on a copy, writes the result back and renders the view.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{session_handle, RouteError};
use crate::application::dto::{
    NgoRequestDto, SessionViewDto, SymphonyRequestDto, ToggleChallengeRequestDto,
};
use crate::application::services::{SessionUpdate, SymphonyError};
use crate::domain::entities::EcoSession;
use crate::infrastructure::state::AppState;

/// Start a new, empty session
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionViewDto>) {
    let session = state.sessions.write().await.create_session();
    (
        StatusCode::CREATED,
        Json(SessionViewDto::render(&session, Vec::new())),
    )
}

/// Render the current state of a session
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionViewDto>, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let session = handle.lock().await;
    Ok(Json(SessionViewDto::render(&session, Vec::new())))
}

/// Run the whole pipeline for a city
pub async fn run_symphony(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SymphonyRequestDto>,
) -> Result<Json<SessionViewDto>, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    let update = state
        .symphony_service
        .run(session.clone(), req.city.trim(), req.interests)
        .await;
    Ok(finish(&mut session, update))
}

/// Replace today's challenges with a new set
pub async fn regenerate_challenges(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionViewDto>, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    let update = state
        .symphony_service
        .regenerate_challenges(session.clone())
        .await
        .map_err(symphony_error)?;
    Ok(finish(&mut session, update))
}

/// Mark one challenge done or not done
pub async fn toggle_challenge(
    State(state): State<Arc<AppState>>,
    Path((id, index)): Path<(String, usize)>,
    Json(req): Json<ToggleChallengeRequestDto>,
) -> Result<Json<SessionViewDto>, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    session
        .challenges
        .set_completed(index, req.completed)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;
    session.touch();

    tracing::debug!(
        session_id = %session.id,
        index,
        completed = req.completed,
        points = session.challenges.points(),
        "Challenge toggled"
    );
    Ok(Json(SessionViewDto::render(&session, Vec::new())))
}

/// Reveal the endangered-species panel
pub async fn reveal_species(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionViewDto>, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    let update = state
        .symphony_service
        .reveal_species(session.clone())
        .await
        .map_err(symphony_error)?;
    Ok(finish(&mut session, update))
}

/// Find NGOs for a new set of interests
pub async fn refresh_ngos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<NgoRequestDto>,
) -> Result<Json<SessionViewDto>, RouteError> {
    let handle = session_handle(&state, &id).await?;
    let mut session = handle.lock().await;
    let update = state
        .symphony_service
        .refresh_ngos(session.clone(), req.interests)
        .await
        .map_err(symphony_error)?;
    Ok(finish(&mut session, update))
}

/// Store the updated session in its slot and render it
fn finish(slot: &mut EcoSession, update: SessionUpdate) -> Json<SessionViewDto> {
    let view = SessionViewDto::render(&update.session, update.notices);
    *slot = update.session;
    Json(view)
}

fn symphony_error(e: SymphonyError) -> RouteError {
    let status = match e {
        SymphonyError::NoCity => StatusCode::CONFLICT,
        SymphonyError::SpeciesLocked => StatusCode::FORBIDDEN,
    };
    (status, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::ports::outbound::mock::{MockMedia, MockWeather, ScriptedLlm};
    use crate::domain::value_objects::WeatherSnapshot;
    use crate::infrastructure::http::create_routes;

    fn app(weather: MockWeather) -> Router {
        app_with_llm(weather, ScriptedLlm::default())
    }

    fn app_with_llm(weather: MockWeather, llm: ScriptedLlm) -> Router {
        let state = AppState::with_ports(
            Arc::new(weather),
            Arc::new(llm),
            Arc::new(MockMedia::default()),
        );
        create_routes().with_state(Arc::new(state))
    }

    fn london() -> MockWeather {
        MockWeather::ok(WeatherSnapshot::new(18.0, 70.0, "Clouds"))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    async fn new_session(app: &Router) -> String {
        let (status, view) = send(app, Method::POST, "/api/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        view["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_symphony_renders_london() {
        let app = app(london());
        let id = new_session(&app).await;

        let (status, view) = send(
            &app,
            Method::POST,
            &format!("/api/sessions/{}/symphony", id),
            Some(json!({ "city": "London", "interests": ["Wildlife Conservation"] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["mood"], "cloudy");
        assert_eq!(
            view["narrative"],
            "In London, the weather is Clouds with a temperature of 18°C."
        );
        assert_eq!(
            view["media_description"],
            "cloudy mood with clouds weather and a cool feel"
        );
        assert_eq!(view["has_music"], true);
        assert_eq!(view["has_image"], true);
        assert_eq!(view["challenges"].as_array().unwrap().len(), 4);
        assert_eq!(view["points"], 0);
        assert_eq!(view["notices"], json!([]));

        // state survives between actions
        let (_, again) = send(&app, Method::GET, &format!("/api/sessions/{}", id), None).await;
        assert_eq!(again["story"], view["story"]);
    }

    #[tokio::test]
    async fn test_completing_challenges_unlocks_species() {
        let app = app(london());
        let id = new_session(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/api/sessions/{}/symphony", id),
            Some(json!({ "city": "London" })),
        )
        .await;

        let species_uri = format!("/api/sessions/{}/species", id);
        let (status, _) = send(&app, Method::POST, &species_uri, None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let mut last = Value::Null;
        for index in 0..4 {
            let (status, view) = send(
                &app,
                Method::PUT,
                &format!("/api/sessions/{}/challenges/{}", id, index),
                Some(json!({ "completed": true })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(view["species_unlocked"], index == 3);
            last = view;
        }
        assert_eq!(last["points"], 40);

        let (status, view) = send(&app, Method::POST, &species_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["species"][0]["name"], "Water Vole");
        assert_eq!(view["species"][0]["has_image"], true);
    }

    #[tokio::test]
    async fn test_weather_failure_is_reported_inline() {
        let app = app(MockWeather::failing(404));
        let id = new_session(&app).await;

        let (status, view) = send(
            &app,
            Method::POST,
            &format!("/api/sessions/{}/symphony", id),
            Some(json!({ "city": "Nowhere" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["notices"][0]["step"], "weather");
        assert!(view["weather"].is_null());
        assert!(view["story"].is_null());
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let app = app(london());

        let (status, _) = send(&app, Method::GET, "/api/sessions/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let unknown = crate::domain::value_objects::SessionId::new();
        let (status, _) = send(&app, Method::GET, &format!("/api/sessions/{}", unknown), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let id = new_session(&app).await;
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/sessions/{}/ngos", id),
            Some(json!({ "interests": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/sessions/{}/challenges/7", id),
            Some(json!({ "completed": true })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_toggle_during_slow_action_is_kept() {
        let llm = ScriptedLlm {
            ngo_delay: std::time::Duration::from_millis(300),
            ..ScriptedLlm::default()
        };
        let app = app_with_llm(london(), llm);
        let id = new_session(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/api/sessions/{}/symphony", id),
            Some(json!({ "city": "London" })),
        )
        .await;

        let ngos = {
            let app = app.clone();
            let uri = format!("/api/sessions/{}/ngos", id);
            tokio::spawn(async move {
                send(&app, Method::POST, &uri, Some(json!({ "interests": ["Climate Action"] }))).await
            })
        };
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let (status, toggled) = send(
            &app,
            Method::PUT,
            &format!("/api/sessions/{}/challenges/0", id),
            Some(json!({ "completed": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(toggled["points"], 10);

        let (status, _) = ngos.await.unwrap();
        assert_eq!(status, StatusCode::OK);

        let (_, view) = send(&app, Method::GET, &format!("/api/sessions/{}", id), None).await;
        assert_eq!(view["points"], 10);
        assert_eq!(view["challenges"][0]["completed"], true);
        assert_eq!(view["interests"], json!(["Climate Action"]));
    }
}
