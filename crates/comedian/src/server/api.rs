//! Axum handlers for `/api/*` routes.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use comedian_core::Error;
use serde::Serialize;
use serde_json::{Value, json};

use super::AppState;
use crate::jokes;

const TOPIC_REQUIRED: &str = "Topic is required.";
const AGENT_ID_REQUIRED: &str = "An OpenAI Agent ID is required. Provide it in \
the request body or set OPENAI_AGENT_ID.";
const MISSING_CREDENTIAL: &str = "Missing OPENAI_API_KEY environment variable.";

// ── Response types ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JokeReply {
    joke: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<String>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Parses a request body leniently: an empty body is an empty object.
fn parse_body(body: &Bytes) -> Result<Value, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(json!({}));
    }
    serde_json::from_slice(body).map_err(|err| {
        warn!("rejected malformed body: {err}");
        json_error(StatusCode::BAD_REQUEST, "Request body must be JSON.")
    })
}

/// Reads a string field, trimmed. Missing or non-string fields are empty.
fn string_field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name).and_then(Value::as_str).map(str::trim).unwrap_or("")
}

/// Maps a failed joke request to a response, logging what the caller
/// doesn't get to see.
fn failure(err: Error, context: &str, friendly: &str) -> Response {
    match err {
        Error::MissingCredential => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, MISSING_CREDENTIAL)
        }
        Error::InvalidArgument(reason) => {
            json_error(StatusCode::BAD_REQUEST, reason)
        }
        err => {
            error!("{context}: {err}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, friendly)
        }
    }
}

/// Rejects the request up front when no API key can be resolved, before
/// the body is even looked at.
fn require_credential(state: &AppState) -> Result<(), Response> {
    if state.model_client.has_credential() {
        return Ok(());
    }
    Err(json_error(StatusCode::INTERNAL_SERVER_ERROR, MISSING_CREDENTIAL))
}

fn joke_reply(joke: String, topic: Option<String>) -> Response {
    (StatusCode::OK, Json(JokeReply { joke, topic })).into_response()
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// Any method other than POST.
pub(super) async fn method_not_allowed() -> Response {
    json_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// POST /api/joke
pub(super) async fn joke(State(state): State<AppState>, body: Bytes) -> Response {
    if let Err(resp) = require_credential(&state) {
        return resp;
    }
    let body = match parse_body(&body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };
    let topic = string_field(&body, "topic");
    if topic.is_empty() {
        return json_error(StatusCode::BAD_REQUEST, TOPIC_REQUIRED);
    }

    match jokes::one_shot_joke(&state.model_client, &state.model, topic).await {
        Ok(joke) => joke_reply(joke, None),
        Err(err) => failure(
            err,
            "failed to fetch joke",
            "Failed to fetch a joke. Please try again.",
        ),
    }
}

/// POST /api/agent-joke
pub(super) async fn agent_joke(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    if let Err(resp) = require_credential(&state) {
        return resp;
    }
    let body = match parse_body(&body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };
    let topic = string_field(&body, "topic");
    if topic.is_empty() {
        return json_error(StatusCode::BAD_REQUEST, TOPIC_REQUIRED);
    }
    let agent_id = match string_field(&body, "agentId") {
        "" => state.default_agent_id.as_deref().unwrap_or(""),
        agent_id => agent_id,
    };
    if agent_id.is_empty() {
        return json_error(StatusCode::BAD_REQUEST, AGENT_ID_REQUIRED);
    }
    let session_id = Some(string_field(&body, "sessionId")).filter(|s| !s.is_empty());

    match jokes::agent_joke(&state.model_client, agent_id, session_id, topic).await
    {
        Ok(joke) => joke_reply(joke, None),
        Err(err) => failure(
            err,
            "comedian agent failed to fetch joke",
            "ComedianBot tripped on the mic cable. Please try again shortly.",
        ),
    }
}

/// POST /api/comedian
pub(super) async fn comedian(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    if let Err(resp) = require_credential(&state) {
        return resp;
    }
    let body = match parse_body(&body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };
    let topic = string_field(&body, "topic");
    if topic.is_empty() {
        return json_error(StatusCode::BAD_REQUEST, TOPIC_REQUIRED);
    }

    let mut comedian = state.comedian.lock().await;
    match comedian.joke_about(topic).await {
        Ok(joke) => joke_reply(joke, comedian.last_topic().map(str::to_owned)),
        Err(err) => failure(
            err,
            "ComedianBot failed to fetch joke",
            "ComedianBot tripped on the mic cable. Please try again shortly.",
        ),
    }
}

/// POST /api/comedian/reset
pub(super) async fn comedian_reset(State(state): State<AppState>) -> Response {
    state.comedian.lock().await.reset();
    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}
