//! Form page, submission intake and the JSON listing

use super::AppState;
use crate::errors::HttpError;
use crate::session;
use crate::views::render_page;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Value};
use shelf_core::submission::FIELD_KIND;
use shelf_core::RawSubmission;

/// `GET /`
pub async fn show_form(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (session, jar) = session::resolve(&state.sessions, jar, &state.config.session_cookie_name);
    let page = render_page(session.log.lock().entries());
    (jar, Html(page))
}

/// `POST /`
///
/// Always answers with the re-rendered page. A rejected submission simply
/// does not show up in the list.
pub async fn submit_resource(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> (CookieJar, Html<String>) {
    let (session, jar) = session::resolve(&state.sessions, jar, &state.config.session_cookie_name);

    // A repeated field keeps its last value, the kind included
    let raw = RawSubmission::from_form(decode_form(&body));
    let kind = raw.text(FIELD_KIND);

    let page = {
        let mut log = session.log.lock();
        let accepted = state.registry.submit(&kind, &raw, &mut log);
        tracing::info!(
            session = %session.id,
            kind = %kind,
            accepted,
            entries = log.len(),
            "submission processed"
        );
        render_page(log.entries())
    };

    (jar, Html(page))
}

/// `GET /api/resources`
pub async fn list_resources(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    let (session, jar) = session::resolve(&state.sessions, jar, &state.config.session_cookie_name);
    let log = session.log.lock().clone();
    let body = json!({
        "resources": log.entries(),
        "count": log.len(),
    });
    (jar, Json(body))
}

/// Fallback for unrouted paths
pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::not_found(uri.path())
}

/// Decode an urlencoded body. Undecodable input counts as an empty form.
fn decode_form(body: &[u8]) -> Vec<(String, String)> {
    serde_urlencoded::from_bytes::<Vec<(String, String)>>(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "undecodable form body");
        Vec::new()
    })
}
