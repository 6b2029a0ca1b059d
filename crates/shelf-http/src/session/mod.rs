//! Cookie-identified sessions, each owning one [`SessionLog`].
//!
//! [`SessionLog`]: shelf_core::SessionLog

pub mod store;

pub use store::{Session, SessionId, SessionStore};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Resolve the session named by the request cookie, starting a new one if
/// the cookie is missing or names nothing we know.
///
/// The returned jar carries a `Set-Cookie` only for new sessions.
pub fn resolve(store: &SessionStore, jar: CookieJar, cookie_name: &str) -> (Session, CookieJar) {
    let known = jar
        .get(cookie_name)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok())
        .and_then(|id| store.get(id));

    match known {
        Some(session) => (session, jar),
        None => {
            let session = store.create();
            let cookie = Cookie::build((cookie_name.to_string(), session.id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            (session, jar.add(cookie))
        }
    }
}
