//! Browser session identification for the session-scoped history
//!
//! A `sid` cookie carries a UUID; requests without one get a fresh id and
//! a `Set-Cookie` on the response. The id only keys the in-process
//! history map, so it is not signed.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, COOKIE, SET_COOKIE};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "sid";

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub is_new: bool,
}

impl Session {
    /// `Set-Cookie` header for newly minted sessions; `None` when the
    /// request already carried one.
    pub fn set_cookie(&self) -> Option<(HeaderName, HeaderValue)> {
        if !self.is_new {
            return None;
        }

        let value = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, self.id);
        HeaderValue::try_from(value).ok().map(|v| (SET_COOKIE, v))
    }
}

/// Read the session id from the request's cookies, minting one if absent.
pub fn extract_session(headers: &HeaderMap) -> Session {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };

        for pair in raw.split(';') {
            if let Some((name, value)) = pair.split_once('=') {
                if name.trim() == SESSION_COOKIE && !value.trim().is_empty() {
                    return Session {
                        id: value.trim().to_string(),
                        is_new: false,
                    };
                }
            }
        }
    }

    Session {
        id: Uuid::new_v4().to_string(),
        is_new: true,
    }
}
