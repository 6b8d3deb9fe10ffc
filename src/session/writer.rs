//! The server side of the session cookies: builds the `Set-Cookie` values the
//! decoders in this module read back.
use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rand::Rng;
use std::fmt;
use std::time::Duration;

use super::{DELIMITED_COOKIE_NAME, JSON_COOKIE_NAME};
use crate::wire_representation::Session;

/// number of characters in a generated session id
pub const SESSION_ID_LENGTH: usize = 100;

const SESSION_ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// generates a new random alphanumeric session id
pub fn create_session_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SESSION_ID_LENGTH)
        .map(|_| SESSION_ID_CHARS[rng.gen_range(0..SESSION_ID_CHARS.len())] as char)
        .collect()
}

/// The `SameSite` attribute of a cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SameSite {
    #[allow(missing_docs)]
    Strict,
    #[allow(missing_docs)]
    Lax,
    #[allow(missing_docs)]
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// Attributes attached to every session cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookieConfig {
    /// `Domain` attribute, left off when None
    pub domain: Option<String>,
    /// how long the browser keeps the cookie
    pub max_age: Duration,
    #[allow(missing_docs)]
    pub secure: bool,
    #[allow(missing_docs)]
    pub same_site: SameSite,
    /// page scripts can't read http-only cookies, so the delimited cookie never sets it
    pub http_only: bool,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            domain: Some("localhost".to_string()),
            max_age: Duration::from_secs(6 * 60 * 60),
            secure: true,
            same_site: SameSite::Strict,
            http_only: false,
        }
    }
}

fn set_cookie(
    name: &str,
    value: &str,
    max_age: Duration,
    http_only: bool,
    config: &SessionCookieConfig,
) -> String {
    let mut attributes = vec![format!("{}={}", name, value)];
    if let Some(domain) = &config.domain {
        attributes.push(format!("Domain={}", domain));
    }
    attributes.push(format!("Max-Age={}", max_age.as_secs()));
    if config.secure {
        attributes.push("Secure".to_string());
    }
    if http_only {
        attributes.push("HttpOnly".to_string());
    }
    attributes.push(format!("SameSite={}", config.same_site));
    attributes.iter().join("; ")
}

/// `Set-Cookie` value for the `session` cookie, e.g. `session=[abc,p7,alice]; ...`
pub fn delimited_cookie(session: &Session, config: &SessionCookieConfig) -> String {
    let value = format!(
        "[{}]",
        [&session.session_id, &session.player_id, &session.username]
            .iter()
            .join(",")
    );
    set_cookie(DELIMITED_COOKIE_NAME, &value, config.max_age, false, config)
}

/// `Set-Cookie` value for the `sessionId` cookie.
///
/// The record is serialized to JSON, that JSON text is serialized again as a
/// string literal, and the literal is percent-encoded to be a legal cookie value.
pub fn json_cookie(
    session: &Session,
    config: &SessionCookieConfig,
) -> Result<String, serde_json::Error> {
    let record = serde_json::to_string(session)?;
    let literal = serde_json::to_string(&record)?;
    let value = utf8_percent_encode(&literal, NON_ALPHANUMERIC).to_string();
    Ok(set_cookie(
        JSON_COOKIE_NAME,
        &value,
        config.max_age,
        config.http_only,
        config,
    ))
}

/// `Set-Cookie` value that makes the browser drop the named cookie right away
pub fn expired_cookie(name: &str, config: &SessionCookieConfig) -> String {
    set_cookie(name, "", Duration::from_secs(1), config.http_only, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{decode_delimited_session, decode_json_session, CookieJar};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_session_ids() {
        let mut rng = SmallRng::seed_from_u64(7);
        let a = create_session_id(&mut rng);
        let b = create_session_id(&mut rng);
        assert_eq!(SESSION_ID_LENGTH, a.len());
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);

        let mut same = SmallRng::seed_from_u64(7);
        assert_eq!(a, create_session_id(&mut same));
    }

    #[test]
    fn test_delimited_cookie() {
        let session = Session::new("abc123", "player7", "alice");
        let header = delimited_cookie(&session, &SessionCookieConfig::default());
        assert_eq!(
            "session=[abc123,player7,alice]; Domain=localhost; Max-Age=21600; Secure; SameSite=Strict",
            header
        );

        let decoded = decode_delimited_session(&CookieJar::parse(&header)).unwrap();
        assert_eq!(Some(session), decoded.into_session());
    }

    #[test]
    fn test_json_cookie() {
        let session = Session::new("s1", "p1", "u1");
        let config = SessionCookieConfig {
            domain: None,
            http_only: true,
            ..Default::default()
        };
        let header = json_cookie(&session, &config).unwrap();
        assert!(header.starts_with("sessionId=%22%7B%5C%22sessionId%5C%22%3A%5C%22s1"));
        assert!(header.ends_with("; Max-Age=21600; Secure; HttpOnly; SameSite=Strict"));
        assert!(!header.contains("Domain"));

        let decoded = decode_json_session(&CookieJar::parse(&header)).unwrap();
        assert_eq!(Some(session), decoded);
    }

    #[test]
    fn test_expired_cookie() {
        let config = SessionCookieConfig {
            same_site: SameSite::Lax,
            secure: false,
            ..Default::default()
        };
        let header = expired_cookie(DELIMITED_COOKIE_NAME, &config);
        assert_eq!("session=; Domain=localhost; Max-Age=1; SameSite=Lax", header);
        assert_eq!(None, decode_delimited_session(&CookieJar::parse(&header)));
    }
}
