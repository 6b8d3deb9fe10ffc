//! Reads the session identity the auth service leaves in the browser's cookies.
//!
//! Two cookies carry the same record in different shapes:
//!
//! * `sessionId` holds a JSON string literal whose contents are the JSON
//!   record, so it has to be decoded twice. See [decode_json_session].
//! * `session` holds the three fields comma-joined and wrapped in a pair of
//!   brackets, e.g. `[abc123,player7,alice]`. See [decode_delimited_session].
//!
//! Neither decoder ever writes to the cookie source. A missing or empty cookie
//! is not an error, both decoders just report that there is no session.
//! ```
//! # use hexchess_view::session::{decode_delimited_session, CookieJar};
//! let jar = CookieJar::parse("session=[abc123,player7,alice]");
//! let session = decode_delimited_session(&jar).unwrap();
//! assert_eq!("alice", session.username.unwrap());
//! ```

mod cookie_jar;
mod writer;

use crate::wire_representation::Session;
use percent_encoding::percent_decode_str;
use std::error::Error;
use std::fmt;
use std::str::Utf8Error;
use tracing::warn;

pub use cookie_jar::{CookieJar, CookieSource};
pub use writer::{
    create_session_id, delimited_cookie, expired_cookie, json_cookie, SameSite,
    SessionCookieConfig, SESSION_ID_LENGTH,
};

/// name of the cookie holding the double encoded JSON record
pub const JSON_COOKIE_NAME: &str = "sessionId";

/// name of the cookie holding the bracketed, comma-joined record
pub const DELIMITED_COOKIE_NAME: &str = "session";

/// Which of the two JSON decoding steps failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStage {
    /// the cookie value wasn't a JSON string literal
    Literal,
    /// the contents of the literal weren't a session record
    Record,
}

/// Errors from decoding the `sessionId` cookie
#[derive(Debug)]
pub enum SessionError {
    /// the percent-decoded cookie value isn't valid utf-8
    Encoding(Utf8Error),
    /// one of the two JSON decoding steps failed
    Json {
        /// which step failed
        stage: JsonStage,
        /// what serde_json had to say about it
        source: serde_json::Error,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Encoding(_) => write!(f, "session cookie is not valid utf-8"),
            SessionError::Json {
                stage: JsonStage::Literal,
                ..
            } => write!(f, "session cookie is not a JSON string literal"),
            SessionError::Json {
                stage: JsonStage::Record,
                ..
            } => write!(f, "session cookie does not contain a session record"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SessionError::Encoding(e) => Some(e),
            SessionError::Json { source, .. } => Some(source),
        }
    }
}

/// Decodes the session record out of the `sessionId` cookie.
///
/// Returns `Ok(None)` if the cookie is missing or empty. The value is
/// percent-decoded, then parsed as a JSON string literal, then the contents of
/// that literal are parsed as the record. A failure in either JSON step is
/// returned, not swallowed.
///
/// Because of the percent-decoding, a value that was stored without encoding
/// must not contain `%XX` sequences: a raw username of `100%41` reads back as
/// `100A`. Values written by [json_cookie] are always encoded and round-trip.
pub fn decode_json_session<S: CookieSource + ?Sized>(
    source: &S,
) -> Result<Option<Session>, SessionError> {
    let value = match source.cookie(JSON_COOKIE_NAME) {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(None),
    };

    let value = percent_decode_str(value)
        .decode_utf8()
        .map_err(SessionError::Encoding)?;

    let record: String = serde_json::from_str(&value).map_err(|source| SessionError::Json {
        stage: JsonStage::Literal,
        source,
    })?;

    let session: Session = serde_json::from_str(&record).map_err(|source| SessionError::Json {
        stage: JsonStage::Record,
        source,
    })?;

    Ok(Some(session))
}

/// A session record read from the `session` cookie.
///
/// The cookie may hold fewer than three fields, in which case the trailing
/// ones are None. Use [DelimitedSession::into_session] to get a full record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelimitedSession {
    #[allow(missing_docs)]
    pub session_id: String,
    #[allow(missing_docs)]
    pub player_id: Option<String>,
    #[allow(missing_docs)]
    pub username: Option<String>,
}

impl DelimitedSession {
    /// true when all three fields were present
    pub fn is_complete(&self) -> bool {
        self.player_id.is_some() && self.username.is_some()
    }

    /// the full record, or None if any field was missing
    pub fn into_session(self) -> Option<Session> {
        Some(Session {
            session_id: self.session_id,
            player_id: self.player_id?,
            username: self.username?,
        })
    }
}

/// Decodes the session record out of the `session` cookie.
///
/// Returns None if the cookie is missing or empty. One wrapping character is
/// dropped from each end and the rest is split on commas. If that yields fewer
/// than three fields a warning is logged and the fields that are there are
/// still returned. Fields past the third are ignored.
pub fn decode_delimited_session<S: CookieSource + ?Sized>(source: &S) -> Option<DelimitedSession> {
    let value = match source.cookie(DELIMITED_COOKIE_NAME) {
        Some(value) if !value.is_empty() => value,
        _ => return None,
    };

    let mut unwrapped = value.chars();
    unwrapped.next();
    unwrapped.next_back();

    let fields = unwrapped.as_str().split(',').collect::<Vec<_>>();
    if fields.len() < 3 {
        warn!(
            fields = fields.len(),
            "session cookie has fewer than 3 fields: {}", value
        );
    }

    let mut fields = fields.into_iter().map(str::to_string);
    Some(DelimitedSession {
        // split always yields at least one piece
        session_id: fields.next().unwrap_or_default(),
        player_id: fields.next(),
        username: fields.next(),
    })
}
