//! Resolution of the user the favorites endpoints act on behalf of.
//!
//! This is a convenience default, not authentication: the id comes straight
//! from the request and no credential is checked.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, extract::Query, http::request::Parts};

pub const USER_ID_QUERY: &str = "user_id";
pub const USER_ID_HEADER: &str = "x-user-id";
pub const DEFAULT_USER_ID: i64 = 1;

type Resolver = fn(&Parts) -> Option<i64>;

/// Checked in order; the first resolver yielding an id wins.
const RESOLVERS: [Resolver; 2] = [from_query, from_header];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser {
    pub user_id: i64,
}

impl ActingUser {
    pub fn resolve(parts: &Parts) -> Self {
        let user_id = RESOLVERS
            .iter()
            .find_map(|resolver| resolver(parts))
            .unwrap_or(DEFAULT_USER_ID);
        Self { user_id }
    }
}

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ActingUser::resolve(parts))
    }
}

// Zero counts as absent. Numbers beyond `i64` saturate: they are still ids,
// just ones that match no row.
fn parse_user_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id = raw.parse::<i64>().unwrap_or(if raw.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    });
    (id != 0).then_some(id)
}

fn from_query(parts: &Parts) -> Option<i64> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == USER_ID_QUERY)
        .and_then(|(_, value)| parse_user_id(&value))
}

fn from_header(parts: &Parts) -> Option<i64> {
    parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_user_id)
}
