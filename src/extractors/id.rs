//! Extract the `:id` path segment as an integer.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Stand-in for an id segment that is missing or not an integer.
pub const INVALID_ID: i64 = -1;

/// Path id. Never rejects: unparseable input becomes [`INVALID_ID`] so handlers answer "Invalid ID" themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl ResourceId {
    pub fn parse(segment: &str) -> Self {
        ResourceId(segment.trim().parse().unwrap_or(INVALID_ID))
    }

    /// Positive ids only.
    pub fn valid(self) -> Option<i64> {
        (self.0 > 0).then_some(self.0)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => ResourceId::parse(&segment),
            Err(_) => ResourceId(INVALID_ID),
        };
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(ResourceId::parse("42"), ResourceId(42));
        assert_eq!(ResourceId::parse("42").valid(), Some(42));
    }

    #[test]
    fn non_numeric_becomes_sentinel() {
        assert_eq!(ResourceId::parse("abc"), ResourceId(INVALID_ID));
        assert_eq!(ResourceId::parse(""), ResourceId(INVALID_ID));
        assert_eq!(ResourceId::parse("1.5"), ResourceId(INVALID_ID));
    }

    #[test]
    fn zero_and_negative_are_not_valid() {
        assert_eq!(ResourceId::parse("0").valid(), None);
        assert_eq!(ResourceId::parse("-7").valid(), None);
    }
}
