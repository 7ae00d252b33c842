use ks_cursor::{decode, Cursor, Direction};
use ks_error::{Error, Result};
use serde::Deserialize;

/// Pagination parameters a client sends back, usually as query parameters.
#[derive(Deserialize, Default, Debug)]
pub struct PaginatorReq {
    next_token: Option<String>,
    prev_token: Option<String>,
    limit: Option<i32>,
}

impl PaginatorReq {
    pub fn new(next_token: &Option<String>, prev_token: &Option<String>, limit: &Option<i32>) -> Self {
        Self {
            next_token: next_token.clone(),
            prev_token: prev_token.clone(),
            limit: *limit,
        }
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn prev_token(&self) -> Option<&str> {
        self.prev_token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn limit_or(&self, default: &i32) -> i32 {
        self.limit.unwrap_or(*default)
    }

    /// Checks the limit bounds and that each supplied token decodes in its
    /// own direction. Supplying both tokens is left to [`Self::direction`].
    pub fn validate(&self, min_limit: &i32, max_limit: &i32) -> Result<()> {
        if let Some(limit) = &self.limit {
            if limit < min_limit || limit > max_limit {
                return Err(Error::InvalidLimit {
                    min: *min_limit,
                    max: *max_limit,
                });
            }
        }

        if let Some(token) = self.next_token() {
            if decode(token, &Direction::Next).is_err() {
                return Err(Error::InvalidToken(
                    "next token cannot be decoded".to_owned(),
                ));
            }
        }

        if let Some(token) = self.prev_token() {
            if decode(token, &Direction::Prev).is_err() {
                return Err(Error::InvalidToken(
                    "prev token cannot be decoded".to_owned(),
                ));
            }
        }

        Ok(())
    }

    /// The cursor governing the query, `None` for an unanchored first page.
    pub fn direction(&self) -> Result<Option<Cursor>> {
        match (self.next_token(), self.prev_token()) {
            (Some(_), Some(_)) => Err(Error::AmbiguousDirection),
            (Some(token), None) => Ok(Some(decode(token, &Direction::Next)?)),
            (None, Some(token)) => Ok(Some(decode(token, &Direction::Prev)?)),
            (None, None) => Ok(None),
        }
    }
}
