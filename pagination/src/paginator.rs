use ks_cursor::Direction;
use ks_error::{Error, Result};
use serde::Serialize;

use crate::boundary::{resolve_tokens, Lookahead, PageEdges};

/// Pagination block returned alongside a page of rows.
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct Paginator {
    next_token: String,
    next_page: String,
    prev_token: String,
    prev_page: String,
    size: usize,
    limit: i32,
}

impl Paginator {
    pub fn new(
        size: &usize,
        limit: &i32,
        edges: &Option<PageEdges>,
        direction_used: &Option<Direction>,
        lookahead: &Lookahead,
    ) -> Self {
        let tokens = resolve_tokens(size, edges, direction_used, lookahead);

        Self {
            next_token: tokens.next().to_owned(),
            next_page: String::new(),
            prev_token: tokens.prev().to_owned(),
            prev_page: String::new(),
            size: *size,
            limit: *limit,
        }
    }

    /// Fills `next_page` and `prev_page` from the tokens already computed.
    pub fn with_pages(mut self, base_url: &str) -> Result<Self> {
        self.next_page = page_url(base_url, &Direction::Next, &self.next_token, &self.limit)?;
        self.prev_page = page_url(base_url, &Direction::Prev, &self.prev_token, &self.limit)?;
        Ok(self)
    }

    pub fn next_token(&self) -> &str {
        &self.next_token
    }

    pub fn next_page(&self) -> &str {
        &self.next_page
    }

    pub fn prev_token(&self) -> &str {
        &self.prev_token
    }

    pub fn prev_page(&self) -> &str {
        &self.prev_page
    }

    pub fn size(&self) -> &usize {
        &self.size
    }

    pub fn limit(&self) -> &i32 {
        &self.limit
    }
}

#[derive(Serialize)]
struct PageQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prev_token: Option<&'a str>,
    limit: i32,
}

fn page_url(base_url: &str, direction: &Direction, token: &str, limit: &i32) -> Result<String> {
    if token.is_empty() {
        return Ok(String::new());
    }

    let query = PageQuery {
        next_token: (*direction == Direction::Next).then_some(token),
        prev_token: (*direction == Direction::Prev).then_some(token),
        limit: *limit,
    };

    match serde_urlencoded::to_string(&query) {
        Ok(query) => Ok(format!("{base_url}?{query}")),
        Err(err) => Err(Error::InternalServerError(err.to_string())),
    }
}
