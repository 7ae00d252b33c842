use ks_cursor::{Cursor, Direction};
use uuid::Uuid;

/// Sort key of a row at the edge of a rendered page.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PageEdge {
    id: Uuid,
    serial: i64,
}

impl PageEdge {
    pub fn new(id: &Uuid, serial: &i64) -> Self {
        Self {
            id: *id,
            serial: *serial,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn serial(&self) -> &i64 {
        &self.serial
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PageEdges {
    first: PageEdge,
    last: PageEdge,
}

impl PageEdges {
    pub fn new(first: &PageEdge, last: &PageEdge) -> Self {
        Self {
            first: *first,
            last: *last,
        }
    }

    /// Edges of an ordered page, `None` when the page is empty.
    pub fn from_rows<T>(rows: &[T], edge: impl Fn(&T) -> PageEdge) -> Option<Self> {
        match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => Some(Self::new(&edge(first), &edge(last))),
            _ => None,
        }
    }

    pub fn first(&self) -> &PageEdge {
        &self.first
    }

    pub fn last(&self) -> &PageEdge {
        &self.last
    }
}

/// Outcome of the `limit + 1` lookahead queries run by the data layer.
///
/// Fields are public so call sites name them and cannot swap the two flags.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct Lookahead {
    /// At least one row exists past the last row of the page.
    pub more_after: bool,
    /// At least one row exists before the first row of the page.
    pub more_before: bool,
}

/// Tokens for the adjacent pages. An empty string means there is no such page.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct PageTokens {
    next: String,
    prev: String,
}

impl PageTokens {
    pub fn next(&self) -> &str {
        &self.next
    }

    pub fn prev(&self) -> &str {
        &self.prev
    }
}

/// Decides which adjacent-page tokens to emit for a freshly fetched page.
///
/// `direction_used` is how this page was reached, `None` for the initial
/// unanchored load. A page reached by following `Next` always has the page
/// it came from behind it, so its `prev` token skips the lookahead check.
/// The same holds for `next` on a page reached by following `Prev`.
pub fn resolve_tokens(
    size: &usize,
    edges: &Option<PageEdges>,
    direction_used: &Option<Direction>,
    lookahead: &Lookahead,
) -> PageTokens {
    let edges = match edges {
        Some(edges) if *size > 0 => edges,
        _ => return PageTokens::default(),
    };

    let next = if *direction_used == Some(Direction::Prev) || lookahead.more_after {
        Cursor::new(edges.last().id(), edges.last().serial(), &Direction::Next).to_token()
    } else {
        String::new()
    };

    let prev = if *direction_used == Some(Direction::Next) || lookahead.more_before {
        Cursor::new(edges.first().id(), edges.first().serial(), &Direction::Prev).to_token()
    } else {
        String::new()
    };

    PageTokens { next, prev }
}
