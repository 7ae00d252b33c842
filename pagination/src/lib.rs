pub mod boundary;
pub mod paginator;
pub mod request;

pub use boundary::{resolve_tokens, Lookahead, PageEdge, PageEdges, PageTokens};
pub use paginator::Paginator;
pub use request::PaginatorReq;
