use ks_cursor::Cursor;

pub struct Pagination {
    anchor: Option<Cursor>,
    limit: i32,
}

impl Pagination {
    pub fn new(anchor: &Option<Cursor>, limit: &i32) -> Self {
        Self {
            anchor: *anchor,
            limit: *limit,
        }
    }

    pub fn anchor(&self) -> &Option<Cursor> {
        &self.anchor
    }

    pub fn limit(&self) -> &i32 {
        &self.limit
    }
}
