use serde::Deserialize;

/// Page size bounds accepted from clients.
#[derive(Deserialize, Clone, Copy)]
pub struct PaginationConfig {
    min_limit: i32,
    max_limit: i32,
    default_limit: i32,
}

impl PaginationConfig {
    pub fn new(min_limit: &i32, max_limit: &i32, default_limit: &i32) -> Self {
        Self {
            min_limit: *min_limit,
            max_limit: *max_limit,
            default_limit: *default_limit,
        }
    }

    pub fn min_limit(&self) -> &i32 {
        &self.min_limit
    }

    pub fn max_limit(&self) -> &i32 {
        &self.max_limit
    }

    pub fn default_limit(&self) -> &i32 {
        &self.default_limit
    }

    pub fn check(&self) -> Result<(), String> {
        if self.min_limit < 1 {
            return Err(format!(
                "pagination.min_limit must be at least 1, got {}",
                self.min_limit
            ));
        }
        if self.max_limit < self.min_limit {
            return Err(format!(
                "pagination.max_limit ({}) is lower than pagination.min_limit ({})",
                self.max_limit, self.min_limit
            ));
        }
        if !(self.min_limit..=self.max_limit).contains(&self.default_limit) {
            return Err(format!(
                "pagination.default_limit ({}) must be between {} and {}",
                self.default_limit, self.min_limit, self.max_limit
            ));
        }
        Ok(())
    }
}
