use std::sync::Arc;

use ks_config::pagination::PaginationConfig;
use ks_dao::Db;

pub struct ApiRestCtx {
    dao: ApiRestDaoCtx,
    pagination: PaginationConfig,
}

impl ApiRestCtx {
    pub fn new(dao: ApiRestDaoCtx, pagination: PaginationConfig) -> Self {
        Self { dao, pagination }
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }

    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }
}

pub struct ApiRestDaoCtx {
    db: Arc<Db>,
}

impl ApiRestDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}
