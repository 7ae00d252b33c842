use chrono::{DateTime, Utc};
use ks_dao::record::RecordDao;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct InsertOneRecordReqJson {
    #[validate(length(min = 1, max = 255))]
    name: String,
}

impl InsertOneRecordReqJson {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize)]
pub struct FindOneRecordReqPath {
    record_id: Uuid,
}

impl FindOneRecordReqPath {
    pub fn record_id(&self) -> &Uuid {
        &self.record_id
    }
}

#[derive(Deserialize)]
pub struct DeleteOneRecordReqPath {
    record_id: Uuid,
}

impl DeleteOneRecordReqPath {
    pub fn record_id(&self) -> &Uuid {
        &self.record_id
    }
}

#[derive(Serialize)]
pub struct RecordResJson {
    id: Uuid,
    serial: i64,
    created_at: DateTime<Utc>,
    name: String,
}

impl RecordResJson {
    pub fn new(id: &Uuid, serial: &i64, created_at: &DateTime<Utc>, name: &str) -> Self {
        Self {
            id: *id,
            serial: *serial,
            created_at: *created_at,
            name: name.to_owned(),
        }
    }

    pub fn from_dao(record: &RecordDao) -> Self {
        Self::new(
            record.id(),
            record.serial(),
            record.created_at(),
            record.name(),
        )
    }
}

#[derive(Serialize)]
pub struct DeleteRecordResJson {
    id: Uuid,
}

impl DeleteRecordResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
