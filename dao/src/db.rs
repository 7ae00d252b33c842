use std::sync::atomic::{AtomicI64, Ordering};

use ks_cursor::Direction;
use ks_error::{Error, Result};
use ks_pagination::Lookahead;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{dto::pagination::Pagination, record::RecordDao};

/// In-memory record store kept sorted by the keyset `(serial, id)`.
pub struct Db {
    records: RwLock<Vec<RecordDao>>,
    serial: AtomicI64,
}

impl Db {
    pub fn new() -> Self {
        ks_log::info(Some("⚡"), "[MemoryDb] Initializing component");

        Self {
            records: RwLock::new(Vec::new()),
            serial: AtomicI64::new(0),
        }
    }

    pub(crate) fn next_serial(&self) -> i64 {
        self.serial.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub(crate) async fn insert_record(&self, record: &RecordDao) -> Result<()> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(Error::BadRequest(format!(
                "Record {} already exists",
                record.id()
            )));
        }
        let position = records.partition_point(|r| r.key() < record.key());
        records.insert(position, record.clone());
        Ok(())
    }

    pub(crate) async fn select_record(&self, id: &Uuid) -> Result<RecordDao> {
        match self.records.read().await.iter().find(|r| r.id() == id) {
            Some(record) => Ok(record.clone()),
            None => Err(Error::NotFound(format!("Record {id} is not found"))),
        }
    }

    pub(crate) async fn delete_record(&self, id: &Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id() == id) {
            Some(position) => {
                records.remove(position);
                Ok(())
            }
            None => Err(Error::NotFound(format!("Record {id} is not found"))),
        }
    }

    /// Fetches one page plus a single lookahead row in the travel direction.
    /// The lookahead row is dropped before returning.
    pub(crate) async fn select_many_records(
        &self,
        pagination: &Pagination,
    ) -> Result<(Vec<RecordDao>, Lookahead)> {
        let limit = match usize::try_from(*pagination.limit()) {
            Ok(limit) => limit,
            Err(_) => {
                return Err(Error::BadRequest(format!(
                    "Limit must not be negative, got {}",
                    pagination.limit()
                )))
            }
        };

        let records = self.records.read().await;

        let Some(anchor) = pagination.anchor() else {
            let mut page = records.iter().take(limit + 1).cloned().collect::<Vec<_>>();
            let more_after = page.len() > limit;
            page.truncate(limit);
            return Ok((
                page,
                Lookahead {
                    more_after,
                    more_before: false,
                },
            ));
        };

        match anchor.direction() {
            Direction::Next => {
                let start = records.partition_point(|r| r.key() <= anchor.key());
                let mut page = records[start..]
                    .iter()
                    .take(limit + 1)
                    .cloned()
                    .collect::<Vec<_>>();
                let more_after = page.len() > limit;
                page.truncate(limit);
                Ok((
                    page,
                    Lookahead {
                        more_after,
                        more_before: start > 0,
                    },
                ))
            }
            Direction::Prev => {
                let end = records.partition_point(|r| r.key() < anchor.key());
                let mut page = records[..end]
                    .iter()
                    .rev()
                    .take(limit + 1)
                    .cloned()
                    .collect::<Vec<_>>();
                let more_before = page.len() > limit;
                page.truncate(limit);
                page.reverse();
                Ok((
                    page,
                    Lookahead {
                        more_after: end < records.len(),
                        more_before,
                    },
                ))
            }
        }
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}
