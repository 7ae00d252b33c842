use chrono::{DateTime, Utc};
use ks_error::Result;
use ks_pagination::{Lookahead, PageEdge};
use uuid::Uuid;

use crate::{dto::pagination::Pagination, Db};

#[derive(Clone, Debug)]
pub struct RecordDao {
    id: Uuid,
    serial: i64,
    created_at: DateTime<Utc>,
    name: String,
}

impl RecordDao {
    pub fn new(db: &Db, name: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            serial: db.next_serial(),
            created_at: Utc::now(),
            name: name.to_owned(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn serial(&self) -> &i64 {
        &self.serial
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> (i64, Uuid) {
        (self.serial, self.id)
    }

    pub fn page_edge(&self) -> PageEdge {
        PageEdge::new(&self.id, &self.serial)
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        db.insert_record(self).await
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        db.select_record(id).await
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        db.delete_record(id).await
    }

    pub async fn db_select_many(db: &Db, pagination: &Pagination) -> Result<(Vec<Self>, Lookahead)> {
        db.select_many_records(pagination).await
    }
}

#[cfg(test)]
mod tests {
    use futures::future;
    use ks_cursor::{Cursor, Direction};
    use ks_error::Error;
    use ks_pagination::{PageEdges, Paginator, PaginatorReq};
    use pretty_assertions::assert_eq;

    use super::*;

    async fn seed(db: &Db, count: usize) -> Vec<RecordDao> {
        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            let record = RecordDao::new(db, &format!("record-{i}"));
            record.db_insert(db).await.unwrap();
            records.push(record);
        }
        records
    }

    fn serials(records: &[RecordDao]) -> Vec<i64> {
        records.iter().map(|r| *r.serial()).collect()
    }

    async fn fetch(db: &Db, req: &PaginatorReq, limit: &i32) -> (Vec<RecordDao>, Paginator) {
        req.validate(&1, &100).unwrap();
        let anchor = req.direction().unwrap();
        let (records, lookahead) = RecordDao::db_select_many(db, &Pagination::new(&anchor, limit))
            .await
            .unwrap();
        let edges = PageEdges::from_rows(&records, RecordDao::page_edge);
        let paginator = Paginator::new(
            &records.len(),
            limit,
            &edges,
            &anchor.map(|cursor| *cursor.direction()),
            &lookahead,
        );
        (records, paginator)
    }

    #[tokio::test]
    async fn serials_are_monotonic() {
        let db = Db::new();
        let records = seed(&db, 5).await;
        assert_eq!(serials(&records), vec![1, 2, 3, 4, 5]);

        let (page, _) = RecordDao::db_select_many(&db, &Pagination::new(&None, &10))
            .await
            .unwrap();
        assert_eq!(serials(&page), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn concurrent_inserts_stay_ordered() {
        let db = Db::new();
        let records = (0..50)
            .map(|i| RecordDao::new(&db, &format!("record-{i}")))
            .collect::<Vec<_>>();
        future::try_join_all(records.iter().rev().map(|r| r.db_insert(&db)))
            .await
            .unwrap();

        let (page, _) = RecordDao::db_select_many(&db, &Pagination::new(&None, &50))
            .await
            .unwrap();
        assert_eq!(serials(&page), (1..=50).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn select_and_delete_by_id() {
        let db = Db::new();
        let records = seed(&db, 2).await;

        let found = RecordDao::db_select(&db, records[1].id()).await.unwrap();
        assert_eq!(found.name(), "record-1");

        RecordDao::db_delete(&db, records[1].id()).await.unwrap();
        assert!(matches!(
            RecordDao::db_select(&db, records[1].id()).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            RecordDao::db_delete(&db, records[1].id()).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let db = Db::new();
        let record = RecordDao::new(&db, "once");
        record.db_insert(&db).await.unwrap();
        assert!(matches!(
            record.db_insert(&db).await,
            Err(Error::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn initial_page_lookahead() {
        let db = Db::new();
        seed(&db, 12).await;

        let (page, lookahead) = RecordDao::db_select_many(&db, &Pagination::new(&None, &10))
            .await
            .unwrap();
        assert_eq!(serials(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(
            lookahead,
            Lookahead {
                more_after: true,
                more_before: false,
            }
        );

        let (page, lookahead) = RecordDao::db_select_many(&db, &Pagination::new(&None, &12))
            .await
            .unwrap();
        assert_eq!(page.len(), 12);
        assert_eq!(lookahead, Lookahead::default());
    }

    #[tokio::test]
    async fn negative_limit_is_rejected() {
        let db = Db::new();
        assert!(matches!(
            RecordDao::db_select_many(&db, &Pagination::new(&None, &-1)).await,
            Err(Error::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn walks_forward_and_back_with_tokens() {
        let db = Db::new();
        seed(&db, 25).await;

        let (page, paginator) = fetch(&db, &PaginatorReq::default(), &10).await;
        assert_eq!(serials(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginator.prev_token(), "");

        let req = PaginatorReq::new(&Some(paginator.next_token().to_owned()), &None, &Some(10));
        let (page, paginator) = fetch(&db, &req, &10).await;
        assert_eq!(serials(&page), (11..=20).collect::<Vec<_>>());

        let req = PaginatorReq::new(&Some(paginator.next_token().to_owned()), &None, &Some(10));
        let (page, last) = fetch(&db, &req, &10).await;
        assert_eq!(serials(&page), (21..=25).collect::<Vec<_>>());
        assert_eq!(last.next_token(), "");
        assert_ne!(last.prev_token(), "");
        assert_eq!(*last.size(), 5);

        let req = PaginatorReq::new(&None, &Some(last.prev_token().to_owned()), &Some(10));
        let (page, paginator) = fetch(&db, &req, &10).await;
        assert_eq!(serials(&page), (11..=20).collect::<Vec<_>>());
        assert_ne!(paginator.next_token(), "");

        let req = PaginatorReq::new(&None, &Some(paginator.prev_token().to_owned()), &Some(10));
        let (page, first) = fetch(&db, &req, &10).await;
        assert_eq!(serials(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(first.prev_token(), "");
        assert_ne!(first.next_token(), "");
    }

    #[tokio::test]
    async fn deleted_anchor_still_resolves() {
        let db = Db::new();
        let records = seed(&db, 6).await;

        let anchor = Cursor::new(records[2].id(), records[2].serial(), &Direction::Next);
        RecordDao::db_delete(&db, records[2].id()).await.unwrap();

        let (page, lookahead) =
            RecordDao::db_select_many(&db, &Pagination::new(&Some(anchor), &2))
                .await
                .unwrap();
        assert_eq!(serials(&page), vec![4, 5]);
        assert_eq!(
            lookahead,
            Lookahead {
                more_after: true,
                more_before: true,
            }
        );
    }

    #[tokio::test]
    async fn empty_store_yields_empty_page() {
        let db = Db::new();
        let (page, paginator) = fetch(&db, &PaginatorReq::default(), &10).await;
        assert!(page.is_empty());
        assert_eq!(paginator.next_token(), "");
        assert_eq!(paginator.prev_token(), "");
    }
}
