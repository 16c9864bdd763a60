use std::marker::PhantomData;

use sqlx::{
    FromRow, SqlitePool,
    query::Query,
    sqlite::{Sqlite, SqliteArguments, SqliteRow},
};

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A stored record the generic gateway knows how to persist.
///
/// `COLUMNS` lists every column except `id` (the rowid, assigned by the
/// store). `bind_columns` must bind the record's values in `COLUMNS` order.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// Generic persistence gateway, instantiated per entity table.
///
/// Existence checks are folded into the mutating statements themselves
/// (rows-affected), so update/delete never race a concurrent delete of the
/// same id.
pub struct Repo<T> {
    pool: SqlitePool,
    _entity: PhantomData<T>,
}

impl<T: Entity> Repo<T> {
    pub fn new(pool: &SqlitePool) -> Self {
        Self {
            pool: pool.clone(),
            _entity: PhantomData,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<T>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
        sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<T>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns the id assigned to the new record.
    pub async fn insert(&self, entity: &T) -> Result<i64, sqlx::Error> {
        let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders
        );
        let result = entity
            .bind_columns(sqlx::query(&sql))
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Full overwrite of every column. Returns false when no record has `id`.
    pub async fn update(&self, id: i64, entity: &T) -> Result<bool, sqlx::Error> {
        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", T::TABLE, assignments);
        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no record has `id`.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, sqlx::Error> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", T::TABLE);
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::Attendance;
    use crate::model::notification::Notification;
    use crate::test_helpers::test_pool;
    use chrono::NaiveDate;

    #[actix_web::test]
    async fn insert_get_update_delete_roundtrip() {
        let pool = test_pool().await;
        let repo = Repo::<Notification>::new(&pool);

        let id = repo
            .insert(&Notification {
                id: 0,
                title: Some("Maintenance window".into()),
                message: Some("System down Saturday".into()),
                date: Some("2026-08-08".into()),
                target_role: Some("ALL".into()),
            })
            .await
            .unwrap();
        assert!(id > 0);
        assert!(repo.exists(id).await.unwrap());

        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.title.as_deref(), Some("Maintenance window"));

        let overwritten = Notification {
            id,
            title: Some("Maintenance moved".into()),
            message: None,
            date: Some("2026-08-09".into()),
            target_role: Some("EMPLOYEE".into()),
        };
        assert!(repo.update(id, &overwritten).await.unwrap());

        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.title.as_deref(), Some("Maintenance moved"));
        // full overwrite: the omitted message is now gone
        assert_eq!(stored.message, None);

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.exists(id).await.unwrap());
    }

    #[actix_web::test]
    async fn mutations_on_missing_id_report_absence() {
        let pool = test_pool().await;
        let repo = Repo::<Attendance>::new(&pool);

        let absent = Attendance {
            id: 999,
            employee_id: Some(1),
            date: NaiveDate::from_ymd_opt(2026, 8, 7),
            status: Some("Present".into()),
        };
        assert!(!repo.update(999, &absent).await.unwrap());
        assert!(!repo.delete(999).await.unwrap());
        assert!(!repo.exists(999).await.unwrap());
        assert!(repo.get(999).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn list_all_returns_records_in_id_order() {
        let pool = test_pool().await;
        let repo = Repo::<Attendance>::new(&pool);

        for day in 1..=3 {
            repo.insert(&Attendance {
                id: 0,
                employee_id: Some(7),
                date: NaiveDate::from_ymd_opt(2026, 8, day),
                status: Some("Present".into()),
            })
            .await
            .unwrap();
        }

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
    }
}
