use async_trait::async_trait;
use sqlx::{QueryBuilder, Row, Sqlite};

use crate::db::Db;
use crate::models::user::{NewUser, User};

/// Narrow capability set over the persistent user table. Handlers and the
/// seeder depend on this trait, not on the pool directly.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<User>, sqlx::Error>;
    async fn insert_many(&self, rows: &[NewUser]) -> Result<u64, sqlx::Error>;
    async fn delete_all(&self) -> Result<u64, sqlx::Error>;
}

pub struct SqliteUserStore {
    db: Db,
}

impl SqliteUserStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    // Plain scan, no ORDER BY: the contract makes no ordering guarantee.
    async fn fetch_all(&self) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, created_at, updated_at FROM users",
        )
        .fetch_all(&self.db.0)
        .await?;
        let users = rows
            .into_iter()
            .map(|r| User {
                id: r.get("id"),
                first_name: r.get("first_name"),
                last_name: r.get("last_name"),
                email: r.get("email"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
            .collect();
        Ok(users)
    }

    async fn insert_many(&self, rows: &[NewUser]) -> Result<u64, sqlx::Error> {
        if rows.is_empty() {
            return Ok(0);
        }
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            "INSERT INTO users (first_name, last_name, email, created_at, updated_at) ",
        );
        qb.push_values(rows, |mut b, u| {
            b.push_bind(&u.first_name)
                .push_bind(&u.last_name)
                .push_bind(&u.email)
                .push_bind(u.created_at)
                .push_bind(u.updated_at);
        });
        let done = qb.build().execute(&self.db.0).await?;
        Ok(done.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, sqlx::Error> {
        let done = sqlx::query("DELETE FROM users").execute(&self.db.0).await?;
        Ok(done.rows_affected())
    }
}
