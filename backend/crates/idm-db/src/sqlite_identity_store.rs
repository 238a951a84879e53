use crate::{DbError, Result as DbErrorResult};

use idm_core::{CoreError, Identity, IdentityStore, Owner, Result as CoreErrorResult};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow, SqliteSynchronous,
};
use sqlx::{Row, SqlitePool};

const SELECT_COLUMNS: &str =
    "SELECT owner, name, email, profile_image, registered_at, updated_at FROM identities";

/// SQLite-backed identity store
pub struct SqliteIdentityStore {
    pub(crate) pool: SqlitePool,
}

impl SqliteIdentityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file and run migrations.
    pub async fn connect(path: &Path) -> DbErrorResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(Duration::from_secs(5)),
            )
            .await?;

        Self::migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Private in-memory database, mainly for tests.
    pub async fn in_memory() -> DbErrorResult<Self> {
        // In-memory databases are per connection
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(SqliteConnectOptions::new().filename(":memory:"))
            .await?;

        Self::migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
        sqlx::migrate!("./migrations").run(pool).await?;
        Ok(())
    }

    /// Flush the WAL into the main database file.
    pub async fn checkpoint(&self) -> DbErrorResult<()> {
        sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn find_row(&self, owner: &Owner) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE owner = ?"))
            .bind(owner.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::identity_from_row(&r)).transpose()
    }

    /// Returns false when the owner already has a row.
    async fn insert_row(&self, identity: &Identity) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              INSERT INTO identities (
                  owner, name, email, profile_image, registered_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(identity.owner.as_str())
        .bind(&identity.name)
        .bind(&identity.email)
        .bind(identity.profile_image.as_deref())
        .bind(identity.registered_at.timestamp())
        .bind(identity.updated_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn update_row(&self, identity: &Identity) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              UPDATE identities
              SET name = ?, email = ?, profile_image = ?, updated_at = ?
              WHERE owner = ?
              "#,
        )
        .bind(&identity.name)
        .bind(&identity.email)
        .bind(identity.profile_image.as_deref())
        .bind(identity.updated_at.timestamp())
        .bind(identity.owner.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_row(&self, owner: &Owner) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM identities WHERE owner = ?")
            .bind(owner.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn owner_rows(&self) -> DbErrorResult<Vec<Owner>> {
        let rows = sqlx::query("SELECT owner FROM identities ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| {
                let owner: String = r.try_get("owner")?;
                Self::parse_owner(&owner)
            })
            .collect()
    }

    async fn identity_rows(&self) -> DbErrorResult<Vec<Identity>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY seq"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::identity_from_row).collect()
    }

    async fn count_rows(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identities")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    fn identity_from_row(row: &SqliteRow) -> DbErrorResult<Identity> {
        let owner: String = row.try_get("owner")?;

        Ok(Identity {
            owner: Self::parse_owner(&owner)?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            profile_image: row.try_get("profile_image")?,
            registered_at: Self::timestamp(row.try_get("registered_at")?)?,
            updated_at: Self::timestamp(row.try_get("updated_at")?)?,
        })
    }

    #[track_caller]
    fn parse_owner(value: &str) -> DbErrorResult<Owner> {
        Owner::parse(value).map_err(|e| DbError::InvalidRow {
            message: format!("owner {value:?}: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn timestamp(seconds: i64) -> DbErrorResult<DateTime<Utc>> {
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::InvalidRow {
            message: format!("timestamp out of range: {seconds}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl IdentityStore for SqliteIdentityStore {
    async fn find(&self, owner: &Owner) -> CoreErrorResult<Option<Identity>> {
        Ok(self.find_row(owner).await?)
    }

    async fn insert(&self, identity: &Identity) -> CoreErrorResult<()> {
        if !self.insert_row(identity).await? {
            return Err(CoreError::already_registered(&identity.owner));
        }
        Ok(())
    }

    async fn replace(&self, identity: &Identity) -> CoreErrorResult<()> {
        if self.update_row(identity).await? == 0 {
            return Err(CoreError::not_registered(&identity.owner));
        }
        Ok(())
    }

    async fn remove(&self, owner: &Owner) -> CoreErrorResult<()> {
        if self.delete_row(owner).await? == 0 {
            return Err(CoreError::not_registered(owner));
        }
        Ok(())
    }

    async fn list_owners(&self) -> CoreErrorResult<Vec<Owner>> {
        Ok(self.owner_rows().await?)
    }

    async fn list_identities(&self) -> CoreErrorResult<Vec<Identity>> {
        Ok(self.identity_rows().await?)
    }

    async fn count(&self) -> CoreErrorResult<usize> {
        let count = self.count_rows().await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
