//! Fixture seeder: bulk-generates synthetic users and bulk-removes them.
//!
//! Runs out-of-band via the `seed` binary, never as part of request serving.
//! Storage errors propagate unchanged to the invoking harness.

use chrono::Utc;

use crate::models::user::NewUser;
use crate::names;
use crate::store::UserStore;

pub const DEFAULT_COUNT: usize = 50;

/// Builds `count` synthetic users. Emails are `first.last@gmail.com` with no
/// dedup or case-folding; both timestamps share one instant captured here.
pub fn generate_users(count: usize) -> Vec<NewUser> {
    let now = Utc::now();
    (0..count)
        .map(|_| {
            let first_name = names::random_first_name().to_string();
            let last_name = names::random_last_name().to_string();
            let email = format!("{first_name}.{last_name}@gmail.com");
            NewUser {
                first_name,
                last_name,
                email,
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

/// Inserts `count` generated users in a single bulk statement.
pub async fn apply(store: &dyn UserStore, count: usize) -> Result<u64, sqlx::Error> {
    let inserted = store.insert_many(&generate_users(count)).await?;
    log::info!("seeded {inserted} users");
    Ok(inserted)
}

/// Deletes every user row unconditionally, seeded or not.
pub async fn revert(store: &dyn UserStore) -> Result<u64, sqlx::Error> {
    let deleted = store.delete_all().await?;
    log::info!("deleted {deleted} users");
    Ok(deleted)
}
