//! In-memory user store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use userhub_entity::user::{NewUser, User, UserChanges, UserId};

use crate::store::{StoreError, StoreResult, UserStore};

/// Constraint name reported on duplicate emails, matching the SQL schema.
const EMAIL_CONSTRAINT: &str = "users_email_key";

#[derive(Debug)]
struct Table {
    next_id: i32,
    rows: BTreeMap<UserId, User>,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && Some(row.id) != except)
    }
}

/// Process-local user store.
///
/// Ids are assigned from 1 upwards and never reused. Email uniqueness is
/// enforced under the write lock, so concurrent creates with the same
/// email behave like a unique index: one wins, the other gets
/// [`StoreError::Conflict`].
#[derive(Debug)]
pub struct MemoryUserStore {
    table: RwLock<Table>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn email_conflict() -> StoreError {
    StoreError::Conflict {
        constraint: EMAIL_CONSTRAINT.to_string(),
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|row| row.email == email)
            .cloned())
    }

    async fn create(&self, data: &NewUser) -> StoreResult<User> {
        let mut table = self.table.write().await;
        if table.email_taken(&data.email, None) {
            return Err(email_conflict());
        }

        let id = UserId(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| StoreError::backend(std::io::Error::other("user id sequence exhausted")))?;

        let user = data.clone().into_user(id);
        table.rows.insert(id, user.clone());

        debug!(user_id = %id, "Inserted user row");
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> StoreResult<User> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        if let Some(email) = &changes.email {
            if table.email_taken(email, Some(id)) {
                return Err(email_conflict());
            }
        }

        let row = table.rows.get_mut(&id).ok_or(StoreError::NotFound)?;
        changes.clone().apply_to(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: UserId) -> StoreResult<User> {
        let removed = self
            .table
            .write()
            .await
            .rows
            .remove(&id)
            .ok_or(StoreError::NotFound)?;

        debug!(user_id = %id, "Deleted user row");
        Ok(removed)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
