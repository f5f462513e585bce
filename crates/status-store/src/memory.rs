use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use common::{IsoCode, UserId};
use tokio::sync::RwLock;

use crate::{CountryStatusMap, Result, StatusEntry, StatusError, StatusStore};

/// Stored statuses for one user. `None` marks a status cleared by an update.
type StoredStatuses = BTreeMap<String, Option<String>>;

/// Returns true if the slot holds a status that counts as an entry.
fn is_set(slot: Option<&Option<String>>) -> bool {
    slot.and_then(Option::as_deref)
        .is_some_and(|status| !status.is_empty())
}

/// In-memory status store.
///
/// Holds the whole table behind one lock. Every operation takes the write
/// lock for its full duration, since reads also create missing users.
/// Cloning is cheap and shares the same table.
#[derive(Clone, Default)]
pub struct InMemoryStatusStore {
    users: Arc<RwLock<HashMap<UserId, StoredStatuses>>>,
}

impl InMemoryStatusStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

fn record(operation: &'static str, outcome: &'static str) {
    metrics::counter!(
        "status_store_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

fn record_result<T>(operation: &'static str, result: &Result<T>) {
    match result {
        Ok(_) => record(operation, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "{operation} rejected");
            record(operation, e.kind());
        }
    }
}

impl InMemoryStatusStore {
    async fn try_create(
        &self,
        user_id: &UserId,
        iso_code: &str,
        status: &str,
    ) -> Result<StatusEntry> {
        if iso_code.is_empty() || status.is_empty() {
            return Err(StatusError::MissingField);
        }

        let mut users = self.users.write().await;
        let statuses = users.entry(user_id.clone()).or_default();

        if is_set(statuses.get(iso_code)) {
            return Err(StatusError::Conflict {
                iso_code: iso_code.to_string(),
            });
        }

        let code = IsoCode::parse(iso_code)?;
        tracing::info!(%code, status, "status added");
        let code = code.into_string();
        statuses.insert(code.clone(), Some(status.to_string()));
        Ok(StatusEntry::new(code, status))
    }

    async fn try_update(
        &self,
        user_id: &UserId,
        iso_code: &str,
        status: Option<&str>,
    ) -> Result<StatusEntry> {
        let mut users = self.users.write().await;
        let current = users
            .get_mut(user_id)
            .and_then(|statuses| statuses.get_mut(iso_code))
            .filter(|slot| is_set(Some(&**slot)))
            .ok_or_else(|| StatusError::NotFound {
                iso_code: iso_code.to_string(),
            })?;

        *current = status.map(str::to_string);
        tracing::info!(iso_code, ?status, "status updated");
        Ok(StatusEntry {
            iso_code: iso_code.to_string(),
            status: current.clone(),
        })
    }

    async fn try_delete(&self, user_id: &UserId, iso_code: &str) -> Result<()> {
        let mut users = self.users.write().await;
        let statuses = users
            .get_mut(user_id)
            .filter(|statuses| is_set(statuses.get(iso_code)))
            .ok_or_else(|| StatusError::NotFound {
                iso_code: iso_code.to_string(),
            })?;

        statuses.remove(iso_code);
        tracing::info!(iso_code, "status removed");
        Ok(())
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    async fn get_statuses(&self, user_id: &UserId) -> CountryStatusMap {
        let mut users = self.users.write().await;
        let statuses: CountryStatusMap = users
            .entry(user_id.clone())
            .or_default()
            .iter()
            .filter_map(|(code, status)| Some((code.clone(), status.clone()?)))
            .collect();
        tracing::info!(count = statuses.len(), "returning statuses");
        record("get", "ok");
        statuses
    }

    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    async fn create_status(
        &self,
        user_id: &UserId,
        iso_code: &str,
        status: &str,
    ) -> Result<StatusEntry> {
        let result = self.try_create(user_id, iso_code, status).await;
        record_result("create", &result);
        result
    }

    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    async fn update_status(
        &self,
        user_id: &UserId,
        iso_code: &str,
        status: Option<&str>,
    ) -> Result<StatusEntry> {
        let result = self.try_update(user_id, iso_code, status).await;
        record_result("update", &result);
        result
    }

    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    async fn delete_status(&self, user_id: &UserId, iso_code: &str) -> Result<()> {
        let result = self.try_delete(user_id, iso_code).await;
        record_result("delete", &result);
        result
    }
}
