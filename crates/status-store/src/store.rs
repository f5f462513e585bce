use std::collections::BTreeMap;

use async_trait::async_trait;
use common::UserId;
use serde::Serialize;

use crate::Result;

/// Country code to status label, for a single user.
///
/// Entries whose status was cleared by an update are not listed.
pub type CountryStatusMap = BTreeMap<String, String>;

/// A (country, status) pair returned by create and update.
///
/// `status` is `None` when an update supplied no status; it is then left out
/// of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub iso_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl StatusEntry {
    pub fn new(iso_code: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            iso_code: iso_code.into(),
            status: Some(status.into()),
        }
    }
}

/// Core trait for status store implementations.
///
/// An entry exists only while it holds a non-empty status. An update may
/// clear the status, after which the entry counts as absent: update and
/// delete report it missing and create may fill it again.
///
/// Each operation must be atomic with respect to the whole table: concurrent
/// calls on the same (user, country) pair behave as some serial order.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Returns all statuses for a user, creating an empty collection for
    /// users seen for the first time. Never fails.
    async fn get_statuses(&self, user_id: &UserId) -> CountryStatusMap;

    /// Stores a new status.
    ///
    /// Checks run in this order: both fields present, no existing entry,
    /// then ISO code format. A duplicate therefore reports
    /// [`StatusError::Conflict`](crate::StatusError::Conflict) even when its
    /// code is malformed.
    async fn create_status(
        &self,
        user_id: &UserId,
        iso_code: &str,
        status: &str,
    ) -> Result<StatusEntry>;

    /// Replaces the status of an existing entry. The new value is stored
    /// as given, without validation; `None` clears it.
    async fn update_status(
        &self,
        user_id: &UserId,
        iso_code: &str,
        status: Option<&str>,
    ) -> Result<StatusEntry>;

    /// Removes an existing entry. The user's collection is kept even when it
    /// becomes empty.
    async fn delete_status(&self, user_id: &UserId, iso_code: &str) -> Result<()>;
}
