//! Show records and the providers that serve them.
//!
//! A show is the user-authored phrase pool a card is dealt from. Storing
//! and editing shows is somebody else's job; this crate only reads them
//! through [`ShowProvider`].

use crate::error::CardError;
use crate::grid::center_label;
use async_trait::async_trait;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Identifier of a show record.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ShowId(String);

impl ShowId {
    /// Creates a show id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A show's phrase pool as served by the record-management subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowRecord {
    /// Display title of the show.
    #[serde(default)]
    name: Option<String>,

    /// Ordered phrase pool.
    phrases: Vec<String>,

    /// Label for the free space; `None` means the default label.
    #[serde(default, alias = "center_square")]
    center_square: Option<String>,
}

impl ShowRecord {
    /// Creates a record with no name.
    #[instrument(skip(phrases), fields(phrases = phrases.len()))]
    pub fn new(phrases: Vec<String>, center_square: Option<String>) -> Self {
        Self {
            name: None,
            phrases,
            center_square,
        }
    }

    /// Sets the display title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the free-space label, falling back to the default when the
    /// record has none or an empty one.
    pub fn center_label(&self) -> &str {
        center_label(self.center_square.as_deref())
    }
}

/// Source of show records.
///
/// Implementations make exactly one attempt per call; a failure is
/// returned to the caller as-is.
#[async_trait]
pub trait ShowProvider: Send + Sync {
    /// Fetches a show by id.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotFound`] when no such show exists and
    /// [`CardError::Fetch`] when the source could not be read.
    async fn get_show(&self, id: &ShowId) -> Result<ShowRecord, CardError>;
}

#[async_trait]
impl<P: ShowProvider + ?Sized> ShowProvider for Box<P> {
    async fn get_show(&self, id: &ShowId) -> Result<ShowRecord, CardError> {
        (**self).get_show(id).await
    }
}

/// Show provider backed by a map, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShowProvider {
    shows: HashMap<ShowId, ShowRecord>,
}

impl InMemoryShowProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a show.
    #[instrument(skip_all)]
    pub fn insert(&mut self, id: impl Into<ShowId>, record: ShowRecord) {
        let id = id.into();
        debug!(show_id = %id, phrases = record.phrases.len(), "Storing show");
        self.shows.insert(id, record);
    }

    /// Returns the number of stored shows.
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Returns true if no shows are stored.
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

#[async_trait]
impl ShowProvider for InMemoryShowProvider {
    #[instrument(skip(self), fields(show_id = %id))]
    async fn get_show(&self, id: &ShowId) -> Result<ShowRecord, CardError> {
        debug!("Looking up show in memory");
        self.shows
            .get(id)
            .cloned()
            .ok_or_else(|| CardError::NotFound(id.clone()))
    }
}
