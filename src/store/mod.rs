//! Persistence boundary.
//!
//! The core never talks to storage directly: the controller loads through
//! the remote-then-cache fallback chain and writes the cache after every
//! mutation, while remote saves go through the debounced sync engine. The
//! remote store is an external collaborator reached only through the
//! [`RecordStore`] contract.

/// Local JSON cache, one file per collection
pub mod cache;
/// PostgREST-style remote record store
pub mod remote;
/// Debounced remote sync engine
pub mod sync;
/// Snake_case wire records and the camelCase mapping layer
pub mod wire;

pub use cache::LocalCache;
pub use remote::RemoteStore;
pub use sync::{ChangeTracker, SyncEngine, SyncStatus};

use crate::entities::{Finances, Fund, Todo, Vendor};
use crate::errors::Result;

/// The remotely synced collections.
///
/// Completed vendors are deliberately absent: they live only in the local
/// cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Active vendor obligations
    Vendors,
    /// Incoming funds
    Funds,
    /// Wedding checklist
    Todos,
    /// Personal savings singleton
    Finances,
}

impl Collection {
    /// All remotely synced collections, in sync order.
    pub const ALL: [Self; 4] = [Self::Vendors, Self::Funds, Self::Todos, Self::Finances];

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Vendors => 0,
            Self::Funds => 1,
            Self::Todos => 2,
            Self::Finances => 3,
        }
    }

    /// Remote table name for this collection.
    pub const fn table(self) -> &'static str {
        match self {
            Self::Vendors => "vendors",
            Self::Funds => "funds",
            Self::Todos => "wedding_todos",
            Self::Finances => "finances",
        }
    }
}

/// Contract for the remote record store.
///
/// Each load distinguishes "absent" (`Ok(None)`: nothing usable remotely,
/// fall back to the local cache) from "explicitly empty" (`Ok(Some(vec![]))`:
/// the remote store really holds zero records). Saves replace the whole
/// collection; there is no per-record reconciliation.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Loads all vendors, newest first.
    async fn load_vendors(&self) -> Result<Option<Vec<Vendor>>>;
    /// Replaces the remote vendor collection.
    async fn save_vendors(&self, vendors: &[Vendor]) -> Result<()>;

    /// Loads all funds, newest first.
    async fn load_funds(&self) -> Result<Option<Vec<Fund>>>;
    /// Replaces the remote fund collection.
    async fn save_funds(&self, funds: &[Fund]) -> Result<()>;

    /// Loads all checklist items, newest first.
    async fn load_todos(&self) -> Result<Option<Vec<Todo>>>;
    /// Replaces the remote checklist collection.
    async fn save_todos(&self, todos: &[Todo]) -> Result<()>;

    /// Loads the savings singleton, if one has ever been saved.
    async fn load_finances(&self) -> Result<Option<Finances>>;
    /// Upserts the savings singleton in place.
    async fn save_finances(&self, finances: &Finances) -> Result<()>;
}
