//! Allow-list repository.
//!
//! The accepted column names live outside the core and can change between (or
//! during) requests. Callers take a [`AllowListStore::snapshot`] at the start
//! of a request and hand that owned [`AllowList`] to the core.

mod db;
mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::allow_list::AllowList;
use crate::normalize::NormalizePolicy;

pub use db::AllowListDb;
pub use memory::MemoryStore;

#[async_trait]
pub trait AllowListStore: Send + Sync {
    /// Stored raw names in insertion order (possibly empty).
    async fn load(&self) -> Result<Vec<String>>;

    /// Replace the stored list. Names that collide by canonical key keep only
    /// the first occurrence, so saving the same list twice is a no-op.
    async fn save(&self, names: &[String]) -> Result<()>;

    /// Append the names not already present in any surface form and return
    /// exactly those. The check and the write happen as one step, so two
    /// concurrent callers never both add the same name.
    async fn add(&self, raw_names: &[String]) -> Result<Vec<String>>;

    /// Read the current names once and build an owned allow-list from them.
    async fn snapshot(&self, policy: NormalizePolicy) -> Result<AllowList> {
        let names = self.load().await?;
        Ok(AllowList::build_with(names, policy))
    }
}
