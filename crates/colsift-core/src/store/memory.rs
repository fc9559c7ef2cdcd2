use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;

use super::AllowListStore;
use crate::allow_list::unseen_names;

/// Process-local store, for tests and embedding without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    names: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self {
            names: Mutex::new(unseen_names(&[], &names)),
        }
    }
}

#[async_trait]
impl AllowListStore for MemoryStore {
    async fn load(&self) -> Result<Vec<String>> {
        let names = self
            .names
            .lock()
            .map_err(|_| anyhow!("allow-list store lock poisoned"))?;
        Ok(names.clone())
    }

    async fn save(&self, names: &[String]) -> Result<()> {
        let mut stored = self
            .names
            .lock()
            .map_err(|_| anyhow!("allow-list store lock poisoned"))?;
        *stored = unseen_names(&[], names);
        Ok(())
    }

    async fn add(&self, raw_names: &[String]) -> Result<Vec<String>> {
        let mut stored = self
            .names
            .lock()
            .map_err(|_| anyhow!("allow-list store lock poisoned"))?;
        let added = unseen_names(&stored, raw_names);
        stored.extend(added.iter().cloned());
        Ok(added)
    }
}
