//! `colsift allow ...` – read and edit the stored allow-list.

use anyhow::Result;
use colsift_core::config::ColsiftConfig;
use colsift_core::store::{AllowListDb, AllowListStore};

pub async fn run_allow_list(store: &impl AllowListStore) -> Result<()> {
    let names = store.load().await?;
    if names.is_empty() {
        println!("Allow-list is empty.");
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

pub async fn run_allow_add(store: &impl AllowListStore, names: &[String]) -> Result<()> {
    let added = store.add(names).await?;
    report_added(&added, names.len());
    Ok(())
}

pub async fn run_allow_seed(store: &impl AllowListStore, cfg: &ColsiftConfig) -> Result<()> {
    let added = store.add(&cfg.seed_columns).await?;
    report_added(&added, cfg.seed_columns.len());
    Ok(())
}

pub async fn run_allow_remove(db: &AllowListDb, name: &str) -> Result<()> {
    match db.remove(name).await? {
        Some(removed) => println!("Removed {removed:?}"),
        None => println!("No stored name matches {name:?}"),
    }
    Ok(())
}

fn report_added(added: &[String], requested: usize) {
    for name in added {
        println!("Added {name:?}");
    }
    let skipped = requested - added.len();
    if skipped > 0 {
        println!("Skipped {skipped} name(s) already present or blank");
    }
}
