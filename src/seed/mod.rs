//! Startup seeding of empty collections from a JSON file.
//!
//! The file has the same shape as `GET /api/data`. Collections that already hold records are
//! never overwritten.

use std::path::Path;

use serde_json::Value;

use crate::db::Store;
use crate::errors::AppError;
use crate::models::Collection;
use crate::sync;

/// Fill every empty collection that the seed file provides.
///
/// The whole file is validated before anything is written. Returns the collections seeded.
pub async fn seed_empty_collections(
    store: &Store,
    path: &Path,
) -> Result<Vec<Collection>, AppError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Internal(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|e| {
        AppError::Internal(format!("Seed file {} is not JSON: {}", path.display(), e))
    })?;
    let Value::Object(mut sections) = value else {
        return Err(AppError::Internal(format!(
            "Seed file {} must be an object keyed by collection",
            path.display()
        )));
    };

    let mut pending = Vec::new();
    for collection in Collection::ALL {
        if let Some(data) = sections.remove(collection.as_str()) {
            sync::validate_for(collection, data.clone()).map_err(|e| {
                AppError::Internal(format!("Seed file section `{}`: {}", collection, e.message()))
            })?;
            pending.push((collection, data));
        }
    }

    for key in sections.keys() {
        tracing::warn!("Seed file has unknown section `{}`, ignoring", key);
    }

    let mut seeded = Vec::new();
    for (collection, data) in pending {
        if store.count(collection).await? > 0 {
            tracing::debug!("Collection {} already populated, not seeding", collection);
            continue;
        }
        sync::sync_dispatch(store, collection, data).await?;
        seeded.push(collection);
    }

    Ok(seeded)
}
