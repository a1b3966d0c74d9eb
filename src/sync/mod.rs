//! Replace-collection protocol and canonical reads.
//!
//! Every write goes validate → sort → replace. Reads re-sort, since storage order is not trusted.

use serde_json::Value;

use crate::db::Store;
use crate::errors::AppError;
use crate::models::{
    duplicate_identities, sort_canonical, validate_batch, Certificate, Collection, Education,
    OnlineCourse, Portfolio, Project, Record, Skill, Update,
};

/// Validate `data` as a batch of `T` and replace the stored collection with it.
///
/// Returns the number of records written. Nothing is touched when validation fails.
pub async fn sync_collection<T: Record>(store: &Store, data: Value) -> Result<usize, AppError> {
    let mut records = validate_batch::<T>(data)?;

    let duplicates = duplicate_identities(&records);
    if !duplicates.is_empty() {
        tracing::warn!(
            "{} batch repeats identity keys: {}",
            T::COLLECTION,
            duplicates.join(", ")
        );
    }

    sort_canonical(&mut records);
    store.replace(&records).await?;

    tracing::info!(
        "Replaced {} collection with {} records",
        T::COLLECTION,
        records.len()
    );
    Ok(records.len())
}

/// Route a replacement batch to the protocol for `collection`.
pub async fn sync_dispatch(
    store: &Store,
    collection: Collection,
    data: Value,
) -> Result<usize, AppError> {
    match collection {
        Collection::Education => sync_collection::<Education>(store, data).await,
        Collection::Certificates => sync_collection::<Certificate>(store, data).await,
        Collection::OnlineCourses => sync_collection::<OnlineCourse>(store, data).await,
        Collection::Skills => sync_collection::<Skill>(store, data).await,
        Collection::Projects => sync_collection::<Project>(store, data).await,
        Collection::Updates => sync_collection::<Update>(store, data).await,
    }
}

/// Check a batch for `collection` without writing it.
pub fn validate_for(collection: Collection, data: Value) -> Result<usize, AppError> {
    match collection {
        Collection::Education => validate_batch::<Education>(data).map(|r| r.len()),
        Collection::Certificates => validate_batch::<Certificate>(data).map(|r| r.len()),
        Collection::OnlineCourses => validate_batch::<OnlineCourse>(data).map(|r| r.len()),
        Collection::Skills => validate_batch::<Skill>(data).map(|r| r.len()),
        Collection::Projects => validate_batch::<Project>(data).map(|r| r.len()),
        Collection::Updates => validate_batch::<Update>(data).map(|r| r.len()),
    }
}

/// Full contents of one collection in canonical order.
pub async fn read_collection<T: Record>(store: &Store) -> Result<Vec<T>, AppError> {
    let mut records = store.list::<T>().await?;
    sort_canonical(&mut records);
    Ok(records)
}

/// All six collections at once.
pub async fn read_portfolio(store: &Store) -> Result<Portfolio, AppError> {
    let (education, certificates, online_courses, skills, projects, updates) = tokio::try_join!(
        read_collection::<Education>(store),
        read_collection::<Certificate>(store),
        read_collection::<OnlineCourse>(store),
        read_collection::<Skill>(store),
        read_collection::<Project>(store),
        read_collection::<Update>(store),
    )?;

    Ok(Portfolio {
        education,
        certificates,
        online_courses,
        skills,
        projects,
        updates,
    })
}
