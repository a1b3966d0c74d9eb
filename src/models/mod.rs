//! Data models for the portfolio collections.
//!
//! Field names match the admin dashboard's wire format exactly (camelCase).

mod certificate;
mod collection;
mod course;
mod dates;
mod education;
mod portfolio;
mod project;
mod record;
mod skill;
mod update;

pub use certificate::*;
pub use collection::*;
pub use course::*;
pub use dates::*;
pub use education::*;
pub use portfolio::*;
pub use project::*;
pub use record::*;
pub use skill::*;
pub use update::*;
