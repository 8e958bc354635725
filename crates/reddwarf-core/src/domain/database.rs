//! Database value object

use std::cmp::Ordering;
use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{CoreError, Result};

/// A database hosted on a Reddwarf instance.
///
/// Identity is the name alone: two databases with the same name are equal,
/// hash the same and collapse into a single entry of a set. The name must be
/// non-empty whether the value is built or deserialized.
///
/// # Example
///
/// ```rust
/// use reddwarf_core::Database;
///
/// let db = Database::builder().name("databaseA").build().unwrap();
/// assert_eq!(db.name(), "databaseA");
/// assert_eq!(db.to_string(), "Database{name=databaseA}");
/// ```
#[derive(Builder, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, Validate)]
#[builder(build_fn(private, name = "fallible_build", error = "CoreError"))]
#[builder(setter(into))]
#[serde(try_from = "RawDatabase")]
pub struct Database {
    /// The name of this database.
    #[validate(length(min = 1, message = "database name must not be empty"))]
    name: String,
}

/// Wire form, checked on the way in
#[derive(Deserialize)]
struct RawDatabase {
    name: String,
}

impl TryFrom<RawDatabase> for Database {
    type Error = CoreError;

    fn try_from(raw: RawDatabase) -> Result<Self> {
        Database::builder().name(raw.name).build()
    }
}

impl Database {
    /// Start building a database
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::default()
    }

    /// Shorthand for a database built from its name
    pub fn named(name: impl Into<String>) -> Result<Self> {
        Self::builder().name(name).build()
    }

    /// Builder seeded with this database's fields
    pub fn to_builder(&self) -> DatabaseBuilder {
        let mut builder = DatabaseBuilder::default();
        builder.name(self.name.clone());
        builder
    }

    /// The name of this database
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl DatabaseBuilder {
    /// Build and validate the database
    pub fn build(&self) -> Result<Database> {
        let database = self.fallible_build()?;
        database.validate()?;
        Ok(database)
    }
}

impl Ord for Database {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Database {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Database{{name={}}}", self.name)
    }
}
