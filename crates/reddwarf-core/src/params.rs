//! Parameter bags and the typed requests they resolve to
//!
//! Callers of the user and database endpoints hand over a loosely-typed
//! [`ParamBag`]. Each binder resolves it exactly once, at the boundary, into a
//! typed request whose variants spell out the supported call shapes:
//!
//! - [`CreateUserRequest`]: one user from `name`/`password`/`databaseName`,
//!   or a bulk set under `users`
//! - [`DatabaseSelection`]: one database from `databaseName`, or a bulk set
//!   under `databases`
//!
//! The first shape whose key is present wins; shapes are never merged.
//!
//! # Example
//!
//! ```rust
//! use reddwarf_core::params::{CreateUserRequest, ParamBag};
//!
//! let bag = ParamBag::new()
//!     .with("name", "dbuser1")
//!     .with("password", "password")
//!     .with("databaseName", "databaseA");
//!
//! let request = CreateUserRequest::try_from(&bag).unwrap();
//! assert!(matches!(request, CreateUserRequest::Simple { .. }));
//! ```

use std::collections::{BTreeSet, HashMap};

use crate::domain::{Database, User};
use crate::error::{CoreError, Result};

/// Key for the single user's name
pub const NAME: &str = "name";
/// Key for the single user's password
pub const PASSWORD: &str = "password";
/// Key for a single database name
pub const DATABASE_NAME: &str = "databaseName";
/// Key for a bulk set of users
pub const USERS: &str = "users";
/// Key for a bulk set of databases
pub const DATABASES: &str = "databases";

/// A value held in a [`ParamBag`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Users(BTreeSet<User>),
    Databases(BTreeSet<Database>),
}

impl ParamValue {
    fn kind(&self) -> &'static str {
        match self {
            ParamValue::Text(_) => "a string",
            ParamValue::Users(_) => "a set of users",
            ParamValue::Databases(_) => "a set of databases",
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<BTreeSet<User>> for ParamValue {
    fn from(value: BTreeSet<User>) -> Self {
        ParamValue::Users(value)
    }
}

impl From<BTreeSet<Database>> for ParamValue {
    fn from(value: BTreeSet<Database>) -> Self {
        ParamValue::Databases(value)
    }
}

/// Loosely-typed key/value input for a binder
///
/// An absent key and a key explicitly set to nothing are the same thing:
/// [`ParamBag::with_opt`] with `None` leaves the bag untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamBag {
    entries: HashMap<String, ParamValue>,
}

impl ParamBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add an entry when a value is present
    pub fn with_opt<V: Into<ParamValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A string entry, or an error if the key holds something else
    pub fn text(&self, key: &str) -> Result<Option<&str>> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Text(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(key, "a string", other)),
        }
    }

    /// A set of users, or an error if the key holds something else
    pub fn users(&self, key: &str) -> Result<Option<&BTreeSet<User>>> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Users(users)) => Ok(Some(users)),
            Some(other) => Err(mismatch(key, "a set of users", other)),
        }
    }

    /// A set of databases, or an error if the key holds something else
    pub fn databases(&self, key: &str) -> Result<Option<&BTreeSet<Database>>> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Databases(databases)) => Ok(Some(databases)),
            Some(other) => Err(mismatch(key, "a set of databases", other)),
        }
    }
}

fn mismatch(key: &str, expected: &'static str, found: &ParamValue) -> CoreError {
    tracing::debug!(key, expected, found = found.kind(), "parameter type mismatch");
    CoreError::InvalidParameter {
        key: key.to_string(),
        expected,
    }
}

/// The call shapes accepted by the create-user endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateUserRequest {
    /// One user granted access to one database
    Simple {
        name: String,
        password: Option<String>,
        database_name: String,
    },
    /// Any number of fully-specified users
    Bulk(BTreeSet<User>),
    /// Nothing to create
    Empty,
}

impl CreateUserRequest {
    /// One user with access to one database
    pub fn simple(
        name: impl Into<String>,
        password: Option<String>,
        database_name: impl Into<String>,
    ) -> Self {
        CreateUserRequest::Simple {
            name: name.into(),
            password,
            database_name: database_name.into(),
        }
    }

    /// The users this request creates
    ///
    /// For the simple shape this builds the user (and its single database),
    /// so an empty name is reported here.
    pub fn users(&self) -> Result<BTreeSet<User>> {
        match self {
            CreateUserRequest::Simple {
                name,
                password,
                database_name,
            } => {
                let database = Database::named(database_name.as_str())?;
                let user = User::builder()
                    .name(name.as_str())
                    .maybe_password(password.clone())
                    .databases(BTreeSet::from([database]))
                    .build()?;
                Ok(BTreeSet::from([user]))
            }
            CreateUserRequest::Bulk(users) => Ok(users.clone()),
            CreateUserRequest::Empty => Ok(BTreeSet::new()),
        }
    }
}

impl From<BTreeSet<User>> for CreateUserRequest {
    fn from(users: BTreeSet<User>) -> Self {
        CreateUserRequest::Bulk(users)
    }
}

impl TryFrom<&ParamBag> for CreateUserRequest {
    type Error = CoreError;

    fn try_from(bag: &ParamBag) -> Result<Self> {
        if let Some(name) = bag.text(NAME)? {
            let database_name = bag
                .text(DATABASE_NAME)?
                .ok_or_else(|| CoreError::MissingParameter(DATABASE_NAME.to_string()))?;
            return Ok(CreateUserRequest::simple(
                name,
                bag.text(PASSWORD)?.map(str::to_string),
                database_name,
            ));
        }
        if let Some(users) = bag.users(USERS)? {
            return Ok(CreateUserRequest::Bulk(users.clone()));
        }
        Ok(CreateUserRequest::Empty)
    }
}

/// The call shapes accepted by endpoints taking a set of databases
///
/// Used both to grant a user access and to create databases on an instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseSelection {
    /// One database by name
    Single { database_name: String },
    /// Any number of databases
    Bulk(BTreeSet<Database>),
    /// No databases
    Empty,
}

impl DatabaseSelection {
    /// One database by name
    pub fn single(database_name: impl Into<String>) -> Self {
        DatabaseSelection::Single {
            database_name: database_name.into(),
        }
    }

    /// The databases this selection names
    pub fn databases(&self) -> Result<BTreeSet<Database>> {
        match self {
            DatabaseSelection::Single { database_name } => {
                Ok(BTreeSet::from([Database::named(database_name.as_str())?]))
            }
            DatabaseSelection::Bulk(databases) => Ok(databases.clone()),
            DatabaseSelection::Empty => Ok(BTreeSet::new()),
        }
    }
}

impl From<BTreeSet<Database>> for DatabaseSelection {
    fn from(databases: BTreeSet<Database>) -> Self {
        DatabaseSelection::Bulk(databases)
    }
}

impl TryFrom<&ParamBag> for DatabaseSelection {
    type Error = CoreError;

    fn try_from(bag: &ParamBag) -> Result<Self> {
        if let Some(database_name) = bag.text(DATABASE_NAME)? {
            return Ok(DatabaseSelection::single(database_name));
        }
        if let Some(databases) = bag.databases(DATABASES)? {
            return Ok(DatabaseSelection::Bulk(databases.clone()));
        }
        Ok(DatabaseSelection::Empty)
    }
}
