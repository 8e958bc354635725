//! Database user value object

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Database;
use crate::error::{CoreError, Result};

/// A database user on a Reddwarf instance.
///
/// The password is only ever sent on creation; users read back from the API
/// carry none. The set of databases the user may access is owned by the user
/// and is empty when not given. The name must be non-empty whether the value
/// is built or deserialized.
///
/// `Display` lists every field but prints the password as `<redacted>` (or
/// `<none>` when unset), so users can be logged safely. Use
/// [`User::password`] to read it.
///
/// # Example
///
/// ```rust
/// use reddwarf_core::{Database, User};
///
/// let user = User::builder()
///     .name("dbuser1")
///     .password("password")
///     .database(Database::named("databaseA").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(user.name(), "dbuser1");
/// assert_eq!(user.databases().len(), 1);
/// ```
#[derive(Builder, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, Validate)]
#[builder(build_fn(private, name = "fallible_build", error = "CoreError"))]
#[serde(try_from = "RawUser")]
pub struct User {
    /// The name of this user.
    #[builder(setter(into))]
    #[validate(length(min = 1, message = "user name must not be empty"))]
    name: String,

    /// The password for this user.
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,

    /// The databases this user can access.
    #[builder(setter(into, each(name = "database")), default)]
    databases: BTreeSet<Database>,
}

/// Wire form, checked on the way in
#[derive(Deserialize)]
struct RawUser {
    name: String,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    databases: BTreeSet<Database>,
}

impl TryFrom<RawUser> for User {
    type Error = CoreError;

    fn try_from(raw: RawUser) -> Result<Self> {
        User::builder()
            .name(raw.name)
            .maybe_password(raw.password)
            .databases(raw.databases)
            .build()
    }
}

impl User {
    /// Start building a user
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Builder seeded with this user's fields
    pub fn to_builder(&self) -> UserBuilder {
        let mut builder = UserBuilder::default();
        builder
            .name(self.name.clone())
            .databases(self.databases.clone());
        if let Some(password) = &self.password {
            builder.password(password.clone());
        }
        builder
    }

    /// The name of this user
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The password for this user, if one was set
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The databases this user can access
    pub fn databases(&self) -> &BTreeSet<Database> {
        &self.databases
    }
}

impl UserBuilder {
    /// Set the password only when one is given
    pub fn maybe_password(&mut self, password: Option<String>) -> &mut Self {
        self.password = Some(password);
        self
    }

    /// Build and validate the user
    pub fn build(&self) -> Result<User> {
        let user = self.fallible_build()?;
        user.validate()?;
        Ok(user)
    }
}

// Name first; the remaining fields only break ties so that ordering agrees
// with equality.
impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.password.cmp(&other.password))
            .then_with(|| self.databases.cmp(&other.databases))
    }
}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_some() {
            "<redacted>"
        } else {
            "<none>"
        };
        let databases = self
            .databases
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "User{{name={}, password={}, databases=[{}]}}",
            self.name, password, databases
        )
    }
}
