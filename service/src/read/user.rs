//! [`User`] read model definitions.

use crate::domain::{user::Role, User};
#[cfg(doc)]
use crate::domain::{
    person::{LastName, Name, NationalId, Phone},
    Address,
};

use super::FilterError;

/// Exact-match filter of [`User`]s.
///
/// Textual values are compared verbatim, so a value no [`User`] could ever
/// have simply matches nothing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Filter {
    /// [`User`]s with the provided [`Name`].
    Name(String),

    /// [`User`]s with the provided [`LastName`].
    LastName(String),

    /// [`User`]s with the provided [`NationalId`].
    NationalId(String),

    /// [`User`]s with the provided [`Phone`] number.
    Phone(String),

    /// [`User`]s living at the provided [`Address`].
    Address(String),

    /// [`User`]s of the provided [`Role`].
    ///
    /// [`None`] stands for a role nobody has.
    Role(Option<Role>),
}

impl Filter {
    /// Builds a new [`Filter`] searching by the provided `key` for the
    /// provided `value`.
    ///
    /// Known keys: `name`, `last`, `ID` (or `id`), `phone`, `address` and
    /// `userType`.
    ///
    /// # Errors
    ///
    /// If the `key` is unknown.
    pub fn parse(key: &str, value: &str) -> Result<Self, FilterError> {
        let value = value.to_owned();
        Ok(match key {
            "name" => Self::Name(value),
            "last" => Self::LastName(value),
            "ID" | "id" => Self::NationalId(value),
            "phone" => Self::Phone(value),
            "address" => Self::Address(value),
            "userType" => Self::Role(value.parse().ok()),
            _ => return Err(FilterError::UnknownKey(key.to_owned())),
        })
    }

    /// Checks whether the provided [`User`] satisfies this [`Filter`].
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        let person = &user.person;
        match self {
            Self::Name(name) => is(person.name(), name),
            Self::LastName(last_name) => is(person.last_name(), last_name),
            Self::NationalId(id) => is(person.national_id(), id),
            Self::Phone(phone) => is(person.phone(), phone),
            Self::Address(address) => is(person.address(), address),
            Self::Role(role) => *role == Some(user.role),
        }
    }
}

/// Checks whether the stored `text` equals the searched `value`.
fn is(text: &impl AsRef<str>, value: &str) -> bool {
    text.as_ref() == value
}
