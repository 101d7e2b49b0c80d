//! [`Person`] definitions.

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display};
use regex::Regex;

use super::Address;

/// Human being known to the brokerage.
///
/// Once created, a [`Person`] never changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    /// [`Name`] of this [`Person`].
    name: Name,

    /// [`LastName`] of this [`Person`].
    last_name: LastName,

    /// [`NationalId`] of this [`Person`].
    national_id: NationalId,

    /// [`Phone`] number of this [`Person`].
    phone: Phone,

    /// [`Address`] this [`Person`] lives at.
    address: Address,
}

impl Person {
    /// Creates a new [`Person`] out of the provided parts.
    #[must_use]
    pub fn new(
        name: Name,
        last_name: LastName,
        national_id: NationalId,
        phone: Phone,
        address: Address,
    ) -> Self {
        Self {
            name,
            last_name,
            national_id,
            phone,
            address,
        }
    }

    /// Returns [`Name`] of this [`Person`].
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns [`LastName`] of this [`Person`].
    #[must_use]
    pub fn last_name(&self) -> &LastName {
        &self.last_name
    }

    /// Returns [`NationalId`] of this [`Person`].
    #[must_use]
    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    /// Returns [`Phone`] number of this [`Person`].
    #[must_use]
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns [`Address`] of this [`Person`].
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns [`FullName`] of this [`Person`].
    #[must_use]
    pub fn full_name(&self) -> FullName {
        FullName {
            name: self.name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    /// Checks whether this [`Person`] is called by the provided [`FullName`].
    #[must_use]
    pub fn is_called(&self, full_name: &FullName) -> bool {
        self.name == full_name.name && self.last_name == full_name.last_name
    }
}

define_text! {
    #[doc = "First name of a [`Person`]."]
    struct Name;
}

define_text! {
    #[doc = "Last name of a [`Person`]."]
    struct LastName;
}

/// Full name of a [`Person`].
///
/// Not unique: several [`Person`]s may share the same [`FullName`].
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[display("{name} {last_name}")]
pub struct FullName {
    /// [`Name`] part.
    pub name: Name,

    /// [`LastName`] part.
    pub last_name: LastName,
}

impl FullName {
    /// Creates a new [`FullName`] out of its parts.
    #[must_use]
    pub fn new(name: Name, last_name: LastName) -> Self {
        Self { name, last_name }
    }
}

/// National identification number of a [`Person`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct NationalId(String);

impl NationalId {
    /// Creates a new [`NationalId`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`NationalId`].
    fn check(id: impl AsRef<str>) -> bool {
        /// Regular expression checking [`NationalId`] format:
        /// - letters, digits and dashes only;
        /// - between 1 and 32 characters long.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\p{L}\p{N}-]{1,32}$").expect("valid regex")
        });

        REGEX.is_match(id.as_ref())
    }
}

impl FromStr for NationalId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `NationalId`")
    }
}

/// Phone number of a [`Person`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[+]?\d(-?\d){2,19}$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

#[cfg(test)]
mod spec {
    use super::{
        Address, FullName, LastName, Name, NationalId, Person, Phone,
    };

    fn person(name: &str, last_name: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            LastName::new(last_name).unwrap(),
            NationalId::new("0012345678").unwrap(),
            Phone::new("+98-912-555-0101").unwrap(),
            Address::new("Shiraz").unwrap(),
        )
    }

    #[test]
    fn full_name() {
        let p = person("Ali", "Karimi");

        assert_eq!(p.full_name().to_string(), "Ali Karimi");
        assert!(p.is_called(&FullName::new(
            Name::new("Ali").unwrap(),
            LastName::new("Karimi").unwrap(),
        )));
        assert!(!p.is_called(&FullName::new(
            Name::new("Ali").unwrap(),
            LastName::new("karimi").unwrap(),
        )));
    }

    #[test]
    fn validates_national_id() {
        assert!(NationalId::new("0012345678").is_some());
        assert!(NationalId::new("AB-12").is_some());

        assert!(NationalId::new("").is_none());
        assert!(NationalId::new("12 34").is_none());
        assert!(NationalId::new("1".repeat(33)).is_none());
    }

    #[test]
    fn validates_phone() {
        assert!(Phone::new("09125550101").is_some());
        assert!(Phone::new("+1-555-0101").is_some());
        assert!(Phone::new("555").is_some());

        assert!(Phone::new("55").is_none());
        assert!(Phone::new("phone").is_none());
        assert!(Phone::new("+-555").is_none());
        assert!(Phone::new("555--0101").is_none());
    }
}
