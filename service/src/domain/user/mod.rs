//! [`User`] definitions.

pub mod token;

use common::{define_kind, Money};
use derive_more::{Display, From, FromStr, Into};

use crate::domain::{house, House, Person};

pub use self::token::Token;

/// Registered user of the brokerage: a [`Person`] acting in some [`Role`].
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Person`] behind this [`User`].
    pub person: Person,

    /// [`Role`] of this [`User`].
    pub role: Role,

    /// [`Salary`] of this [`User`].
    ///
    /// Meaningful for [`Role::Customer`]s only.
    pub salary: Salary,

    /// Indicator whether this [`User`] has ever purchased a [`House`].
    pub has_purchased_house: bool,

    /// [`House`]s owned by this [`User`], in the order they were acquired.
    houses: Vec<House>,
}

impl User {
    /// Creates a new [`User`] owning no [`House`]s.
    #[must_use]
    pub fn new(id: Id, person: Person, role: Role, salary: Salary) -> Self {
        Self {
            id,
            person,
            role,
            salary,
            has_purchased_house: false,
            houses: Vec::new(),
        }
    }

    /// Returns [`House`]s owned by this [`User`].
    #[must_use]
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// Indicates whether this [`User`] owns at least one [`House`].
    #[must_use]
    pub fn owns_houses(&self) -> bool {
        !self.houses.is_empty()
    }

    /// Adds the provided [`House`] to the ones owned by this [`User`].
    pub fn add_house(&mut self, house: House) {
        self.houses.push(house);
    }

    /// Removes the [`House`] with the provided ID from the ones owned by
    /// this [`User`], returning it.
    pub fn remove_house(&mut self, id: house::Id) -> Option<House> {
        let pos = self.houses.iter().position(|h| h.id() == id)?;
        Some(self.houses.remove(pos))
    }

    /// Returns the [`House`] with the provided ID, if owned by this [`User`].
    #[must_use]
    pub fn get_house(&self, id: house::Id) -> Option<&House> {
        self.houses.iter().find(|h| h.id() == id)
    }
}

/// ID of a [`User`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u64);

/// Salary of a [`User`].
pub type Salary = Money;

define_kind! {
    #[doc = "Role of a [`User`]."]
    enum Role {
        #[doc = "Operator of the brokerage."]
        Admin = 1,

        #[doc = "Owner putting [`House`]s up for sale."]
        Seller = 2,

        #[doc = "Buyer looking for a [`House`]."]
        Customer = 3,
    }
}

impl Role {
    /// Indicates whether a [`User`] of this [`Role`] may be registered
    /// through the command surface.
    #[must_use]
    pub const fn is_registrable(self) -> bool {
        matches!(self, Self::Seller | Self::Customer)
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use crate::domain::{
        house::{self, Area},
        person::{LastName, Name, NationalId, Phone},
        Address, House, Person,
    };

    use super::{Id, Role, User};

    fn seller() -> User {
        User::new(
            Id::from(1),
            Person::new(
                Name::new("Sara").unwrap(),
                LastName::new("Ahmadi").unwrap(),
                NationalId::new("111").unwrap(),
                Phone::new("0912000111").unwrap(),
                Address::new("Tabriz").unwrap(),
            ),
            Role::Seller,
            Money::ZERO,
        )
    }

    fn house(id: u64) -> House {
        House::new(
            house::Id::from(id),
            Id::from(1),
            Money::new(100),
            Area::from_str("80").unwrap(),
            Address::new("Tabriz").unwrap(),
            2,
            false,
            1999,
        )
    }

    #[test]
    fn manages_houses() {
        let mut u = seller();
        assert!(!u.owns_houses());

        u.add_house(house(1));
        u.add_house(house(2));
        u.add_house(house(3));

        assert!(u.owns_houses());
        assert_eq!(
            u.get_house(house::Id::from(2)).unwrap().id(),
            house::Id::from(2),
        );
        assert!(u.get_house(house::Id::from(4)).is_none());

        let removed = u.remove_house(house::Id::from(2)).unwrap();

        assert_eq!(removed.id(), house::Id::from(2));
        assert!(u.get_house(house::Id::from(2)).is_none());
        assert!(u.remove_house(house::Id::from(2)).is_none());
        assert_eq!(
            u.houses().iter().map(House::id).collect::<Vec<_>>(),
            [house::Id::from(1), house::Id::from(3)],
        );
    }

    #[test]
    fn parses_role_ignoring_case() {
        assert_eq!(Role::from_str("SELLER").unwrap(), Role::Seller);
        assert_eq!(Role::from_str("customer").unwrap(), Role::Customer);
        assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
        assert!(Role::from_str("broker").is_err());

        assert_eq!(Role::Customer.to_string(), "CUSTOMER");
    }

    #[test]
    fn only_sellers_and_customers_are_registrable() {
        assert!(Role::Seller.is_registrable());
        assert!(Role::Customer.is_registrable());
        assert!(!Role::Admin.is_registrable());
    }
}
