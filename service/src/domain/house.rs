//! [`House`] definitions.

use std::{mem, str};

use common::Money;
use derive_more::{Display, From, FromStr, Into};
use rust_decimal::Decimal;

use crate::domain::user;
#[cfg(doc)]
use crate::domain::User;

pub use super::Address;

/// House put up for sale by a seller.
///
/// A [`House`] starts unsold, owned by the seller it was registered under,
/// and becomes sold (for good) once its ownership is transferred to a buyer
/// via [`House::change_owner()`].
#[derive(Clone, Debug, PartialEq)]
pub struct House {
    /// ID of this [`House`].
    id: Id,

    /// Asking price of this [`House`].
    pub price: Money,

    /// [`Area`] of this [`House`].
    pub area: Area,

    /// [`Address`] of this [`House`].
    pub address: Address,

    /// Number of rooms in this [`House`].
    pub num_rooms: NumRooms,

    /// Indicator whether this [`House`] has a parking place.
    pub has_parking: bool,

    /// Year this [`House`] was built in.
    pub construction_year: ConstructionYear,

    /// Indicator whether this [`House`] has been sold.
    purchased: bool,

    /// ID of the [`User`] owning this [`House`].
    owner: user::Id,
}

impl House {
    /// Creates a new unsold [`House`] owned by the provided `owner`.
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    #[must_use]
    pub fn new(
        id: Id,
        owner: user::Id,
        price: Money,
        area: Area,
        address: Address,
        num_rooms: NumRooms,
        has_parking: bool,
        construction_year: ConstructionYear,
    ) -> Self {
        Self {
            id,
            price,
            area,
            address,
            num_rooms,
            has_parking,
            construction_year,
            purchased: false,
            owner,
        }
    }

    /// Returns ID of this [`House`].
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns ID of the [`User`] owning this [`House`].
    #[must_use]
    pub fn owner(&self) -> user::Id {
        self.owner
    }

    /// Indicates whether this [`House`] has been sold.
    #[must_use]
    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    /// Indicates whether this [`House`] is still for sale and can be paid
    /// with the provided `budget`.
    #[must_use]
    pub fn is_affordable(&self, budget: Money) -> bool {
        !self.purchased && budget.covers(self.price)
    }

    /// Transfers this [`House`] to the `new_owner`, marking it as sold.
    ///
    /// Returns ID of the previous owner.
    pub fn change_owner(&mut self, new_owner: user::Id) -> user::Id {
        self.purchased = true;
        mem::replace(&mut self.owner, new_owner)
    }

    /// Returns age of this [`House`] in years, as of the `current_year`.
    ///
    /// [`None`] is returned if this [`House`] is built after `current_year`.
    #[must_use]
    pub fn age(&self, current_year: ConstructionYear) -> Option<u16> {
        current_year.checked_sub(self.construction_year)
    }
}

/// ID of a [`House`].
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

/// Area of a [`House`] in square meters.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Area(Decimal);

impl Area {
    /// Creates a new [`Area`] if the provided `value` is non-negative.
    ///
    /// Negative zero is accepted as zero.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        let value = value.normalize();
        (value.is_zero() || value.is_sign_positive())
            .then(|| Self(value.abs()))
    }
}

impl str::FromStr for Area {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Decimal>()
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Area`")
    }
}

/// Number of rooms in a [`House`].
pub type NumRooms = u16;

/// Year of a [`House`] construction.
pub type ConstructionYear = u16;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use crate::domain::user;

    use super::{Address, Area, House, Id};

    fn house(price: u64) -> House {
        House::new(
            Id::from(1),
            user::Id::from(10),
            Money::new(price),
            Area::from_str("120.5").unwrap(),
            Address::new("Isfahan").unwrap(),
            3,
            true,
            2001,
        )
    }

    #[test]
    fn starts_unsold() {
        let h = house(100);

        assert!(!h.is_purchased());
        assert_eq!(h.owner(), user::Id::from(10));
    }

    #[test]
    fn change_owner_sells_for_good() {
        let mut h = house(100);

        let previous = h.change_owner(user::Id::from(20));

        assert_eq!(previous, user::Id::from(10));
        assert_eq!(h.owner(), user::Id::from(20));
        assert!(h.is_purchased());

        let previous = h.change_owner(user::Id::from(30));

        assert_eq!(previous, user::Id::from(20));
        assert!(h.is_purchased());
    }

    #[test]
    fn affordability() {
        let mut h = house(100);

        assert!(h.is_affordable(Money::new(100)));
        assert!(h.is_affordable(Money::new(150)));
        assert!(!h.is_affordable(Money::new(99)));

        _ = h.change_owner(user::Id::from(20));

        assert!(!h.is_affordable(Money::new(150)));
    }

    #[test]
    fn age() {
        let h = house(100);

        assert_eq!(h.age(2025), Some(24));
        assert_eq!(h.age(2001), Some(0));
        assert_eq!(h.age(2000), None);
    }

    #[test]
    fn negative_zero_area_is_zero() {
        let area = Area::from_str("-0").unwrap();

        assert_eq!(area, Area::from_str("0").unwrap());
        assert_eq!(area.to_string(), "0");
    }

    #[test]
    fn parses_area() {
        assert_eq!(
            Area::from_str("120.50").unwrap(),
            Area::from_str("120.5").unwrap(),
        );
        assert_eq!(Area::from_str("0").unwrap().to_string(), "0");

        assert!(Area::from_str("-1").is_err());
        assert!(Area::from_str("-0.5").is_err());
        assert!(Area::from_str("big").is_err());
    }
}
