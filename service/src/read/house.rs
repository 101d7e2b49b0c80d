//! [`House`] read model definitions.

use common::{Flag, Money};

use crate::domain::{
    house::{self, Area, ConstructionYear, NumRooms},
    House,
};
#[cfg(doc)]
use crate::domain::Address;

use super::{parse_value, FilterError};

/// Exact-match filter of [`House`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Filter {
    /// [`House`] with the provided [`house::Id`].
    Id(house::Id),

    /// [`House`]s of the provided price.
    Price(Money),

    /// [`House`]s of the provided [`Area`].
    Area(Area),

    /// [`House`]s located at the provided [`Address`], compared verbatim.
    Address(String),

    /// [`House`]s with the provided number of rooms.
    Rooms(NumRooms),

    /// [`House`]s with or without a parking place.
    Parking(bool),

    /// [`House`]s built in the provided year.
    Construction(ConstructionYear),
}

impl Filter {
    /// Builds a new [`Filter`] searching by the provided `key` for the
    /// provided `value`.
    ///
    /// Known keys: `id`, `price`, `area`, `address`, `rooms`, `parking` and
    /// `construction`.
    ///
    /// # Errors
    ///
    /// If the `key` is unknown, or the `value` is not a number or a flag the
    /// `key` searches by.
    pub fn parse(key: &str, value: &str) -> Result<Self, FilterError> {
        Ok(match key {
            "id" => Self::Id(parse_value("id", value)?),
            "price" => Self::Price(parse_value("price", value)?),
            "area" => Self::Area(parse_value("area", value)?),
            "address" => Self::Address(value.to_owned()),
            "rooms" => Self::Rooms(parse_value("rooms", value)?),
            "parking" => {
                Self::Parking(parse_value::<Flag>("parking", value)?.into())
            }
            "construction" => {
                Self::Construction(parse_value("construction", value)?)
            }
            _ => return Err(FilterError::UnknownKey(key.to_owned())),
        })
    }

    /// Checks whether the provided [`House`] satisfies this [`Filter`].
    #[must_use]
    pub fn matches(&self, house: &House) -> bool {
        match self {
            Self::Id(id) => house.id() == *id,
            Self::Price(price) => house.price == *price,
            Self::Area(area) => house.area == *area,
            Self::Address(address) => {
                AsRef::<str>::as_ref(&house.address) == address.as_str()
            }
            Self::Rooms(rooms) => house.num_rooms == *rooms,
            Self::Parking(parking) => house.has_parking == *parking,
            Self::Construction(year) => house.construction_year == *year,
        }
    }
}

/// Selector of unsold [`House`]s affordable with the provided budget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Affordable(pub Money);

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use crate::{
        domain::{
            house::{self, Area},
            user, Address, House,
        },
        read::FilterError,
    };

    use super::Filter;

    fn house() -> House {
        House::new(
            house::Id::from(7),
            user::Id::from(1),
            Money::new(250),
            Area::from_str("95.5").unwrap(),
            Address::new("Rasht").unwrap(),
            4,
            true,
            2010,
        )
    }

    #[test]
    fn matches_exactly() {
        let h = house();

        for (key, value) in [
            ("id", "7"),
            ("price", "250"),
            ("area", "95.5"),
            ("area", "95.50"),
            ("address", "Rasht"),
            ("rooms", "4"),
            ("parking", "true"),
            ("parking", "TRUE"),
            ("construction", "2010"),
        ] {
            assert!(
                Filter::parse(key, value).unwrap().matches(&h),
                "{key} = {value}",
            );
        }

        for (key, value) in [
            ("id", "8"),
            ("price", "249"),
            ("area", "95"),
            ("address", "rasht"),
            ("address", " "),
            ("rooms", "3"),
            ("parking", "false"),
            ("construction", "2011"),
        ] {
            assert!(
                !Filter::parse(key, value).unwrap().matches(&h),
                "{key} = {value}",
            );
        }
    }

    #[test]
    fn rejects_malformed_values() {
        for (key, value) in [
            ("id", "seven"),
            ("price", "-1"),
            ("area", "wide"),
            ("rooms", "many"),
            ("parking", "maybe"),
            ("construction", "1e3"),
        ] {
            assert!(
                matches!(
                    Filter::parse(key, value),
                    Err(FilterError::InvalidValue { .. }),
                ),
                "{key} = {value}",
            );
        }

        assert_eq!(
            Filter::parse("floor", "1").unwrap_err(),
            FilterError::UnknownKey("floor".to_owned()),
        );
    }
}
