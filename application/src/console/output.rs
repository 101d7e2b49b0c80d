//! [`Output`] rendering.

use std::fmt;

use itertools::Itertools as _;
use service::{
    domain::{house::ConstructionYear, House, User},
    read,
};

/// Usage printed by the `HELP` command.
pub const HELP: &str = "\
Available commands (keywords are case-insensitive):
  ADD_USER     <token> <role> <name> <last> <nationalId> <phone> <address> [salary]
  REMOVE_USER  <token> <nationalId>
  ADD_HOUSE    <token> <ownerName> <ownerLast> <price> <area> <address> <rooms> <parking> <year>
  REMOVE_HOUSE <token> <ownerName> <ownerLast> <houseId>
  LIST_USERS
  REPORT
  SEARCH_USER  <token> <key> <value>   keys: name, last, ID, phone, address, userType
  SEARCH_HOUSE <token> <key> <value>   keys: id, price, area, address, rooms, parking, construction
  OPTIONS      <name> <last>
  PURCHASE     <ownerName> <ownerLast> <houseId> <buyerName> <buyerLast>
  HELP
  EXIT";

/// Successful outcome of a console line.
#[derive(Clone, Debug)]
pub enum Output {
    /// [`User`] has been registered.
    UserAdded(User),

    /// [`User`] has been removed.
    UserRemoved(User),

    /// [`House`] has been put up for sale.
    HouseAdded(House),

    /// [`House`] has been removed.
    HouseRemoved(House),

    /// [`House`] has been purchased.
    Purchased(House),

    /// Listed [`User`]s.
    Users(Vec<User>),

    /// Listed [`House`]s.
    Houses(Vec<House>),

    /// Overview of the whole registry.
    Report {
        /// Reported data.
        report: read::Report,

        /// Year the [`House`] ages are counted to.
        current_year: ConstructionYear,
    },

    /// Usage.
    Help,

    /// Session is over.
    Farewell,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserAdded(u) => {
                write!(f, "User added: {}", UserLine(u))
            }
            Self::UserRemoved(u) => {
                write!(f, "User removed: {}", UserLine(u))
            }
            Self::HouseAdded(h) => {
                write!(f, "House added: {}", HouseLine(h, None))
            }
            Self::HouseRemoved(h) => {
                write!(f, "House removed: {}", HouseLine(h, None))
            }
            Self::Purchased(h) => {
                write!(f, "House purchased: {}", HouseLine(h, None))
            }
            Self::Users(users) if users.is_empty() => {
                write!(f, "No users found")
            }
            Self::Users(users) => write!(
                f,
                "{}",
                users.iter().map(UserLine).format("\n"),
            ),
            Self::Houses(houses) if houses.is_empty() => {
                write!(f, "No houses found")
            }
            Self::Houses(houses) => write!(
                f,
                "{}",
                houses.iter().map(|h| HouseLine(h, None)).format("\n"),
            ),
            Self::Report {
                report,
                current_year,
            } => {
                for user in &report.users {
                    writeln!(f, "{}", UserLine(user))?;
                    for house in user.houses() {
                        writeln!(
                            f,
                            "    {}",
                            HouseLine(house, Some(*current_year)),
                        )?;
                    }
                }
                write!(
                    f,
                    "Total: {} user(s), {} house(s), {} sold",
                    report.users.len(),
                    report.total_houses,
                    report.sold_houses,
                )
            }
            Self::Help => write!(f, "{HELP}"),
            Self::Farewell => write!(f, "Goodbye!"),
        }
    }
}

/// Single-line rendering of a [`User`].
struct UserLine<'u>(&'u User);

impl fmt::Display for UserLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(user) = self;
        let person = &user.person;

        write!(
            f,
            "{} | ID: {} | phone: {} | address: {} | {} | salary: {}",
            person.full_name(),
            person.national_id(),
            person.phone(),
            person.address(),
            user.role,
            user.salary,
        )?;
        if user.has_purchased_house {
            write!(f, " | purchased a house")?;
        }
        Ok(())
    }
}

/// Single-line rendering of a [`House`], optionally with its age as of the
/// provided year.
struct HouseLine<'h>(&'h House, Option<ConstructionYear>);

impl fmt::Display for HouseLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(house, current_year) = self;

        write!(
            f,
            "#{} | price: {} | area: {} | address: {} | rooms: {} | \
             parking: {} | built: {}",
            house.id(),
            house.price,
            house.area,
            house.address,
            house.num_rooms,
            if house.has_parking { "yes" } else { "no" },
            house.construction_year,
        )?;
        if let Some(age) = current_year.and_then(|y| house.age(y)) {
            write!(f, " | age: {age}")?;
        }
        let status = if house.is_purchased() { "sold" } else { "for sale" };
        write!(f, " | {status}")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;
    use service::{
        domain::{
            house::{self, Address, Area},
            person::{LastName, Name, NationalId, Phone},
            user::{self, Role},
            House, Person, User,
        },
        read,
    };

    use super::Output;

    fn seller() -> User {
        let mut user = User::new(
            user::Id::from(1),
            Person::new(
                Name::new("Ali").unwrap(),
                LastName::new("Rad").unwrap(),
                NationalId::new("42").unwrap(),
                Phone::new("0912").unwrap(),
                Address::new("Tehran").unwrap(),
            ),
            Role::Seller,
            Money::ZERO,
        );
        user.add_house(House::new(
            house::Id::from(3),
            user.id,
            Money::new(100),
            Area::from_str("80").unwrap(),
            Address::new("Karaj").unwrap(),
            2,
            true,
            2000,
        ));
        user
    }

    #[test]
    fn renders_empty_lists() {
        assert_eq!(Output::Users(vec![]).to_string(), "No users found");
        assert_eq!(Output::Houses(vec![]).to_string(), "No houses found");
    }

    #[test]
    fn renders_report_with_ages_and_totals() {
        let out = Output::Report {
            report: read::Report::from(vec![seller()]),
            current_year: 2024,
        }
        .to_string();

        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Ali Rad | ID: 42"), "{out}");
        assert!(lines[0].contains("SELLER"), "{out}");
        assert!(lines[1].starts_with("    #3 | price: 100"), "{out}");
        assert!(lines[1].contains("age: 24"), "{out}");
        assert!(lines[1].ends_with("for sale"), "{out}");
        assert_eq!(lines[2], "Total: 1 user(s), 1 house(s), 0 sold");
    }
}
