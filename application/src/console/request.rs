//! [`Request`] parsing.

use std::{
    fmt,
    str::{FromStr, SplitWhitespace},
};

use common::{define_kind, Flag, Money};
use derive_more::{Display, Error as StdError, From};
use service::{
    command,
    domain::{
        house::{self, Address, Area},
        person::{FullName, LastName, Name, NationalId, Phone},
        user::{Role, Token},
        Person,
    },
    query,
    read::{self, FilterError},
};

use crate::{error::Kind, AsError, Error};

define_kind! {
    #[doc = "Keyword opening a console line."]
    enum Keyword {
        #[doc = "Registers a new user."]
        AddUser = 1,

        #[doc = "Removes a user."]
        RemoveUser = 2,

        #[doc = "Puts a new house up for sale."]
        AddHouse = 3,

        #[doc = "Removes a house."]
        RemoveHouse = 4,

        #[doc = "Lists all users."]
        ListUsers = 5,

        #[doc = "Prints users along with their houses."]
        Report = 6,

        #[doc = "Searches users."]
        SearchUser = 7,

        #[doc = "Searches houses."]
        SearchHouse = 8,

        #[doc = "Lists houses a customer can afford."]
        Options = 9,

        #[doc = "Purchases a house."]
        Purchase = 10,

        #[doc = "Prints usage."]
        Help = 11,

        #[doc = "Ends the session."]
        Exit = 12,
    }
}

/// Parsed console line.
#[derive(Clone, Debug)]
pub enum Request {
    /// Registers a new user.
    AddUser(command::AddUser),

    /// Removes a user.
    RemoveUser(command::RemoveUser),

    /// Puts a new house up for sale.
    AddHouse(command::AddHouse),

    /// Removes a house.
    RemoveHouse(command::RemoveHouse),

    /// Lists all users.
    ListUsers,

    /// Prints users along with their houses.
    Report,

    /// Searches users.
    SearchUser(query::SearchUsers),

    /// Searches houses.
    SearchHouse(query::SearchHouses),

    /// Lists houses a customer can afford.
    Options(query::HouseOptions),

    /// Purchases a house.
    Purchase(command::PurchaseHouse),

    /// Prints usage.
    Help,

    /// Ends the session.
    Exit,

    /// Line opened with an unknown keyword.
    Unknown(String),
}

impl Request {
    /// Parses the provided console `line`.
    ///
    /// [`None`] is returned for blank lines.
    ///
    /// # Errors
    ///
    /// If the arguments don't fit the keyword's layout.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let Ok(keyword) = first.parse::<Keyword>() else {
            return Ok(Some(Self::Unknown(first.to_owned())));
        };
        let mut args = Args(words);

        let req = match keyword {
            Keyword::AddUser => {
                let actor = args.next::<Token>("token")?;
                let role = args.next::<Role>("role")?;
                let person = Person::new(
                    args.next::<Name>("name")?,
                    args.next::<LastName>("last")?,
                    args.next::<NationalId>("nationalId")?,
                    args.next::<Phone>("phone")?,
                    args.next::<Address>("address")?,
                );
                let salary = args.optional::<Money>("salary")?;
                Self::AddUser(command::AddUser {
                    actor,
                    person,
                    role,
                    salary: salary.unwrap_or_default(),
                })
            }
            Keyword::RemoveUser => Self::RemoveUser(command::RemoveUser {
                actor: args.next("token")?,
                national_id: args.next("nationalId")?,
            }),
            Keyword::AddHouse => Self::AddHouse(command::AddHouse {
                actor: args.next("token")?,
                owner: args.full_name("owner")?,
                price: args.next("price")?,
                area: args.next::<Area>("area")?,
                address: args.next("address")?,
                num_rooms: args.next("rooms")?,
                has_parking: args.next::<Flag>("parking")?.into(),
                construction_year: args.next("year")?,
            }),
            Keyword::RemoveHouse => Self::RemoveHouse(command::RemoveHouse {
                actor: args.next("token")?,
                owner: args.full_name("owner")?,
                house_id: args.next::<house::Id>("houseId")?,
            }),
            Keyword::ListUsers => Self::ListUsers,
            Keyword::Report => Self::Report,
            Keyword::SearchUser => {
                let actor = args.next("token")?;
                let (key, value) = args.key_value()?;
                Self::SearchUser(query::SearchUsers {
                    actor,
                    filter: read::user::Filter::parse(key, value)?,
                })
            }
            Keyword::SearchHouse => {
                let actor = args.next("token")?;
                let (key, value) = args.key_value()?;
                Self::SearchHouse(query::SearchHouses {
                    actor,
                    filter: read::house::Filter::parse(key, value)?,
                })
            }
            Keyword::Options => Self::Options(query::HouseOptions {
                customer: args.full_name("customer")?,
            }),
            Keyword::Purchase => Self::Purchase(command::PurchaseHouse {
                owner: args.full_name("owner")?,
                house_id: args.next("houseId")?,
                buyer: args.full_name("buyer")?,
            }),
            Keyword::Help => Self::Help,
            Keyword::Exit => Self::Exit,
        };
        args.finish()?;

        Ok(Some(req))
    }
}

/// Positional arguments following a [`Keyword`].
struct Args<'l>(SplitWhitespace<'l>);

impl<'l> Args<'l> {
    /// Parses the next required argument.
    fn next<T>(&mut self, name: &'static str) -> Result<T, ParseError>
    where
        T: FromStr<Err: fmt::Display>,
    {
        self.optional(name)?
            .ok_or(ParseError::MissingArgument(name))
    }

    /// Parses the next argument, if any.
    fn optional<T>(
        &mut self,
        name: &'static str,
    ) -> Result<Option<T>, ParseError>
    where
        T: FromStr<Err: fmt::Display>,
    {
        self.0
            .next()
            .map(|arg| {
                arg.parse().map_err(|e: T::Err| ParseError::InvalidArgument {
                    name,
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    /// Parses the next two arguments as a [`FullName`].
    fn full_name(
        &mut self,
        name: &'static str,
    ) -> Result<FullName, ParseError> {
        Ok(FullName::new(self.next(name)?, self.next(name)?))
    }

    /// Takes the next two arguments as a search key and value.
    fn key_value(&mut self) -> Result<(&'l str, &'l str), ParseError> {
        let key = self.0.next().ok_or(ParseError::MissingArgument("key"))?;
        let value =
            self.0.next().ok_or(ParseError::MissingArgument("value"))?;
        Ok((key, value))
    }

    /// Ensures no arguments are left.
    fn finish(mut self) -> Result<(), ParseError> {
        match self.0.next() {
            Some(arg) => Err(ParseError::UnexpectedArgument(arg.to_owned())),
            None => Ok(()),
        }
    }
}

/// Error of parsing a [`Request`].
#[derive(Clone, Debug, Display, From, StdError)]
pub enum ParseError {
    /// Search filter cannot be built.
    #[display("{_0}")]
    Filter(FilterError),

    /// Argument cannot be parsed.
    #[display("invalid `{name}`: {reason}")]
    #[from(ignore)]
    InvalidArgument {
        /// Name of the argument.
        name: &'static str,

        /// Reason of the argument being invalid.
        reason: String,
    },

    /// Required argument is missing.
    #[display("missing `{_0}` argument")]
    #[from(ignore)]
    MissingArgument(#[error(not(source))] &'static str),

    /// More arguments than expected.
    #[display("unexpected argument `{_0}`")]
    #[from(ignore)]
    UnexpectedArgument(#[error(not(source))] String),
}

impl AsError for ParseError {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error::new(Kind::InvalidArgument, self))
    }
}
