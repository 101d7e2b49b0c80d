//! Console handlers of the mutating [`Request`]s.
//!
//! [`Request`]: super::Request

use service::{command, Command as _};

use crate::{define_error, AsError, Error};

use super::{Console, Output};

impl Console {
    /// Name of the [`tracing::Span`] for the mutations.
    const MUTATION_SPAN_NAME: &'static str = "console mutation";

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "ADD_USER",
            national_id = %cmd.person.national_id(),
            otel.name = Self::MUTATION_SPAN_NAME,
            role = %cmd.role,
        ),
    )]
    pub(super) async fn add_user(
        &self,
        cmd: command::AddUser,
    ) -> Result<Output, Error> {
        self.service()
            .execute(cmd)
            .await
            .map(Output::UserAdded)
            .map_err(AsError::into_error)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "REMOVE_USER",
            national_id = %cmd.national_id,
            otel.name = Self::MUTATION_SPAN_NAME,
        ),
    )]
    pub(super) async fn remove_user(
        &self,
        cmd: command::RemoveUser,
    ) -> Result<Output, Error> {
        self.service()
            .execute(cmd)
            .await
            .map(Output::UserRemoved)
            .map_err(AsError::into_error)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "ADD_HOUSE",
            otel.name = Self::MUTATION_SPAN_NAME,
            owner = %cmd.owner,
            price = %cmd.price,
        ),
    )]
    pub(super) async fn add_house(
        &self,
        cmd: command::AddHouse,
    ) -> Result<Output, Error> {
        self.service()
            .execute(cmd)
            .await
            .map(Output::HouseAdded)
            .map_err(AsError::into_error)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "REMOVE_HOUSE",
            house_id = %cmd.house_id,
            otel.name = Self::MUTATION_SPAN_NAME,
            owner = %cmd.owner,
        ),
    )]
    pub(super) async fn remove_house(
        &self,
        cmd: command::RemoveHouse,
    ) -> Result<Output, Error> {
        self.service()
            .execute(cmd)
            .await
            .map(Output::HouseRemoved)
            .map_err(AsError::into_error)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            buyer = %cmd.buyer,
            console.command = "PURCHASE",
            house_id = %cmd.house_id,
            otel.name = Self::MUTATION_SPAN_NAME,
            owner = %cmd.owner,
        ),
    )]
    pub(super) async fn purchase(
        &self,
        cmd: command::PurchaseHouse,
    ) -> Result<Output, Error> {
        self.service()
            .execute(cmd)
            .await
            .map(Output::Purchased)
            .map_err(AsError::into_error)
    }
}

impl AsError for command::add_user::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[kind = InvalidArgument]
                #[message = "Only `SELLER` and `CUSTOMER` users can be added"]
                RoleNotAllowed,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::RoleNotAllowed(_) => Some(Error::RoleNotAllowed.into()),
            Self::Unauthorized => Some(crate::Error::unauthorized()),
        }
    }
}

impl AsError for command::remove_user::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[kind = PreconditionFailed]
                #[message = "Administrators cannot be removed"]
                UserIsAdmin,

                #[kind = NotFound]
                #[message = "User not found"]
                UserNotFound,

                #[kind = PreconditionFailed]
                #[message = "User still owns houses"]
                UserOwnsHouses,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Unauthorized => Some(crate::Error::unauthorized()),
            Self::UserIsAdmin(_) => Some(Error::UserIsAdmin.into()),
            Self::UserNotExists(_) => Some(Error::UserNotFound.into()),
            Self::UserOwnsHouses(_) => Some(Error::UserOwnsHouses.into()),
        }
    }
}

impl AsError for command::add_house::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[kind = NotFound]
                #[message = "Owner not found"]
                OwnerNotFound,

                #[kind = PreconditionFailed]
                #[message = "Owner is not a seller"]
                OwnerNotSeller,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::OwnerNotExists(_) => Some(Error::OwnerNotFound.into()),
            Self::OwnerNotSeller(_) => Some(Error::OwnerNotSeller.into()),
            Self::Unauthorized => Some(crate::Error::unauthorized()),
        }
    }
}

impl AsError for command::remove_house::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[kind = NotFound]
                #[message = "House not found"]
                HouseNotFound,

                #[kind = NotFound]
                #[message = "Owner not found"]
                OwnerNotFound,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => Some(Error::HouseNotFound.into()),
            Self::OwnerNotExists(_) => Some(Error::OwnerNotFound.into()),
            Self::Unauthorized => Some(crate::Error::unauthorized()),
        }
    }
}

impl AsError for command::purchase_house::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[kind = PreconditionFailed]
                #[message = "Already owns a house"]
                AlreadyOwnsHouse,

                #[kind = NotFound]
                #[message = "Buyer not found"]
                BuyerNotFound,

                #[kind = NotFound]
                #[message = "House not found"]
                HouseNotFound,

                #[kind = PreconditionFailed]
                #[message = "House already sold"]
                HouseSold,

                #[kind = PreconditionFailed]
                #[message = "Insufficient funds"]
                InsufficientFunds,

                #[kind = NotFound]
                #[message = "Owner not found"]
                OwnerNotFound,

                #[kind = PreconditionFailed]
                #[message = "Self purchase"]
                SelfPurchase,
            }
        }

        match self {
            Self::AlreadyOwnsHouse(_) => Some(Error::AlreadyOwnsHouse.into()),
            Self::BuyerNotExists(_) => Some(Error::BuyerNotFound.into()),
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => Some(Error::HouseNotFound.into()),
            Self::HouseSold(_) => Some(Error::HouseSold.into()),
            Self::InsufficientFunds(_) => {
                Some(Error::InsufficientFunds.into())
            }
            Self::OwnerNotExists(_) => Some(Error::OwnerNotFound.into()),
            Self::SelfPurchase => Some(Error::SelfPurchase.into()),
        }
    }
}
