//! Console handlers of the read-only [`Request`]s.
//!
//! [`Request`]: super::Request

use service::{query, Query as _};
use time::OffsetDateTime;

use crate::{define_error, AsError, Error};

use super::{Console, Output};

impl Console {
    /// Name of the [`tracing::Span`] for the queries.
    const QUERY_SPAN_NAME: &'static str = "console query";

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "LIST_USERS",
            otel.name = Self::QUERY_SPAN_NAME,
        ),
    )]
    pub(super) async fn list_users(&self) -> Result<Output, Error> {
        self.service()
            .execute(query::users::List::by(()))
            .await
            .map(Output::Users)
            .map_err(AsError::into_error)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "REPORT",
            otel.name = Self::QUERY_SPAN_NAME,
        ),
    )]
    pub(super) async fn report(&self) -> Result<Output, Error> {
        let year = OffsetDateTime::now_utc().year();
        let current_year = u16::try_from(year).map_err(|e| {
            Error::internal(&format!("cannot represent year {year}: {e}"))
        })?;

        self.service()
            .execute(query::Report)
            .await
            .map(|report| Output::Report {
                report,
                current_year,
            })
            .map_err(AsError::into_error)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "SEARCH_USER",
            filter = ?query.filter,
            otel.name = Self::QUERY_SPAN_NAME,
        ),
    )]
    pub(super) async fn search_users(
        &self,
        query: query::SearchUsers,
    ) -> Result<Output, Error> {
        self.service()
            .execute(query)
            .await
            .map(Output::Users)
            .map_err(AsError::into_error)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "SEARCH_HOUSE",
            filter = ?query.filter,
            otel.name = Self::QUERY_SPAN_NAME,
        ),
    )]
    pub(super) async fn search_houses(
        &self,
        query: query::SearchHouses,
    ) -> Result<Output, Error> {
        self.service()
            .execute(query)
            .await
            .map(Output::Houses)
            .map_err(AsError::into_error)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            console.command = "OPTIONS",
            customer = %query.customer,
            otel.name = Self::QUERY_SPAN_NAME,
        ),
    )]
    pub(super) async fn options(
        &self,
        query: query::HouseOptions,
    ) -> Result<Output, Error> {
        self.service()
            .execute(query)
            .await
            .map(Output::Houses)
            .map_err(AsError::into_error)
    }
}

impl AsError for query::search_users::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Unauthorized => Some(Error::unauthorized()),
        }
    }
}

impl AsError for query::search_houses::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Unauthorized => Some(Error::unauthorized()),
        }
    }
}

impl AsError for query::house_options::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[kind = PreconditionFailed]
                #[message = "User is not a customer"]
                UserNotCustomer,

                #[kind = NotFound]
                #[message = "User not found"]
                UserNotFound,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::UserNotCustomer(_) => Some(Error::UserNotCustomer.into()),
            Self::UserNotExists(_) => Some(Error::UserNotFound.into()),
        }
    }
}
