//! Service contains the business logic of the brokerage registry.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use common::{
    operations::{Allocate, Commit, Insert, Transact, Transacted},
    Money,
};
use derive_more::{Debug, Display, Error, From};
use secrecy::{ExposeSecret as _, SecretBox};
use tracerr::Traced;

use self::{
    domain::{
        user::{self, Role, Token},
        Person, User,
    },
    infra::{database, Database},
};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Super-user [`Token`] authorizing privileged commands.
    pub token: SecretBox<Token>,

    /// [`Person`] registered as the root administrator on start.
    pub admin: Person,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,
}

impl<Db> Service<Db> {
    /// Starts a new [`Service`] with the provided parameters, registering
    /// the root administrator [`User`] in the provided `database`.
    ///
    /// # Errors
    ///
    /// If failed to register the root administrator.
    pub async fn start(
        config: Config,
        database: Db,
    ) -> Result<Self, Traced<StartupError>>
    where
        Db: Database<Transact, Err = Traced<database::Error>>,
        Transacted<Db>: Database<
                Allocate<user::Id>,
                Ok = user::Id,
                Err = Traced<database::Error>,
            > + Database<Insert<User>, Err = Traced<database::Error>>
            + Database<Commit, Err = Traced<database::Error>>,
    {
        let this = Self { config, database };

        let admin = command::add_user::register(
            this.database(),
            this.config.admin.clone(),
            Role::Admin,
            Money::ZERO,
        )
        .await
        .map_err(tracerr::map_from_and_wrap!(=> StartupError))?;
        tracing::info!(
            user.id = %admin.id,
            user.name = %admin.person.full_name(),
            "root administrator registered",
        );

        Ok(this)
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Checks whether the provided [`Token`] grants super-user rights.
    #[must_use]
    pub fn is_super_user(&self, token: &Token) -> bool {
        self.config.token.expose_secret() == token
    }
}

/// Error of starting a [`Service`].
#[derive(Debug, Display, Error, From)]
pub enum StartupError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),
}
