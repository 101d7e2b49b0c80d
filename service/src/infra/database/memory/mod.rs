//! In-memory [`Database`] implementation.

mod client;
mod impls;
mod repository;

use std::cell::{BorrowError, BorrowMutError, Ref, RefMut};

use derive_more::{Deref, Display, Error as StdError, From};
use tracerr::Traced;

use crate::{domain::user, infra::database};
#[cfg(doc)]
use crate::infra::Database;

pub use self::{
    client::{NonTx, Storage, Tx},
    repository::Repository,
};

/// In-memory [`Database`] client.
#[derive(Clone, Debug, Deref)]
pub struct Memory<S = NonTx>(S);

impl Memory {
    /// Creates a new [`Memory`] client over the provided [`Repository`].
    #[must_use]
    pub fn new(repository: Repository) -> Self {
        Self(NonTx::new(repository))
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(Repository::default())
    }
}

impl<S: Storage> Memory<S> {
    /// Borrows the underlying [`Repository`] for reading.
    fn repository(
        &self,
    ) -> Result<Ref<'_, Repository>, Traced<database::Error>> {
        self.0
            .read()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)
    }

    /// Borrows the underlying [`Repository`] for writing.
    fn repository_mut(
        &self,
    ) -> Result<RefMut<'_, Repository>, Traced<database::Error>> {
        self.0
            .write()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)
    }
}

/// In-memory database [`Error`].
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// [`Repository`] is being modified at the moment.
    #[display("`Repository` is busy: {_0}")]
    Busy(BorrowError),

    /// [`Repository`] is being accessed at the moment.
    #[display("`Repository` is locked: {_0}")]
    Locked(BorrowMutError),

    /// [`Tx`] has been committed already.
    #[display("`Tx` is committed already")]
    #[from(ignore)]
    Committed,

    /// [`User`] expected to be stored is missing.
    ///
    /// [`User`]: crate::domain::User
    #[display("`User(id: {_0})` is missing")]
    #[from(ignore)]
    MissingUser(#[error(not(source))] user::Id),
}
