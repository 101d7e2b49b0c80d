//! [`Storage`]s of the [`Memory`] client.

use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

#[cfg(doc)]
use super::Memory;
use super::{Error, Repository};

/// Storage of a [`Repository`] accessed by a [`Memory`] client.
pub trait Storage {
    /// Borrows the [`Repository`] for reading.
    ///
    /// # Errors
    ///
    /// If the [`Repository`] is being modified at the moment, or is not
    /// available anymore.
    fn read(&self) -> Result<Ref<'_, Repository>, Error>;

    /// Borrows the [`Repository`] for writing.
    ///
    /// # Errors
    ///
    /// If the [`Repository`] is being accessed at the moment, or is not
    /// available anymore.
    fn write(&self) -> Result<RefMut<'_, Repository>, Error>;
}

/// Non-transactional [`Storage`], applying changes immediately.
#[derive(Clone, Debug, Default)]
pub struct NonTx(Rc<RefCell<Repository>>);

impl NonTx {
    /// Wraps the provided [`Repository`] into a new [`NonTx`] [`Storage`].
    #[must_use]
    pub fn new(repository: Repository) -> Self {
        Self(Rc::new(RefCell::new(repository)))
    }

    /// Starts a new [`Tx`] over a snapshot of the current [`Repository`].
    ///
    /// # Errors
    ///
    /// If the [`Repository`] is being modified at the moment.
    pub fn transact(&self) -> Result<Tx, Error> {
        let snapshot = self.0.try_borrow()?.clone();
        Ok(Tx {
            origin: Rc::clone(&self.0),
            staged: RefCell::new(Some(snapshot)),
        })
    }
}

impl Storage for NonTx {
    fn read(&self) -> Result<Ref<'_, Repository>, Error> {
        Ok(self.0.try_borrow()?)
    }

    fn write(&self) -> Result<RefMut<'_, Repository>, Error> {
        Ok(self.0.try_borrow_mut()?)
    }
}

/// Transactional [`Storage`], staging changes on a [`Repository`] snapshot
/// until [`Tx::commit()`] is called.
///
/// Dropping a [`Tx`] without committing discards all its changes.
#[derive(Debug)]
pub struct Tx {
    /// [`Repository`] the changes are committed into.
    origin: Rc<RefCell<Repository>>,

    /// [`Repository`] snapshot with the staged changes.
    ///
    /// [`None`] once committed.
    staged: RefCell<Option<Repository>>,
}

impl Tx {
    /// Replaces the original [`Repository`] with the staged one.
    ///
    /// # Errors
    ///
    /// If this [`Tx`] is committed already, or the original [`Repository`]
    /// is being accessed at the moment.
    pub fn commit(&self) -> Result<(), Error> {
        let mut origin = self.origin.try_borrow_mut()?;
        let staged = self.staged.try_borrow_mut()?.take();
        *origin = staged.ok_or(Error::Committed)?;
        Ok(())
    }
}

impl Storage for Tx {
    fn read(&self) -> Result<Ref<'_, Repository>, Error> {
        Ref::filter_map(self.staged.try_borrow()?, Option::as_ref)
            .map_err(|_| Error::Committed)
    }

    fn write(&self) -> Result<RefMut<'_, Repository>, Error> {
        RefMut::filter_map(self.staged.try_borrow_mut()?, Option::as_mut)
            .map_err(|_| Error::Committed)
    }
}
