//! [`Database`] implementations for [`Memory`].

mod house;
mod user;

use common::operations::{Commit, Transact};
use tracerr::Traced;

use crate::infra::{
    database::{
        self,
        memory::{self, Tx},
    },
    Database,
};

use super::Memory;

impl Database<Transact> for Memory {
    type Ok = Memory<Tx>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        self.0
            .transact()
            .map(Memory)
            .map_err(tracerr::from_and_wrap!(=> memory::Error))
            .map_err(tracerr::map_from)
    }
}

impl Database<Commit> for Memory<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        self.0
            .commit()
            .map_err(tracerr::from_and_wrap!(=> memory::Error))
            .map_err(tracerr::map_from)
    }
}
