//! [`Command`] for removing a [`House`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{house, person::FullName, user::Token, House, User},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for removing a [`House`] from its owner's holdings.
#[derive(Clone, Debug)]
pub struct RemoveHouse {
    /// [`Token`] of the one executing this [`Command`].
    pub actor: Token,

    /// [`FullName`] of the [`User`] owning the [`House`].
    pub owner: FullName,

    /// ID of the [`House`] to remove.
    pub house_id: house::Id,
}

impl<Db> Command<RemoveHouse> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<User>, FullName>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<Update<User>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = House;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: RemoveHouse) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RemoveHouse {
            actor,
            owner,
            house_id,
        } = cmd;

        if !self.is_super_user(&actor) {
            return Err(tracerr::new!(E::Unauthorized));
        }

        let mut owner = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(owner.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OwnerNotExists(owner))
            .map_err(tracerr::wrap!())?;
        let house = owner
            .remove_house(house_id)
            .ok_or(E::HouseNotExists(house_id))
            .map_err(tracerr::wrap!())?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Update(owner))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tracing::info!(house.id = %house.id(), "house removed");

        Ok(house)
    }
}

/// Error of [`RemoveHouse`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`House`] doesn't exist among the owner's ones.
    #[display("House `{_0}` not found")]
    HouseNotExists(#[error(not(source))] house::Id),

    /// Owner [`User`] doesn't exist.
    #[display("Owner `{_0}` not found")]
    OwnerNotExists(#[error(not(source))] FullName),

    /// [`Token`] doesn't grant super-user rights.
    #[display("Super-user rights required")]
    Unauthorized,
}
