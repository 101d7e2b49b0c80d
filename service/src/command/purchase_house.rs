//! [`Command`] for purchasing a [`House`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{house, person::FullName, House, User},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for transferring a [`House`] from its seller to a buyer.
///
/// Every precondition is checked before anything is changed, and the
/// ownership transfer itself is applied in a single transaction.
#[derive(Clone, Debug)]
pub struct PurchaseHouse {
    /// [`FullName`] of the [`User`] currently owning the [`House`].
    pub owner: FullName,

    /// ID of the [`House`] to purchase.
    pub house_id: house::Id,

    /// [`FullName`] of the [`User`] purchasing the [`House`].
    pub buyer: FullName,
}

impl<Db> Command<PurchaseHouse> for Service<Db>
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

    async fn execute(
        &self,
        cmd: PurchaseHouse,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let PurchaseHouse {
            owner,
            house_id,
            buyer,
        } = cmd;

        let mut owner = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(owner.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OwnerNotExists(owner))
            .map_err(tracerr::wrap!())?;
        let house = owner
            .get_house(house_id)
            .ok_or(E::HouseNotExists(house_id))
            .map_err(tracerr::wrap!())?;
        if house.is_purchased() {
            return Err(tracerr::new!(E::HouseSold(house_id)));
        }
        let price = house.price;

        let mut buyer = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(buyer.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BuyerNotExists(buyer))
            .map_err(tracerr::wrap!())?;
        if !buyer.salary.covers(price) {
            return Err(tracerr::new!(E::InsufficientFunds(house_id)));
        }
        if buyer.id == owner.id {
            return Err(tracerr::new!(E::SelfPurchase));
        }
        if buyer.has_purchased_house || buyer.owns_houses() {
            return Err(tracerr::new!(E::AlreadyOwnsHouse(
                buyer.person.full_name()
            )));
        }

        let mut house = owner
            .remove_house(house_id)
            .ok_or(E::HouseNotExists(house_id))
            .map_err(tracerr::wrap!())?;
        let seller_id = house.change_owner(buyer.id);
        buyer.add_house(house.clone());
        buyer.has_purchased_house = true;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Update(owner))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Update(buyer))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tracing::info!(
            house.id = %house.id(),
            house.price = %house.price,
            seller.id = %seller_id,
            buyer.id = %house.owner(),
            "house purchased",
        );

        Ok(house)
    }
}

/// Error of [`PurchaseHouse`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Buyer already owns a [`House`].
    #[display("`{_0}` already owns a house")]
    AlreadyOwnsHouse(#[error(not(source))] FullName),

    /// Buyer [`User`] doesn't exist.
    #[display("Buyer `{_0}` not found")]
    BuyerNotExists(#[error(not(source))] FullName),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`House`] doesn't exist among the owner's ones.
    #[display("House `{_0}` not found")]
    HouseNotExists(#[error(not(source))] house::Id),

    /// [`House`] has been sold already.
    #[display("House `{_0}` is already sold")]
    HouseSold(#[error(not(source))] house::Id),

    /// Buyer's salary doesn't cover the [`House`] price.
    #[display("Insufficient funds to purchase house `{_0}`")]
    InsufficientFunds(#[error(not(source))] house::Id),

    /// Owner [`User`] doesn't exist.
    #[display("Owner `{_0}` not found")]
    OwnerNotExists(#[error(not(source))] FullName),

    /// Buyer and owner are the same [`User`].
    #[display("Cannot purchase own house")]
    SelfPurchase,
}
