//! [`Command`] for putting up a new [`House`] for sale.

use common::{
    operations::{Allocate, By, Commit, Insert, Select, Transact, Transacted},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        house::{self, Address, Area, ConstructionYear, NumRooms},
        person::FullName,
        user::{Role, Token},
        House, User,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for putting up a new [`House`] for sale.
#[derive(Clone, Debug)]
pub struct AddHouse {
    /// [`Token`] of the one executing this [`Command`].
    pub actor: Token,

    /// [`FullName`] of the seller owning a new [`House`].
    pub owner: FullName,

    /// Asking price of a new [`House`].
    pub price: Money,

    /// [`Area`] of a new [`House`].
    pub area: Area,

    /// [`Address`] of a new [`House`].
    pub address: Address,

    /// Number of rooms in a new [`House`].
    pub num_rooms: NumRooms,

    /// Indicator whether a new [`House`] has a parking place.
    pub has_parking: bool,

    /// Year a new [`House`] was built in.
    pub construction_year: ConstructionYear,
}

impl<Db> Command<AddHouse> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<User>, FullName>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Allocate<house::Id>,
            Ok = house::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<House>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = House;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddHouse) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddHouse {
            actor,
            owner,
            price,
            area,
            address,
            num_rooms,
            has_parking,
            construction_year,
        } = cmd;

        if !self.is_super_user(&actor) {
            return Err(tracerr::new!(E::Unauthorized));
        }

        let owner = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(owner.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OwnerNotExists(owner))
            .map_err(tracerr::wrap!())?;
        if owner.role != Role::Seller {
            return Err(tracerr::new!(E::OwnerNotSeller(
                owner.person.full_name()
            )));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let id = tx
            .execute(Allocate::<house::Id>::new())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let house = House::new(
            id,
            owner.id,
            price,
            area,
            address,
            num_rooms,
            has_parking,
            construction_year,
        );

        tx.execute(Insert(house.clone()))
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
            owner.id = %owner.id,
            "house added",
        );

        Ok(house)
    }
}

/// Error of [`AddHouse`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Owner [`User`] doesn't exist.
    #[display("Owner `{_0}` not found")]
    OwnerNotExists(#[error(not(source))] FullName),

    /// Owner [`User`] is not a seller.
    #[display("`{_0}` is not a seller")]
    OwnerNotSeller(#[error(not(source))] FullName),

    /// [`Token`] doesn't grant super-user rights.
    #[display("Super-user rights required")]
    Unauthorized,
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use crate::{
        command::Command as _,
        domain::{
            house::{self, Address, Area},
            user::Role,
        },
        test_support::{
            add_house, add_user, full_name, house_ids, intruder, service,
            token, user,
        },
    };

    use super::{AddHouse, ExecutionError};

    fn cmd(owner: &str) -> AddHouse {
        AddHouse {
            actor: token(),
            owner: full_name(owner, "Seller"),
            price: Money::new(100),
            area: Area::from_str("80.5").unwrap(),
            address: Address::new("Tabriz").unwrap(),
            num_rooms: 2,
            has_parking: false,
            construction_year: 1999,
        }
    }

    #[tokio::test]
    async fn adds_house_to_seller() {
        let svc = service().await;
        let seller =
            add_user(&svc, "Ali", "Seller", "1", Role::Seller, 0).await;

        let house = svc.execute(cmd("Ali")).await.unwrap();

        assert_eq!(house.owner(), seller.id);
        assert!(!house.is_purchased());
        assert_eq!(house.area, Area::from_str("80.5").unwrap());
        assert_eq!(
            house_ids(&user(&svc, "Ali").await),
            [house.id()],
        );
    }

    #[tokio::test]
    async fn allocates_increasing_ids() {
        let svc = service().await;
        drop(add_user(&svc, "Ali", "Seller", "1", Role::Seller, 0).await);
        drop(add_user(&svc, "Reza", "Seller", "2", Role::Seller, 0).await);

        let first = add_house(&svc, full_name("Ali", "Seller"), 10).await;
        let second = add_house(&svc, full_name("Reza", "Seller"), 20).await;
        let third = add_house(&svc, full_name("Ali", "Seller"), 30).await;

        assert_eq!(first.id(), house::Id::from(1));
        assert!(first.id() < second.id());
        assert!(second.id() < third.id());
    }

    #[tokio::test]
    async fn rejects_missing_owner() {
        let svc = service().await;

        let err = svc.execute(cmd("Nobody")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::OwnerNotExists(_)));
    }

    #[tokio::test]
    async fn rejects_non_seller_owner() {
        let svc = service().await;
        drop(add_user(&svc, "Ali", "Seller", "1", Role::Customer, 500).await);

        let err = svc.execute(cmd("Ali")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::OwnerNotSeller(_)));
        assert!(!user(&svc, "Ali").await.owns_houses());
    }

    #[tokio::test]
    async fn rejects_unauthorized() {
        let svc = service().await;
        drop(add_user(&svc, "Ali", "Seller", "1", Role::Seller, 0).await);

        let err = svc
            .execute(AddHouse {
                actor: intruder(),
                ..cmd("Ali")
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Unauthorized));
        assert!(!user(&svc, "Ali").await.owns_houses());
    }
}
