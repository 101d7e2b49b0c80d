//! [`House`]-related [`Database`] implementations.

use common::operations::{Allocate, By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{house, House},
    infra::{
        database::{
            self,
            memory::{self, Storage},
        },
        Database, Memory,
    },
    read,
};

impl<S: Storage> Database<Allocate<house::Id>> for Memory<S> {
    type Ok = house::Id;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Allocate<house::Id>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.repository_mut()?.next_house_id())
    }
}

impl<S: Storage> Database<Select<By<Vec<House>, read::house::Filter>>>
    for Memory<S>
{
    type Ok = Vec<House>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<House>, read::house::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self
            .repository()?
            .search_houses(&filter)
            .cloned()
            .collect())
    }
}

impl<S: Storage> Database<Select<By<Vec<House>, read::house::Affordable>>>
    for Memory<S>
{
    type Ok = Vec<House>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<House>, read::house::Affordable>>,
    ) -> Result<Self::Ok, Self::Err> {
        let read::house::Affordable(budget) = by.into_inner();
        Ok(self
            .repository()?
            .houses()
            .filter(|h| h.is_affordable(budget))
            .cloned()
            .collect())
    }
}

impl<S: Storage> Database<Insert<House>> for Memory<S> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(house): Insert<House>,
    ) -> Result<Self::Ok, Self::Err> {
        let owner_id = house.owner();
        self.repository_mut()?
            .user_mut(owner_id)
            .ok_or(memory::Error::MissingUser(owner_id))
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .add_house(house);
        Ok(())
    }
}
