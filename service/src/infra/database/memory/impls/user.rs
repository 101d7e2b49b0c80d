//! [`User`]-related [`Database`] implementations.

use common::operations::{Allocate, By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{
        person::{FullName, NationalId},
        user, User,
    },
    infra::{
        database::{
            self,
            memory::{self, Storage},
        },
        Database, Memory,
    },
    read,
};

impl<S: Storage> Database<Allocate<user::Id>> for Memory<S> {
    type Ok = user::Id;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Allocate<user::Id>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.repository_mut()?.next_user_id())
    }
}

impl<S: Storage> Database<Select<By<Option<User>, FullName>>> for Memory<S> {
    type Ok = Option<User>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, FullName>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.repository()?.get_user(&by.into_inner()).cloned())
    }
}

impl<S: Storage> Database<Select<By<Option<User>, NationalId>>>
    for Memory<S>
{
    type Ok = Option<User>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, NationalId>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.repository()?.find_user(&by.into_inner()).cloned())
    }
}

impl<S: Storage> Database<Select<By<Vec<User>, ()>>> for Memory<S> {
    type Ok = Vec<User>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.repository()?.users().to_vec())
    }
}

impl<S: Storage> Database<Select<By<Vec<User>, read::user::Filter>>>
    for Memory<S>
{
    type Ok = Vec<User>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<User>, read::user::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self
            .repository()?
            .search_users(&filter)
            .cloned()
            .collect())
    }
}

impl<S: Storage> Database<Insert<User>> for Memory<S> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(user): Insert<User>,
    ) -> Result<Self::Ok, Self::Err> {
        self.repository_mut()?.add_user(user);
        Ok(())
    }
}

impl<S: Storage> Database<Update<User>> for Memory<S> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(user): Update<User>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut repo = self.repository_mut()?;
        let stored = repo
            .user_mut(user.id)
            .ok_or(memory::Error::MissingUser(user.id))
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;
        *stored = user;
        Ok(())
    }
}

impl<S: Storage> Database<Delete<By<Option<User>, NationalId>>>
    for Memory<S>
{
    type Ok = Option<User>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Option<User>, NationalId>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.repository_mut()?.remove_user(&by.into_inner()))
    }
}
