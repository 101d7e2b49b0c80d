//! [`HouseOptions`] definition.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{person::FullName, user::Role, House, User},
    infra::{database, Database},
    read::house::Affordable,
    Query, Service,
};

/// [`Query`] for unsold [`House`]s a customer can afford with their salary.
#[derive(Clone, Debug)]
pub struct HouseOptions {
    /// [`FullName`] of the customer.
    pub customer: FullName,
}

impl<Db> Query<HouseOptions> for Service<Db>
where
    Db: Database<
            Select<By<Option<User>, FullName>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<House>, Affordable>>,
            Ok = Vec<House>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Vec<House>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        query: HouseOptions,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let HouseOptions { customer } = query;

        let customer = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(customer.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(customer))
            .map_err(tracerr::wrap!())?;
        if customer.role != Role::Customer {
            return Err(tracerr::new!(E::UserNotCustomer(
                customer.person.full_name()
            )));
        }

        self.database()
            .execute(Select(By::new(Affordable(customer.salary))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`HouseOptions`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`User`] is not a customer.
    #[display("`{_0}` is not a customer")]
    UserNotCustomer(#[error(not(source))] FullName),

    /// [`User`] doesn't exist.
    #[display("User `{_0}` not found")]
    UserNotExists(#[error(not(source))] FullName),
}
