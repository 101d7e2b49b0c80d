//! [`SearchUsers`] definition.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{user::Token, User},
    infra::{database, Database},
    read::user::Filter,
    Query, Service,
};

/// [`Query`] for [`User`]s exactly matching a [`Filter`].
#[derive(Clone, Debug)]
pub struct SearchUsers {
    /// [`Token`] of the one executing this [`Query`].
    pub actor: Token,

    /// [`Filter`] to match [`User`]s against.
    pub filter: Filter,
}

impl<Db> Query<SearchUsers> for Service<Db>
where
    Db: Database<
        Select<By<Vec<User>, Filter>>,
        Ok = Vec<User>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<User>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: SearchUsers) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SearchUsers { actor, filter } = query;

        if !self.is_super_user(&actor) {
            return Err(tracerr::new!(E::Unauthorized));
        }

        self.database()
            .execute(Select(By::new(filter)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SearchUsers`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Token`] doesn't grant super-user rights.
    #[display("Super-user rights required")]
    Unauthorized,
}
