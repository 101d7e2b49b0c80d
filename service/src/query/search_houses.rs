//! [`SearchHouses`] definition.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{user::Token, House},
    infra::{database, Database},
    read::house::Filter,
    Query, Service,
};

/// [`Query`] for [`House`]s exactly matching a [`Filter`].
#[derive(Clone, Debug)]
pub struct SearchHouses {
    /// [`Token`] of the one executing this [`Query`].
    pub actor: Token,

    /// [`Filter`] to match [`House`]s against.
    pub filter: Filter,
}

impl<Db> Query<SearchHouses> for Service<Db>
where
    Db: Database<
        Select<By<Vec<House>, Filter>>,
        Ok = Vec<House>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<House>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        query: SearchHouses,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SearchHouses { actor, filter } = query;

        if !self.is_super_user(&actor) {
            return Err(tracerr::new!(E::Unauthorized));
        }

        self.database()
            .execute(Select(By::new(filter)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SearchHouses`] [`Query`] execution.
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

#[cfg(test)]
mod spec {
    use crate::{
        domain::user::Role,
        query::Query as _,
        read::house::Filter,
        test_support::{
            add_house, add_user, full_name, intruder, service, token,
        },
    };

    use super::{ExecutionError, SearchHouses};

    #[tokio::test]
    async fn searches_across_owners() {
        let svc = service().await;
        drop(add_user(&svc, "Ali", "Rad", "1", Role::Seller, 0).await);
        drop(add_user(&svc, "Reza", "Rad", "2", Role::Seller, 0).await);
        let cheap = add_house(&svc, full_name("Ali", "Rad"), 100).await;
        drop(add_house(&svc, full_name("Ali", "Rad"), 900).await);
        let also_cheap = add_house(&svc, full_name("Reza", "Rad"), 100).await;

        let found = svc
            .execute(SearchHouses {
                actor: token(),
                filter: Filter::parse("price", "100").unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(found, [cheap.clone(), also_cheap]);

        let found = svc
            .execute(SearchHouses {
                actor: token(),
                filter: Filter::parse("id", &cheap.id().to_string()).unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(found, [cheap]);

        let found = svc
            .execute(SearchHouses {
                actor: token(),
                filter: Filter::parse("parking", "false").unwrap(),
            })
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn rejects_unauthorized() {
        let svc = service().await;

        let err = svc
            .execute(SearchHouses {
                actor: intruder(),
                filter: Filter::parse("rooms", "3").unwrap(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Unauthorized));
    }
}
