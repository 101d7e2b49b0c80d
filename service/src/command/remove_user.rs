//! [`Command`] for removing a [`User`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        person::NationalId,
        user::{Role, Token},
        User,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for removing a [`User`] by its [`NationalId`].
#[derive(Clone, Debug)]
pub struct RemoveUser {
    /// [`Token`] of the one executing this [`Command`].
    pub actor: Token,

    /// [`NationalId`] of the [`User`] to remove.
    pub national_id: NationalId,
}

impl<Db> Command<RemoveUser> for Service<Db>
where
    Db: Database<
            Select<By<Option<User>, NationalId>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Option<User>, NationalId>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: RemoveUser) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RemoveUser { actor, national_id } = cmd;

        if !self.is_super_user(&actor) {
            return Err(tracerr::new!(E::Unauthorized));
        }

        let user = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(national_id.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| E::UserNotExists(national_id.clone()))
            .map_err(tracerr::wrap!())?;
        if user.role == Role::Admin {
            return Err(tracerr::new!(E::UserIsAdmin(national_id)));
        }
        if user.owns_houses() {
            return Err(tracerr::new!(E::UserOwnsHouses(national_id)));
        }

        let removed = self
            .database()
            .execute(Delete(By::<Option<User>, _>::new(national_id.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(national_id))
            .map_err(tracerr::wrap!())?;
        tracing::info!(user.id = %removed.id, "user removed");

        Ok(removed)
    }
}

/// Error of [`RemoveUser`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Token`] doesn't grant super-user rights.
    #[display("Super-user rights required")]
    Unauthorized,

    /// [`User`] is an administrator.
    #[display("Administrator `{_0}` cannot be removed")]
    UserIsAdmin(#[error(not(source))] NationalId),

    /// [`User`] doesn't exist.
    #[display("User with ID `{_0}` not found")]
    UserNotExists(#[error(not(source))] NationalId),

    /// [`User`] still owns some houses.
    #[display("User with ID `{_0}` still owns houses")]
    UserOwnsHouses(#[error(not(source))] NationalId),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::Command as _,
        domain::{person::NationalId, user::Role},
        test_support::{
            add_house, add_user, full_name, intruder, service, token, users,
        },
    };

    use super::{ExecutionError, RemoveUser};

    fn cmd(id: &str) -> RemoveUser {
        RemoveUser {
            actor: token(),
            national_id: NationalId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn removes_first_match() {
        let svc = service().await;
        let first =
            add_user(&svc, "Sara", "Karimi", "42", Role::Customer, 10).await;
        let second =
            add_user(&svc, "Nima", "Karimi", "42", Role::Customer, 20).await;

        let removed = svc.execute(cmd("42")).await.unwrap();

        assert_eq!(removed, first);
        let left = users(&svc).await;
        assert_eq!(left.len(), 2);
        assert_eq!(left[1], second);
    }

    #[tokio::test]
    async fn rejects_missing_user() {
        let svc = service().await;

        let err = svc.execute(cmd("42")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::UserNotExists(_)));
    }

    #[tokio::test]
    async fn rejects_admin() {
        let svc = service().await;

        let err = svc.execute(cmd("0")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::UserIsAdmin(_)));
        assert_eq!(users(&svc).await.len(), 1);
    }

    #[tokio::test]
    async fn rejects_house_owner() {
        let svc = service().await;
        drop(add_user(&svc, "Ali", "Seller", "1", Role::Seller, 0).await);
        drop(add_house(&svc, full_name("Ali", "Seller"), 100).await);

        let err = svc.execute(cmd("1")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::UserOwnsHouses(_)));
        assert_eq!(users(&svc).await.len(), 2);
    }

    #[tokio::test]
    async fn rejects_unauthorized() {
        let svc = service().await;
        drop(add_user(&svc, "Sara", "Karimi", "42", Role::Customer, 0).await);

        let err = svc
            .execute(RemoveUser {
                actor: intruder(),
                ..cmd("42")
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Unauthorized));
        assert_eq!(users(&svc).await.len(), 2);
    }
}
