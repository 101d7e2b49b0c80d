//! [`Command`] for registering a new [`User`].

use common::operations::{Allocate, Commit, Insert, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        user::{self, Role, Salary, Token},
        Person, User,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for registering a new [`User`].
#[derive(Clone, Debug)]
pub struct AddUser {
    /// [`Token`] of the one executing this [`Command`].
    pub actor: Token,

    /// [`Person`] behind a new [`User`].
    pub person: Person,

    /// [`Role`] of a new [`User`].
    pub role: Role,

    /// [`Salary`] of a new [`User`].
    pub salary: Salary,
}

impl<Db> Command<AddUser> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Allocate<user::Id>,
            Ok = user::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<User>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddUser) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddUser {
            actor,
            person,
            role,
            salary,
        } = cmd;

        if !self.is_super_user(&actor) {
            return Err(tracerr::new!(E::Unauthorized));
        }
        if !role.is_registrable() {
            return Err(tracerr::new!(E::RoleNotAllowed(role)));
        }

        let user = register(self.database(), person, role, salary)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tracing::info!(
            user.id = %user.id,
            user.name = %user.person.full_name(),
            user.role = %user.role,
            "user registered",
        );

        Ok(user)
    }
}

/// Stores a new [`User`] in the provided [`Database`], allocating an ID
/// for it.
pub(crate) async fn register<Db>(
    db: &Db,
    person: Person,
    role: Role,
    salary: Salary,
) -> Result<User, Traced<database::Error>>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Allocate<user::Id>,
            Ok = user::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<User>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    let tx = db.execute(Transact).await.map_err(tracerr::wrap!())?;

    let id = tx
        .execute(Allocate::<user::Id>::new())
        .await
        .map_err(tracerr::wrap!())?;
    let user = User::new(id, person, role, salary);

    tx.execute(Insert(user.clone()))
        .await
        .map_err(tracerr::wrap!())
        .map(drop)?;
    tx.execute(Commit)
        .await
        .map_err(tracerr::wrap!())
        .map(drop)?;

    Ok(user)
}

/// Error of [`AddUser`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Role`] cannot be assigned through a [`Command`].
    #[display("`{_0}` users cannot be added")]
    RoleNotAllowed(#[error(not(source))] Role),

    /// [`Token`] doesn't grant super-user rights.
    #[display("Super-user rights required")]
    Unauthorized,
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        command::Command as _,
        domain::user::Role,
        test_support::{intruder, person, service, token, users},
    };

    use super::{AddUser, ExecutionError};

    #[tokio::test]
    async fn registers_sellers_and_customers() {
        let svc = service().await;

        let seller = svc
            .execute(AddUser {
                actor: token(),
                person: person("Amir", "Tehrani", "100"),
                role: Role::Seller,
                salary: Money::ZERO,
            })
            .await
            .unwrap();
        let customer = svc
            .execute(AddUser {
                actor: token(),
                person: person("Amir", "Tehrani", "101"),
                role: Role::Customer,
                salary: Money::new(500),
            })
            .await
            .unwrap();

        assert_ne!(seller.id, customer.id);
        assert_eq!(customer.salary, Money::new(500));
        assert!(!customer.owns_houses());
        assert!(!customer.has_purchased_house);

        let all = users(&svc).await;
        assert_eq!(all.len(), 3, "root admin + 2 users");
        assert_eq!(all[0].role, Role::Admin);
        assert_eq!(all[1], seller);
        assert_eq!(all[2], customer);
    }

    #[tokio::test]
    async fn rejects_admins() {
        let svc = service().await;

        let err = svc
            .execute(AddUser {
                actor: token(),
                person: person("Eve", "Admin", "666"),
                role: Role::Admin,
                salary: Money::ZERO,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::RoleNotAllowed(Role::Admin),
        ));
        assert_eq!(users(&svc).await.len(), 1);
    }

    #[tokio::test]
    async fn rejects_unauthorized() {
        let svc = service().await;

        let err = svc
            .execute(AddUser {
                actor: intruder(),
                person: person("Amir", "Tehrani", "100"),
                role: Role::Seller,
                salary: Money::ZERO,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Unauthorized));
        assert_eq!(users(&svc).await.len(), 1);
    }
}
