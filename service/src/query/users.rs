//! [`Query`] collection related to the multiple [`User`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{person::FullName, User};

use super::DatabaseQuery;

/// Queries all the registered [`User`]s in their registration order.
pub type List = DatabaseQuery<By<Vec<User>, ()>>;

/// Queries the first [`User`] with the provided [`FullName`].
pub type ByFullName = DatabaseQuery<By<Option<User>, FullName>>;

#[cfg(test)]
mod spec {
    use crate::{
        domain::user::Role,
        query::Query as _,
        test_support::{add_user, full_name, service},
    };

    use super::{ByFullName, List};

    #[tokio::test]
    async fn lists_in_registration_order() {
        let svc = service().await;
        let seller = add_user(&svc, "Ali", "Rad", "1", Role::Seller, 0).await;
        let customer =
            add_user(&svc, "Sara", "Rad", "2", Role::Customer, 10).await;

        let users = svc.execute(List::by(())).await.unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[1], seller);
        assert_eq!(users[2], customer);
    }

    #[tokio::test]
    async fn finds_first_namesake() {
        let svc = service().await;
        let first =
            add_user(&svc, "Ali", "Rad", "1", Role::Customer, 10).await;
        drop(add_user(&svc, "Ali", "Rad", "2", Role::Customer, 20).await);

        let found = svc
            .execute(ByFullName::by(full_name("Ali", "Rad")))
            .await
            .unwrap();
        assert_eq!(found, Some(first));

        let missing = svc
            .execute(ByFullName::by(full_name("Ali", "Nobody")))
            .await
            .unwrap();
        assert_eq!(missing, None);
    }
}
