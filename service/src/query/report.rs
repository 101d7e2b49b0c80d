//! [`Report`] definition.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::User,
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] for an overview of every [`User`] and their houses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Report;

impl<Db> Query<Report> for Service<Db>
where
    Db: Database<
        Select<By<Vec<User>, ()>>,
        Ok = Vec<User>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::Report;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Report) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Select(By::new(())))
            .await
            .map(read::Report::from)
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Command as _, PurchaseHouse},
        domain::user::Role,
        test_support::{add_house, add_user, full_name, service},
    };

    use super::Report;

    #[tokio::test]
    async fn counts_houses() {
        let svc = service().await;
        drop(add_user(&svc, "A", "B", "1", Role::Seller, 0).await);
        drop(add_user(&svc, "C", "D", "2", Role::Customer, 100).await);
        let sold = add_house(&svc, full_name("A", "B"), 100).await;
        drop(add_house(&svc, full_name("A", "B"), 300).await);
        drop(
            svc.execute(PurchaseHouse {
                owner: full_name("A", "B"),
                house_id: sold.id(),
                buyer: full_name("C", "D"),
            })
            .await
            .unwrap(),
        );

        let report = svc.execute(Report).await.unwrap();

        assert_eq!(report.users.len(), 3);
        assert_eq!(report.total_houses, 2);
        assert_eq!(report.sold_houses, 1);
        assert_eq!(report.houses().count(), 2);
    }
}
