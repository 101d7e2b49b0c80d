//! [`Repository`] definition.

use crate::{
    domain::{
        house,
        person::{FullName, NationalId},
        user, House, User,
    },
    read,
};

/// In-memory store of all the [`User`]s and, through them, all the
/// [`House`]s.
///
/// Also allocates IDs for new [`User`]s and [`House`]s, never handing out
/// the same ID twice.
#[derive(Clone, Debug, Default)]
pub struct Repository {
    /// Stored [`User`]s in their registration order.
    users: Vec<User>,

    /// Last allocated [`user::Id`], if any.
    last_user_id: Option<user::Id>,

    /// Last allocated [`house::Id`], if any.
    last_house_id: Option<house::Id>,
}

impl Repository {
    /// Allocates a new [`user::Id`].
    pub fn next_user_id(&mut self) -> user::Id {
        let next: user::Id =
            self.last_user_id.map_or(1, |id| u64::from(id) + 1).into();
        self.last_user_id = Some(next);
        next
    }

    /// Allocates a new [`house::Id`].
    pub fn next_house_id(&mut self) -> house::Id {
        let next: house::Id =
            self.last_house_id.map_or(1, |id| u64::from(id) + 1).into();
        self.last_house_id = Some(next);
        next
    }

    /// Appends the provided [`User`].
    ///
    /// No uniqueness is checked: [`User`]s may share a [`FullName`] or even
    /// a [`NationalId`].
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Removes the first [`User`] with the provided [`NationalId`],
    /// returning it.
    pub fn remove_user(&mut self, national_id: &NationalId) -> Option<User> {
        let pos = self
            .users
            .iter()
            .position(|u| u.person.national_id() == national_id)?;
        Some(self.users.remove(pos))
    }

    /// Returns the first [`User`] called by the provided [`FullName`].
    #[must_use]
    pub fn get_user(&self, full_name: &FullName) -> Option<&User> {
        self.users.iter().find(|u| u.person.is_called(full_name))
    }

    /// Returns the first [`User`] with the provided [`NationalId`].
    #[must_use]
    pub fn find_user(&self, national_id: &NationalId) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.person.national_id() == national_id)
    }

    /// Returns the [`User`] with the provided [`user::Id`] for modification.
    pub fn user_mut(&mut self, id: user::Id) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Returns all the stored [`User`]s.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Iterates over all the [`House`]s owned by the stored [`User`]s.
    pub fn houses(&self) -> impl Iterator<Item = &House> {
        self.users.iter().flat_map(User::houses)
    }

    /// Iterates over the [`User`]s satisfying the provided
    /// [`read::user::Filter`].
    pub fn search_users<'s>(
        &'s self,
        filter: &'s read::user::Filter,
    ) -> impl Iterator<Item = &'s User> {
        self.users.iter().filter(|u| filter.matches(u))
    }

    /// Iterates over the [`House`]s satisfying the provided
    /// [`read::house::Filter`].
    pub fn search_houses<'s>(
        &'s self,
        filter: &'s read::house::Filter,
    ) -> impl Iterator<Item = &'s House> {
        self.houses().filter(|h| filter.matches(h))
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use crate::{
        domain::{
            house::{self, Area},
            person::{FullName, LastName, Name, NationalId, Phone},
            user::{self, Role},
            Address, House, Person, User,
        },
        read,
    };

    use super::Repository;

    fn user(repo: &mut Repository, name: &str, id: &str, role: Role) -> User {
        User::new(
            repo.next_user_id(),
            Person::new(
                Name::new(name).unwrap(),
                LastName::new("Moradi").unwrap(),
                NationalId::new(id).unwrap(),
                Phone::new("0912000777").unwrap(),
                Address::new("Qom").unwrap(),
            ),
            role,
            Money::ZERO,
        )
    }

    fn house(repo: &mut Repository, owner: user::Id, price: u64) -> House {
        House::new(
            repo.next_house_id(),
            owner,
            Money::new(price),
            Area::from_str("70").unwrap(),
            Address::new("Qom").unwrap(),
            2,
            false,
            2015,
        )
    }

    fn full_name(name: &str) -> FullName {
        FullName::new(
            Name::new(name).unwrap(),
            LastName::new("Moradi").unwrap(),
        )
    }

    #[test]
    fn allocates_increasing_ids() {
        let mut repo = Repository::default();

        let ids = (0..3).map(|_| repo.next_house_id()).collect::<Vec<_>>();

        assert_eq!(ids, [1, 2, 3].map(house::Id::from));
        assert_eq!(repo.next_house_id(), house::Id::from(4));
        assert_eq!(repo.next_user_id(), user::Id::from(1));
        assert_eq!(repo.next_user_id(), user::Id::from(2));
    }

    #[test]
    fn looks_up_first_match() {
        let mut repo = Repository::default();
        let first = user(&mut repo, "Nima", "1", Role::Seller);
        let second = user(&mut repo, "Nima", "2", Role::Customer);
        repo.add_user(first.clone());
        repo.add_user(second.clone());

        assert_eq!(repo.get_user(&full_name("Nima")).unwrap().id, first.id);
        assert!(repo.get_user(&full_name("Mina")).is_none());
        assert_eq!(
            repo.find_user(&NationalId::new("2").unwrap()).unwrap().id,
            second.id,
        );
    }

    #[test]
    fn removes_by_national_id_value() {
        let mut repo = Repository::default();
        let u = user(&mut repo, "Nima", "0099", Role::Seller);
        repo.add_user(u.clone());

        let id = NationalId::new(String::from("00") + "99").unwrap();
        let removed = repo.remove_user(&id).unwrap();

        assert_eq!(removed.id, u.id);
        assert!(repo.users().is_empty());
        assert!(repo.remove_user(&id).is_none());
    }

    #[test]
    fn searches_across_all_users() {
        let mut repo = Repository::default();
        let mut a = user(&mut repo, "Nima", "1", Role::Seller);
        let mut b = user(&mut repo, "Mina", "2", Role::Seller);
        let h1 = house(&mut repo, a.id, 100);
        let h2 = house(&mut repo, b.id, 200);
        let h3 = house(&mut repo, b.id, 100);
        a.add_house(h1.clone());
        b.add_house(h2);
        b.add_house(h3.clone());
        repo.add_user(a);
        repo.add_user(b);

        let by_price = read::house::Filter::parse("price", "100").unwrap();
        assert_eq!(
            repo.search_houses(&by_price).map(House::id).collect::<Vec<_>>(),
            [h1.id(), h3.id()],
        );

        let by_price = read::house::Filter::parse("price", "300").unwrap();
        assert_eq!(repo.search_houses(&by_price).count(), 0);

        let by_role = read::user::Filter::parse("userType", "SELLER").unwrap();
        assert_eq!(repo.search_users(&by_role).count(), 2);

        let by_name = read::user::Filter::parse("name", "Mina").unwrap();
        assert_eq!(
            repo.search_users(&by_name).map(|u| u.id).collect::<Vec<_>>(),
            [user::Id::from(2)],
        );
    }
}
