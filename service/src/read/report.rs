//! [`Report`] read model definition.

use crate::domain::{House, User};

/// Overview of everything registered in the brokerage.
#[derive(Clone, Debug)]
pub struct Report {
    /// All registered [`User`]s along with their [`House`]s.
    pub users: Vec<User>,

    /// Total number of registered [`House`]s.
    pub total_houses: usize,

    /// Number of sold [`House`]s.
    pub sold_houses: usize,
}

impl From<Vec<User>> for Report {
    fn from(users: Vec<User>) -> Self {
        let houses = || users.iter().flat_map(User::houses);
        let total_houses = houses().count();
        let sold_houses = houses().filter(|h| h.is_purchased()).count();
        Self {
            users,
            total_houses,
            sold_houses,
        }
    }
}

impl Report {
    /// Returns all the [`House`]s of this [`Report`].
    pub fn houses(&self) -> impl Iterator<Item = &House> {
        self.users.iter().flat_map(User::houses)
    }
}
