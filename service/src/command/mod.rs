//! [`Command`] definition.

pub mod add_house;
pub mod add_user;
pub mod purchase_house;
pub mod remove_house;
pub mod remove_user;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_house::AddHouse, add_user::AddUser, purchase_house::PurchaseHouse,
    remove_house::RemoveHouse, remove_user::RemoveUser,
};
