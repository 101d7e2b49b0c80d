//! [`Handler`] abstractions.

use std::future::Future;

/// Something executing an operation of type `Op`.
///
/// Service commands and queries, as well as the repository operations
/// backing them, are all [`Handler`]s of their operation types, so a single
/// type may handle many different operations.
pub trait Handler<Op = ()> {
    /// Type of a successful [`Handler`] outcome.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes the provided `op`eration.
    fn execute(
        &self,
        op: Op,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
