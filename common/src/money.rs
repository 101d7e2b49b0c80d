//! [`Money`]-related definitions.

use std::str::FromStr;

use derive_more::{Display, From, Into};

/// Whole amount of money.
///
/// Amounts are only ever compared with each other, so no currency is
/// attached.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Money(u64);

impl Money {
    /// Zero [`Money`].
    pub const ZERO: Self = Self(0);

    /// Creates a new [`Money`] of the provided `amount`.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Checks whether this [`Money`] is enough to pay the provided `price`.
    #[must_use]
    pub fn covers(self, price: Self) -> bool {
        self >= price
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err("invalid amount");
        }
        s.parse().map(Self).map_err(|_| "amount is too large")
    }
}
