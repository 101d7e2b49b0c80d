//! [`Flag`]-related definitions.

use std::str::FromStr;

use derive_more::{Display, From, Into};

/// Yes/no answer typed by an operator.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Into, PartialEq,
)]
pub struct Flag(bool);

impl FromStr for Flag {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("yes") {
            Ok(Self(true))
        } else if s.eq_ignore_ascii_case("false")
            || s.eq_ignore_ascii_case("no")
        {
            Ok(Self(false))
        } else {
            Err("expected `true` or `false`")
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Flag;

    #[test]
    fn from_str() {
        for s in ["true", "TRUE", "True", "yes", "YES"] {
            assert_eq!(Flag::from_str(s).unwrap(), Flag::from(true), "{s}");
        }
        for s in ["false", "FALSE", "no", "No"] {
            assert_eq!(Flag::from_str(s).unwrap(), Flag::from(false), "{s}");
        }

        assert!(Flag::from_str("").is_err());
        assert!(Flag::from_str("1").is_err());
        assert!(Flag::from_str("maybe").is_err());
    }
}
