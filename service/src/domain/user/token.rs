//! [`Token`] definitions.

use std::str::FromStr;

use derive_more::Debug;
use secrecy::{zeroize::Zeroize, CloneableSecret};

#[cfg(doc)]
use crate::domain::User;

/// Secret token granting super-user rights to the one presenting it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[debug("Token(*)")]
pub struct Token(String);

impl Token {
    /// Creates a new [`Token`] if the given `token` is valid.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        Self::check(&token).then_some(Self(token))
    }

    /// Checks whether the given `token` is a valid [`Token`].
    ///
    /// A [`Token`] is always typed as a single word, so it must not be empty
    /// or contain whitespace.
    fn check(token: impl AsRef<str>) -> bool {
        let token = token.as_ref();
        !token.is_empty()
            && token.len() <= 128
            && !token.chars().any(char::is_whitespace)
    }
}

impl FromStr for Token {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Token`")
    }
}

impl CloneableSecret for Token {}
impl Zeroize for Token {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
