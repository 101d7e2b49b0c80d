//! Domain definitions.

/// Defines a free-form textual value: a non-empty string without
/// surrounding whitespace, at most 512 bytes long.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        struct $name:ident;
    ) => {
        #[doc = $doc]
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            PartialEq,
        )]
        #[as_ref(forward)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given ",
                "`value` is valid.",
            )]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                let trimmed = value.trim();
                (trimmed == value && !value.is_empty() && value.len() <= 512)
                    .then_some(Self(value))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

pub mod house;
pub mod person;
pub mod user;

pub use self::{house::House, person::Person, user::User};

define_text! {
    #[doc = "Postal address of a [`Person`] or a [`House`]."]
    struct Address;
}
