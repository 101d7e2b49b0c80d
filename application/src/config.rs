//! [`Config`]-related definitions.

use clap::ValueEnum;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error as StdError};
use secrecy::SecretBox;
use serde::Deserialize;
use service::domain::{
    person::{LastName, Name, NationalId, Phone},
    user::Token,
    Address, Person,
};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Service configuration.
    #[serde(default)]
    pub service: Service,

    /// Console configuration.
    #[serde(default)]
    pub console: Console,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Service configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Super-user token authorizing privileged commands.
    #[default("admin".to_owned())]
    pub token: String,

    /// Root administrator registered on start.
    pub admin: Admin,
}

/// Root administrator configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Admin {
    /// First name.
    #[default("Root".to_owned())]
    pub name: String,

    /// Last name.
    #[default("Admin".to_owned())]
    pub last_name: String,

    /// National ID.
    #[default("0".to_owned())]
    pub national_id: String,

    /// Phone number.
    #[default("000".to_owned())]
    pub phone: String,

    /// Address.
    #[default("Headquarters".to_owned())]
    pub address: String,
}

impl TryFrom<Service> for service::Config {
    type Error = InvalidValue;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        let Service {
            token,
            admin:
                Admin {
                    name,
                    last_name,
                    national_id,
                    phone,
                    address,
                },
        } = value;

        let token = Token::new(token).ok_or(InvalidValue("service.token"))?;
        Ok(Self {
            token: SecretBox::new(Box::new(token)),
            admin: Person::new(
                Name::new(name).ok_or(InvalidValue("service.admin.name"))?,
                LastName::new(last_name)
                    .ok_or(InvalidValue("service.admin.last_name"))?,
                NationalId::new(national_id)
                    .ok_or(InvalidValue("service.admin.national_id"))?,
                Phone::new(phone).ok_or(InvalidValue("service.admin.phone"))?,
                Address::new(address)
                    .ok_or(InvalidValue("service.admin.address"))?,
            ),
        })
    }
}

/// Error of a [`Config`] field holding an invalid value.
#[derive(Clone, Copy, Debug, Display, StdError)]
#[display("invalid `{_0}` value")]
pub struct InvalidValue(#[error(not(source))] pub &'static str);

/// Console configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Console {
    /// Text printed before reading every line.
    #[default("> ".to_owned())]
    pub prompt: String,

    /// Text printed once the session starts.
    #[default(
        "Real estate brokerage registry. Type `HELP` for usage.".to_owned()
    )]
    pub greeting: String,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use secrecy::ExposeSecret as _;
    use service::domain::user::Token;

    use super::{Config, Service};

    #[test]
    fn defaults_are_valid() {
        let Config {
            service, console, ..
        } = Config::default();

        assert_eq!(console.prompt, "> ");
        let config = service::Config::try_from(service).unwrap();
        assert_eq!(config.token.expose_secret(), &Token::new("admin").unwrap());
        assert_eq!(config.admin.full_name().to_string(), "Root Admin");
    }

    #[test]
    fn rejects_invalid_values() {
        let mut service = Service::default();
        service.token = "with space".to_owned();
        let err = service::Config::try_from(service).unwrap_err();
        assert_eq!(err.to_string(), "invalid `service.token` value");

        let mut service = Service::default();
        service.admin.phone = "none".to_owned();
        let err = service::Config::try_from(service).unwrap_err();
        assert_eq!(err.0, "service.admin.phone");
    }
}
