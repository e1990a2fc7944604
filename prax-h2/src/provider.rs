//! Connection factory provider for H2.

use tracing::debug;

use crate::config::{H2ConnectionConfiguration, PROTOCOL_FILE, PROTOCOL_MEM};
use crate::error::{H2Error, H2Result};
use crate::known::KnownOption;
use crate::options::{
    ConnectionFactoryOptions, DATABASE, DRIVER, OPTIONS, PASSWORD, PROTOCOL, URL, USER,
};

/// Driver option value.
pub const H2_DRIVER: &str = "h2";

/// Resolves a generic options bag into a driver specific configuration.
///
/// Implementations are stateless; both methods are pure functions of their input.
pub trait ConnectionFactoryProvider {
    /// The configuration produced by [`create`](Self::create).
    type Configuration;

    /// The driver identifier this provider answers to.
    fn driver(&self) -> &'static str;

    /// Check whether this provider handles `options`.
    fn supports(&self, options: &ConnectionFactoryOptions) -> bool;

    /// Build a configuration from options that [`supports`](Self::supports) accepted.
    fn create(&self, options: &ConnectionFactoryOptions) -> H2Result<Self::Configuration>;
}

/// [`ConnectionFactoryProvider`] for H2 databases.
///
/// # Example
///
/// ```rust
/// use prax_h2::{ConnectionFactoryOptions, ConnectionFactoryProvider, H2ConnectionFactoryProvider};
/// use prax_h2::options::{DATABASE, DRIVER, PROTOCOL};
///
/// let options = ConnectionFactoryOptions::builder()
///     .option(DRIVER, "h2")
///     .option(PROTOCOL, "mem")
///     .option(DATABASE, "testdb")
///     .build();
///
/// let provider = H2ConnectionFactoryProvider;
/// assert!(provider.supports(&options));
///
/// let config = provider.create(&options).unwrap();
/// assert_eq!(config.connection_url(), "jdbc:h2:mem:testdb");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct H2ConnectionFactoryProvider;

impl H2ConnectionFactoryProvider {
    /// Parse a factory URL and create a configuration from it.
    pub fn create_from_url(&self, url: &str) -> H2Result<H2ConnectionConfiguration> {
        let options = ConnectionFactoryOptions::parse(url)?;
        if !self.supports(&options) {
            return Err(H2Error::UnsupportedOptions(format!(
                "expected driver '{}' with a url or protocol and database, got driver {:?}",
                H2_DRIVER,
                options.str_value(DRIVER)
            )));
        }
        self.create(&options)
    }
}

impl ConnectionFactoryProvider for H2ConnectionFactoryProvider {
    type Configuration = H2ConnectionConfiguration;

    fn driver(&self) -> &'static str {
        H2_DRIVER
    }

    fn supports(&self, options: &ConnectionFactoryOptions) -> bool {
        if options.str_value(DRIVER) != Some(H2_DRIVER) {
            return false;
        }

        if options.has_option(URL) {
            return true;
        }

        options.has_option(PROTOCOL) && options.has_option(DATABASE)
    }

    fn create(&self, options: &ConnectionFactoryOptions) -> H2Result<H2ConnectionConfiguration> {
        let protocol = options.str_value(PROTOCOL);
        debug!(
            protocol = ?protocol,
            has_url = options.has_option(URL),
            has_password = options.has_option(PASSWORD),
            "H2ConnectionFactoryProvider::create()"
        );

        let mut builder = H2ConnectionConfiguration::builder();

        match protocol {
            Some(PROTOCOL_FILE) => builder = builder.file(options.required_value(DATABASE)?),
            Some(PROTOCOL_MEM) => builder = builder.in_memory(options.required_value(DATABASE)?),
            Some(other) => {
                return Err(H2Error::UnsupportedProtocol {
                    protocol: other.to_string(),
                });
            }
            None => {}
        }

        if let Some(url) = options.str_value(URL) {
            builder = builder.url(url);
        }

        if let Some(extra) = options.str_value(OPTIONS) {
            for option in extra.split(';') {
                builder = builder.option(option);
            }
        }

        if let Some(password) = options.str_value(PASSWORD) {
            builder = builder.password(password);
        }

        builder = builder.username(options.str_value(USER));

        for known in KnownOption::ALL {
            if let Some((key, value)) = known.resolve(options)? {
                builder = builder.property(key, value);
            }
        }

        let config = builder.build()?;
        debug!(
            resolved = %config.target(),
            options = config.options().len(),
            properties = config.properties().len(),
            "H2 configuration resolved"
        );
        Ok(config)
    }
}
