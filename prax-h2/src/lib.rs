//! H2 connection option resolution for Prax ORM.
//!
//! This crate turns a generic, string-keyed bag of connection options into a
//! validated [`H2ConnectionConfiguration`] for an embedded or file-backed H2
//! database. Opening and managing the connection itself is left to the engine.
//!
//! # Features
//!
//! - **Applicability check**: [`ConnectionFactoryProvider::supports`] decides whether
//!   a bag targets H2
//! - **Configuration builder**: [`ConnectionFactoryProvider::create`] merges the
//!   protocol/database pair, a raw `url`, the semicolon-delimited `options` string
//!   and the known H2 tuning keys
//! - **Factory URLs**: `r2dbc:h2:mem:///testdb?options=DB_CLOSE_DELAY=-1`
//! - **Config files**: options deserialize from TOML or JSON tables
//! - **Secrets**: passwords are redacted from `Debug` and zeroed on drop
//!
//! # Precedence
//!
//! When both a `url` and a `protocol`/`database` pair are present, the `url` wins.
//! For each known tuning key the upper-case spelling wins over the lower-case one.
//!
//! # Example
//!
//! ```rust
//! use prax_h2::{ConnectionFactoryOptions, ConnectionFactoryProvider, H2ConnectionFactoryProvider};
//!
//! let options = ConnectionFactoryOptions::parse(
//!     "r2dbc:h2:mem:///testdb?options=MODE=MySQL;CACHE_SIZE=8192",
//! )?;
//!
//! let provider = H2ConnectionFactoryProvider;
//! assert!(provider.supports(&options));
//!
//! let config = provider.create(&options)?;
//! assert_eq!(config.options(), ["MODE=MySQL", "CACHE_SIZE=8192"]);
//! assert_eq!(config.connection_url(), "jdbc:h2:mem:testdb;MODE=MySQL;CACHE_SIZE=8192");
//! # Ok::<(), prax_h2::H2Error>(())
//! ```

pub mod config;
pub mod error;
pub mod known;
pub mod options;
pub mod provider;
pub mod secret;

pub use config::{
    ConnectionTarget, H2ConnectionConfiguration, H2ConnectionConfigurationBuilder, PROTOCOL_FILE,
    PROTOCOL_MEM,
};
pub use error::{H2Error, H2Result};
pub use known::KnownOption;
pub use options::{ConnectionFactoryOptions, ConnectionFactoryOptionsBuilder, OptionValue};
pub use provider::{ConnectionFactoryProvider, H2ConnectionFactoryProvider, H2_DRIVER};
pub use secret::Password;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ConnectionTarget, H2ConnectionConfiguration};
    pub use crate::error::{H2Error, H2Result};
    pub use crate::options::ConnectionFactoryOptions;
    pub use crate::provider::{ConnectionFactoryProvider, H2ConnectionFactoryProvider};
}
