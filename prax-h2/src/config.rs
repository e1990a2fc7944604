//! H2 connection configuration.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::{H2Error, H2Result};
use crate::known::KnownOption;
use crate::secret::Password;

/// File-system protocol.
pub const PROTOCOL_FILE: &str = "file";

/// In-memory protocol.
pub const PROTOCOL_MEM: &str = "mem";

/// How the engine locates the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    /// File-backed database at a path.
    File(String),
    /// Named in-memory database.
    InMemory(String),
    /// Raw H2 URL, used verbatim.
    Url(String),
}

impl ConnectionTarget {
    /// Render the target as an H2 URL fragment (without the `jdbc:h2:` prefix).
    pub fn as_url(&self) -> String {
        match self {
            Self::File(path) => format!("{}:{}", PROTOCOL_FILE, path),
            Self::InMemory(name) => format!("{}:{}", PROTOCOL_MEM, name),
            Self::Url(url) => url.clone(),
        }
    }

    /// Check if this is an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_url())
    }
}

/// Resolved H2 connection configuration.
///
/// Constructed once through [`H2ConnectionConfigurationBuilder`] and never mutated.
/// The password is redacted from `Debug` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct H2ConnectionConfiguration {
    target: ConnectionTarget,
    username: Option<String>,
    password: Option<Password>,
    options: Vec<String>,
    properties: BTreeMap<String, String>,
}

impl H2ConnectionConfiguration {
    /// Create a builder.
    pub fn builder() -> H2ConnectionConfigurationBuilder {
        H2ConnectionConfigurationBuilder::default()
    }

    /// The connection target.
    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    /// The user name.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The password.
    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Raw settings appended to the target, in order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Known tuning properties keyed by canonical name.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Get a single property.
    pub fn property(&self, option: KnownOption) -> Option<&str> {
        self.properties.get(option.key()).map(String::as_str)
    }

    /// The H2 URL: target followed by `;option` for each extra option.
    pub fn url(&self) -> String {
        let mut url = self.target.as_url();
        for option in &self.options {
            url.push(';');
            url.push_str(option);
        }
        url
    }

    /// The full engine URL, e.g. `jdbc:h2:mem:testdb;MODE=MySQL`.
    pub fn connection_url(&self) -> String {
        format!("jdbc:h2:{}", self.url())
    }
}

/// Builder for [`H2ConnectionConfiguration`].
///
/// A URL set through [`url`](Self::url) always takes precedence over a target set
/// through [`file`](Self::file) or [`in_memory`](Self::in_memory).
#[derive(Debug, Clone, Default)]
pub struct H2ConnectionConfigurationBuilder {
    target: Option<ConnectionTarget>,
    url: Option<String>,
    username: Option<String>,
    password: Option<Password>,
    options: Vec<String>,
    properties: BTreeMap<String, String>,
}

impl H2ConnectionConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a file-backed database at `path`.
    pub fn file(mut self, path: impl Into<String>) -> Self {
        self.target = Some(ConnectionTarget::File(path.into()));
        self
    }

    /// Use a named in-memory database.
    pub fn in_memory(mut self, name: impl Into<String>) -> Self {
        self.target = Some(ConnectionTarget::InMemory(name.into()));
        self
    }

    /// Use a raw H2 URL, e.g. `mem:testdb;DB_CLOSE_DELAY=-1`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Append a raw setting to the URL.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Set the user name.
    pub fn username(mut self, username: Option<impl Into<String>>) -> Self {
        self.username = username.map(Into::into);
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<Password>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set a tuning property. `key` must be a canonical known option key.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Build the configuration, validating that a target was provided and every
    /// property is a known option.
    pub fn build(self) -> H2Result<H2ConnectionConfiguration> {
        if let Some(unknown) = self
            .properties
            .keys()
            .find(|key| KnownOption::from_key(key).map(|o| o.key()) != Some(key.as_str()))
        {
            return Err(H2Error::UnknownProperty(unknown.clone()));
        }

        let target = match (self.url, self.target) {
            (Some(url), Some(superseded)) => {
                debug!(superseded = %superseded, "URL option supersedes protocol target");
                ConnectionTarget::Url(url)
            }
            (Some(url), None) => ConnectionTarget::Url(url),
            (None, Some(target)) => target,
            (None, None) => {
                return Err(H2Error::validation(
                    "no connection target: provide a url, or a file or in-memory database",
                ));
            }
        };

        Ok(H2ConnectionConfiguration {
            target,
            username: self.username,
            password: self.password,
            options: self.options,
            properties: self.properties,
        })
    }
}
