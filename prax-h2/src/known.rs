//! The known set of H2 tuning options.
//!
//! Only these keys are forwarded from a [`ConnectionFactoryOptions`] bag into the
//! resolved configuration. Each key is recognized in its canonical upper-case
//! spelling and in its lower-case spelling; the upper-case spelling wins when both
//! are present.

use crate::error::H2Result;
use crate::options::ConnectionFactoryOptions;

/// An H2 setting accepted as a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownOption {
    /// `CIPHER` - file encryption algorithm.
    Cipher,
    /// `FILE_LOCK` - file locking method.
    FileLock,
    /// `IFEXISTS` - only open existing databases.
    IfExists,
    /// `DB_CLOSE_ON_EXIT` - close the database when the VM exits.
    DbCloseOnExit,
    /// `INIT` - script run on connect.
    Init,
    /// `TRACE_LEVEL_FILE` - trace level for the trace file.
    TraceLevelFile,
    /// `TRACE_MAX_FILE_SIZE` - maximum trace file size in MB.
    TraceMaxFileSize,
    /// `TRACE_LEVEL_SYSTEM_OUT` - trace level for standard output.
    TraceLevelSystemOut,
    /// `LOG` - transaction log mode.
    Log,
    /// `IGNORE_UNKNOWN_SETTINGS` - ignore unrecognized settings.
    IgnoreUnknownSettings,
    /// `ACCESS_MODE_DATA` - data file access mode (`r`, `rw`, ...).
    AccessModeData,
    /// `MODE` - compatibility mode.
    Mode,
    /// `AUTO_SERVER` - enable automatic mixed mode.
    AutoServer,
    /// `AUTO_SERVER_PORT` - port for automatic mixed mode.
    AutoServerPort,
    /// `PAGE_SIZE` - page size for new databases.
    PageSize,
    /// `MULTI_THREADED` - multi-threaded engine.
    MultiThreaded,
    /// `CACHE_TYPE` - cache algorithm.
    CacheType,
    /// `PASSWORD_HASH` - password is already hashed.
    PasswordHash,
}

impl KnownOption {
    /// Every known option.
    pub const ALL: [KnownOption; 18] = [
        Self::Cipher,
        Self::FileLock,
        Self::IfExists,
        Self::DbCloseOnExit,
        Self::Init,
        Self::TraceLevelFile,
        Self::TraceMaxFileSize,
        Self::TraceLevelSystemOut,
        Self::Log,
        Self::IgnoreUnknownSettings,
        Self::AccessModeData,
        Self::Mode,
        Self::AutoServer,
        Self::AutoServerPort,
        Self::PageSize,
        Self::MultiThreaded,
        Self::CacheType,
        Self::PasswordHash,
    ];

    /// Canonical (upper-case) key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Cipher => "CIPHER",
            Self::FileLock => "FILE_LOCK",
            Self::IfExists => "IFEXISTS",
            Self::DbCloseOnExit => "DB_CLOSE_ON_EXIT",
            Self::Init => "INIT",
            Self::TraceLevelFile => "TRACE_LEVEL_FILE",
            Self::TraceMaxFileSize => "TRACE_MAX_FILE_SIZE",
            Self::TraceLevelSystemOut => "TRACE_LEVEL_SYSTEM_OUT",
            Self::Log => "LOG",
            Self::IgnoreUnknownSettings => "IGNORE_UNKNOWN_SETTINGS",
            Self::AccessModeData => "ACCESS_MODE_DATA",
            Self::Mode => "MODE",
            Self::AutoServer => "AUTO_SERVER",
            Self::AutoServerPort => "AUTO_SERVER_PORT",
            Self::PageSize => "PAGE_SIZE",
            Self::MultiThreaded => "MULTI_THREADED",
            Self::CacheType => "CACHE_TYPE",
            Self::PasswordHash => "PASSWORD_HASH",
        }
    }

    /// Lower-case variant of the key.
    pub fn lower_key(&self) -> &'static str {
        match self {
            Self::Cipher => "cipher",
            Self::FileLock => "file_lock",
            Self::IfExists => "ifexists",
            Self::DbCloseOnExit => "db_close_on_exit",
            Self::Init => "init",
            Self::TraceLevelFile => "trace_level_file",
            Self::TraceMaxFileSize => "trace_max_file_size",
            Self::TraceLevelSystemOut => "trace_level_system_out",
            Self::Log => "log",
            Self::IgnoreUnknownSettings => "ignore_unknown_settings",
            Self::AccessModeData => "access_mode_data",
            Self::Mode => "mode",
            Self::AutoServer => "auto_server",
            Self::AutoServerPort => "auto_server_port",
            Self::PageSize => "page_size",
            Self::MultiThreaded => "multi_threaded",
            Self::CacheType => "cache_type",
            Self::PasswordHash => "password_hash",
        }
    }

    /// Look up a known option by its upper- or lower-case key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.key() == key || option.lower_key() == key)
    }

    /// Resolve this option from a bag.
    ///
    /// Returns the canonical key and its value, preferring the upper-case spelling.
    pub fn resolve<'a>(
        &self,
        options: &'a ConnectionFactoryOptions,
    ) -> H2Result<Option<(&'static str, &'a str)>> {
        if options.has_option(self.key()) {
            return Ok(Some((self.key(), options.required_value(self.key())?)));
        }
        if options.has_option(self.lower_key()) {
            return Ok(Some((self.key(), options.required_value(self.lower_key())?)));
        }
        Ok(None)
    }
}

impl std::fmt::Display for KnownOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
