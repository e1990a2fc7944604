//! Integration tests for H2 option resolution.
//!
//! These tests drive the public API end to end: options are assembled from
//! builders, factory URLs and configuration files, then resolved by the provider.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use prax_h2::options::{DATABASE, DRIVER, OPTIONS, PASSWORD, PROTOCOL, URL, USER};
use prax_h2::prelude::*;
use prax_h2::{H2ConnectionConfigurationBuilder, KnownOption};

fn bag(pairs: &[(&str, &str)]) -> ConnectionFactoryOptions {
    pairs
        .iter()
        .fold(ConnectionFactoryOptions::builder(), |b, (k, v)| b.option(*k, *v))
        .build()
}

/// Test the applicability matrix
#[test]
fn test_supports_matrix() {
    let provider = H2ConnectionFactoryProvider;

    assert!(provider.supports(&bag(&[(DRIVER, "h2"), (URL, "mem:testdb")])));
    assert!(provider.supports(&bag(&[
        (DRIVER, "h2"),
        (PROTOCOL, "mem"),
        (DATABASE, "testdb")
    ])));
    assert!(!provider.supports(&bag(&[(DRIVER, "h2"), (PROTOCOL, "mem")])));
    assert!(!provider.supports(&bag(&[(DRIVER, "postgresql"), (URL, "mem:testdb")])));
    assert!(!provider.supports(&bag(&[(URL, "mem:testdb")])));
    assert!(!provider.supports(&ConnectionFactoryOptions::default()));
}

/// Test a fully populated bag
#[test]
fn test_create_full() {
    let options = bag(&[
        (DRIVER, "h2"),
        (PROTOCOL, "file"),
        (DATABASE, "./target/h2/app"),
        (OPTIONS, "DB_CLOSE_DELAY=-1;MODE=PostgreSQL"),
        (USER, "sa"),
        (PASSWORD, "s3cr3t"),
        ("CIPHER", "AES"),
        ("file_lock", "FS"),
        ("ACCESS_MODE_DATA", "r"),
        ("access_mode_data", "rw"),
        ("DB_CLOSE_DELAY", "-1"),
    ]);

    let config = H2ConnectionFactoryProvider.create(&options).unwrap();

    assert_eq!(config.target(), &ConnectionTarget::File("./target/h2/app".into()));
    assert_eq!(config.username(), Some("sa"));
    assert_eq!(config.password().map(|p| p.expose()), Some("s3cr3t"));
    assert_eq!(
        config.connection_url(),
        "jdbc:h2:file:./target/h2/app;DB_CLOSE_DELAY=-1;MODE=PostgreSQL"
    );

    let expected: BTreeMap<String, String> = [
        ("ACCESS_MODE_DATA", "r"),
        ("CIPHER", "AES"),
        ("FILE_LOCK", "FS"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(config.properties(), &expected);

    let debug = format!("{:?}", config);
    assert!(!debug.contains("s3cr3t"));
}

/// Test that an unknown protocol never falls back to the URL
#[test]
fn test_unknown_protocol_does_not_fall_back() {
    let options = ConnectionFactoryOptions::builder()
        .option(DRIVER, "h2")
        .option(PROTOCOL, "mem")
        .option(DATABASE, "testdb")
        .option(URL, "mem:fallback")
        .option(PROTOCOL, "xyz")
        .build();

    let err = H2ConnectionFactoryProvider.create(&options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "protocol option xyz is unsupported (file, mem)"
    );
}

/// Test resolution from a factory URL
#[test]
fn test_create_from_factory_url() {
    let options = ConnectionFactoryOptions::parse(
        "r2dbc:h2:mem://sa:pw@localhost/testdb?options=DB_CLOSE_DELAY%3D-1&cache_type=SOFT",
    )
    .unwrap();
    let provider = H2ConnectionFactoryProvider;
    assert!(provider.supports(&options));

    let config = provider.create(&options).unwrap();
    assert_eq!(config.url(), "mem:testdb;DB_CLOSE_DELAY=-1");
    assert_eq!(config.username(), Some("sa"));
    assert_eq!(config.property(KnownOption::CacheType), Some("SOFT"));
}

/// Test loading options from a TOML configuration section
#[test]
fn test_options_from_toml() {
    let config_str = r#"
        driver = "h2"
        url = "mem:testdb;DB_CLOSE_DELAY=-1"
        user = "sa"
        password = "pw"
        AUTO_SERVER = true
        auto_server_port = 9090
    "#;

    let options: ConnectionFactoryOptions =
        toml::from_str(config_str).expect("Failed to parse options");
    assert!(options.value(PASSWORD).unwrap().is_secret());

    let config = H2ConnectionFactoryProvider.create(&options).unwrap();
    assert_eq!(config.target(), &ConnectionTarget::Url("mem:testdb;DB_CLOSE_DELAY=-1".into()));
    assert_eq!(config.property(KnownOption::AutoServer), Some("true"));
    assert_eq!(config.property(KnownOption::AutoServerPort), Some("9090"));
}

/// Test loading options from JSON
#[test]
fn test_options_from_json() {
    let options: ConnectionFactoryOptions = serde_json::from_str(
        r#"{"driver": "h2", "protocol": "mem", "database": "testdb", "options": "MODE=MySQL;CACHE_SIZE=8192"}"#,
    )
    .unwrap();

    let config = H2ConnectionFactoryProvider.create(&options).unwrap();
    assert_eq!(config.options(), ["MODE=MySQL", "CACHE_SIZE=8192"]);
}

/// Test idempotence across repeated resolutions
#[test]
fn test_create_twice_is_equal() {
    let options = bag(&[
        (DRIVER, "h2"),
        (PROTOCOL, "mem"),
        (DATABASE, "testdb"),
        (OPTIONS, "MODE=MySQL"),
        (PASSWORD, "pw"),
        ("PAGE_SIZE", "4096"),
    ]);
    let provider = H2ConnectionFactoryProvider;

    assert_eq!(provider.create(&options).unwrap(), provider.create(&options).unwrap());
}

/// Test the builder used directly by a connection opener
#[test]
fn test_builder_direct() {
    let config = H2ConnectionConfigurationBuilder::new()
        .in_memory("direct")
        .property(KnownOption::MultiThreaded.key(), "TRUE")
        .build()
        .unwrap();
    assert_eq!(config.connection_url(), "jdbc:h2:mem:direct");
    assert_eq!(config.property(KnownOption::MultiThreaded), Some("TRUE"));
}

/// Test the provider through a generic bound
#[test]
fn test_generic_provider() {
    fn resolve<P: ConnectionFactoryProvider>(
        provider: &P,
        options: &ConnectionFactoryOptions,
    ) -> Option<H2Result<P::Configuration>> {
        provider
            .supports(options)
            .then(|| provider.create(options))
    }

    let options = bag(&[(DRIVER, "h2"), (URL, "mem:testdb")]);
    assert!(resolve(&H2ConnectionFactoryProvider, &options).is_some());

    let options = bag(&[(DRIVER, "mysql"), (URL, "mem:testdb")]);
    assert!(resolve(&H2ConnectionFactoryProvider, &options).is_none());
}
