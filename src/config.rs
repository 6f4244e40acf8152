//! Command line and environment configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use azure_core::credentials::Secret;
use azure_core::http::{ClientOptions, Transport};
use azure_data_cosmos::{CosmosClient, CosmosClientOptions};
use clap::{Parser, Subcommand};
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "FamilyDB_oa";
pub const DEFAULT_COLLECTION: &str = "FamilyCollection_oa";

#[derive(Parser, Debug)]
#[command(name = "hello-cosmos")]
#[command(about = "Getting-started walkthrough for Azure Cosmos DB")]
#[command(version)]
pub struct Cli {
    /// Account endpoint, e.g. https://<account>.documents.azure.com:443/
    #[arg(long, env = "COSMOS_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Base64 primary key of the account
    #[arg(long, env = "COSMOS_KEY", hide_env_values = true, global = true)]
    pub key: Option<String>,

    /// Database used by the walkthrough
    #[arg(long, env = "COSMOS_DATABASE", default_value = DEFAULT_DATABASE, global = true)]
    pub database: String,

    /// Collection used by the walkthrough
    #[arg(long, env = "COSMOS_COLLECTION", default_value = DEFAULT_COLLECTION, global = true)]
    pub collection: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full walkthrough: create, query, replace, delete, tear down (default)
    Run {
        /// Leave the database in place at the end
        #[arg(long)]
        keep_database: bool,
    },
    /// Delete the walkthrough database
    Cleanup,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no endpoint given; pass --endpoint or set COSMOS_ENDPOINT")]
    MissingEndpoint,

    #[error("no account key given; pass --key or set COSMOS_KEY")]
    MissingKey,

    #[error("--timeout-secs must be at least 1")]
    ZeroTimeout,
}

/// Account coordinates for the SDK client.
#[derive(Clone, PartialEq, Eq)]
pub struct Connection {
    pub endpoint: String,
    pub key: String,
    pub timeout: Duration,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint)
            .field("key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Connection {
    /// Build a key-authenticated client whose requests time out after
    /// `timeout`. Nothing is sent until the first operation.
    pub fn client(&self) -> crate::Result<CosmosClient> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        let options = CosmosClientOptions {
            client_options: ClientOptions {
                transport: Some(Transport::new(Arc::new(http))),
                ..Default::default()
            },
        };
        let client =
            CosmosClient::with_key(&self.endpoint, Secret::new(self.key.clone()), Some(options))?;
        Ok(client)
    }
}

/// Names and switches used by the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: String,
    pub collection: String,
    pub keep_database: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            keep_database: false,
        }
    }
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run {
            keep_database: false,
        })
    }

    pub fn connection(&self) -> Result<Connection, ConfigError> {
        let endpoint = self
            .endpoint
            .clone()
            .filter(|e| !e.trim().is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;
        let key = self
            .key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingKey)?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Connection {
            endpoint,
            key,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }

    pub fn settings(&self) -> Settings {
        Settings {
            database: self.database.clone(),
            collection: self.collection.clone(),
            keep_database: matches!(
                self.command(),
                Command::Run {
                    keep_database: true
                }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const EMULATOR_KEY: &str =
        "C2y6yDjf5/R+ob0N8A7Cgv30VRDJIWEHLM+4QDU5DE2nQ9nDuVTqobD4b8mGGyPMbIZnqyMsEcaGQy67XIw/Jw==";

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from([
            "hello-cosmos",
            "--endpoint",
            "https://localhost:8081",
            "--key",
            "a2V5",
        ])
        .unwrap();
        assert_eq!(cli.command(), Command::Run { keep_database: false });
        assert_eq!(cli.settings(), Settings::default());
        assert_eq!(cli.connection().unwrap().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_connection() {
        let cli = Cli::try_parse_from([
            "hello-cosmos",
            "--endpoint",
            "https://localhost:8081",
            "--key",
            "a2V5",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(
            cli.connection(),
            Ok(Connection {
                endpoint: "https://localhost:8081".to_string(),
                key: "a2V5".to_string(),
                timeout: Duration::from_secs(5),
            })
        );
    }

    #[test]
    fn test_missing_endpoint() {
        let cli = Cli::try_parse_from(["hello-cosmos", "--endpoint", " ", "--key", "a2V5"]).unwrap();
        assert_eq!(cli.connection(), Err(ConfigError::MissingEndpoint));
    }

    #[test]
    fn test_missing_key() {
        let cli = Cli::try_parse_from([
            "hello-cosmos",
            "--endpoint",
            "https://localhost:8081",
            "--key",
            "",
        ])
        .unwrap();
        assert_eq!(cli.connection(), Err(ConfigError::MissingKey));
    }

    #[test]
    fn test_zero_timeout() {
        let cli = Cli::try_parse_from([
            "hello-cosmos",
            "--endpoint",
            "https://localhost:8081",
            "--key",
            "a2V5",
            "--timeout-secs",
            "0",
        ])
        .unwrap();
        assert_eq!(cli.connection(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_run_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hello-cosmos",
            "run",
            "--keep-database",
            "--database",
            "OtherDB",
        ])
        .unwrap();
        let settings = cli.settings();
        assert!(settings.keep_database);
        assert_eq!(settings.database, "OtherDB");
        assert_eq!(settings.collection, DEFAULT_COLLECTION);
    }

    #[test]
    fn test_cleanup_command() {
        let cli = Cli::try_parse_from(["hello-cosmos", "cleanup"]).unwrap();
        assert_eq!(cli.command(), Command::Cleanup);
        assert!(!cli.settings().keep_database);
    }

    #[test]
    fn test_no_offline_mode() {
        // Every command talks to an account; there is no local store to clean up.
        for args in [
            vec!["hello-cosmos", "--in-memory"],
            vec!["hello-cosmos", "cleanup", "--in-memory"],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        }
    }

    #[test]
    fn test_key_not_in_debug_output() {
        let connection = Connection {
            endpoint: "https://localhost:8081".to_string(),
            key: EMULATOR_KEY.to_string(),
            timeout: Duration::from_secs(1),
        };
        let shown = format!("{:?}", connection);
        assert!(shown.contains("localhost:8081"));
        assert!(!shown.contains(EMULATOR_KEY));
    }

    #[test]
    fn test_client_for_valid_endpoint() {
        let connection = Connection {
            endpoint: "https://localhost:8081/".to_string(),
            key: EMULATOR_KEY.to_string(),
            timeout: Duration::from_secs(1),
        };
        let client = connection.client().unwrap();
        assert_eq!(client.endpoint().as_str(), "https://localhost:8081/");
    }

    #[test]
    fn test_client_rejects_malformed_endpoint() {
        let connection = Connection {
            endpoint: "not a url".to_string(),
            key: EMULATOR_KEY.to_string(),
            timeout: Duration::from_secs(1),
        };
        assert!(connection.client().is_err());
    }
}
