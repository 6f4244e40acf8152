//! Hello Cosmos - getting-started walkthrough for Azure Cosmos DB
//!
//! Every operation goes straight through the official `azure_data_cosmos`
//! client. The walkthrough creates a database and a container partitioned on
//! `/LastName`, stores two families, queries one of them with a
//! parameterized query and with raw SQL, replaces and deletes a document,
//! then removes the database.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hello_cosmos::{Connection, GetStartedDemo, Settings};
//! use std::time::Duration;
//!
//! # async fn demo() -> hello_cosmos::Result<()> {
//! let connection = Connection {
//!     endpoint: "https://localhost:8081/".to_string(),
//!     key: "<primary key>".to_string(),
//!     timeout: Duration::from_secs(30),
//! };
//! let demo = GetStartedDemo::new(connection.client()?, Settings::default());
//! demo.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`] - Command line, environment and client construction
//! - [`demo`] - The walkthrough itself
//! - [`family`] - Sample records
//! - [`console`] - Colored status output
//! - [`error`] - Error types

pub mod config;
pub mod console;
pub mod demo;
pub mod error;
pub mod family;

pub use config::{Cli, Command, ConfigError, Connection, Settings};
pub use demo::{GetStartedDemo, Provisioned, QueryOutcome, RunReport};
pub use error::{Error, Result};
pub use family::Family;
