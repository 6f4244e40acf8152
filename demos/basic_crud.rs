//! Basic CRUD Example
//!
//! This example creates, reads, replaces and deletes a single item in a
//! partitioned container, then removes the database it used.
//!
//! Run with:
//!   COSMOS_ENDPOINT=https://localhost:8081/ COSMOS_KEY=<key> \
//!   cargo run --example basic_crud

use std::time::Duration;

use anyhow::Context;
use azure_data_cosmos::models::ContainerProperties;
use hello_cosmos::Connection;
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== Basic CRUD Example ===\n");

    let connection = Connection {
        endpoint: std::env::var("COSMOS_ENDPOINT").context("COSMOS_ENDPOINT is not set")?,
        key: std::env::var("COSMOS_KEY").context("COSMOS_KEY is not set")?,
        timeout: Duration::from_secs(30),
    };
    let client = connection.client()?;

    client.create_database("inventory", None).await?;
    let db = client.database_client("inventory");
    let properties = ContainerProperties {
        id: "parts".into(),
        partition_key: "/category".into(),
        ..Default::default()
    };
    db.create_container(properties, None).await?;
    println!("Created container parts");

    let parts = db.container_client("parts");

    // Create
    let bolt = json!({ "id": "bolt-m6", "category": "fasteners", "stock": 120 });
    parts.create_item("fasteners", bolt, None).await?;
    println!("Created bolt-m6");

    // Read
    let read: Value = parts
        .read_item("fasteners", "bolt-m6", None)
        .await?
        .into_body()?;
    println!("Read: stock = {}", read["stock"]);

    // Replace
    let restocked = json!({ "id": "bolt-m6", "category": "fasteners", "stock": 500 });
    parts
        .replace_item("fasteners", "bolt-m6", restocked, None)
        .await?;
    println!("Replaced: stock = 500");

    // Delete
    parts.delete_item("fasteners", "bolt-m6", None).await?;
    println!("Deleted bolt-m6");

    db.delete(None).await?;
    println!("\n=== Example Complete ===");
    Ok(())
}
