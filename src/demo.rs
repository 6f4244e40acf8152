//! The getting-started walkthrough.
//!
//! Each step is one call into the SDK, prints one status line and returns
//! what it did, so a whole run can be checked against a mock account.

use azure_data_cosmos::clients::{ContainerClient, DatabaseClient};
use azure_data_cosmos::models::ContainerProperties;
use azure_data_cosmos::{CosmosClient, PartitionKey, Query};
use futures::TryStreamExt;
use tracing::{debug, info};

use crate::config::Settings;
use crate::console;
use crate::error::{is_conflict, is_not_found, Result};
use crate::family::Family;

pub const PARTITION_KEY_PATH: &str = "/LastName";

const ANDERSEN: &str = "Andersen";
const PARAMETERIZED_SQL: &str = "SELECT * FROM Family f WHERE f.LastName = @lastName";
const ANDERSEN_SQL: &str = "SELECT * FROM Family WHERE Family.LastName = 'Andersen'";

/// Whether an `*_if_not_exists` step created the resource or found it.
#[derive(Debug, Clone, PartialEq)]
pub enum Provisioned<T> {
    Created(T),
    Existing(T),
}

impl<T> Provisioned<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, Provisioned::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Provisioned::Created(value) | Provisioned::Existing(value) => value,
        }
    }
}

/// Results of the parameterized and raw SQL queries for the Andersen family.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub parameterized: Vec<Family>,
    pub sql: Vec<Family>,
}

/// What a full run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub database_created: bool,
    pub collection_created: bool,
    pub families: Vec<Provisioned<Family>>,
    pub before_replace: QueryOutcome,
    pub replaced: Family,
    pub after_replace: QueryOutcome,
    pub database_deleted: bool,
}

pub struct GetStartedDemo {
    client: CosmosClient,
    settings: Settings,
    database: DatabaseClient,
    container: ContainerClient,
}

impl GetStartedDemo {
    pub fn new(client: CosmosClient, settings: Settings) -> Self {
        let database = client.database_client(&settings.database);
        let container = database.container_client(&settings.collection);
        Self {
            client,
            settings,
            database,
            container,
        }
    }

    /// Run every step in order.
    pub async fn run(&self) -> Result<RunReport> {
        console::section(&format!("Database {}", self.settings.database));
        let database = self.create_database_if_not_exists().await?;
        console::step(if database.is_created() {
            "created database"
        } else {
            "database already exists"
        });

        console::section(&format!("Collection {}", self.settings.collection));
        let collection = self.create_collection_if_not_exists().await?;
        console::step(if collection.is_created() {
            "created collection"
        } else {
            "collection already exists"
        });

        console::section("Families");
        let mut families = Vec::new();
        for family in [Family::andersen(), Family::wakefield()] {
            families.push(self.create_family_document_if_not_exists(&family).await?);
        }

        console::section("Queries");
        let before_replace = self.execute_simple_query().await?;

        console::section("Replace");
        let mut andersen = Family::andersen();
        if let Some(child) = andersen.children.first_mut() {
            child.grade = 6;
        }
        let replaced = self.replace_family_document(&andersen).await?;

        console::section("Queries after replace");
        let after_replace = self.execute_simple_query().await?;

        console::section("Delete");
        self.delete_family_document(andersen.partition_key(), &andersen.id)
            .await?;

        let database_deleted = if self.settings.keep_database {
            console::step(&format!("keeping database {}", self.settings.database));
            false
        } else {
            console::section("Teardown");
            self.cleanup().await?
        };

        Ok(RunReport {
            database_created: database.is_created(),
            collection_created: collection.is_created(),
            families,
            before_replace,
            replaced,
            after_replace,
            database_deleted,
        })
    }

    /// Read the database and create it when the read says it does not exist.
    /// A create that loses a race with another client counts as existing.
    pub async fn create_database_if_not_exists(&self) -> Result<Provisioned<String>> {
        let id = self.settings.database.clone();
        match self.database.read(None).await {
            Ok(_) => Ok(Provisioned::Existing(id)),
            Err(e) if is_not_found(&e) => match self.client.create_database(&id, None).await {
                Ok(_) => {
                    info!(database = %id, "created database");
                    Ok(Provisioned::Created(id))
                }
                Err(e) if is_conflict(&e) => Ok(Provisioned::Existing(id)),
                Err(e) => Err(e.into()),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Same as the database step, for the container partitioned on
    /// [`PARTITION_KEY_PATH`].
    pub async fn create_collection_if_not_exists(&self) -> Result<Provisioned<String>> {
        let id = self.settings.collection.clone();
        match self.container.read(None).await {
            Ok(_) => Ok(Provisioned::Existing(id)),
            Err(e) if is_not_found(&e) => {
                let properties = ContainerProperties {
                    id: id.clone().into(),
                    partition_key: PARTITION_KEY_PATH.into(),
                    ..Default::default()
                };
                match self.database.create_container(properties, None).await {
                    Ok(_) => {
                        info!(collection = %id, "created collection");
                        Ok(Provisioned::Created(id))
                    }
                    Err(e) if is_conflict(&e) => Ok(Provisioned::Existing(id)),
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read the family by id and create it only when the read says it does
    /// not exist. A family that is already stored is left as it is.
    pub async fn create_family_document_if_not_exists(
        &self,
        family: &Family,
    ) -> Result<Provisioned<Family>> {
        let partition_key = family.partition_key().to_string();

        match self
            .container
            .read_item::<Family>(partition_key.clone(), &family.id, None)
            .await
        {
            Ok(response) => {
                let found = response.into_body()?;
                console::status(&format!("Found {}", family.id));
                Ok(Provisioned::Existing(found))
            }
            Err(e) if is_not_found(&e) => {
                self.container
                    .create_item(partition_key, family, None)
                    .await?;
                console::status(&format!("Created Family {}", family.id));
                Ok(Provisioned::Created(family.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up the Andersen family with a parameterized query and with raw SQL.
    pub async fn execute_simple_query(&self) -> Result<QueryOutcome> {
        console::status("Running parameterized query...");
        let query = Query::from(PARAMETERIZED_SQL).with_parameter("@lastName", ANDERSEN)?;
        let parameterized = self.query_families(query).await?;

        console::status("Running direct SQL query...");
        let sql = self.query_families(Query::from(ANDERSEN_SQL)).await?;

        Ok(QueryOutcome { parameterized, sql })
    }

    /// Drain every page of a query scoped to the Andersen partition,
    /// printing each family as it arrives.
    async fn query_families(&self, query: Query) -> Result<Vec<Family>> {
        debug!(?query, "querying families");
        let mut pager =
            self.container
                .query_items::<Family>(query, PartitionKey::from(ANDERSEN), None)?;

        let mut families = Vec::new();
        while let Some(family) = pager.try_next().await? {
            console::read(&family);
            families.push(family);
        }
        Ok(families)
    }

    pub async fn replace_family_document(&self, family: &Family) -> Result<Family> {
        self.container
            .replace_item(family.partition_key().to_string(), &family.id, family, None)
            .await?;
        console::status(&format!("Replaced Family {}", family.id));
        Ok(family.clone())
    }

    pub async fn delete_family_document(&self, last_name: &str, id: &str) -> Result<()> {
        self.container
            .delete_item(last_name.to_string(), id, None)
            .await?;
        console::status(&format!("Deleted Family {}", id));
        Ok(())
    }

    /// Delete the walkthrough database. Returns `false` when there was
    /// nothing to delete.
    pub async fn cleanup(&self) -> Result<bool> {
        match self.database.delete(None).await {
            Ok(_) => {
                console::status(&format!("Deleted database {}", self.settings.database));
                Ok(true)
            }
            Err(e) if is_not_found(&e) => {
                console::status(&format!("Database {} not found", self.settings.database));
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}
