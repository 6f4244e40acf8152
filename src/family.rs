//! Family records stored by the walkthrough.
//!
//! Field names follow the service's PascalCase convention, except `id`,
//! which the service requires in lowercase.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Family {
    #[serde(rename = "id")]
    pub id: String,
    pub last_name: String,
    pub parents: Vec<Parent>,
    pub children: Vec<Child>,
    pub address: Address,
    pub is_registered: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    pub first_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Child {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    pub first_name: String,
    pub gender: String,
    pub grade: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pets: Vec<Pet>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pet {
    pub given_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub state: String,
    pub county: String,
    pub city: String,
}

impl Parent {
    fn new(family_name: Option<&str>, first_name: &str) -> Self {
        Self {
            family_name: family_name.map(str::to_string),
            first_name: first_name.to_string(),
        }
    }
}

impl Pet {
    fn new(given_name: &str) -> Self {
        Self {
            given_name: given_name.to_string(),
        }
    }
}

impl Family {
    /// The Andersen family of Seattle.
    pub fn andersen() -> Self {
        Self {
            id: "Andersen.1".to_string(),
            last_name: "Andersen".to_string(),
            parents: vec![Parent::new(None, "Thomas"), Parent::new(None, "Mary Kay")],
            children: vec![Child {
                family_name: None,
                first_name: "Henriette Thaulow".to_string(),
                gender: "female".to_string(),
                grade: 5,
                pets: vec![Pet::new("Fluffy")],
            }],
            address: Address {
                state: "WA".to_string(),
                county: "King".to_string(),
                city: "Seattle".to_string(),
            },
            is_registered: true,
        }
    }

    /// The Wakefield family of New York.
    pub fn wakefield() -> Self {
        Self {
            id: "Wakefield.7".to_string(),
            last_name: "Wakefield".to_string(),
            parents: vec![
                Parent::new(Some("Wakefield"), "Robin"),
                Parent::new(Some("Miller"), "Ben"),
            ],
            children: vec![
                Child {
                    family_name: Some("Merriam".to_string()),
                    first_name: "Jesse".to_string(),
                    gender: "female".to_string(),
                    grade: 8,
                    pets: vec![Pet::new("Goofy"), Pet::new("Shadow")],
                },
                Child {
                    family_name: Some("Miller".to_string()),
                    first_name: "Lisa".to_string(),
                    gender: "female".to_string(),
                    grade: 1,
                    pets: Vec::new(),
                },
            ],
            address: Address {
                state: "NY".to_string(),
                county: "Manhattan".to_string(),
                city: "NY".to_string(),
            },
            is_registered: false,
        }
    }

    /// Value of the collection's partition key (`/LastName`).
    pub fn partition_key(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
