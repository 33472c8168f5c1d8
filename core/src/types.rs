//! Domain DTOs for the todo-list API.
//!
//! # Design
//! The backend owns every `Item`; the client only mirrors what it is sent.
//! Identifiers are opaque strings assigned by the server, so `ItemId` wraps a
//! `String` and never assumes a format. Response JSON may carry extra fields
//! (timestamps and the like); serde ignores them and the client model stays at
//! `{id, title, quantity}`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of an item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single todo entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub quantity: u32,
}

/// Request payload shared by `POST /add` and `PUT /update/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemFields {
    pub title: String,
    pub quantity: u32,
}

impl ItemFields {
    pub fn new(title: impl Into<String>, quantity: u32) -> Self {
        Self {
            title: title.into(),
            quantity,
        }
    }
}
