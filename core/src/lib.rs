//! Client core for the todo-list service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps the local list
//! state that a view renders from.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url`.
//! - The host supplies a `Transport`; the core never opens a socket.
//! - `TodoController` owns the `TodoState` store and funnels every write
//!   through a resync of the full list.
//! - Bulk delete fans out over a bounded pool and reports per-id results.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod bulk;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use bulk::BulkDeleteReport;
pub use client::TodoClient;
pub use config::ClientConfig;
pub use controller::TodoController;
pub use error::{ApiError, ErrorKind, TodoError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{EditDraft, NewItemDraft, RowView, Snapshot, TodoState};
pub use transport::Transport;
pub use types::{Item, ItemFields, ItemId};
