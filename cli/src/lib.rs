//! Terminal host for the todo-list client.
//!
//! # Overview
//! Owns the network (`UreqTransport`), turns input lines into `Command`s,
//! applies them to a `TodoController` through `App`, and prints
//! `view::render` of the resulting snapshot.

pub mod app;
pub mod command;
pub mod transport;
pub mod view;

pub use app::{App, Flow};
pub use command::{Command, ParseError};
pub use transport::UreqTransport;
