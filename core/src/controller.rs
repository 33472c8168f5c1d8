//! The single owner of todo-list state.
//!
//! # Design
//! `TodoController` ties together the stateless `TodoClient`, a host-provided
//! `Transport` and the `TodoState` store. Every operation takes `&mut self`,
//! so state changes happen on one thread in call order.
//!
//! Writes go through [`TodoController::sync_after`]: the write runs first and,
//! if it succeeds, the full list is fetched again. Any failure, local or
//! remote, is also recorded as the visible error message before it is
//! returned.

use tracing::{debug, info, warn};

use crate::bulk::{self, BulkDeleteReport};
use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::{TodoError, ValidationError};
use crate::store::{Snapshot, TodoState};
use crate::transport::Transport;
use crate::types::{Item, ItemFields, ItemId};

pub struct TodoController<T: Transport> {
    client: TodoClient,
    transport: T,
    state: TodoState,
    bulk_delete_workers: usize,
}

impl<T: Transport> TodoController<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: TodoClient::new(&config.base_url),
            transport,
            state: TodoState::new(),
            bulk_delete_workers: config.bulk_delete_workers,
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Replace the cache with the server's list. On failure the cache is
    /// left as it was.
    pub fn fetch_all(&mut self) -> Result<(), TodoError> {
        let result = self
            .transport
            .execute(self.client.build_list_items())
            .and_then(|response| self.client.parse_list_items(response));
        match result {
            Ok(items) => {
                debug!(count = items.len(), "resynced item list");
                self.state.replace_items(items);
                Ok(())
            }
            Err(e) => Err(self.surface(e.into())),
        }
    }

    /// Resync on request. A successful refresh also clears the visible error,
    /// since whatever it described is no longer current.
    pub fn refresh(&mut self) -> Result<(), TodoError> {
        self.fetch_all()?;
        self.state.clear_error();
        Ok(())
    }

    /// Look up one item on the server without touching the cache.
    pub fn fetch_item(&mut self, id: &ItemId) -> Result<Item, TodoError> {
        self.transport
            .execute(self.client.build_get_item(id))
            .and_then(|response| self.client.parse_get_item(response))
            .map_err(|e| self.surface(e.into()))
    }

    /// Run a write and, if it succeeds, resync.
    pub fn sync_after<R>(
        &mut self,
        action: impl FnOnce(&mut Self) -> Result<R, TodoError>,
    ) -> Result<R, TodoError> {
        let value = action(self)?;
        self.fetch_all()?;
        Ok(value)
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.state.set_draft_title(title);
    }

    pub fn set_draft_quantity(&mut self, quantity: u32) {
        self.state.set_draft_quantity(quantity);
    }

    /// Submit the add form.
    pub fn add_item(&mut self) -> Result<Item, TodoError> {
        let draft = self.state.draft();
        let input = match validate(&draft.title, draft.quantity) {
            Ok(input) => input,
            Err(e) => return Err(self.surface(e.into())),
        };
        self.sync_after(|this| {
            let created = this
                .client
                .build_add_item(&input)
                .and_then(|request| this.transport.execute(request))
                .and_then(|response| this.client.parse_add_item(response))
                .map_err(|e| this.surface(e.into()))?;
            info!(id = %created.id, title = %created.title, "item added");
            this.state.reset_draft();
            this.state.clear_error();
            Ok(created)
        })
    }

    pub fn delete_item(&mut self, id: &ItemId) -> Result<(), TodoError> {
        self.sync_after(|this| {
            this.transport
                .execute(this.client.build_delete_item(id))
                .and_then(|response| this.client.parse_delete_item(response))
                .map_err(|e| this.surface(e.into()))?;
            info!(%id, "item deleted");
            this.state.clear_error();
            Ok(())
        })
    }

    /// Delete every selected item. An empty selection is a no-op.
    ///
    /// When some deletes fail, the ones that went through stay deleted, they
    /// leave the selection, and the list is still resynced; the returned
    /// error lists the failures.
    pub fn delete_selected(&mut self) -> Result<BulkDeleteReport, TodoError> {
        let ids: Vec<ItemId> = self.state.selection().iter().cloned().collect();
        if ids.is_empty() {
            debug!("bulk delete with empty selection ignored");
            return Ok(BulkDeleteReport::default());
        }

        let report = bulk::delete_all(
            &self.client,
            &self.transport,
            &ids,
            self.bulk_delete_workers,
        );
        if report.all_succeeded() {
            info!(count = ids.len(), "selection deleted");
            self.state.clear_selection();
            self.state.clear_error();
            self.fetch_all()?;
            return Ok(report);
        }

        let deleted = report.deleted();
        let failed = report.failed();
        warn!(failed = failed.len(), deleted = deleted.len(), "bulk delete partially failed");
        self.state.deselect(&deleted);
        let err = self.surface(TodoError::BulkDelete { failed, deleted });
        if let Err(resync) = self.fetch_all() {
            warn!(error = %resync, "resync after bulk delete failed");
            self.state.set_error(err.to_string());
        }
        Err(err)
    }

    /// Returns `false` when the row is unknown or being edited.
    pub fn toggle_select(&mut self, id: &ItemId) -> bool {
        let toggled = self.state.toggle_select(id);
        if !toggled {
            debug!(%id, "selection toggle ignored");
        }
        toggled
    }

    pub fn begin_edit(&mut self, id: &ItemId) -> bool {
        self.state.begin_edit(id)
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        self.state.set_edit_title(title);
    }

    pub fn set_edit_quantity(&mut self, quantity: u32) {
        self.state.set_edit_quantity(quantity);
    }

    /// Send the edit draft. Without an open edit this does nothing; on any
    /// failure the row stays in edit mode.
    pub fn save_edit(&mut self) -> Result<(), TodoError> {
        let Some(edit) = self.state.edit().cloned() else {
            debug!("save requested with no edit open");
            return Ok(());
        };
        let input = match validate(&edit.title, edit.quantity) {
            Ok(input) => input,
            Err(e) => return Err(self.surface(e.into())),
        };
        self.sync_after(|this| {
            this.client
                .build_update_item(&edit.id, &input)
                .and_then(|request| this.transport.execute(request))
                .and_then(|response| this.client.parse_update_item(response))
                .map_err(|e| this.surface(e.into()))?;
            info!(id = %edit.id, "item updated");
            this.state.end_edit();
            this.state.clear_error();
            Ok(())
        })
    }

    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.state.end_edit() {
            debug!(id = %edit.id, "edit cancelled");
        }
    }

    /// Show a message that did not come from a controller operation.
    pub fn report(&mut self, message: impl Into<String>) {
        self.state.set_error(message);
    }

    pub fn dismiss_error(&mut self) {
        self.state.clear_error();
    }

    /// Record `err` as the visible message and hand it back.
    fn surface(&mut self, err: TodoError) -> TodoError {
        warn!(kind = ?err.kind(), error = %err, "operation failed");
        self.state.set_error(err.to_string());
        err
    }
}

/// The trimmed title is what gets sent, so stored titles never carry the
/// padding a user typed around them.
fn validate(title: &str, quantity: u32) -> Result<ItemFields, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if quantity == 0 {
        return Err(ValidationError::ZeroQuantity);
    }
    Ok(ItemFields::new(title, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_title() {
        assert_eq!(validate("  Eggs ", 3), Ok(ItemFields::new("Eggs", 3)));
    }

    #[test]
    fn validate_rejects_blank_title_and_zero_quantity() {
        assert_eq!(validate(" \t", 1), Err(ValidationError::EmptyTitle));
        assert_eq!(validate("Eggs", 0), Err(ValidationError::ZeroQuantity));
    }
}
