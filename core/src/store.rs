//! Local UI state for the todo list.
//!
//! # Design
//! `TodoState` is owned by exactly one controller and mutated only through
//! the transition methods below; none of them touch the network. Views never
//! see the store itself, only a [`Snapshot`] cloned out of it.
//!
//! The item cache is replaced wholesale by [`TodoState::replace_items`], which
//! also drops selection entries and the edit draft whose id is no longer
//! present.

use std::collections::{BTreeSet, HashSet};

use crate::types::{Item, ItemId};

/// Contents of the add form. `quantity` never drops below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemDraft {
    pub title: String,
    pub quantity: u32,
}

impl Default for NewItemDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            quantity: 1,
        }
    }
}

/// Working copy of the row being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    /// Captured at edit start; the update is always sent to this id.
    pub id: ItemId,
    pub title: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TodoState {
    items: Vec<Item>,
    draft: NewItemDraft,
    selection: BTreeSet<ItemId>,
    edit: Option<EditDraft>,
    error: Option<String>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn draft(&self) -> &NewItemDraft {
        &self.draft
    }

    pub fn selection(&self) -> &BTreeSet<ItemId> {
        &self.selection
    }

    pub fn edit(&self) -> Option<&EditDraft> {
        self.edit.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_editing(&self, id: &ItemId) -> bool {
        self.edit.as_ref().is_some_and(|edit| &edit.id == id)
    }

    /// Replace the cache with a fresh server list and reconcile references.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        let present: HashSet<&ItemId> = items.iter().map(|item| &item.id).collect();
        self.selection.retain(|id| present.contains(id));
        if self
            .edit
            .as_ref()
            .is_some_and(|edit| !present.contains(&edit.id))
        {
            self.edit = None;
        }
        self.items = items;
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_quantity(&mut self, quantity: u32) {
        self.draft.quantity = quantity.max(1);
    }

    pub fn reset_draft(&mut self) {
        self.draft = NewItemDraft::default();
    }

    /// Flip membership of `id` in the selection. Returns `false` without
    /// changing anything when the id is unknown or its row is being edited.
    pub fn toggle_select(&mut self, id: &ItemId) -> bool {
        if self.is_editing(id) || self.item(id).is_none() {
            return false;
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.clone());
        }
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn deselect(&mut self, ids: &[ItemId]) {
        for id in ids {
            self.selection.remove(id);
        }
    }

    /// Open an edit on `id`, replacing any edit already open.
    pub fn begin_edit(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.item(id) else {
            return false;
        };
        self.edit = Some(EditDraft {
            id: item.id.clone(),
            title: item.title.clone(),
            quantity: item.quantity,
        });
        self.error = None;
        true
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.title = title.into();
        }
    }

    pub fn set_edit_quantity(&mut self, quantity: u32) {
        if let Some(edit) = self.edit.as_mut() {
            edit.quantity = quantity;
        }
    }

    /// Close the edit, returning the discarded draft.
    pub fn end_edit(&mut self) -> Option<EditDraft> {
        self.edit.take()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        let rows = self
            .items
            .iter()
            .map(|item| {
                let selected = self.selection.contains(&item.id);
                let editing = self.is_editing(&item.id);
                RowView {
                    item: item.clone(),
                    selected,
                    editing,
                    struck: selected && !editing,
                }
            })
            .collect();
        Snapshot {
            rows,
            draft: self.draft.clone(),
            edit: self.edit.clone(),
            error: self.error.clone(),
            selected_count: self.selection.len(),
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub item: Item,
    pub selected: bool,
    pub editing: bool,
    /// Selected rows are struck through, except while being edited.
    pub struck: bool,
}

/// Immutable copy of everything a view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub rows: Vec<RowView>,
    pub draft: NewItemDraft,
    pub edit: Option<EditDraft>,
    pub error: Option<String>,
    pub selected_count: usize,
}

impl Snapshot {
    pub fn can_delete_selected(&self) -> bool {
        self.selected_count > 0
    }
}
