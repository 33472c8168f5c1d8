//! Event handling: one parsed command in, one controller call, a redraw out.

use todo_list_core::{ItemId, TodoController, Transport};
use tracing::debug;

use crate::command::{Command, HELP};
use crate::view;

/// What the event loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print this text and keep reading.
    Continue(String),
    Quit,
}

pub struct App<T: Transport> {
    controller: TodoController<T>,
}

impl<T: Transport> App<T> {
    pub fn new(controller: TodoController<T>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &TodoController<T> {
        &self.controller
    }

    /// Initial load. A failure only shows up as the visible error.
    pub fn start(&mut self) -> String {
        let _ = self.controller.fetch_all();
        self.render()
    }

    pub fn render(&self) -> String {
        view::render(&self.controller.snapshot())
    }

    /// Apply `command`. Errors are already recorded in the store by the
    /// controller and appear in the rendered view.
    pub fn handle(&mut self, command: Command) -> Flow {
        debug!(?command, "handling command");
        match command {
            Command::Quit => return Flow::Quit,
            Command::Help => return Flow::Continue(format!("{HELP}\n")),
            Command::Title(title) => self.controller.set_draft_title(title),
            Command::Quantity(quantity) => self.controller.set_draft_quantity(quantity),
            Command::Add(fields) => {
                if let Some((quantity, title)) = fields {
                    self.controller.set_draft_title(title);
                    self.controller.set_draft_quantity(quantity);
                }
                let _ = self.controller.add_item();
            }
            Command::Delete(row) => {
                if let Some(id) = self.row_id(row) {
                    let _ = self.controller.delete_item(&id);
                }
            }
            Command::Select(row) => {
                if let Some(id) = self.row_id(row) {
                    self.controller.toggle_select(&id);
                }
            }
            Command::DeleteSelected => {
                let _ = self.controller.delete_selected();
            }
            Command::Edit(row) => {
                if let Some(id) = self.row_id(row) {
                    self.controller.begin_edit(&id);
                }
            }
            Command::EditTitle(title) => self.controller.set_edit_title(title),
            Command::EditQuantity(quantity) => self.controller.set_edit_quantity(quantity),
            Command::Save => {
                let _ = self.controller.save_edit();
            }
            Command::Cancel => self.controller.cancel_edit(),
            Command::Show(row) => {
                if let Some(id) = self.row_id(row) {
                    if let Ok(item) = self.controller.fetch_item(&id) {
                        return Flow::Continue(format!(
                            "{}: {} - x {}\n",
                            item.id, item.title, item.quantity
                        ));
                    }
                }
            }
            Command::Refresh => {
                let _ = self.controller.refresh();
            }
            Command::Dismiss => self.controller.dismiss_error(),
        }
        Flow::Continue(self.render())
    }

    /// Resolve a 1-based row number, leaving a visible message if it is out
    /// of range.
    fn row_id(&mut self, row: usize) -> Option<ItemId> {
        let id = row
            .checked_sub(1)
            .and_then(|index| self.controller.state().items().get(index))
            .map(|item| item.id.clone());
        if id.is_none() {
            self.controller.report(format!("no row {row}"));
        }
        id
    }
}
