//! Plain-text rendering of a [`Snapshot`].
//!
//! Rows are numbered from 1; commands refer to items by that number. Selected
//! rows are wrapped in `~~` unless they are being edited.

use std::fmt::Write;

use todo_list_core::{RowView, Snapshot};

pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Todo List ==");

    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "! {error}  (`dismiss` to hide)");
    }

    let _ = writeln!(
        out,
        "new: \"{}\" x {}",
        snapshot.draft.title, snapshot.draft.quantity
    );

    if snapshot.rows.is_empty() {
        let _ = writeln!(out, "(no items)");
    }
    for (index, row) in snapshot.rows.iter().enumerate() {
        let _ = writeln!(out, "{}", render_row(index + 1, row, snapshot));
    }

    if snapshot.can_delete_selected() {
        let _ = writeln!(
            out,
            "{} selected  (`rm-selected` to delete)",
            snapshot.selected_count
        );
    }
    out
}

fn render_row(number: usize, row: &RowView, snapshot: &Snapshot) -> String {
    let mark = if row.selected { "[x]" } else { "[ ]" };
    if row.editing {
        if let Some(edit) = &snapshot.edit {
            return format!(
                "{number:>3}. {mark} editing: \"{}\" x {}  (`save` / `cancel`)",
                edit.title, edit.quantity
            );
        }
    }
    let label = format!("{} - x {}", row.item.title, row.item.quantity);
    if row.struck {
        format!("{number:>3}. {mark} ~~{label}~~")
    } else {
        format!("{number:>3}. {mark} {label}")
    }
}
