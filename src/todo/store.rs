//! Persisted todo collection.
//!
//! Owns the in-memory list, keeps the durable slot as the source of truth
//! across restarts (loaded once at construction, rewritten after every
//! mutation), and builds the render snapshot from current state.

use super::item::TodoItem;
use crate::storage::{KeyValueStore, load_or_default, persist};

/// Fixed durable slot for the todo collection.
pub const TODOS_KEY: &str = "deskpad_todos";

/// Placeholder text shown when the list is empty.
pub const EMPTY_PLACEHOLDER: &str = "No tasks yet. Add one!";

/// Collaborator that asks the user for a replacement title.
///
/// `None` means the user cancelled; the caller treats a whitespace-only
/// answer the same way. Modeled as a trait so a modal dialog, a terminal
/// prompt or a test stub can all stand in.
pub trait TitlePrompt {
    fn replacement_title(&mut self, current: &str) -> Option<String>;
}

/// One row of the rendered list.
#[derive(Clone, Debug, PartialEq)]
pub struct TodoRow {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Label for the toggle button ("Done" / "Undo").
    pub toggle_label: &'static str,
}

/// Render snapshot of the todo list, rebuilt from scratch on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct TodoListView {
    pub rows: Vec<TodoRow>,
    /// Present only when the list is empty.
    pub placeholder: Option<&'static str>,
}

/// The persisted todo list, newest first.
pub struct TodoStore<S: KeyValueStore> {
    kv: S,
    items: Vec<TodoItem>,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Load the collection from the durable slot. An absent or malformed
    /// slot loads as an empty list.
    pub fn load(kv: S) -> Self {
        let items = load_or_default(&kv, TODOS_KEY);
        Self { kv, items }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Add a task. Whitespace-only input is rejected and nothing is
    /// persisted; returns whether an item was added.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        // Newest first.
        self.items.insert(0, TodoItem::new(title));
        self.save();
        true
    }

    /// Flip the completed flag of the item with `id`.
    pub fn toggle(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.completed = !item.completed;
        }
        self.save();
    }

    /// Replace the title of the item with `id`. A whitespace-only
    /// replacement is a no-op, not a delete.
    pub fn rename(&mut self, id: &str, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.title = title.to_string();
        }
        self.save();
    }

    /// Ask the prompt collaborator for a replacement title and commit it.
    /// Cancellation and whitespace-only answers leave the item untouched.
    pub fn edit_with(&mut self, id: &str, prompt: &mut dyn TitlePrompt) {
        let Some(current) = self
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.title.clone())
        else {
            return;
        };

        if let Some(replacement) = prompt.replacement_title(&current) {
            self.rename(id, &replacement);
        }
    }

    /// Remove the item with `id`. Unknown ids leave the collection
    /// unchanged; the snapshot is rewritten either way.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
        self.save();
    }

    /// Build the render snapshot from the current collection.
    pub fn view(&self) -> TodoListView {
        if self.items.is_empty() {
            return TodoListView {
                rows: Vec::new(),
                placeholder: Some(EMPTY_PLACEHOLDER),
            };
        }

        TodoListView {
            rows: self
                .items
                .iter()
                .map(|item| TodoRow {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    completed: item.completed,
                    toggle_label: if item.completed { "Undo" } else { "Done" },
                })
                .collect(),
            placeholder: None,
        }
    }

    fn save(&mut self) {
        persist(&mut self.kv, TODOS_KEY, &self.items);
    }
}
