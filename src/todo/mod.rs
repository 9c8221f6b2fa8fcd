//! Persisted todo list widget.

mod item;
mod store;

pub use item::TodoItem;
pub use store::{EMPTY_PLACEHOLDER, TODOS_KEY, TitlePrompt, TodoListView, TodoRow, TodoStore};
