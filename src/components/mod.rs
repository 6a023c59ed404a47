//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod new_todo_form;
mod todo_row;
mod todo_list_view;
mod filter_buttons;
mod list_footer;

pub use header::Header;
pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use filter_buttons::FilterButtons;
pub use list_footer::ListFooter;
