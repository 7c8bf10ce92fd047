use axum::extract::State;
use axum::Json;

use crate::domain::TodoItem;
use crate::store::TodoStore;

/// POST /todo
///
/// Appends the submitted JSON object to the store as-is. Responds with a
/// `null` body; nothing is echoed back. Bodies that can't be decoded into an
/// object are rejected by the `Json` extractor before reaching the store.
#[tracing::instrument(
    name = "Adding a new todo",
    skip(store, item),
    fields(todo_fields = item.len())
)]
pub async fn add_todo(State(store): State<TodoStore>, Json(item): Json<TodoItem>) -> Json<()> {
    let stored = store.append(item).await;
    tracing::info!(stored, "Todo appended");

    Json(())
}
