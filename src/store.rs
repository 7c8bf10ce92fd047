use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::TodoItem;

/// Process-lifetime, append-only sequence of submitted to-dos.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    items: Arc<RwLock<Vec<TodoItem>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, item: TodoItem) -> usize {
        let mut items = self.items.write().await;
        items.push(item);
        items.len()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn snapshot(&self) -> Vec<TodoItem> {
        self.items.read().await.clone()
    }
}
