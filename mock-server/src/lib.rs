use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub quantity: u32,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Deserialize)]
pub struct NewItem {
    pub title: String,
    pub quantity: u32,
}

/// Items in insertion order.
pub type Db = Arc<RwLock<Vec<TodoItem>>>;

pub fn app() -> Router {
    app_with_db(Db::default())
}

/// Build the router over an existing store so tests can seed or inspect it.
pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/todo-items", get(list_items))
        .route("/item/{id}", get(get_item))
        .route("/add", post(add_item))
        .route("/update/{id}", put(update_item))
        .route("/delete/{id}", delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_db(listener, Db::default()).await
}

pub async fn run_with_db(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_db(db)).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<TodoItem>> {
    Json(db.read().await.clone())
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<TodoItem>, (StatusCode, &'static str)> {
    let items = db.read().await;
    items
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Todo item not found"))
}

async fn add_item(
    State(db): State<Db>,
    Json(input): Json<NewItem>,
) -> (StatusCode, Json<TodoItem>) {
    let item = TodoItem {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        quantity: input.quantity,
        created_at: chrono::Utc::now().to_rfc3339(),
        updated_at: None,
    };
    debug!(id = %item.id, "item added");
    db.write().await.push(item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<NewItem>,
) -> (StatusCode, &'static str) {
    let mut items = db.write().await;
    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        return (StatusCode::NOT_FOUND, "Item not found");
    };
    item.title = input.title;
    item.quantity = input.quantity;
    item.updated_at = Some(chrono::Utc::now().to_rfc3339());
    debug!(%id, "item updated");
    (StatusCode::OK, "Item updated successfully")
}

async fn delete_item(State(db): State<Db>, Path(id): Path<String>) -> (StatusCode, &'static str) {
    let mut items = db.write().await;
    let before = items.len();
    items.retain(|item| item.id != id);
    if items.len() == before {
        return (StatusCode::NOT_FOUND, "Item not found");
    }
    debug!(%id, "item deleted");
    (StatusCode::OK, "Item deleted successfully")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_timestamps() {
        let item = TodoItem {
            id: "1".to_string(),
            title: "Milk".to_string(),
            quantity: 2,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["quantity"], 2);
        assert!(json["updated_at"].is_null());
    }

    #[test]
    fn new_item_requires_quantity() {
        let result: Result<NewItem, _> = serde_json::from_str(r#"{"title":"Milk"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_item_rejects_negative_quantity() {
        let result: Result<NewItem, _> = serde_json::from_str(r#"{"title":"Milk","quantity":-2}"#);
        assert!(result.is_err());
    }
}
