use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Deserialize)]
pub struct ItemInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    items: BTreeMap<u64, Item>,
}

impl Store {
    fn insert(&mut self, input: ItemInput) -> Item {
        self.next_id += 1;
        let item = Item {
            id: self.next_id,
            name: input.name,
            description: input.description,
            price: input.price,
        };
        self.items.insert(item.id, item.clone());
        item
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<serde_json::Value>)>;

pub fn app() -> Router {
    app_with(Store::default())
}

/// Router over a pre-populated store, for tests that need existing items.
pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(db)
}

pub fn seeded(inputs: impl IntoIterator<Item = ItemInput>) -> Store {
    let mut store = Store::default();
    for input in inputs {
        store.insert(input);
    }
    store
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Store::default()).await
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({ "message": message })))
}

fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    reject(StatusCode::NOT_FOUND, "item not found")
}

fn validate(input: &ItemInput) -> ApiResult<()> {
    if input.name.trim().is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "name is required"));
    }
    if !input.price.is_finite() || input.price < 0.0 {
        return Err(reject(StatusCode::BAD_REQUEST, "price must be a non-negative number"));
    }
    Ok(())
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<ItemInput>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    validate(&input)?;
    let item = db.write().await.insert(input);
    tracing::info!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_item(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Item>> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ItemInput>,
) -> ApiResult<Json<Item>> {
    validate(&input)?;
    let mut store = db.write().await;
    let item = store.items.get_mut(&id).ok_or_else(not_found)?;
    item.name = input.name;
    item.description = input.description;
    item.price = input.price;
    Ok(Json(item.clone()))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<StatusCode> {
    let mut store = db.write().await;
    store
        .items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> ItemInput {
        ItemInput {
            name: name.to_string(),
            description: String::new(),
            price,
        }
    }

    #[test]
    fn item_serializes_to_json() {
        let item = Item {
            id: 1,
            name: "Pen".to_string(),
            description: "Blue".to_string(),
            price: 1500.0,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Pen");
        assert_eq!(json["price"], 1500.0);
    }

    #[test]
    fn input_defaults_description_to_empty() {
        let input: ItemInput = serde_json::from_str(r#"{"name":"Pen","price":1}"#).unwrap();
        assert!(input.description.is_empty());
    }

    #[test]
    fn input_rejects_missing_price() {
        let result: Result<ItemInput, _> = serde_json::from_str(r#"{"name":"Pen"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ids_are_assigned_in_order() {
        let store = seeded([input("A", 1.0), input("B", 2.0)]);
        let ids: Vec<u64> = store.items.keys().copied().collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn blank_name_fails_validation() {
        assert!(validate(&input("   ", 1.0)).is_err());
        assert!(validate(&input("Pen", -1.0)).is_err());
        assert!(validate(&input("Pen", 0.0)).is_ok());
    }
}
