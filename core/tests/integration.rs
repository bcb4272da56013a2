//! Full CRUD lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every repository
//! operation over real HTTP through `ReqwestTransport`.

use std::time::Duration;

use catalog_core::{ApiClient, ApiError, ClientConfig, ItemId, ItemInput, ItemRepository};

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

fn repository(base_url: &str) -> ItemRepository {
    let api = ApiClient::from_config(&ClientConfig::new(base_url)).unwrap();
    ItemRepository::new(api)
}

#[tokio::test]
async fn crud_lifecycle() {
    let repo = repository(&start_server().await);

    // Step 1: list is empty.
    assert!(repo.list().await.unwrap().is_empty(), "expected empty list");

    // Step 2: create.
    let input = ItemInput {
        name: "Pen".to_string(),
        description: "Blue".to_string(),
        price: 1500.0,
    };
    let created = repo.create(&input).await.unwrap();
    assert_eq!(created.name, "Pen");
    assert_eq!(created.price, 1500.0);
    let id = created.id.clone();

    // Step 3: two reads without a write agree.
    let first = repo.get(&id).await.unwrap();
    let second = repo.get(&id).await.unwrap();
    assert_eq!(first, created);
    assert_eq!(first, second);

    // Step 4: update sends the full field set.
    let change = ItemInput {
        name: "Pen".to_string(),
        description: "Red".to_string(),
        price: 1800.0,
    };
    let updated = repo.update(&id, &change).await.unwrap();
    assert_eq!(updated.description, "Red");
    assert_eq!(updated.price, 1800.0);

    // Step 5: list has one item.
    assert_eq!(repo.list().await.unwrap(), vec![updated]);

    // Step 6: delete.
    assert!(repo.delete(&id).await.unwrap());

    // Step 7: get after delete is a normalized 404.
    let err = repo.get(&id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "item not found");

    // Step 8: delete again is also 404.
    let err = repo.delete(&id).await.unwrap_err();
    assert!(err.is_not_found());

    // Step 9: list is empty again.
    assert!(repo.list().await.unwrap().is_empty(), "expected empty list after delete");
}

#[tokio::test]
async fn server_validation_message_reaches_the_caller() {
    let repo = repository(&start_server().await);
    let input = ItemInput {
        name: "Pen".to_string(),
        description: String::new(),
        price: -1.0,
    };

    let err = repo.create(&input).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 400, .. }));
    assert_eq!(err.to_string(), "price must be a non-negative number");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind and drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(&format!("http://{addr}")).with_timeout(Duration::from_secs(2));
    let repo = ItemRepository::new(ApiClient::from_config(&config).unwrap());

    let err = repo.get(&ItemId::from(5)).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert!(!err.to_string().is_empty());
}
