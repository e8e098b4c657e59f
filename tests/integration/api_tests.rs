//! API integration tests
//!
//! These run against a live server with a reachable database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Register a fresh user and return (id, email, password). Emails are
/// unique per call so the tests can be re-run against the same database.
async fn register_user(client: &Client, name: &str) -> (i64, String, String) {
    let email = format!(
        "{}+{}@example.com",
        name.to_lowercase(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    );
    let password = "secret1".to_string();

    let response = client
        .post(format!("{}/users/registro", BASE_URL))
        .json(&json!({
            "name": name,
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse register response");
    let id = body["id"].as_i64().expect("No id in register response");
    assert_eq!(body["name"], name);
    assert_eq!(body["email"], email.as_str());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    (id, email, password)
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let (id, email, password) = register_user(&client, "Ana").await;

    let response = client
        .post(format!("{}/users/login", BASE_URL))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["user"]["id"].as_i64(), Some(id));
    assert_eq!(body["user"]["email"], email.as_str());
    assert!(body["message"].is_string());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_email() {
    let client = Client::new();
    let (_, email, _) = register_user(&client, "Ana").await;

    let response = client
        .post(format!("{}/users/registro", BASE_URL))
        .json(&json!({
            "name": "Somebody Else",
            "email": email,
            "password": "another-password"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password() {
    let client = Client::new();
    let (_, email, _) = register_user(&client, "Ana").await;

    let response = client
        .post(format!("{}/users/login", BASE_URL))
        .json(&json!({ "email": email, "password": "wrong-password" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_login_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/users/login", BASE_URL))
        .json(&json!({ "email": "", "password": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_logout() {
    let client = Client::new();

    let response = client
        .post(format!("{}/users/logout", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_list_users() {
    let client = Client::new();
    let (_, email, _) = register_user(&client, "Ana").await;

    let response = client
        .get(format!("{}/users", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    let users = body.as_array().expect("Expected an array of users");
    let entry = users
        .iter()
        .find(|u| u["email"] == email.as_str())
        .expect("Registered user missing from list");

    // List view carries name and email only
    assert!(entry.get("id").is_none());
    assert!(entry.get("password_hash").is_none());
}

#[tokio::test]
#[ignore]
async fn test_cross_owner_book_is_not_found() {
    let client = Client::new();
    let (ana, _, _) = register_user(&client, "Ana").await;
    let (bob, _, _) = register_user(&client, "Bob").await;

    let response = client
        .post(format!("{}/books/user/{}/book", BASE_URL, ana))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "SciFi",
            "description": null
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse response");
    let book_id = book["id"].as_i64().unwrap();

    // Bob asking for Ana's book must look exactly like a missing id
    let cross = client
        .get(format!("{}/books/user/{}/book/{}", BASE_URL, bob, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(cross.status(), 404);

    let missing = client
        .get(format!("{}/books/user/{}/book/{}", BASE_URL, ana, 999_999))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_book_bad_ids() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/user/0/book/0", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_add_book_unknown_owner() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books/user/{}/book", BASE_URL, 999_999_999))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "SciFi",
            "description": null
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

/// Full lifecycle: register, login, add, list, update, delete, empty list
#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let (user_id, email, password) = register_user(&client, "Ana").await;

    // Login returns the same id
    let response = client
        .post(format!("{}/users/login", BASE_URL))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"].as_i64(), Some(user_id));

    // Empty library starts as 404
    let response = client
        .get(format!("{}/books/user/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // Add "Dune"
    let response = client
        .post(format!("{}/books/user/{}/book", BASE_URL, user_id))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "SciFi",
            "description": ""
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.unwrap();
    let book_id = book["id"].as_i64().unwrap();
    assert_eq!(book["owner_user_id"].as_i64(), Some(user_id));
    assert_eq!(book["title"], "Dune");

    // Get returns the same fields as submitted
    let response = client
        .get(format!("{}/books/user/{}/book/{}", BASE_URL, user_id, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched["title"], "Dune");
    assert_eq!(fetched["author"], "Herbert");
    assert_eq!(fetched["genre"], "SciFi");

    // List shows it
    let response = client
        .get(format!("{}/books/user/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let books: Value = response.json().await.unwrap();
    assert_eq!(books.as_array().unwrap().len(), 1);

    // Update the author; the owner must not move
    let response = client
        .put(format!("{}/books/user/{}/book/{}", BASE_URL, user_id, book_id))
        .json(&json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "SciFi",
            "description": "rev"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["author"], "Frank Herbert");
    assert_eq!(updated["owner_user_id"].as_i64(), Some(user_id));

    // Delete confirms with the title
    let response = client
        .delete(format!("{}/books/user/{}/book/{}", BASE_URL, user_id, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Dune"));

    // Get after delete is 404, and the shelf is empty again
    let response = client
        .get(format!("{}/books/user/{}/book/{}", BASE_URL, user_id, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .get(format!("{}/books/user/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}
