//! Black-box API tests: the real router on an ephemeral port, in-memory
//! stores, driven over HTTP.

use reqwest::StatusCode;
use serde_json::{Value, json};

use stockroom_api::app::services::AppServices;

// Low bcrypt work factor keeps the suite fast; production cost is config.
const TEST_BCRYPT_COST: u32 = 4;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = stockroom_api::app::build_app(AppServices::in_memory(TEST_BCRYPT_COST));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn register(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    email: &str,
    role: &str,
) -> String {
    let res = client
        .post(format!("{base_url}/register"))
        .json(&json!({
            "name": name,
            "email": email,
            "password": "secret1",
            "password_confirmation": "secret1",
            "role": role,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED, "registration failed");
    let body: Value = res.json().await.unwrap();
    body["data"]["token"].as_str().unwrap().to_string()
}

async fn create_category(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    name: &str,
    status: &str,
) -> String {
    let res = client
        .post(format!("{base_url}/categories"))
        .bearer_auth(token)
        .json(&json!({ "name": name, "status": status }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED, "category create failed");
    let body: Value = res.json().await.unwrap();
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn create_product(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    name: &str,
    category_id: &str,
    price: f64,
) -> String {
    let res = client
        .post(format!("{base_url}/products"))
        .bearer_auth(token)
        .json(&json!({
            "name": name,
            "category_id": category_id,
            "price": price,
            "stock": 5,
            "status": "active",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED, "product create failed");
    let body: Value = res.json().await.unwrap();
    body["data"]["id"].as_str().unwrap().to_string()
}

/// Prices serialize as decimal strings; accept a bare number too.
fn price_of(value: &Value) -> f64 {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_endpoints_require_a_token() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/me", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Unauthenticated."));

    let res = client
        .get(format!("{}/products", srv.base_url))
        .bearer_auth("garbage-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_returns_user_and_token_without_hash() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/register", srv.base_url))
        .json(&json!({
            "name": "John Doe",
            "email": "john@example.com",
            "password": "secret1",
            "password_confirmation": "secret1",
            "role": "admin",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("User registered successfully."));
    assert_eq!(body["data"]["user"]["email"], json!("john@example.com"));
    assert_eq!(body["data"]["user"]["role"], json!("admin"));
    assert!(body["data"]["user"].get("password_hash").is_none());
    assert!(body["data"]["user"].get("password").is_none());

    // The issued token authenticates /me.
    let token = body["data"]["token"].as_str().unwrap();
    let res = client
        .get(format!("{}/me", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let me: Value = res.json().await.unwrap();
    assert_eq!(me["data"]["name"], json!("John Doe"));
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_creates_no_user() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register(&client, &srv.base_url, "John Doe", "john@example.com", "user").await;

    let res = client
        .post(format!("{}/register", srv.base_url))
        .json(&json!({
            "name": "Jane Doe",
            "email": "john@example.com",
            "password": "another1",
            "password_confirmation": "another1",
            "role": "user",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], json!("Validation failed."));
    assert!(body["errors"]["email"].is_array());

    // The second account must not exist: its password cannot log in.
    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "email": "john@example.com", "password": "another1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn registration_validation_rejects_bad_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Digits in the name break the letters-and-spaces rule.
    let res = client
        .post(format!("{}/register", srv.base_url))
        .json(&json!({
            "name": "John123",
            "email": "john@example.com",
            "password": "secret1",
            "password_confirmation": "secret1",
            "role": "user",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert!(body["errors"]["name"].is_array());

    // Everything wrong at once: all fields reported together.
    let res = client
        .post(format!("{}/register", srv.base_url))
        .json(&json!({
            "name": "Jo",
            "email": "not-an-email",
            "password": "short",
            "password_confirmation": "different",
            "role": "root",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    for field in ["name", "email", "password", "role"] {
        assert!(body["errors"][field].is_array(), "missing errors for {field}");
    }
}

#[tokio::test]
async fn login_with_wrong_password_is_401_and_issues_no_token() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register(&client, &srv.base_url, "John Doe", "john@example.com", "user").await;

    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "email": "john@example.com", "password": "wrong-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["message"],
        json!("Invalid credentials. Email or password is wrong.")
    );
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn logout_revokes_only_the_current_token() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = register(&client, &srv.base_url, "John Doe", "john@example.com", "user").await;

    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "email": "john@example.com", "password": "secret1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], json!("Login successful."));
    let second = body["data"]["token"].as_str().unwrap().to_string();
    assert_ne!(first, second);

    let res = client
        .post(format!("{}/logout", srv.base_url))
        .bearer_auth(&first)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // The logged-out token no longer authenticates...
    let res = client
        .get(format!("{}/me", srv.base_url))
        .bearer_auth(&first)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // ...while the other session's token still does.
    let res = client
        .get(format!("{}/me", srv.base_url))
        .bearer_auth(&second)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn category_mutations_are_admin_only() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;
    let manager = register(&client, &srv.base_url, "Max Manager", "max@example.com", "manager").await;

    let id = create_category(&client, &srv.base_url, &admin, "Electronics", "active").await;

    // Manager may read...
    let res = client
        .get(format!("{}/categories/{id}", srv.base_url))
        .bearer_auth(&manager)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // ...but not create, update, or delete.
    let res = client
        .post(format!("{}/categories", srv.base_url))
        .bearer_auth(&manager)
        .json(&json!({ "name": "Furniture", "status": "active" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["message"],
        json!("Forbidden. You do not have permission to perform this action.")
    );

    let res = client
        .delete(format!("{}/categories/{id}", srv.base_url))
        .bearer_auth(&manager)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn manager_cannot_delete_products() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;
    let manager = register(&client, &srv.base_url, "Max Manager", "max@example.com", "manager").await;

    let category = create_category(&client, &srv.base_url, &admin, "Electronics", "active").await;
    let product = create_product(&client, &srv.base_url, &admin, "Laptop", &category, 999.99).await;

    let res = client
        .delete(format!("{}/products/{product}", srv.base_url))
        .bearer_auth(&manager)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // The product is still there.
    let res = client
        .get(format!("{}/products/{product}", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Admin deletes succeed.
    let res = client
        .delete(format!("{}/products/{product}", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let res = client
        .get(format!("{}/products/{product}", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn manager_may_create_products_but_user_may_not() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;
    let manager = register(&client, &srv.base_url, "Max Manager", "max@example.com", "manager").await;
    let user = register(&client, &srv.base_url, "Uma User", "uma@example.com", "user").await;

    let category = create_category(&client, &srv.base_url, &admin, "Electronics", "active").await;

    create_product(&client, &srv.base_url, &manager, "Keyboard", &category, 49.99).await;

    let res = client
        .post(format!("{}/products", srv.base_url))
        .bearer_auth(&user)
        .json(&json!({
            "name": "Mouse",
            "category_id": category,
            "price": 19.99,
            "stock": 3,
            "status": "active",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn user_role_cannot_view_dashboard() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let user = register(&client, &srv.base_url, "Uma User", "uma@example.com", "user").await;

    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .bearer_auth(&user)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn product_with_unknown_category_is_a_validation_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;

    let res = client
        .post(format!("{}/products", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "name": "Laptop",
            "category_id": "0198c6f2-1111-7000-8000-000000000000",
            "price": 999.99,
            "stock": 5,
            "status": "active",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert!(body["errors"]["category_id"].is_array());

    // Negative price and stock are also 422s, reported per field.
    let category = create_category(&client, &srv.base_url, &admin, "Electronics", "active").await;
    let res = client
        .post(format!("{}/products", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "name": "Laptop",
            "category_id": category,
            "price": -1,
            "stock": -5,
            "status": "active",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert!(body["errors"]["price"].is_array());
    assert!(body["errors"]["stock"].is_array());
}

#[tokio::test]
async fn category_listing_paginates_unless_all_is_requested() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;
    for i in 0..12 {
        create_category(&client, &srv.base_url, &admin, &format!("Category {i}"), "active").await;
    }

    // Default: 10 per page with metadata.
    let res = client
        .get(format!("{}/categories", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let page = &body["data"];
    assert_eq!(page["data"].as_array().unwrap().len(), 10);
    assert_eq!(page["total"], json!(12));
    assert_eq!(page["per_page"], json!(10));
    assert_eq!(page["current_page"], json!(1));
    assert_eq!(page["last_page"], json!(2));

    // Second page has the remainder.
    let res = client
        .get(format!("{}/categories?page=2", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["current_page"], json!(2));

    // ?all short-circuits pagination.
    let res = client
        .get(format!("{}/categories?all=true", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 12);
    assert!(body["data"].get("total").is_none());
}

#[tokio::test]
async fn product_listing_searches_filters_and_sorts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;
    let electronics =
        create_category(&client, &srv.base_url, &admin, "Electronics", "active").await;
    let furniture = create_category(&client, &srv.base_url, &admin, "Furniture", "active").await;

    create_product(&client, &srv.base_url, &admin, "Gaming Laptop", &electronics, 300.0).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    create_product(&client, &srv.base_url, &admin, "Office Chair", &furniture, 100.0).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    create_product(&client, &srv.base_url, &admin, "Laptop Stand", &electronics, 200.0).await;

    // Case-insensitive substring search on the name.
    let res = client
        .get(format!("{}/products?search=LAPTOP", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    let names: Vec<&str> = body["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| n.to_lowercase().contains("laptop")));

    // Exact category filter, category eager-loaded.
    let res = client
        .get(format!("{}/products?category_id={furniture}", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    let items = body["data"]["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], json!("Office Chair"));
    assert_eq!(items[0]["category"]["name"], json!("Furniture"));

    // sort_price=asc: non-decreasing prices.
    let res = client
        .get(format!("{}/products?sort_price=asc", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    let prices: Vec<f64> = body["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| price_of(&p["price"]))
        .collect();
    assert_eq!(prices.len(), 3);
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    // Invalid sort falls back to newest-first.
    let res = client
        .get(format!("{}/products?sort_price=banana", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    let names: Vec<&str> = body["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Laptop Stand", "Office Chair", "Gaming Laptop"]);
}

#[tokio::test]
async fn dashboard_stats_narrow_by_role() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;
    let manager = register(&client, &srv.base_url, "Max Manager", "max@example.com", "manager").await;

    let active = create_category(&client, &srv.base_url, &admin, "Electronics", "active").await;
    create_category(&client, &srv.base_url, &admin, "Archive", "inactive").await;
    create_product(&client, &srv.base_url, &admin, "Laptop", &active, 999.99).await;

    // Inactive product alongside the active one.
    let res = client
        .post(format!("{}/products", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "name": "Old Phone",
            "category_id": active,
            "price": 10,
            "stock": 0,
            "status": "inactive",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["total_products"], json!(2));
    assert_eq!(body["data"]["active_products"], json!(1));
    assert_eq!(body["data"]["total_categories"], json!(2));
    assert_eq!(body["data"]["active_categories"], json!(1));

    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .bearer_auth(&manager)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["total_products"], json!(2));
    assert_eq!(body["data"]["active_products"], json!(1));
    assert!(body["data"].get("total_categories").is_none());
    assert!(body["data"].get("active_categories").is_none());
}

#[tokio::test]
async fn category_update_is_a_full_replace_and_missing_ids_are_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;
    let id = create_category(&client, &srv.base_url, &admin, "Electronics", "active").await;

    let res = client
        .put(format!("{}/categories/{id}", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "name": "Gadgets", "description": "All gadgets", "status": "inactive" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], json!("Category updated successfully."));
    assert_eq!(body["data"]["name"], json!("Gadgets"));
    assert_eq!(body["data"]["status"], json!("inactive"));

    // Unknown and malformed ids are both plain 404s.
    let res = client
        .get(format!(
            "{}/categories/0198c6f2-2222-7000-8000-000000000000",
            srv.base_url
        ))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = client
        .get(format!("{}/categories/nope", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Delete, then the record is gone.
    let res = client
        .delete(format!("{}/categories/{id}", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let res = client
        .get(format!("{}/categories/{id}", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_update_replaces_fields_and_reloads_category() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Ada Admin", "ada@example.com", "admin").await;
    let electronics =
        create_category(&client, &srv.base_url, &admin, "Electronics", "active").await;
    let furniture = create_category(&client, &srv.base_url, &admin, "Furniture", "active").await;
    let id = create_product(&client, &srv.base_url, &admin, "Laptop", &electronics, 999.99).await;

    let res = client
        .put(format!("{}/products/{id}", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "name": "Standing Desk",
            "category_id": furniture,
            "price": 499.5,
            "stock": 2,
            "status": "active",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["name"], json!("Standing Desk"));
    assert_eq!(body["data"]["category"]["name"], json!("Furniture"));

    // Updating a missing product is a 404, not a create.
    let res = client
        .put(format!(
            "{}/products/0198c6f2-3333-7000-8000-000000000000",
            srv.base_url
        ))
        .bearer_auth(&admin)
        .json(&json!({
            "name": "Ghost",
            "category_id": furniture,
            "price": 1,
            "stock": 1,
            "status": "active",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
