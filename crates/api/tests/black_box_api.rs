use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = ferrobank_api::app::build_app(jwt_secret.to_string());
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

async fn sign_up_and_login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> String {
    let res = client
        .post(format!("{base_url}/users"))
        .json(&json!({
            "display_name": "Test User",
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{base_url}/sessions"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

async fn open_account(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    email: &str,
    balance: &str,
) -> serde_json::Value {
    let res = client
        .post(format!("{base_url}/accounts"))
        .bearer_auth(token)
        .json(&json!({
            "owner_email": email,
            "display_name": "checking",
            "opening_balance": balance,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();

    for path in ["/whoami", "/accounts"] {
        let res = client
            .get(format!("{}{path}", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "GET {path}");
    }
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();

    #[derive(serde::Serialize)]
    struct Claims {
        sub: String,
        iat: i64,
        exp: i64,
    }
    let now = chrono::Utc::now().timestamp();
    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &Claims {
            sub: "mallory@x.com".to_string(),
            iat: now,
            exp: now + 600,
        },
        &jsonwebtoken::EncodingKey::from_secret(b"other-secret"),
    )
    .unwrap();

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(forged)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn principal_identity_is_derived_from_token() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = sign_up_and_login(&client, &srv.base_url, "alice@x.com", "hunter2").await;

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["email"].as_str().unwrap(), "alice@x.com");
}

#[tokio::test]
async fn duplicate_signup_is_a_bad_request() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    sign_up_and_login(&client, &srv.base_url, "alice@x.com", "hunter2").await;

    let res = client
        .post(format!("{}/users", srv.base_url))
        .json(&json!({
            "display_name": "Alice again",
            "email": "alice@x.com",
            "password": "other",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "email_taken");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    sign_up_and_login(&client, &srv.base_url, "alice@x.com", "hunter2").await;

    let res = client
        .post(format!("{}/sessions", srv.base_url))
        .json(&json!({ "email": "alice@x.com", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn account_may_only_be_opened_for_oneself() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = sign_up_and_login(&client, &srv.base_url, "alice@x.com", "hunter2").await;

    let res = client
        .post(format!("{}/accounts", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "owner_email": "bob@x.com",
            "display_name": "not mine",
            "opening_balance": "100.00",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn negative_opening_balance_is_rejected() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = sign_up_and_login(&client, &srv.base_url, "alice@x.com", "hunter2").await;

    let res = client
        .post(format!("{}/accounts", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "owner_email": "alice@x.com",
            "display_name": "debt",
            "opening_balance": "-1.00",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn account_lifecycle_open_list_get() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let token = sign_up_and_login(&client, &srv.base_url, "alice@x.com", "hunter2").await;

    let created = open_account(&client, &srv.base_url, &token, "alice@x.com", "250.00").await;
    let number = created["number"].as_str().unwrap();
    assert_eq!(number.len(), 18);
    assert_eq!(created["balance"], "250.00");

    let res = client
        .get(format!("{}/accounts", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed: serde_json::Value = res.json().await.unwrap();
    assert_eq!(listed["items"].as_array().unwrap().len(), 1);

    let id = created["account_id"].as_str().unwrap();
    let res = client
        .get(format!("{}/accounts/{id}", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["number"].as_str().unwrap(), number);

    // Another user cannot see it.
    let other = sign_up_and_login(&client, &srv.base_url, "bob@x.com", "hunter2").await;
    let res = client
        .get(format!("{}/accounts/{id}", srv.base_url))
        .bearer_auth(&other)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn transfer_moves_money_and_overdraw_fails() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let alice = sign_up_and_login(&client, &srv.base_url, "alice@x.com", "hunter2").await;
    let bob = sign_up_and_login(&client, &srv.base_url, "bob@x.com", "hunter2").await;

    let sender = open_account(&client, &srv.base_url, &alice, "alice@x.com", "1000.00").await;
    let receiver = open_account(&client, &srv.base_url, &bob, "bob@x.com", "0.00").await;
    let sender_number = sender["number"].as_str().unwrap();
    let receiver_number = receiver["number"].as_str().unwrap();

    let transfer = json!({
        "sender_number": sender_number,
        "receiver_number": receiver_number,
        "amount": "600.00",
    });

    let res = client
        .post(format!("{}/accounts/transactions", srv.base_url))
        .bearer_auth(&alice)
        .json(&transfer)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["amount"], "600.00");

    // Only 400.00 left; the same transfer again must fail without touching
    // either balance.
    let res = client
        .post(format!("{}/accounts/transactions", srv.base_url))
        .bearer_auth(&alice)
        .json(&transfer)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let sender_id = sender["account_id"].as_str().unwrap();
    let res = client
        .get(format!("{}/accounts/{sender_id}", srv.base_url))
        .bearer_auth(&alice)
        .send()
        .await
        .unwrap();
    let current: serde_json::Value = res.json().await.unwrap();
    assert_eq!(current["balance"], "400.00");
}

#[tokio::test]
async fn transfer_validation_failures_map_to_statuses() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();
    let alice = sign_up_and_login(&client, &srv.base_url, "alice@x.com", "hunter2").await;
    let bob = sign_up_and_login(&client, &srv.base_url, "bob@x.com", "hunter2").await;

    let mine = open_account(&client, &srv.base_url, &alice, "alice@x.com", "100.00").await;
    let theirs = open_account(&client, &srv.base_url, &bob, "bob@x.com", "100.00").await;
    let mine_number = mine["number"].as_str().unwrap();
    let theirs_number = theirs["number"].as_str().unwrap();

    // Malformed sender number.
    let res = client
        .post(format!("{}/accounts/transactions", srv.base_url))
        .bearer_auth(&alice)
        .json(&json!({
            "sender_number": "not-a-number",
            "receiver_number": theirs_number,
            "amount": "10.00",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Zero amount.
    let res = client
        .post(format!("{}/accounts/transactions", srv.base_url))
        .bearer_auth(&alice)
        .json(&json!({
            "sender_number": mine_number,
            "receiver_number": theirs_number,
            "amount": "0.00",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Spending from someone else's account.
    let res = client
        .post(format!("{}/accounts/transactions", srv.base_url))
        .bearer_auth(&alice)
        .json(&json!({
            "sender_number": theirs_number,
            "receiver_number": mine_number,
            "amount": "10.00",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Receiver that doesn't exist.
    let res = client
        .post(format!("{}/accounts/transactions", srv.base_url))
        .bearer_auth(&alice)
        .json(&json!({
            "sender_number": mine_number,
            "receiver_number": "NL10FERO0000000000",
            "amount": "10.00",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
