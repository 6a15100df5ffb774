//! API integration tests against a running server

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Serial numbers must be unique across runs against the same database
fn unique_serial(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}{}", prefix, &suffix[..10])
}

fn printer(serial: &str) -> Value {
    json!({
        "type": "Imprimante",
        "marque": "HP",
        "modele": "LaserJet Pro M404dn",
        "direction": "DAF",
        "bureau": "Comptabilité",
        "numero_serie": serial,
        "statut": "Fonctionnel",
        "date": "2024-06-12"
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_equipment_crud() {
    let client = Client::new();
    let serial = unique_serial("IT");

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&printer(&serial.to_lowercase()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["numero_serie"], serial.as_str());
    let id = created["id"].as_str().expect("No id in response").to_string();

    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .query(&[("numero_serie", serial.as_str())])
        .send()
        .await
        .expect("Failed to send request");
    let page: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(page["total"], 1);

    let mut changed = printer(&serial);
    changed["statut"] = json!("Réformé en bureau");
    let response = client
        .put(format!("{}/equipment/{}", BASE_URL, id))
        .json(&changed)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&printer(&serial))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore]
async fn test_invalid_serial_number() {
    let client = Client::new();

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&printer("AB-12"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["field"], "numero_serie");
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats/dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["totalEquipment"].is_number());
    assert!(body["topCategories"].as_array().unwrap().len() <= 3);
}

#[tokio::test]
#[ignore]
async fn test_direction_stats_page_size() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats/directions?page=1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["items"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
#[ignore]
async fn test_unknown_tally_field() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats/tally?field=couleur", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
