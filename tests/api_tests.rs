//! API integration tests
//!
//! These tests expect a running server with a migrated database.
//! Run with: cargo test -- --ignored

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

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
async fn test_summary_counts() {
    let client = Client::new();

    let response = client
        .get(format!("{}/summary", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["books"].is_number());
    assert!(body["copies"].is_number());
    assert!(body["copies_available"].is_number());
    assert!(body["copies_overdue"].is_number());
    assert!(body["authors"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_genre_crud() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/genres", BASE_URL))
        .json(&json!({ "name": "Test Genre" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let genre_id = body["id"].as_i64().expect("No genre ID");

    // Update
    let response = client
        .put(format!("{}/genres/{}", BASE_URL, genre_id))
        .json(&json!({ "name": "Renamed Genre" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Renamed Genre");

    // Delete
    let response = client
        .delete(format!("{}/genres/{}", BASE_URL, genre_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_author_minimum_age_enforced() {
    let client = Client::new();
    let birth = (Utc::now().date_naive() - Duration::weeks(52 * 10)).to_string();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({
            "first_name": "Too",
            "last_name": "Young",
            "date_of_birth": birth
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_author_death_before_birth_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({
            "first_name": "Benjamin",
            "last_name": "Button",
            "date_of_birth": "1950-06-01",
            "date_of_death": "1940-06-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_deleting_author_keeps_book() {
    let client = Client::new();

    // Create author
    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({
            "first_name": "Patrick",
            "last_name": "Rothfuss",
            "date_of_birth": "1973-06-06"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let author: Value = response.json().await.expect("Failed to parse response");
    let author_id = author["id"].as_i64().expect("No author ID");

    // Create genres to attach to the book
    let mut genre_ids = Vec::new();
    for name in ["Epic Fantasy", "Heroic Fantasy"] {
        let response = client
            .post(format!("{}/genres", BASE_URL))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
        let genre: Value = response.json().await.expect("Failed to parse response");
        genre_ids.push(genre["id"].as_i64().expect("No genre ID"));
    }

    // Create book referencing the author and genres
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "The Name of the Wind",
            "author_id": author_id,
            "summary": "A fantasy novel",
            "isbn": "9780575081406",
            "genre_ids": genre_ids
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse response");
    let book_id = book["id"].as_i64().expect("No book ID");
    assert_eq!(book["display_genre"], "Epic Fantasy, Heroic Fantasy");

    // Delete the author
    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Book still exists with no author reference
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["author"].is_null());

    // Cleanup
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await;
    for genre_id in genre_ids {
        let _ = client
            .delete(format!("{}/genres/{}", BASE_URL, genre_id))
            .send()
            .await;
    }
}

#[tokio::test]
#[ignore]
async fn test_renewal_workflow() {
    let client = Client::new();
    let today = Utc::now().date_naive();

    // Create a borrower and a copy on loan to them
    let response = client
        .post(format!("{}/borrowers", BASE_URL))
        .json(&json!({ "username": format!("renew-test-{}", uuid::Uuid::new_v4()) }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let borrower: Value = response.json().await.expect("Failed to parse response");
    let borrower_id = borrower["id"].as_i64().expect("No borrower ID");

    let response = client
        .post(format!("{}/copies", BASE_URL))
        .json(&json!({
            "imprint": "Test Imprint, 2016",
            "status": "on_loan",
            "borrower_id": borrower_id,
            "due_back": today.to_string()
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let copy: Value = response.json().await.expect("Failed to parse response");
    let copy_id = copy["id"].as_str().expect("No copy ID").to_string();

    // Default proposal is three weeks out
    let response = client
        .get(format!("{}/copies/{}/renewal", BASE_URL, copy_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let proposal: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        proposal["due_back"],
        (today + Duration::weeks(3)).to_string()
    );

    // A date in the past is rejected
    let response = client
        .post(format!("{}/copies/{}/renew", BASE_URL, copy_id))
        .json(&json!({ "due_back": (today - Duration::days(1)).to_string() }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // More than four weeks ahead is rejected
    let response = client
        .post(format!("{}/copies/{}/renew", BASE_URL, copy_id))
        .json(&json!({ "due_back": (today + Duration::weeks(5)).to_string() }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Three weeks ahead is accepted and persisted
    let renewed_until = today + Duration::weeks(3);
    let response = client
        .post(format!("{}/copies/{}/renew", BASE_URL, copy_id))
        .json(&json!({ "due_back": renewed_until.to_string() }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/copies/{}", BASE_URL, copy_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["due_back"], renewed_until.to_string());

    // The renewed copy shows up in the borrower's loans
    let response = client
        .get(format!("{}/borrowers/{}/loans", BASE_URL, borrower_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let loans: Value = response.json().await.expect("Failed to parse response");
    let loans = loans.as_array().expect("Loans not an array");
    assert!(loans.iter().any(|l| l["id"] == copy_id.as_str()));
    assert!(loans.iter().all(|l| l["is_overdue"] == false));

    // Cleanup
    let _ = client
        .delete(format!("{}/copies/{}", BASE_URL, copy_id))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/borrowers/{}", BASE_URL, borrower_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_borrower_loans_ordered_and_filtered() {
    let client = Client::new();
    let today = Utc::now().date_naive();

    // Two borrowers, loans must not leak between them
    let mut borrower_ids = Vec::new();
    for _ in 0..2 {
        let response = client
            .post(format!("{}/borrowers", BASE_URL))
            .json(&json!({ "username": format!("loans-test-{}", uuid::Uuid::new_v4()) }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
        let borrower: Value = response.json().await.expect("Failed to parse response");
        borrower_ids.push(borrower["id"].as_i64().expect("No borrower ID"));
    }

    let create_copy = |status: &str, borrower_id: i64, due_weeks: i64| {
        let client = client.clone();
        let status = status.to_string();
        async move {
            let response = client
                .post(format!("{}/copies", BASE_URL))
                .json(&json!({
                    "imprint": "Test Imprint, 2016",
                    "status": status,
                    "borrower_id": borrower_id,
                    "due_back": (today + Duration::weeks(due_weeks)).to_string()
                }))
                .send()
                .await
                .expect("Failed to send request");
            assert_eq!(response.status(), 201);
            let copy: Value = response.json().await.expect("Failed to parse response");
            copy["id"].as_str().expect("No copy ID").to_string()
        }
    };

    // First borrower: two loans with the later due date created first,
    // plus a reserved copy that must not be listed
    let due_later = create_copy("on_loan", borrower_ids[0], 3).await;
    let due_sooner = create_copy("on_loan", borrower_ids[0], 1).await;
    let reserved = create_copy("reserved", borrower_ids[0], 1).await;
    // Second borrower's loan must not appear in the first borrower's list
    let other_loan = create_copy("on_loan", borrower_ids[1], 2).await;

    let response = client
        .get(format!("{}/borrowers/{}/loans", BASE_URL, borrower_ids[0]))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let loans: Value = response.json().await.expect("Failed to parse response");
    let loans = loans.as_array().expect("Loans not an array");

    // Only the two on-loan copies, ascending by due date
    let ids: Vec<&str> = loans.iter().map(|l| l["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec![due_sooner.as_str(), due_later.as_str()]);
    assert!(!ids.contains(&reserved.as_str()));
    assert!(!ids.contains(&other_loan.as_str()));

    // Cleanup
    for copy_id in [&due_later, &due_sooner, &reserved, &other_loan] {
        let _ = client
            .delete(format!("{}/copies/{}", BASE_URL, copy_id))
            .send()
            .await;
    }
    for borrower_id in borrower_ids {
        let _ = client
            .delete(format!("{}/borrowers/{}", BASE_URL, borrower_id))
            .send()
            .await;
    }
}
