//! End-to-end tests for the HTTP layer
//!
//! Each test runs against a fresh router with its own store and its own
//! uploads root under the system temp directory.

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_claims::{ClaimStatus, MAX_PROOF_BYTES};
use infra_store::MemoryStore;
use interface_api::{config::ApiConfig, create_router};
use test_utils::fixtures::temp_web_root;

struct TestContext {
    server: TestServer,
    store: Arc<MemoryStore>,
    web_root: PathBuf,
}

fn context() -> TestContext {
    let web_root = temp_web_root();
    let config = ApiConfig {
        uploads_root: web_root.to_string_lossy().into_owned(),
        ..ApiConfig::default()
    };
    let store = Arc::new(MemoryStore::new());
    let server = TestServer::new(create_router(Arc::clone(&store), config)).unwrap();
    TestContext {
        server,
        store,
        web_root,
    }
}

fn claim_form() -> MultipartForm {
    MultipartForm::new()
        .add_text("lecturer_name", "Dr. Test Professor")
        .add_text("title", "Research Hours")
        .add_text("description", "Weekly research supervision")
        .add_text("hours", "40")
        .add_text("rate", "200.00")
}

fn pdf_part(bytes: Vec<u8>) -> Part {
    Part::bytes(bytes)
        .file_name("proof.pdf")
        .mime_type("application/pdf")
}

fn stored_upload_count(web_root: &PathBuf) -> usize {
    match std::fs::read_dir(web_root.join("uploads")) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

// ============================================================================
// Basics
// ============================================================================

#[tokio::test]
async fn test_health_reports_healthy() {
    let ctx = context();

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_home_redirects_to_claims() {
    let ctx = context();

    let response = ctx.server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/claims");
}

// ============================================================================
// Claim Submission
// ============================================================================

#[tokio::test]
async fn test_submit_claim_end_to_end() {
    let ctx = context();

    let response = ctx.server.post("/claims").multipart(claim_form()).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/claims");

    let listing: Value = ctx.server.get("/claims").await.json();
    let claims = listing.as_array().unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0]["id"], 1);
    assert_eq!(claims[0]["lecturer_name"], "Dr. Test Professor");
    assert_eq!(claims[0]["amount"], json!("8000.00"));
    assert_eq!(claims[0]["status"], "Pending");
}

#[tokio::test]
async fn test_submit_claim_defaults_hours_and_rate_to_zero() {
    let ctx = context();

    let form = MultipartForm::new()
        .add_text("lecturer_name", "Dr. Test Professor")
        .add_text("title", "Research Hours");
    ctx.server
        .post("/claims")
        .multipart(form)
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let claim = ctx.store.claims().list().pop().unwrap();
    assert_eq!(claim.hours, 0);
    assert_eq!(claim.rate, dec!(0));
    assert_eq!(claim.description, "No description provided");
}

#[tokio::test]
async fn test_submit_claim_missing_title_is_rejected() {
    let ctx = context();

    let form = MultipartForm::new()
        .add_text("lecturer_name", "Dr. Test Professor")
        .add_text("title", "   ");
    let response = ctx.server.post("/claims").multipart(form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "validation_error");
    assert!(ctx.store.claims().list().is_empty());
}

#[tokio::test]
async fn test_submit_claim_with_non_numeric_hours_is_bad_request() {
    let ctx = context();

    let form = claim_form().add_text("hours", "forty");
    // Field name repeats; the last value wins in our reader
    let response = ctx.server.post("/claims").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.store.claims().list().is_empty());
}

// ============================================================================
// Proof Files
// ============================================================================

#[tokio::test]
async fn test_proof_file_persisted_and_downloadable() {
    let ctx = context();

    let form = claim_form().add_part("file", pdf_part(b"%PDF-1.4 proof bytes".to_vec()));
    ctx.server
        .post("/claims")
        .multipart(form)
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let claim = ctx.store.claims().list().pop().unwrap();
    let file_path = claim.file_path.clone().unwrap();
    assert!(file_path.starts_with("uploads/"));
    assert!(file_path.ends_with("_proof.pdf"));
    assert_eq!(stored_upload_count(&ctx.web_root), 1);

    let download = ctx.server.get("/claims/1/file").await;
    download.assert_status_ok();
    assert_eq!(download.header("content-type"), "application/octet-stream");
    assert_eq!(
        download.as_bytes().as_ref(),
        b"%PDF-1.4 proof bytes".as_slice()
    );
}

#[tokio::test]
async fn test_exe_upload_rejected_without_any_side_effects() {
    let ctx = context();

    let part = Part::bytes(b"MZ...".to_vec())
        .file_name("payload.exe")
        .mime_type("application/octet-stream");
    let response = ctx
        .server
        .post("/claims")
        .multipart(claim_form().add_part("file", part))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(ctx.store.claims().list().is_empty());
    assert_eq!(stored_upload_count(&ctx.web_root), 0);
}

#[tokio::test]
async fn test_oversized_upload_rejected() {
    let ctx = context();

    let oversized = vec![0u8; MAX_PROOF_BYTES as usize + 1];
    let response = ctx
        .server
        .post("/claims")
        .multipart(claim_form().add_part("file", pdf_part(oversized)))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(ctx.store.claims().list().is_empty());
    assert_eq!(stored_upload_count(&ctx.web_root), 0);
}

#[tokio::test]
async fn test_download_without_proof_is_not_found() {
    let ctx = context();

    ctx.server
        .post("/claims")
        .multipart(claim_form())
        .await
        .assert_status(StatusCode::SEE_OTHER);

    ctx.server
        .get("/claims/1/file")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Claim Edit / Delete
// ============================================================================

#[tokio::test]
async fn test_edit_replaces_proof_file_and_drops_the_old_one() {
    let ctx = context();

    ctx.server
        .post("/claims")
        .multipart(claim_form().add_part("file", pdf_part(b"old".to_vec())))
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let old_path = ctx.store.claims().list().pop().unwrap().file_path.unwrap();

    let replacement = Part::bytes(b"new".to_vec())
        .file_name("revised.docx")
        .mime_type("application/octet-stream");
    ctx.server
        .put("/claims/1")
        .multipart(claim_form().add_part("file", replacement))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let new_path = ctx.store.claims().list().pop().unwrap().file_path.unwrap();
    assert_ne!(new_path, old_path);
    assert!(new_path.ends_with("_revised.docx"));
    assert_eq!(stored_upload_count(&ctx.web_root), 1);
}

#[tokio::test]
async fn test_edit_without_upload_preserves_file_and_status() {
    let ctx = context();

    ctx.server
        .post("/claims")
        .multipart(claim_form().add_part("file", pdf_part(b"proof".to_vec())))
        .await
        .assert_status(StatusCode::SEE_OTHER);
    ctx.server
        .post("/manager/claims/1/approve")
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let before = ctx.store.claims().list().pop().unwrap();

    let edit = MultipartForm::new()
        .add_text("lecturer_name", "Dr. Test Professor")
        .add_text("title", "Amended Title")
        .add_text("hours", "10")
        .add_text("rate", "90");
    ctx.server
        .put("/claims/1")
        .multipart(edit)
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let after = ctx.store.claims().list().pop().unwrap();
    assert_eq!(after.title, "Amended Title");
    assert_eq!(after.file_path, before.file_path);
    assert_eq!(after.status, ClaimStatus::Approved);
}

#[tokio::test]
async fn test_edit_missing_claim_is_not_found() {
    let ctx = context();

    ctx.server
        .put("/claims/99")
        .multipart(claim_form())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_record_and_proof_file() {
    let ctx = context();

    ctx.server
        .post("/claims")
        .multipart(claim_form().add_part("file", pdf_part(b"proof".to_vec())))
        .await
        .assert_status(StatusCode::SEE_OTHER);
    assert_eq!(stored_upload_count(&ctx.web_root), 1);

    ctx.server
        .delete("/claims/1")
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert!(ctx.store.claims().list().is_empty());
    assert_eq!(stored_upload_count(&ctx.web_root), 0);
    ctx.server
        .get("/claims/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Manager Review
// ============================================================================

#[tokio::test]
async fn test_manager_approval_flow() {
    let ctx = context();

    ctx.server
        .post("/claims")
        .multipart(claim_form())
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let pending: Value = ctx.server.get("/manager/claims").await.json();
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let response = ctx.server.post("/manager/claims/1/approve").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/manager/claims");

    let pending_after: Value = ctx.server.get("/manager/claims").await.json();
    assert!(pending_after.as_array().unwrap().is_empty());

    let claim: Value = ctx.server.get("/claims/1").await.json();
    assert_eq!(claim["status"], "Approved");
}

#[tokio::test]
async fn test_redeciding_a_decided_claim_succeeds_silently() {
    let ctx = context();

    ctx.server
        .post("/claims")
        .multipart(claim_form())
        .await
        .assert_status(StatusCode::SEE_OTHER);

    ctx.server
        .post("/manager/claims/1/approve")
        .await
        .assert_status(StatusCode::SEE_OTHER);
    ctx.server
        .post("/manager/claims/1/reject")
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let claim: Value = ctx.server.get("/claims/1").await.json();
    assert_eq!(claim["status"], "Rejected");
}

#[tokio::test]
async fn test_review_actions_on_missing_claim_are_not_found() {
    let ctx = context();

    ctx.server
        .post("/manager/claims/42/approve")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .post("/manager/claims/42/reject")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .get("/manager/claims/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Lecturer Directory
// ============================================================================

#[tokio::test]
async fn test_lecturer_crud_flow() {
    let ctx = context();

    let response = ctx
        .server
        .post("/lecturers")
        .form(&json!({
            "name": "Dr. Jane Mokoena",
            "email": "jane.mokoena@university.ac.za",
            "department": "Computer Science",
            "phone": "011 555 0199",
        }))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/lecturers");

    let listing: Value = ctx.server.get("/lecturers").await.json();
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert_eq!(listing[0]["id"], 1);
    assert_eq!(listing[0]["name"], "Dr. Jane Mokoena");

    ctx.server
        .put("/lecturers/1")
        .form(&json!({
            "name": "Dr. Jane Mokoena",
            "email": "jane.mokoena@university.ac.za",
            "department": "Mathematics",
            "phone": "011 555 0199",
        }))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let detail: Value = ctx.server.get("/lecturers/1").await.json();
    assert_eq!(detail["department"], "Mathematics");

    ctx.server
        .delete("/lecturers/1")
        .await
        .assert_status(StatusCode::SEE_OTHER);
    ctx.server
        .get("/lecturers/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lecturer_with_missing_fields_is_rejected() {
    let ctx = context();

    let response = ctx
        .server
        .post("/lecturers")
        .form(&json!({
            "name": "",
            "email": "jane.mokoena@university.ac.za",
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "validation_error");
    assert!(ctx.store.lecturers().list().is_empty());
}

#[tokio::test]
async fn test_update_missing_lecturer_is_not_found() {
    let ctx = context();

    ctx.server
        .put("/lecturers/9")
        .form(&json!({
            "name": "Dr. Ghost",
            "email": "ghost@university.ac.za",
            "department": "Physics",
            "phone": "011 555 0000",
        }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
