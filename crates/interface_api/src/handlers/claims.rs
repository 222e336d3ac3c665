//! Claims handlers
//!
//! Submission and edit arrive as multipart forms so they can carry an
//! optional proof-of-work file. The flow is always: validate fields,
//! validate the file, then touch disk, then touch the store — a rejected
//! submission leaves no trace anywhere.

use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use rust_decimal::Decimal;

use crate::dto::claims::ClaimResponse;
use crate::error::ApiError;
use crate::AppState;
use core_kernel::ClaimId;
use domain_claims::{validate_proof, ClaimSubmission};

/// An uploaded proof file, buffered in memory
struct UploadedProof {
    file_name: String,
    bytes: Bytes,
}

/// Claim submission fields plus the optional proof file
struct ClaimForm {
    submission: ClaimSubmission,
    proof: Option<UploadedProof>,
}

/// Collects the multipart fields of a claim submission
///
/// Missing or empty `hours`/`rate` default to zero; an empty file part
/// counts as no file. Unknown parts are ignored.
async fn read_claim_form(multipart: &mut Multipart) -> Result<ClaimForm, ApiError> {
    let mut submission = ClaimSubmission::default();
    let mut proof = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("Malformed multipart body: {err}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "lecturer_name" => submission.lecturer_name = read_text(field).await?,
            "title" => submission.title = read_text(field).await?,
            "description" => submission.description = read_text(field).await?,
            "hours" => {
                let text = read_text(field).await?;
                if !text.trim().is_empty() {
                    submission.hours = text
                        .trim()
                        .parse()
                        .map_err(|_| ApiError::BadRequest("hours must be an integer".to_string()))?;
                }
            }
            "rate" => {
                let text = read_text(field).await?;
                if !text.trim().is_empty() {
                    submission.rate = text
                        .trim()
                        .parse::<Decimal>()
                        .map_err(|_| ApiError::BadRequest("rate must be a decimal".to_string()))?;
                }
            }
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|err| {
                    ApiError::BadRequest(format!("Failed to read file part: {err}"))
                })?;
                if !bytes.is_empty() {
                    proof = Some(UploadedProof { file_name, bytes });
                }
            }
            _ => {}
        }
    }

    Ok(ClaimForm { submission, proof })
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|err| ApiError::BadRequest(format!("Failed to read field: {err}")))
}

/// Persists an already-validated proof file, returning its relative path
async fn store_proof(state: &AppState, proof: &UploadedProof) -> Result<String, ApiError> {
    state
        .uploads
        .save(&proof.file_name, &proof.bytes)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, file = %proof.file_name, "failed to persist proof file");
            ApiError::Internal("Error saving the uploaded file. Please try again.".to_string())
        })
}

/// Lists all claims
pub async fn list_claims(State(state): State<AppState>) -> Json<Vec<ClaimResponse>> {
    let claims = state.store.claims().list();
    Json(claims.into_iter().map(ClaimResponse::from).collect())
}

/// Gets a claim by id
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClaimResponse>, ApiError> {
    state
        .store
        .claims()
        .get(ClaimId::new(id))
        .map(|claim| Json(ClaimResponse::from(claim)))
        .ok_or_else(|| ApiError::NotFound(format!("Claim {id} not found")))
}

/// Submits a new claim
pub async fn submit_claim(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let form = read_claim_form(&mut multipart).await?;
    form.submission.validate()?;

    let file_path = match &form.proof {
        Some(proof) => {
            validate_proof(&proof.file_name, proof.bytes.len() as u64)?;
            Some(store_proof(&state, proof).await?)
        }
        None => None,
    };

    let stored = state
        .store
        .claims()
        .add(form.submission.into_claim(file_path));
    tracing::info!(claim = %stored.id, lecturer = %stored.lecturer_name, "claim submitted");

    Ok(Redirect::to("/claims"))
}

/// Edits an existing claim
///
/// A newly uploaded proof file replaces the stored one; the previous file
/// is removed best-effort. Without a new upload the existing file and the
/// claim's review status are both preserved.
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let claim_id = ClaimId::new(id);
    let mut existing = state
        .store
        .claims()
        .get(claim_id)
        .ok_or_else(|| ApiError::NotFound(format!("Claim {id} not found")))?;

    let form = read_claim_form(&mut multipart).await?;
    form.submission.validate()?;

    let file_path = match &form.proof {
        Some(proof) => {
            validate_proof(&proof.file_name, proof.bytes.len() as u64)?;
            if let Some(old) = existing.file_path.take() {
                state.uploads.remove_quiet(&old).await;
            }
            Some(store_proof(&state, proof).await?)
        }
        None => existing.file_path.clone(),
    };

    form.submission.apply_to(&mut existing, file_path);
    if !state.store.claims().update(&existing) {
        return Err(ApiError::NotFound(format!("Claim {id} not found")));
    }
    tracing::info!(claim = %claim_id, "claim updated");

    Ok(Redirect::to("/claims"))
}

/// Deletes a claim, removing its proof file best-effort first
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    let claim_id = ClaimId::new(id);

    if let Some(claim) = state.store.claims().get(claim_id) {
        if let Some(path) = &claim.file_path {
            state.uploads.remove_quiet(path).await;
        }
    }

    if !state.store.claims().delete(claim_id) {
        return Err(ApiError::NotFound(format!("Claim {id} not found")));
    }
    tracing::info!(claim = %claim_id, "claim deleted");

    Ok(Redirect::to("/claims"))
}

/// Serves the proof file of a claim verbatim
pub async fn download_proof(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let claim = state
        .store
        .claims()
        .get(ClaimId::new(id))
        .ok_or_else(|| ApiError::NotFound(format!("Claim {id} not found")))?;

    if !claim.has_proof() {
        return Err(ApiError::NotFound(format!("Claim {id} has no proof file")));
    }
    let relative = claim.file_path.unwrap_or_default();

    let path = state.uploads.resolve(&relative);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::NotFound(format!("Proof file for claim {id} not found")))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("download")
        .to_string();
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
