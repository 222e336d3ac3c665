//! Manager review handlers
//!
//! The review queue is the pending subset of the claims collection.
//! Approve and reject overwrite the status unconditionally — re-deciding
//! an already decided claim succeeds silently — and redirect back to the
//! queue.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};

use crate::dto::claims::ClaimResponse;
use crate::error::ApiError;
use crate::AppState;
use core_kernel::ClaimId;
use domain_claims::ClaimStatus;

/// Lists the claims awaiting review
pub async fn list_pending(State(state): State<AppState>) -> Json<Vec<ClaimResponse>> {
    let pending = state.store.claims().list_pending();
    Json(pending.into_iter().map(ClaimResponse::from).collect())
}

/// Shows a single claim for review
pub async fn review_claim(
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

/// Approves a claim
pub async fn approve_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    decide(&state, ClaimId::new(id), ClaimStatus::Approved)
}

/// Rejects a claim
pub async fn reject_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    decide(&state, ClaimId::new(id), ClaimStatus::Rejected)
}

fn decide(state: &AppState, id: ClaimId, status: ClaimStatus) -> Result<Redirect, ApiError> {
    if !state.store.claims().set_status(id, status) {
        tracing::warn!(claim = %id, %status, "review target not found");
        return Err(ApiError::NotFound(format!("Claim {} not found", id.value())));
    }
    tracing::info!(claim = %id, %status, "claim reviewed");

    Ok(Redirect::to("/manager/claims"))
}
