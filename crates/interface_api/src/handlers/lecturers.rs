//! Lecturer directory handlers
//!
//! Straight CRUD pass-through to the store. Field presence is the only
//! validation, enforced through the `validator` derive on the entity.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use validator::Validate;

use crate::dto::lecturers::{LecturerForm, LecturerResponse};
use crate::error::ApiError;
use crate::AppState;
use core_kernel::LecturerId;
use domain_lecturer::Lecturer;

/// Lists all lecturers
pub async fn list_lecturers(State(state): State<AppState>) -> Json<Vec<LecturerResponse>> {
    let lecturers = state.store.lecturers().list();
    Json(lecturers.into_iter().map(LecturerResponse::from).collect())
}

/// Gets a lecturer by id
pub async fn get_lecturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LecturerResponse>, ApiError> {
    state
        .store
        .lecturers()
        .get(LecturerId::new(id))
        .map(|lecturer| Json(LecturerResponse::from(lecturer)))
        .ok_or_else(|| ApiError::NotFound(format!("Lecturer {id} not found")))
}

/// Registers a new lecturer
pub async fn create_lecturer(
    State(state): State<AppState>,
    Form(form): Form<LecturerForm>,
) -> Result<Redirect, ApiError> {
    let lecturer = Lecturer::from(form);
    lecturer.validate()?;

    let stored = state.store.lecturers().add(lecturer);
    tracing::info!(lecturer = %stored.id, name = %stored.name, "lecturer registered");

    Ok(Redirect::to("/lecturers"))
}

/// Updates an existing lecturer
pub async fn update_lecturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<LecturerForm>,
) -> Result<Redirect, ApiError> {
    let mut lecturer = Lecturer::from(form);
    lecturer.validate()?;
    lecturer.id = LecturerId::new(id);

    if !state.store.lecturers().update(&lecturer) {
        return Err(ApiError::NotFound(format!("Lecturer {id} not found")));
    }
    tracing::info!(lecturer = %lecturer.id, "lecturer updated");

    Ok(Redirect::to("/lecturers"))
}

/// Removes a lecturer from the directory
pub async fn delete_lecturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    let id = LecturerId::new(id);
    if !state.store.lecturers().delete(id) {
        return Err(ApiError::NotFound(format!("Lecturer {id} not found")));
    }
    tracing::info!(lecturer = %id, "lecturer removed");

    Ok(Redirect::to("/lecturers"))
}
