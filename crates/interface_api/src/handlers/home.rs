//! Home route

use axum::response::Redirect;

/// Landing route, forwards to the claims listing
pub async fn index() -> Redirect {
    Redirect::to("/claims")
}
