use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::{PublicUser, RegisterRequest, RegisterResponse},
        error::RegisterError,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), RegisterError> {
    let user = state.registration.register(payload).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            msg: "new user registered".to_string(),
            user: PublicUser {
                id: user.id,
                email: user.email,
            },
        }),
    ))
}
