//! Assistant endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{assistant::AssistantReply, error::AppResult};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    /// Free-text question, in French
    pub question: String,
}

/// Ask the inventory assistant a question
#[utoipa::path(
    post,
    path = "/assistant",
    tag = "assistant",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Assistant reply", body = AssistantReply),
        (status = 400, description = "Empty question", body = crate::error::ErrorResponse)
    )
)]
pub async fn ask(
    State(state): State<crate::AppState>,
    Json(request): Json<AskRequest>,
) -> AppResult<Json<AssistantReply>> {
    let reply = state.services.assistant.ask(&request.question).await?;
    Ok(Json(reply))
}
