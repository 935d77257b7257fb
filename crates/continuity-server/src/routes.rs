//! Axum route handlers for the Continuity API.

use crate::error::ApiError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use continuity_core::QueryResolver;
use continuity_memory::MemoryRecord;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub struct AppState {
    pub resolver: QueryResolver,
}

impl AppState {
    pub fn new(resolver: QueryResolver) -> Self {
        Self { resolver }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddMemoryRequest {
    pub issue: String,
    pub solution: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageReply {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QueryReply {
    pub response: String,
    pub context: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorReply {
    pub error: String,
}

// GET /
pub async fn root(State(state): State<Arc<AppState>>) -> Json<MessageReply> {
    Json(MessageReply {
        message: format!(
            "AI Knowledge Continuity Agent ({}) is running",
            state.resolver.provider_name()
        ),
    })
}

// POST /add_memory
pub async fn add_memory(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddMemoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageReply>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    state
        .resolver
        .store()
        .append(MemoryRecord::new(req.issue, req.solution))
        .await?;
    info!("memory added via api");
    Ok((
        StatusCode::OK,
        Json(MessageReply {
            message: "Memory added successfully".to_string(),
        }),
    ))
}

// POST /query
pub async fn query(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<QueryReply>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    debug!("query received (question_len={})", req.question.len());
    let resolution = state.resolver.resolve(&req.question).await?;
    let context = resolution.context();
    Ok((
        StatusCode::OK,
        Json(QueryReply {
            response: resolution.response,
            context,
        }),
    ))
}
