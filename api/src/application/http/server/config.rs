use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

/// Public, secret-free view of the running configuration
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub app_version: String,
    pub text_model: String,
    pub image_model: String,
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        text_model: state.args.llm.gemini_model.clone(),
        image_model: state.args.llm.imagen_model.clone(),
    })
}
