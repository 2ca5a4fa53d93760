//! Client configuration endpoint
//!
//! Public: the apps read it before sign-in.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::ClientConfig;
use crate::interfaces::http::common::ApiResponse;

#[derive(Clone)]
pub struct ClientConfigState {
    pub client: Arc<ClientConfig>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeatureFlagsDto {
    pub maps_enabled: bool,
    pub route_optimization: bool,
    pub photo_upload: bool,
    pub real_time_updates: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientConfigDto {
    pub app_name: String,
    pub app_version: String,
    pub api_base_url: String,
    pub debug_mode: bool,
    pub maps_api_key: Option<String>,
    pub features: FeatureFlagsDto,
}

impl From<&ClientConfig> for ClientConfigDto {
    fn from(c: &ClientConfig) -> Self {
        Self {
            app_name: c.app_name.clone(),
            app_version: c.app_version.clone(),
            api_base_url: c.api_base_url.clone(),
            debug_mode: c.debug_mode,
            maps_api_key: c.maps_api_key.clone(),
            features: FeatureFlagsDto {
                maps_enabled: c.features.maps_enabled,
                route_optimization: c.features.route_optimization,
                photo_upload: c.features.photo_upload,
                real_time_updates: c.features.real_time_updates,
            },
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/config/client",
    tag = "Config",
    responses(
        (status = 200, description = "Client settings", body = ApiResponse<ClientConfigDto>)
    )
)]
pub async fn client_config(
    State(state): State<ClientConfigState>,
) -> Json<ApiResponse<ClientConfigDto>> {
    Json(ApiResponse::success(ClientConfigDto::from(state.client.as_ref())))
}
