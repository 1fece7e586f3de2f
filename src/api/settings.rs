use crate::model::settings::{Settings, Theme};
use crate::store::AppState;
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct UpdateSettings {
    pub theme: Theme,
}

/// Get settings
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    responses(
        (status = 200, description = "Current settings", body = Settings)
    ),
    tag = "Settings"
)]
pub async fn get_settings(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(*state.settings())
}

/// Update settings
#[utoipa::path(
    put,
    path = "/api/v1/settings",
    request_body = UpdateSettings,
    responses(
        (status = 200, description = "Updated settings", body = Settings)
    ),
    tag = "Settings"
)]
pub async fn update_settings(
    state: web::Data<AppState>,
    payload: web::Json<UpdateSettings>,
) -> impl Responder {
    let settings = {
        let mut settings = state.settings_mut();
        settings.theme = payload.theme;
        *settings
    };
    state.mark_dirty();
    info!(theme = ?settings.theme, "Settings updated");

    HttpResponse::Ok().json(settings)
}
