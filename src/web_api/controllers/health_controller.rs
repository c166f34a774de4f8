use axum::http::StatusCode;
use axum::response::IntoResponse;

pub struct HealthController {}

impl HealthController {
    pub async fn get() -> impl IntoResponse {
        StatusCode::OK
    }
}
