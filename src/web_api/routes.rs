pub mod health_routes;
pub mod task_routes;

use axum::Router;

use crate::{app_state::SharedState, task_controller::TaskController};

pub fn map_routes(state: SharedState) -> Router {
    Router::new()
        .merge(task_routes::get_router(state.clone()))
        .merge(health_routes::get_router(state))
        .fallback(TaskController::method_not_found)
}
