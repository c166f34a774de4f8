use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::SharedState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/tasks";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(
            ROUTER_PATH,
            post(TaskController::create).fallback(TaskController::method_not_found),
        )
        .route(
            format!("{}/:task_id", ROUTER_PATH).as_str(),
            get(TaskController::get)
                .put(TaskController::update)
                .delete(TaskController::delete)
                .fallback(TaskController::method_not_found),
        )
        .with_state(app_state)
}
