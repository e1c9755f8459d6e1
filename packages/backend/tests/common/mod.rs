use axum::Router;

pub fn create_test_app() -> Router {
    tutor_backend::create_app()
}
