//! Customer endpoints over the in-memory [`CustomerStore`](crate::collections::CustomerStore).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::collections::Customer;
use crate::persistence::ArticleRepository;
use crate::service::AppState;

pub async fn list_customers<R: ArticleRepository>(State(state): State<AppState<R>>) -> Response {
    let customers = state.customers.list().await;
    if customers.is_empty() {
        (StatusCode::OK, "No customers found").into_response()
    } else {
        Json(customers).into_response()
    }
}

pub async fn create_customer<R: ArticleRepository>(
    State(state): State<AppState<R>>,
    Json(customer): Json<Customer>,
) -> Response {
    tracing::info!(id = %customer.id, "HTTP create_customer");
    state.customers.add(customer).await;
    (StatusCode::CREATED, "Customer stored correctly").into_response()
}

pub async fn show_customer<R: ArticleRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Response {
    match state.customers.find(&id).await {
        Some(customer) => Json(customer).into_response(),
        None => (StatusCode::NOT_FOUND, format!("No customer with id {id}")).into_response(),
    }
}

pub async fn delete_customer<R: ArticleRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Response {
    tracing::info!(id = %id, "HTTP delete_customer");
    if state.customers.remove(&id).await {
        (StatusCode::ACCEPTED, "Customer removed correctly").into_response()
    } else {
        (StatusCode::NOT_FOUND, format!("No customer with id {id}")).into_response()
    }
}

pub async fn missing_id() -> Response {
    (StatusCode::BAD_REQUEST, "Missing id").into_response()
}
