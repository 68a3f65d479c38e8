//! Order endpoints over the in-memory [`OrderStore`](crate::collections::OrderStore).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::collections::Order;
use crate::persistence::ArticleRepository;
use crate::service::AppState;

fn no_such_order(number: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("No order with number {number}"),
    )
        .into_response()
}

pub async fn list_orders<R: ArticleRepository>(State(state): State<AppState<R>>) -> Response {
    let orders: Vec<Order> = state.orders.list().await;
    if orders.is_empty() {
        (StatusCode::OK, "No orders found").into_response()
    } else {
        Json(orders).into_response()
    }
}

pub async fn show_order<R: ArticleRepository>(
    State(state): State<AppState<R>>,
    Path(number): Path<String>,
) -> Response {
    match state.orders.find(&number).await {
        Some(order) => Json(order).into_response(),
        None => no_such_order(&number),
    }
}

pub async fn order_total<R: ArticleRepository>(
    State(state): State<AppState<R>>,
    Path(number): Path<String>,
) -> Response {
    match state.orders.find(&number).await {
        Some(order) => Json(order.total()).into_response(),
        None => no_such_order(&number),
    }
}

pub async fn missing_id() -> Response {
    (StatusCode::BAD_REQUEST, "Missing id").into_response()
}
