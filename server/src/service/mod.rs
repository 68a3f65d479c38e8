//! HTTP service: shared state, router and endpoint wiring.
//!
//! Article routes go through an [`ArticleRepository`]; customer and order
//! routes read and write the in-memory [`collections`](crate::collections).

mod endpoints;
mod error;

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::collections::{CustomerStore, OrderStore};
use crate::persistence::ArticleRepository;
use endpoints::{articles, customers, orders};
pub use error::ApiError;

/// Application state shared across handlers.
pub struct AppState<R: ArticleRepository> {
    pub articles: Arc<R>,
    pub customers: Arc<CustomerStore>,
    pub orders: Arc<OrderStore>,
}

impl<R: ArticleRepository> AppState<R> {
    pub fn new(articles: Arc<R>, customers: CustomerStore, orders: OrderStore) -> Self {
        Self {
            articles,
            customers: Arc::new(customers),
            orders: Arc::new(orders),
        }
    }
}

impl<R: ArticleRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            articles: Arc::clone(&self.articles),
            customers: Arc::clone(&self.customers),
            orders: Arc::clone(&self.orders),
        }
    }
}

/// Build the router with every route.
pub fn build_router<R: ArticleRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/", get(articles::redirect_to_articles))
        .route("/health", get(health))
        // Articles
        .route(
            "/articles",
            get(articles::list_articles::<R>).post(articles::create_article::<R>),
        )
        .route(
            "/articles/{id}",
            get(articles::show_article::<R>).post(articles::update_or_delete_article::<R>),
        )
        // Customers
        .route(
            "/customer",
            get(customers::list_customers::<R>).post(customers::create_customer::<R>),
        )
        .route(
            "/customer/",
            get(customers::missing_id).delete(customers::missing_id),
        )
        .route(
            "/customer/{id}",
            get(customers::show_customer::<R>).delete(customers::delete_customer::<R>),
        )
        // Orders
        .route("/order", get(orders::list_orders::<R>))
        .route("/order/", get(orders::missing_id))
        .route("/order/{id}", get(orders::show_order::<R>))
        .route("/order/{id}/total", get(orders::order_total::<R>))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, Response};
    use axum::Router;
    use tower::ServiceExt;

    use super::{build_router, AppState};
    use crate::collections::{CustomerStore, OrderStore};
    use crate::persistence::InMemoryArticleRepository;

    pub fn test_state() -> AppState<InMemoryArticleRepository> {
        AppState::new(
            Arc::new(InMemoryArticleRepository::new()),
            CustomerStore::new(),
            OrderStore::with_sample_orders(),
        )
    }

    pub fn router(state: &AppState<InMemoryArticleRepository>) -> Router {
        build_router(state.clone())
    }

    pub async fn send(app: Router, req: Request<Body>) -> Response<Body> {
        app.oneshot(req).await.expect("resp")
    }

    pub async fn body_text(resp: Response<Body>) -> String {
        let body = axum::body::to_bytes(resp.into_body(), 64 * 1024)
            .await
            .expect("body");
        String::from_utf8(body.to_vec()).expect("utf8")
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("req")
    }

    pub fn post_form(uri: &str, form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("req")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let state = test_state();
        let resp = send(router(&state), get("/health")).await;
        assert_eq!(resp.status(), 200);
        assert!(body_text(resp).await.contains("ok"));
    }

    #[tokio::test]
    async fn root_redirects_to_articles() {
        let state = test_state();
        let resp = send(router(&state), get("/")).await;
        assert!(resp.status().is_redirection());
        assert_eq!(resp.headers()["location"], "/articles");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let state = test_state();
        let resp = send(router(&state), get("/nope")).await;
        assert_eq!(resp.status(), 404);
    }
}
