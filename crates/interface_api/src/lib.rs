//! HTTP API Layer
//!
//! This crate provides the REST API for the customer registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for customers and health checks
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let service = CustomerService::new(InMemoryCustomerStore::new());
//! let app = create_router(service, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod seed;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use domain_customer::{CustomerService, InMemoryCustomerStore};

use crate::config::ApiConfig;
use crate::middleware::request_log_middleware;
use crate::handlers::{customers, health};

/// Customer service backed by the in-memory store
pub type SharedCustomerService = CustomerService<InMemoryCustomerStore>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: SharedCustomerService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Customer service the handlers operate on
/// * `config` - API configuration; `customers_endpoint` sets the base path
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: SharedCustomerService, config: ApiConfig) -> Router {
    let base = config.customers_path();
    let collection_path = if base.is_empty() { "/".to_string() } else { base.clone() };
    let item_path = format!("{}/:id", base);

    let state = AppState { service, config };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Customer routes
    let customer_routes = Router::new()
        .route(
            &collection_path,
            get(customers::list_customers).post(customers::create_customers),
        )
        .route(
            &item_path,
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .layer(axum_middleware::from_fn(request_log_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(customer_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
