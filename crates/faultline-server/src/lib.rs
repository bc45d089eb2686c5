//! axum boundary for faultline errors
//!
//! Handlers return `Result<T, ApiError>`; [`with_error_handling`] installs
//! the middleware that localizes and logs every failure on its way out.

#![allow(clippy::must_use_candidate)]

mod middleware;
mod response;

use axum::Router;
use faultline_config::ResponseConfig;

pub use middleware::error_handling;
pub use response::{ApiError, ErrorResponse};

/// Wrap every route of `router` with [`error_handling`]
pub fn with_error_handling<S>(router: Router<S>, config: &ResponseConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let config = config.clone();
    router.layer(axum::middleware::from_fn(move |request, next| {
        let config = config.clone();
        async move { error_handling(config, request, next).await }
    }))
}
