use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use faultline_config::ResponseConfig;
use faultline_error::{ClassifiedError, Fault};
use http::header::ACCEPT_LANGUAGE;

use crate::response::{ErrorResponse, Reported};

/// Middleware localizing failures produced by downstream handlers
///
/// Responses built from an [`ApiError`](crate::ApiError) are re-rendered
/// for the request's `Accept-Language`, tagged with the request id and,
/// when enabled, the captured call path. Each one is logged with its full
/// diagnostic render. Other responses pass through untouched.
pub async fn error_handling(config: ResponseConfig, request: Request, next: Next) -> Response {
    let headers = request.headers();
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let request_id = headers
        .get(config.request_id_header.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let response = next.run(request).await;

    let Some(Reported(fault)) = response.extensions().get::<Reported>().cloned() else {
        return response;
    };

    let mut rendered = ErrorResponse::new(&fault, &accept_language);
    rendered.body.request_id = request_id;
    if config.expose_stack_trace {
        rendered.body.stack_trace = fault.stack_trace().filter(|path| !path.is_empty()).map(str::to_owned);
    }

    report(&fault, &rendered);

    rendered.into_response()
}

fn report(fault: &Fault, rendered: &ErrorResponse) {
    let ClassifiedError { id, request_id, .. } = &rendered.body;
    let status = rendered.status.as_u16();
    let stack_trace = fault.stack_trace();

    if rendered.status.is_server_error() {
        tracing::error!(error.id = id, status, request_id, stack_trace, "{}", fault.diagnostic());
    } else {
        tracing::info!(error.id = id, status, request_id, stack_trace, "{}", fault.diagnostic());
    }
}
