//! Shipping eligibility and quote endpoints for the storefront.
//!
//! Endpoints:
//! - `POST /shipping/validate` - field errors for `{ method, country }`
//! - `GET /shipping/quote?method=&country=` - cost and transit days
//! - `GET /shipping/countries?method=&q=&locale=` - grouped country picker
//! - `POST /shipping/select` - validated, priced selection for an order
//!
//! Logging is configured through `PARTS_LOG_LEVEL` and `PARTS_LOG_FORMAT`.

mod query;
mod routes;
mod settings;

use spin_sdk::http::{Method as SpinMethod, Request, Response};
use spin_sdk::http_component;

use parts_observability::{RequestId, StructuredLogger};
use parts_shipping::table::RateTable;

pub use routes::{route, ApiRequest, ApiResponse};
pub use settings::LogSettings;

const SERVICE: &str = "shipping-api";

#[http_component]
fn handle_shipping(req: Request) -> anyhow::Result<Response> {
    let request_id = req
        .header("x-request-id")
        .and_then(|v| v.as_str())
        .filter(|v| !v.is_empty())
        .map(RequestId::from_string)
        .unwrap_or_else(RequestId::generate);

    let settings = LogSettings::from_env();
    let logger = StructuredLogger::new(request_id.clone())
        .with_service(SERVICE)
        .with_endpoint(req.path())
        .with_min_level(settings.level)
        .with_format(settings.format);

    let resp = match to_http_method(req.method()) {
        Some(method) => {
            let api_req = ApiRequest {
                method,
                path: req.path().to_string(),
                query: req.query().to_string(),
                body: req.body().to_vec(),
            };
            route(&api_req, RateTable::builtin(), &logger)
        }
        None => {
            logger.warn("unparseable request method");
            ApiResponse::method_not_allowed()
        }
    };
    let body = serde_json::to_vec(&resp.body)?;

    logger
        .info_builder("request complete")
        .field_u64("status", u64::from(resp.status.as_u16()))
        .field_u64("elapsed_us", logger.elapsed_us())
        .emit();

    Ok(Response::builder()
        .status(resp.status.as_u16())
        .header("content-type", "application/json")
        .header("x-request-id", request_id.to_string())
        .body(body)
        .build())
}

/// `None` for an extension method that is not a valid token.
fn to_http_method(method: &SpinMethod) -> Option<http::Method> {
    let method = match method {
        SpinMethod::Get => http::Method::GET,
        SpinMethod::Post => http::Method::POST,
        SpinMethod::Put => http::Method::PUT,
        SpinMethod::Delete => http::Method::DELETE,
        SpinMethod::Patch => http::Method::PATCH,
        SpinMethod::Head => http::Method::HEAD,
        SpinMethod::Options => http::Method::OPTIONS,
        SpinMethod::Connect => http::Method::CONNECT,
        SpinMethod::Trace => http::Method::TRACE,
        SpinMethod::Other(other) => return http::Method::from_bytes(other.as_bytes()).ok(),
    };
    Some(method)
}
