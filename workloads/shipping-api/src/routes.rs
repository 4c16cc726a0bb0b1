//! Endpoint routing, independent of the Spin runtime.

use http::{Method, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use parts_observability::StructuredLogger;
use parts_shipping::prelude::*;

use crate::query::parse_query;

/// An incoming request, reduced to what the endpoints read.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub body: Vec<u8>,
}

/// A JSON response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: impl serde::Serialize) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    fn with_status(status: StatusCode, body: impl serde::Serialize) -> Self {
        let body = serde_json::to_value(body).unwrap_or(Value::Null);
        Self { status, body }
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// 405 for a verb no endpoint accepts.
    pub fn method_not_allowed() -> Self {
        Self::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }
}

/// Form fields as posted by the order form. Missing fields are empty.
#[derive(Debug, Default, Deserialize)]
struct ShippingForm {
    #[serde(default)]
    method: String,
    #[serde(default)]
    country: String,
}

/// Dispatch a request to its endpoint.
///
/// Business outcomes ("invalid", "unavailable") are 200 responses; only
/// malformed requests get 4xx.
pub fn route(req: &ApiRequest, table: &RateTable, logger: &StructuredLogger) -> ApiResponse {
    let path = req.path.trim_end_matches('/');
    let response = match (path, &req.method) {
        ("/shipping/validate", &Method::POST) => validate(req, table, logger),
        ("/shipping/select", &Method::POST) => select(req, table, logger),
        ("/shipping/quote", &Method::GET) => quote(req, table, logger),
        ("/shipping/countries", &Method::GET) => countries(req, table),
        (
            "/shipping/validate" | "/shipping/select" | "/shipping/quote" | "/shipping/countries",
            _,
        ) => ApiResponse::method_not_allowed(),
        _ => ApiResponse::error(StatusCode::NOT_FOUND, format!("No route for {}", req.path)),
    };

    if response.status.is_client_error() {
        logger
            .warn_builder("request rejected")
            .field("method", req.method.as_str())
            .field_u64("status", u64::from(response.status.as_u16()))
            .field_json("detail", &response.body)
            .emit();
    }

    response
}

fn parse_form(body: &[u8]) -> Result<ShippingForm, ApiResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ShippingForm::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        ApiResponse::error(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e))
    })
}

fn validate(req: &ApiRequest, table: &RateTable, logger: &StructuredLogger) -> ApiResponse {
    let form = match parse_form(&req.body) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let result = table.validate_fields(&form.method, &form.country);
    logger
        .debug_builder("shipping fields validated")
        .field("shipping_method", form.method.as_str())
        .field("destination_country", form.country.as_str())
        .field_bool("valid", result.is_valid)
        .emit();

    ApiResponse::ok(result)
}

fn select(req: &ApiRequest, table: &RateTable, logger: &StructuredLogger) -> ApiResponse {
    let form = match parse_form(&req.body) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match table.select_shipping(&form.method, &form.country) {
        Ok(selection) => {
            logger
                .info_builder("shipping selected")
                .field("shipping_method", selection.method.as_str())
                .field("destination_country", selection.country.as_str())
                .field_u64("estimated_days", u64::from(selection.estimated_days))
                .emit();
            ApiResponse::ok(selection)
        }
        Err(ShippingError::Rejected(errors)) => ApiResponse::with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "isValid": false, "errors": errors }),
        ),
        Err(e) => {
            logger
                .error_builder("rate table inconsistent")
                .field("error", e.to_string())
                .emit();
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn quote(req: &ApiRequest, table: &RateTable, logger: &StructuredLogger) -> ApiResponse {
    let params = parse_query(&req.query);
    let raw_method = params.get("method").map(String::as_str).unwrap_or("");
    let method = match ShippingMethod::parse(raw_method) {
        Some(method) => method,
        None => {
            return ApiResponse::error(
                StatusCode::BAD_REQUEST,
                format!("Unknown shipping method: {:?}", raw_method),
            )
        }
    };
    let country = params.get("country").map(String::as_str).unwrap_or("");

    let result = table.calculate_cost(method, country);
    logger
        .debug_builder("shipping quoted")
        .field("shipping_method", method.as_str())
        .field("destination_country", country)
        .field_bool("available", result.is_available)
        .field_u64("base_cost", u64::from(result.base_cost))
        .emit();

    ApiResponse::ok(result)
}

fn countries(req: &ApiRequest, table: &RateTable) -> ApiResponse {
    let params = parse_query(&req.query);
    let mut query = PickerQuery::default();

    if let Some(raw) = params.get("method").filter(|m| !m.is_empty()) {
        match ShippingMethod::parse(raw) {
            Some(method) => query.method = Some(method),
            None => {
                return ApiResponse::error(
                    StatusCode::BAD_REQUEST,
                    format!("Unknown shipping method: {:?}", raw),
                )
            }
        }
    }
    if let Some(raw) = params.get("locale").filter(|l| !l.is_empty()) {
        match raw.parse::<Locale>() {
            Ok(locale) => query.locale = locale,
            Err(e) => return ApiResponse::error(StatusCode::BAD_REQUEST, e),
        }
    }
    query.search = params.get("q").cloned();

    ApiResponse::ok(json!({ "regions": table.picker(&query) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_observability::{LogLevel, RequestId};

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test")).with_min_level(LogLevel::Error)
    }

    fn get(path: &str, query: &str) -> ApiResponse {
        let req = ApiRequest {
            method: Method::GET,
            path: path.to_string(),
            query: query.to_string(),
            body: Vec::new(),
        };
        route(&req, RateTable::builtin(), &logger())
    }

    fn post(path: &str, body: &str) -> ApiResponse {
        let req = ApiRequest {
            method: Method::POST,
            path: path.to_string(),
            query: String::new(),
            body: body.as_bytes().to_vec(),
        };
        route(&req, RateTable::builtin(), &logger())
    }

    #[test]
    fn test_validate_ok() {
        let resp = post("/shipping/validate", r#"{"method":"air","country":"AE"}"#);
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body, json!({ "isValid": true, "errors": {} }));
    }

    #[test]
    fn test_validate_invalid_is_still_200() {
        let resp = post("/shipping/validate", r#"{"method":"land","country":"LB"}"#);
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["isValid"], false);
        assert_eq!(
            resp.body["errors"]["destinationCountry"],
            "Shipping method \"land\" is not available for this country."
        );
    }

    #[test]
    fn test_validate_missing_fields() {
        let resp = post("/shipping/validate", "");
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["errors"]["shippingMethod"], "Please select a shipping method.");
        assert_eq!(
            resp.body["errors"]["destinationCountry"],
            "Please select a destination country."
        );
    }

    #[test]
    fn test_validate_malformed_json() {
        let resp = post("/shipping/validate", "{method:");
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert!(resp.body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[test]
    fn test_quote() {
        let resp = get("/shipping/quote", "method=land&country=SA");
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["baseCost"], 50);
        assert_eq!(resp.body["estimatedDays"], 3);
        assert_eq!(resp.body["currency"], "AED");
        assert_eq!(resp.body["isAvailable"], true);
    }

    #[test]
    fn test_quote_unavailable_is_200() {
        let resp = get("/shipping/quote", "method=air&country=US");
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["isAvailable"], false);
        assert_eq!(resp.body["baseCost"], 0);
    }

    #[test]
    fn test_quote_bad_method_is_400() {
        assert_eq!(get("/shipping/quote", "method=sea&country=AE").status, StatusCode::BAD_REQUEST);
        assert_eq!(get("/shipping/quote", "country=AE").status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_select() {
        let resp = post("/shipping/select", r#"{"method":"air","country":"AE"}"#);
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["method"], "air");
        assert_eq!(resp.body["estimatedDays"], 1);
        assert_eq!(resp.body["rate"]["amountMinor"], 5000);

        let resp = post("/shipping/select", r#"{"method":"air","country":"XX"}"#);
        assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            resp.body["errors"]["destinationCountry"],
            "Invalid or unsupported country."
        );
    }

    #[test]
    fn test_countries() {
        let resp = get("/shipping/countries", "method=land&locale=en&q=leb");
        assert_eq!(resp.status, StatusCode::OK);
        let regions = resp.body["regions"].as_array().unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0]["options"][0]["code"], "LB");
        assert_eq!(regions[0]["options"][0]["disabled"], true);

        assert_eq!(get("/shipping/countries", "locale=fr").status, StatusCode::BAD_REQUEST);
        assert_eq!(get("/shipping/countries", "method=boat").status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_route_and_verb() {
        assert_eq!(get("/orders", "").status, StatusCode::NOT_FOUND);
        assert_eq!(get("/shipping/validate", "").status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(post("/shipping/quote", "").status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(get("/shipping/quote/", "method=air&country=AE").status, StatusCode::OK);
    }
}
