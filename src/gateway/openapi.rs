//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CurrencyPayload, ExchangePayload};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rate Resolver API",
        version = "1.0.0",
        description = "Currency exchange rate resolution service with inverse and \
                       triangulated rate derivation."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::get_currencies,
        crate::gateway::handlers::create_currency,
        crate::gateway::handlers::update_currency,
        crate::gateway::handlers::get_rate,
        crate::gateway::handlers::create_exchange,
    ),
    components(
        schemas(
            HealthResponse,
            CurrencyPayload,
            ExchangePayload,
        )
    ),
    tags(
        (name = "Currencies", description = "Currency catalog management"),
        (name = "Exchanges", description = "Rate ingestion and resolution"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Rate Resolver API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/currencies"));
        assert!(paths.paths.contains_key("/api/v1/exchanges"));
        assert!(paths.paths.contains_key("/api/v1/exchanges/{from}/{to}"));
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Rate Resolver API"));
    }
}
