//! OpenAPI specification generation and app factory.

use crate::{
    config::AppConfig,
    error::ApiError,
    handlers::{get_metrics, health, version, windchill},
    middleware::{MetricsMiddleware, RequestIdMiddleware},
    services::{AppMetrics, WindChillCalculator},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Path of the felt-temperature calculation endpoint
pub const WINDCHILL_ROUTE: &str = "/windchill/v1/berechnung";

/// Path the generated OpenAPI document is served at
pub const OPENAPI_ROUTE: &str = "/api/spec/v2";

/// Creates the OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Windchill API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Computes the felt (windchill) temperature for a given air temperature and wind speed.\n\n\
                ## Calculation\n\
                `GET /windchill/v1/berechnung?pt=<°C>&wg=<km/h>`\n\
                \n\
                - `pt`: actual temperature, -50.0 to 10.0 °C\n\
                - `wg`: wind speed, 5.0 to 60.0 km/h\n\
                \n\
                ```json\n\
                {\"tatsaechlicheTemperatur\":1.0,\"windgeschwindigkeit\":25.0,\"gefuehlteTemperatur\":-4.0}\n\
                ```\n\
                \n\
                ## Errors\n\
                Errors are returned as `{\"error\": <reason>, \"message\": <details>}`.\n\
                - `400`: a parameter is missing or not a finite number\n\
                - `422`: a parameter lies outside its valid range\n\
                \n\
                ## Configuration\n\
                - `WINDCHILL_ROUNDING=legacy|tenths` selects how the felt temperature is rounded (default: legacy)\n\
                - `SERVER_HOST`, `SERVER_PORT`, `SERVER_WORKERS` configure the listener\n\
                - `METRICS_ENABLED=false` disables `/api/metrics`".into()
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the fully configured application
///
/// Used by `main` for every worker and by the integration tests, so both
/// exercise the same middleware stack and routes.
pub fn create_app(
    config: &AppConfig,
    metrics: AppMetrics,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let calculator = WindChillCalculator::new(config.windchill.rounding);
    let query_config = actix_web::web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::MalformedInput(err.to_string()).into());

    App::new()
        .wrap(MetricsMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(query_config)
        .app_data(web::Data::new(config.metrics.clone()))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(calculator))
        .service(web::resource(WINDCHILL_ROUTE).route(web::get().to(windchill)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at(OPENAPI_ROUTE)
        .build()
}
