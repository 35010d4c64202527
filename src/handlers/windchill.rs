//! Windchill endpoint handler.

use crate::{
    error::{ApiError, parse_number},
    models::{WindChillQuery, WindChillResponse},
    services::{
        metrics::{AppMetrics, CalculationOutcome},
        windchill::WindChillCalculator,
    },
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Windchill calculation endpoint
///
/// Computes the felt temperature for an air temperature (`pt`, °C) and a
/// wind speed (`wg`, km/h). Missing or non-numeric parameters are rejected
/// with 400, values outside the formula's valid ranges with 422.
#[api_v2_operation(
    summary = "Windchill Calculation Endpoint",
    description = "Computes the felt temperature for an actual temperature `pt` in °C (-50.0 to 10.0) and a wind speed `wg` in km/h (5.0 to 60.0), e.g. ?pt=1&wg=25.",
    tags("Windchill"),
    responses(
        (status = 200, description = "Successful calculation", body = WindChillResponse),
        (status = 400, description = "Bad Request - Missing or non-numeric parameter"),
        (status = 422, description = "Unprocessable Entity - Parameter outside its valid range")
    )
)]
pub async fn windchill(
    req: HttpRequest,
    query: web::Query<WindChillQuery>,
) -> Result<web::Json<WindChillResponse>, Error> {
    let metrics = req.app_data::<web::Data<AppMetrics>>();
    let calculator = req
        .app_data::<web::Data<WindChillCalculator>>()
        .map(|data| *data.get_ref())
        .unwrap_or_default();

    let inputs = parse_number("pt", query.pt.as_deref())
        .and_then(|pt| parse_number("wg", query.wg.as_deref()).map(|wg| (pt, wg)));
    let (pt, wg) = match inputs {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::debug!(error = %e, "Rejecting malformed windchill request");
            if let Some(metrics) = metrics {
                metrics.record_calculation(CalculationOutcome::MalformedInput);
            }
            return Err(e.into());
        }
    };

    let result = match calculator.calculate(pt, wg) {
        Ok(result) => result,
        Err(e) => {
            if let Some(metrics) = metrics {
                metrics.record_calculation(CalculationOutcome::RangeViolation);
            }
            return Err(ApiError::from(e).into());
        }
    };

    tracing::debug!(
        pt,
        wg,
        felt = result.felt_temperature_celsius,
        rounding = %calculator.rounding(),
        "Computed felt temperature"
    );
    if let Some(metrics) = metrics {
        metrics.record_calculation(CalculationOutcome::Success);
    }

    Ok(web::Json(result.into()))
}
