//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Label used for requests that matched no registered route
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Extract the matched route pattern of a request
///
/// Unmatched paths collapse into a single label so that arbitrary 404
/// paths cannot blow up metric cardinality.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_unmatched_request() {
        let req = TestRequest::get().uri("/does/not/exist").to_http_request();
        assert_eq!(extract_route_pattern(&req), UNMATCHED_ROUTE);
    }
}
