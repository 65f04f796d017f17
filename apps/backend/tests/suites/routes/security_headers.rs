// Security headers on JSON endpoints and the UI.

use actix_web::test;

use crate::support::create_test_app;
use crate::support::fixtures::ab_state;

fn header(resp: &actix_web::dev::ServiceResponse, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[actix_web::test]
async fn api_responses_are_locked_down_and_uncached() {
    let app = create_test_app(ab_state()).build().await;

    let req = test::TestRequest::get().uri("/api/game").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(header(&resp, "x-content-type-options").as_deref(), Some("nosniff"));
    assert_eq!(header(&resp, "x-frame-options").as_deref(), Some("DENY"));
    assert_eq!(header(&resp, "cache-control").as_deref(), Some("no-store"));
    assert!(header(&resp, "content-security-policy")
        .is_some_and(|csp| csp.starts_with("default-src 'none'")));
}

#[actix_web::test]
async fn ui_gets_same_origin_csp_and_default_caching() {
    let app = create_test_app(ab_state()).build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(header(&resp, "content-security-policy")
        .is_some_and(|csp| csp.contains("script-src 'self'")));
    assert!(header(&resp, "cache-control").is_none());
    assert_eq!(header(&resp, "x-frame-options").as_deref(), Some("DENY"));
}
