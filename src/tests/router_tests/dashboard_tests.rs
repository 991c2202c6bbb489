// src/tests/router_tests/dashboard_tests.rs

use crate::tests::utils::{
    body_string, get, init_test_state, session_from, start_session, try_get,
};

#[test]
fn first_visit_sets_session_cookie() {
    let state = init_test_state();
    let resp = get(&state, "/", None);

    assert_eq!(resp.status(), 200);
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn returning_visit_keeps_session() {
    let state = init_test_state();
    let token = start_session(&state);

    let resp = get(&state, "/", Some(&token));
    assert_eq!(resp.status(), 200);
    assert!(session_from(&resp).is_none(), "no new cookie for a known session");
}

#[test]
fn search_view_lists_first_eight_sales() {
    let state = init_test_state();
    let token = start_session(&state);

    let body = body_string(get(&state, "/", Some(&token)));

    assert!(body.contains("Irish Property Insights"));
    assert!(body.contains("Showing 15 properties"));
    assert_eq!(body.matches("class=\"sale\"").count(), 8);
    assert!(body.contains("12 Fitzwilliam Square, Dublin 2"));
    assert!(body.contains("15 Nov 2024"));
    assert!(body.contains("€850k"));
    // 9th record onwards is not previewed.
    assert!(!body.contains("Apt 5, Ballsbridge, Dublin 4"));
    // Average of the sample set.
    assert!(body.contains("€679k"));
    assert!(body.contains("Price Range: €0 - €2,000,000"));
}

#[test]
fn static_stylesheet_served_without_session() {
    let state = init_test_state();
    let resp = get(&state, "/static/main.css", None);

    assert_eq!(resp.status(), 200);
    assert!(session_from(&resp).is_none());
    let body = body_string(resp);
    assert!(body.contains(".card"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = init_test_state();
    let req = http::Request::builder()
        .uri("/nope")
        .body(astra::Body::empty())
        .unwrap();

    let err = crate::router::handle(req, &state).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}

#[test]
fn failed_requests_without_cookie_leave_no_session() {
    let state = init_test_state();

    for _ in 0..50 {
        for uri in ["/nope", "/filter?min=abc", "/view/bogus"] {
            assert!(try_get(&state, uri, None).is_err());
        }
    }

    assert_eq!(state.sessions.len(), 0);
}

#[test]
fn failed_request_keeps_existing_session() {
    let state = init_test_state();
    let token = start_session(&state);

    assert!(try_get(&state, "/filter?type=Castle", Some(&token)).is_err());

    assert_eq!(state.sessions.len(), 1);
    let resp = get(&state, "/", Some(&token));
    assert!(session_from(&resp).is_none(), "session survived the failed request");
}
