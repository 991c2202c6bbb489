use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, location, start_session};
use astra::Body;
use http::Request;
use serde_json::Value;

fn api(state: &crate::state::AppState, token: &str) -> Value {
    serde_json::from_str(&body_string(get(state, "/api/summary", Some(token)))).unwrap()
}

#[test]
fn view_switch_redirects_home() {
    let state = init_test_state();
    let token = start_session(&state);

    for view in ["trends", "insights", "search"] {
        let resp = get(&state, &format!("/view/{view}"), Some(&token));
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), "/");
        assert_eq!(api(&state, &token)["view"], view);
    }
}

#[test]
fn trends_view_renders_twelve_months() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/view/trends", Some(&token));
    let body = body_string(get(&state, "/", Some(&token)));

    assert!(body.contains("Average Price Trends - 2024"));
    assert!(body.contains("Sales Volume by Month"));
    assert_eq!(body.matches("<circle").count(), 12);
    for month in crate::domain::trends::MONTHS {
        assert!(body.contains(&format!(">{month}<")), "missing {month}");
    }
    assert!(!body.contains("Recent Sales"));
}

#[test]
fn trend_series_is_stable_across_requests() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/view/trends", Some(&token));
    let before = body_string(get(&state, "/", Some(&token)));

    get(&state, "/filter?q=road&type=House", Some(&token));
    let after = body_string(get(&state, "/", Some(&token)));

    assert_eq!(before, after);
}

#[test]
fn insights_view_shows_distribution() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/view/insights", Some(&token));
    let body = body_string(get(&state, "/", Some(&token)));

    assert!(body.contains("Price Distribution"));
    assert_eq!(body.matches("<rect").count(), 5);
    assert!(body.contains("300-500k: 4"));
    assert!(body.contains("900k+: 2"));
    // Median of the sample set.
    assert!(body.contains("€650k"));
}

#[test]
fn switching_views_leaves_filter_alone() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/filter?q=apt&max=450000", Some(&token));
    let before = api(&state, &token);

    get(&state, "/view/insights", Some(&token));
    get(&state, "/view/trends", Some(&token));
    let after = api(&state, &token);

    assert_eq!(before["filter"], after["filter"]);
    assert_eq!(before["summary"], after["summary"]);

    let recomputed = state
        .sessions
        .with_dashboard(&token, |d| Ok(d.recomputations()))
        .unwrap();
    assert_eq!(recomputed, 2, "initial load plus one filter change");
}

#[test]
fn unknown_view_is_not_found() {
    let state = init_test_state();
    let token = start_session(&state);

    let req = Request::builder()
        .uri("/view/map")
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
    assert_eq!(api(&state, &token)["view"], "search");
}
