use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, location, start_session};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;

fn summary_json(state: &crate::state::AppState, token: &str) -> Value {
    let resp = get(state, "/api/summary", Some(token));
    assert_eq!(resp.status(), 200);
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn filter_redirects_and_persists_in_session() {
    let state = init_test_state();
    let token = start_session(&state);

    let resp = get(&state, "/filter?q=&type=Apartment&min=0&max=500000", Some(&token));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");

    let json = summary_json(&state, &token);
    assert_eq!(json["filter"]["selected_type"], "Apartment");
    assert_eq!(json["summary"]["count"], 3);

    let ids: Vec<i64> = json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 6, 13]);

    let prices: Vec<i64> = json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_i64().unwrap())
        .collect();
    assert!(prices.contains(&425_000) && prices.contains(&485_000));
    assert!(!prices.contains(&550_000));
}

#[test]
fn search_term_is_url_decoded() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/filter?q=dublin+6", Some(&token));
    let json = summary_json(&state, &token);

    assert_eq!(json["filter"]["search_term"], "dublin 6");
    assert_eq!(json["summary"]["count"], 3);

    let body = body_string(get(&state, "/", Some(&token)));
    assert!(body.contains("Showing 3 properties"));
    assert!(body.contains("value=\"dublin 6\""));
}

#[test]
fn out_of_range_prices_are_clamped() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/filter?min=-50000&max=5000000", Some(&token));
    let json = summary_json(&state, &token);

    assert_eq!(json["filter"]["price_range"]["min"], 0);
    assert_eq!(json["filter"]["price_range"]["max"], 2_000_000);
}

#[test]
fn inverted_range_gives_empty_result() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/filter?min=900000&max=300000", Some(&token));
    let json = summary_json(&state, &token);

    assert_eq!(json["summary"]["count"], 0);
    assert_eq!(json["summary"]["average_price"], 0);

    let body = body_string(get(&state, "/", Some(&token)));
    assert!(body.contains("No sales match these filters."));
    assert!(body.contains("€0k"));
}

#[test]
fn bad_filter_values_are_rejected() {
    let state = init_test_state();
    let token = start_session(&state);

    for uri in ["/filter?min=abc", "/filter?type=Castle"] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header("Cookie", format!("session={token}"))
            .body(Body::empty())
            .unwrap();

        let err = handle(req, &state).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)), "{uri}");
    }

    // Rejected updates leave the filter untouched.
    let json = summary_json(&state, &token);
    assert_eq!(json["summary"]["count"], 15);
}

#[test]
fn reset_clears_filters() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/filter?q=howth&type=House", Some(&token));
    assert_eq!(summary_json(&state, &token)["summary"]["count"], 1);

    let resp = get(&state, "/filter/reset", Some(&token));
    assert_eq!(resp.status(), 302);

    let json = summary_json(&state, &token);
    assert_eq!(json["summary"]["count"], 15);
    assert_eq!(json["filter"]["search_term"], "");
    assert_eq!(json["filter"]["selected_type"], "All");
}

#[test]
fn sessions_do_not_share_filters() {
    let state = init_test_state();
    let a = start_session(&state);
    let b = start_session(&state);

    get(&state, "/filter?type=Apartment", Some(&a));

    assert_eq!(summary_json(&state, &a)["summary"]["count"], 4);
    assert_eq!(summary_json(&state, &b)["summary"]["count"], 15);
}

#[test]
fn distribution_buckets_sum_to_count() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/filter?type=House&min=500000", Some(&token));
    let json = summary_json(&state, &token);

    let total: u64 = json["summary"]["price_distribution"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, json["summary"]["count"].as_u64().unwrap());
}
