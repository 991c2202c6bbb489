use crate::tests::utils::{body_bytes, get, init_test_state, start_session};

#[test]
fn export_downloads_workbook() {
    let state = init_test_state();
    let token = start_session(&state);

    get(&state, "/filter?type=Apartment", Some(&token));
    let resp = get(&state, "/export", Some(&token));

    assert_eq!(resp.status(), 200);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(disposition.contains("property_sales.xlsx"));

    let bytes = body_bytes(resp);
    assert!(bytes.starts_with(b"PK"), "xlsx is a zip archive");
}
