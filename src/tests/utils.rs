use crate::domain::RecordStore;
use crate::errors::ResultResp;
use crate::router::handle;
use crate::session::{SessionStore, SESSION_COOKIE};
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Fresh app state over the sample sales, with a fixed trend seed.
pub fn init_test_state() -> AppState {
    let store = RecordStore::sample().unwrap_or_else(|e| panic!("sample store failed: {e}"));
    AppState::new(store, SessionStore::new(Some(7)))
}

pub fn get(state: &AppState, uri: &str, session: Option<&str>) -> Response {
    try_get(state, uri, session).expect("Handler failed")
}

pub fn try_get(state: &AppState, uri: &str, session: Option<&str>) -> ResultResp {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("{SESSION_COOKIE}={token}"));
    }
    let req = builder.body(Body::empty()).unwrap();

    handle(req, state)
}

/// Opens a session by loading the dashboard and returns the cookie token.
pub fn start_session(state: &AppState) -> String {
    let resp = get(state, "/", None);
    assert_eq!(resp.status(), 200);
    session_from(&resp).expect("new session should set a cookie")
}

pub fn session_from(resp: &Response) -> Option<String> {
    let header = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    let (pair, _) = header.split_once(';')?;
    let (name, value) = pair.split_once('=')?;
    (name == SESSION_COOKIE).then(|| value.to_string())
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
