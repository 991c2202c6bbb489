use crate::domain::{FilterUpdate, PropertyRecord, FilterState, Summary, ViewMode};
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, json_response, redirect, ResultResp};
use crate::session::store::SESSION_TTL_SECS;
use crate::session::SESSION_COOKIE;
use crate::spreadsheets::export_sales_xlsx;
use crate::state::AppState;
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use chrono::Utc;
use serde::Serialize;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::debug!(method, path, "request");

    if (method, path) == ("GET", "/static/main.css") {
        return css_response(MAIN_CSS);
    }

    let now = Utc::now().timestamp();
    let session = state
        .sessions
        .resolve(session_cookie(&req).as_deref(), now)?;

    let mut resp = match route(&req, state, &session.token) {
        Ok(resp) => resp,
        Err(err) => {
            // The cookie is only sent on success, so a new session would be unreachable.
            if session.is_new {
                state.sessions.discard(&session.token)?;
            }
            return Err(err);
        }
    };

    if session.is_new {
        let cookie = format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}",
            session.token
        );
        resp.headers_mut().insert(
            "Set-Cookie",
            cookie.parse().map_err(|_| ServerError::InternalError)?,
        );
    }

    Ok(resp)
}

fn route(req: &Request, state: &AppState, token: &str) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let sessions = &state.sessions;

    match (method, path) {
        ("GET", "/") => {
            let page = sessions.with_dashboard(token, |dash| {
                let snapshot = dash.snapshot(&state.store);
                let vm = DashboardVm {
                    view: dash.view(),
                    filter: dash.filter(),
                    snapshot: &snapshot,
                    trends: dash.trends(),
                };
                Ok(dashboard_page(&vm))
            })?;
            html_response(page)
        }

        ("GET", "/filter") => {
            let update = FilterUpdate::from_pairs(query_pairs(req))?;
            sessions.with_dashboard(token, |dash| {
                dash.apply(update);
                tracing::debug!(filter = ?dash.filter(), "filter updated");
                Ok(())
            })?;
            redirect("/")
        }

        ("GET", "/filter/reset") => {
            sessions.with_dashboard(token, |dash| {
                dash.reset_filters();
                Ok(())
            })?;
            redirect("/")
        }

        ("GET", p) if p.starts_with("/view/") => {
            let view: ViewMode = p["/view/".len()..].parse()?;
            sessions.with_dashboard(token, |dash| {
                dash.select_view(view);
                Ok(())
            })?;
            redirect("/")
        }

        ("GET", "/export") => sessions.with_dashboard(token, |dash| {
            let snapshot = dash.snapshot(&state.store);
            export_sales_xlsx(&snapshot.records, &snapshot.summary, dash.filter())
        }),

        ("GET", "/api/summary") => sessions.with_dashboard(token, |dash| {
            let snapshot = dash.snapshot(&state.store);
            json_response(&SummaryPayload {
                view: dash.view(),
                filter: dash.filter(),
                summary: &snapshot.summary,
                properties: &snapshot.records,
            })
        }),

        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct SummaryPayload<'a> {
    view: ViewMode,
    filter: &'a FilterState,
    summary: &'a Summary,
    properties: &'a [&'a PropertyRecord],
}

fn query_pairs(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}
