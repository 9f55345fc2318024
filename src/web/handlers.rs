// Request handlers.
// Thin glue: resolve the theme, pull a (cached) snapshot, render a page or
// badge, and map failures onto the right status codes.

use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::badge;
use crate::error::DashError;
use crate::stats;
use crate::themes::{DEFAULT_THEME, Theme, get_theme};

use super::{AppState, cookies, pages};

const BADGE_CACHE_CONTROL: &str = "public, max-age=3600";

#[derive(Debug, Default, Deserialize)]
pub struct ThemeQuery {
    pub theme: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetThemeForm {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Landing page with the search form.
pub async fn home(Query(query): Query<ThemeQuery>, headers: HeaderMap) -> Html<String> {
    let theme = resolve_theme(&query, &headers);
    Html(pages::home_page(theme))
}

/// Stats dashboard for one user.
pub async fn stats_page(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(query): Query<ThemeQuery>,
    headers: HeaderMap,
) -> Response {
    let theme = resolve_theme(&query, &headers);

    match stats::cached_user_stats(&state.github, &username, state.config.cache_ttl).await {
        Ok(stats) => {
            let mut response = Html(pages::stats_page(&stats, theme)).into_response();
            // Persist only an explicit selection from the query string.
            if query.theme.is_some() {
                set_theme_cookie(&mut response, theme);
            }
            response
        }
        Err(err) => {
            info!("stats lookup failed for {username}: {err}");
            let status = status_for(&err);
            let body = pages::error_page(&username, &err, theme);
            (status, Html(body)).into_response()
        }
    }
}

/// Embeddable SVG badge for one user.
pub async fn badge(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(query): Query<ThemeQuery>,
) -> Response {
    // Accept /badge/{user}.svg as an alias.
    let login = username
        .strip_suffix(".svg")
        .unwrap_or(username.as_str())
        .to_string();
    let theme = get_theme(query.theme.as_deref().unwrap_or(DEFAULT_THEME));

    match stats::cached_user_stats(&state.github, &login, state.config.cache_ttl).await {
        Ok(stats) => svg_response(StatusCode::OK, badge::render_badge(&stats, theme)),
        Err(err) => {
            info!("badge lookup failed for {login}: {err}");
            let status = match status_for(&err) {
                StatusCode::INTERNAL_SERVER_ERROR => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::NOT_FOUND,
            };
            // Error badges are not cacheable.
            (
                status,
                [(header::CONTENT_TYPE, "image/svg+xml")],
                badge::render_error_badge(&err.to_string()),
            )
                .into_response()
        }
    }
}

/// Persist a theme selection and bounce back to the referring page.
pub async fn set_theme(Form(form): Form<SetThemeForm>) -> Response {
    let theme = get_theme(form.theme.as_deref().unwrap_or(DEFAULT_THEME));
    let redirect_to = form
        .redirect
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());

    let mut response = Redirect::to(&redirect_to).into_response();
    set_theme_cookie(&mut response, theme);
    response
}

/// Theme precedence: query parameter, then cookie, then default.
fn resolve_theme(query: &ThemeQuery, headers: &HeaderMap) -> &'static Theme {
    let id = query
        .theme
        .clone()
        .or_else(|| cookies::cookie_value(headers, cookies::THEME_COOKIE))
        .unwrap_or_else(|| DEFAULT_THEME.to_string());
    get_theme(&id)
}

fn set_theme_cookie(response: &mut Response, theme: &Theme) {
    // Theme ids are static ASCII, so this cannot actually fail.
    if let Ok(value) = HeaderValue::from_str(&cookies::theme_cookie(theme.id)) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
}

fn svg_response(status: StatusCode, svg: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, BADGE_CACHE_CONTROL),
        ],
        svg,
    )
        .into_response()
}

fn status_for(err: &DashError) -> StatusCode {
    match err {
        DashError::UserNotFound(_) | DashError::NotFound(_) => StatusCode::NOT_FOUND,
        DashError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
