//! Public landing page.

use askama::Template;
use axum::response::Html;

use super::render;
use crate::error::DashboardError;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    tagline: &'static str,
}

/// `GET /`: the fallback location for denied page requests.
pub async fn home() -> Result<Html<String>, DashboardError> {
    render(&HomeTemplate {
        tagline: "Tasks and questions for your learners.",
    })
}
