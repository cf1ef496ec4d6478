/// Home view
///
/// `GET /` renders the landing page. The page is public and only adapts its
/// navigation to the login state.

use crate::{error::AppResult, session::{OptionalSession, SessionUser}};
use askama::Template;
use axum::response::Html;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    session: Option<SessionUser>,
}

/// Home page handler
pub async fn index(OptionalSession(session): OptionalSession) -> AppResult<Html<String>> {
    let template = IndexTemplate { session };
    Ok(Html(template.render()?))
}
