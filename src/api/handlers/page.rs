// src/api/handlers/page.rs
use actix_multipart::Multipart;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, Result, web};
use uuid::Uuid;

use crate::api::AppState;
use crate::api::upload::read_form;
use crate::fetch::FetchCache;
use crate::form::FormState;
use crate::render::{Page, load_sections, render_page};
use crate::submission::{Notice, submit};

pub const SESSION_COOKIE: &str = "party_session";

fn session_id(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

async fn render(
    state: &AppState,
    session: Uuid,
    cache: &mut FetchCache,
    form: &FormState,
    notices: &[Notice],
) -> HttpResponse {
    let (rankings, chart) = load_sections(cache, state.service.as_ref()).await;

    let markup = render_page(&Page {
        settings: &state.config.page,
        form,
        notices,
        rankings: &rankings,
        chart: &chart,
    });

    let cookie = Cookie::build(SESSION_COOKIE, session.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    HttpResponse::Ok()
        .cookie(cookie)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

/// GET / - One render pass with an empty form
pub async fn show_page(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let (session, cache) = state.sessions.checkout(session_id(&req)).await;
    let mut cache = cache.lock().await;

    Ok(render(&state, session, &mut cache, &FormState::default(), &[]).await)
}

/// POST /submit - Validate, send to the backend, render again
pub async fn submit_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse> {
    let (session, cache) = state.sessions.checkout(session_id(&req)).await;
    let mut cache = cache.lock().await;

    let (form, attachment) = read_form(payload, state.config.max_upload_bytes).await;
    let attachment = match attachment {
        Ok(attachment) => attachment,
        Err(e) => {
            log::warn!("⚠️  unreadable submission: {}", e);
            let notices = [Notice::Error(e.to_string())];
            return Ok(render(&state, session, &mut cache, &form, &notices).await);
        }
    };

    let submission = match form.validate(attachment) {
        Ok(submission) => submission,
        Err(e) => {
            let notices = [Notice::Error(e.to_string())];
            return Ok(render(&state, session, &mut cache, &form, &notices).await);
        }
    };

    let report = submit(state.service.as_ref(), &mut cache, &submission).await;
    let form = if report.accepted() {
        FormState::default()
    } else {
        form
    };

    Ok(render(&state, session, &mut cache, &form, &report.lasting_notices()).await)
}
