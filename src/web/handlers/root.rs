//! Landing page served on the root host, and its script-less form fallback.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, Uri},
    response::{IntoResponse, Redirect, Response},
};

use crate::api::handlers::catch::catch_request;
use crate::domain::page::{Dom, Location, PageInitializer, PageState, SubmitEvent, ids};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::{extract_host, host_without_port, request_protocol};

/// Landing page model.
///
/// Acts as the page's [`Dom`] while it is prepared: [`PageInitializer`] fills
/// the display elements and focus before the template renders.
#[derive(Template, WebTemplate)]
#[template(path = "root.html")]
pub struct RootTemplate {
    location: Location,
    host_text: String,
    protocol_text: String,
    focused: Option<String>,
    subdomain: String,
}

impl RootTemplate {
    fn new(location: Location, subdomain: String) -> Self {
        Self {
            location,
            host_text: String::new(),
            protocol_text: String::new(),
            focused: None,
            subdomain,
        }
    }

    fn autofocus(&self) -> bool {
        self.focused.as_deref() == Some(ids::SUBDOMAIN_INPUT)
    }
}

impl Dom for RootTemplate {
    fn location(&self) -> Location {
        self.location.clone()
    }

    fn set_text(&mut self, id: &str, text: &str) {
        match id {
            ids::HOST_DISPLAY => self.host_text = text.to_string(),
            ids::PROTOCOL_DISPLAY => self.protocol_text = text.to_string(),
            _ => {}
        }
    }

    fn focus(&mut self, id: &str) {
        self.focused = Some(id.to_string());
    }

    fn value(&self, id: &str) -> String {
        match id {
            ids::SUBDOMAIN_INPUT => self.subdomain.clone(),
            _ => String::new(),
        }
    }

    // Answered with a redirect by the handler.
    fn navigate(&mut self, _url: &str) {}
}

fn location_of(headers: &HeaderMap) -> Result<Location, AppError> {
    Ok(Location {
        protocol: request_protocol(headers),
        host: extract_host(headers)?,
    })
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /` on the root host (dispatched from [`crate::api::handlers::index_handler`])
pub fn root_page(headers: &HeaderMap) -> Result<RootTemplate, AppError> {
    let mut page = RootTemplate::new(location_of(headers)?, String::new());
    PageInitializer::ready(&mut page);
    Ok(page)
}

/// First `subdomain` value of the query string, empty when absent.
fn submitted_subdomain(uri: &Uri) -> String {
    uri.query()
        .and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == ids::SUBDOMAIN_INPUT)
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

/// Form submission without scripting.
///
/// # Endpoint
///
/// `GET /new?subdomain=<label>` on the root host. On any other host the
/// request is treated like every other path there and caught, whatever its
/// query string holds.
///
/// # Response
///
/// - **303 See Other** to `protocol//subdomain.host/` for a non-empty label
/// - **200 OK** with the landing page again for an empty label
pub async fn new_catcher_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let host = extract_host(req.headers())?;
    if host_without_port(&host) != state.config.root_host {
        return catch_request(state, req).await;
    }

    let subdomain = submitted_subdomain(req.uri());
    let mut page = RootTemplate::new(location_of(req.headers())?, subdomain);
    let handler = PageInitializer::ready(&mut page);

    match handler.on_submit(&mut SubmitEvent::new(), &mut page) {
        PageState::Navigating(url) => {
            tracing::debug!(%url, "Navigating to new catcher");
            Ok(Redirect::to(&url).into_response())
        }
        PageState::Idle => Ok(page.into_response()),
    }
}
