//! Catcher page served on every non-root host.

use askama::Template;
use askama_web::WebTemplate;

/// Template for a subdomain's live request view.
///
/// Renders `templates/catcher.html`; `catcher.js` opens the websocket on
/// `/init-client` and appends each caught request.
#[derive(Template, WebTemplate)]
#[template(path = "catcher.html")]
pub struct CatcherTemplate {
    pub host: String,
    /// Root host with the port of the request, for the link back.
    pub root_host: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catcher_page_shows_host() {
        let html = CatcherTemplate {
            host: "foo.localhost:8080".to_string(),
            root_host: "localhost".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("foo.localhost:8080"));
        assert!(html.contains("/assets/catcher.js"));
    }
}
