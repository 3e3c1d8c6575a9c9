//! Landing page behaviour: display the current location, focus the subdomain
//! field, and turn a form submission into a navigation.
//!
//! The logic is written against the [`Dom`] trait so the same initializer
//! drives the server-rendered page ([`crate::web::handlers::root`]) and the
//! script-less form fallback. `frontend/static/root.js` is the browser twin.

use crate::domain::navigation::NavigationTarget;

/// Element ids the landing page template must provide.
pub mod ids {
    pub const HOST_DISPLAY: &str = "root-host";
    pub const PROTOCOL_DISPLAY: &str = "root-protocol";
    pub const FORM: &str = "new-catcher";
    pub const SUBDOMAIN_INPUT: &str = "subdomain";
}

/// Current location as the page sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Scheme with trailing colon, e.g. `https:`.
    pub protocol: String,
    /// Host with port when present, e.g. `localhost:8080`.
    pub host: String,
}

/// The slice of a document the landing page touches.
#[cfg_attr(test, mockall::automock)]
pub trait Dom {
    fn location(&self) -> Location;
    fn set_text(&mut self, id: &str, text: &str);
    fn focus(&mut self, id: &str);
    fn value(&self, id: &str) -> String;
    fn navigate(&mut self, url: &str);
}

/// A form submission event.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Page lifecycle after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Idle,
    /// Terminal: the page is being replaced by the given URL.
    Navigating(String),
}

pub struct PageInitializer;

impl PageInitializer {
    /// Runs once when the document is ready.
    ///
    /// Writes host and protocol into their display elements, moves focus to
    /// the subdomain field, and returns the submit handler bound to the form.
    pub fn ready<D: Dom + ?Sized>(dom: &mut D) -> SubmitHandler {
        let location = dom.location();
        dom.set_text(ids::HOST_DISPLAY, &location.host);
        dom.set_text(ids::PROTOCOL_DISPLAY, &location.protocol);

        let handler = SubmitHandler { form: ids::FORM };

        dom.focus(ids::SUBDOMAIN_INPUT);
        handler
    }
}

/// Submit listener attached to the landing page form.
#[derive(Debug, Clone, Copy)]
pub struct SubmitHandler {
    form: &'static str,
}

impl SubmitHandler {
    /// Id of the form this handler listens on.
    pub fn form(&self) -> &'static str {
        self.form
    }

    /// Handles one submission.
    ///
    /// Default submission is always suppressed. An empty subdomain leaves the
    /// page idle; anything else navigates to `protocol//subdomain.host/`.
    pub fn on_submit<D: Dom + ?Sized>(&self, event: &mut SubmitEvent, dom: &mut D) -> PageState {
        event.prevent_default();

        let subdomain = dom.value(ids::SUBDOMAIN_INPUT);
        let location = dom.location();

        match NavigationTarget::new(location.protocol, subdomain, location.host).url() {
            Some(url) => {
                dom.navigate(&url);
                PageState::Navigating(url)
            }
            None => PageState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn catcher_location() -> Location {
        Location {
            protocol: "https:".to_string(),
            host: "requestcatcher.com".to_string(),
        }
    }

    #[test]
    fn test_ready_displays_location_and_focuses_input() {
        let mut dom = MockDom::new();
        dom.expect_location().returning(catcher_location);
        dom.expect_set_text()
            .with(eq(ids::HOST_DISPLAY), eq("requestcatcher.com"))
            .times(1)
            .return_const(());
        dom.expect_set_text()
            .with(eq(ids::PROTOCOL_DISPLAY), eq("https:"))
            .times(1)
            .return_const(());
        dom.expect_focus()
            .with(eq(ids::SUBDOMAIN_INPUT))
            .times(1)
            .return_const(());

        let handler = PageInitializer::ready(&mut dom);
        assert_eq!(handler.form(), ids::FORM);
    }

    #[test]
    fn test_submit_navigates_to_subdomain() {
        let mut dom = MockDom::new();
        dom.expect_location().returning(catcher_location);
        dom.expect_value()
            .with(eq(ids::SUBDOMAIN_INPUT))
            .return_const("foo".to_string());
        dom.expect_navigate()
            .with(eq("https://foo.requestcatcher.com/"))
            .times(1)
            .return_const(());

        let handler = SubmitHandler { form: ids::FORM };
        let mut event = SubmitEvent::new();
        let state = handler.on_submit(&mut event, &mut dom);

        assert!(event.default_prevented());
        assert_eq!(
            state,
            PageState::Navigating("https://foo.requestcatcher.com/".to_string())
        );
    }

    #[test]
    fn test_empty_submit_stays_idle() {
        let mut dom = MockDom::new();
        dom.expect_location().returning(catcher_location);
        dom.expect_value().return_const(String::new());
        dom.expect_navigate().never();

        let handler = SubmitHandler { form: ids::FORM };
        let mut event = SubmitEvent::new();
        let state = handler.on_submit(&mut event, &mut dom);

        assert!(event.default_prevented());
        assert_eq!(state, PageState::Idle);
    }

    #[test]
    fn test_whitespace_subdomain_is_used_verbatim() {
        let mut dom = MockDom::new();
        dom.expect_location().returning(catcher_location);
        dom.expect_value().return_const(" ".to_string());
        dom.expect_navigate()
            .with(eq("https:// .requestcatcher.com/"))
            .times(1)
            .return_const(());

        let handler = SubmitHandler { form: ids::FORM };
        let state = handler.on_submit(&mut SubmitEvent::new(), &mut dom);

        assert!(matches!(state, PageState::Navigating(_)));
    }
}
