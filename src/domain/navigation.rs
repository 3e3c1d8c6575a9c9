//! Navigation target composed from a subdomain and the current location.

/// Where the browser goes after the landing-page form is submitted.
///
/// Built fresh for each submission and discarded once navigation starts.
/// The subdomain is used verbatim: no trimming, no character checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub protocol: String,
    pub subdomain: String,
    pub host: String,
}

impl NavigationTarget {
    /// Creates a navigation target.
    ///
    /// # Arguments
    ///
    /// - `protocol` - Scheme including the trailing colon (e.g., `https:`)
    /// - `subdomain` - Label entered by the user
    /// - `host` - Current host, port included when present
    pub fn new(
        protocol: impl Into<String>,
        subdomain: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            subdomain: subdomain.into(),
            host: host.into(),
        }
    }

    /// Returns `protocol//subdomain.host/`, or `None` for an empty subdomain.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_catcher::domain::navigation::NavigationTarget;
    ///
    /// let target = NavigationTarget::new("https:", "foo", "requestcatcher.com");
    /// assert_eq!(target.url().as_deref(), Some("https://foo.requestcatcher.com/"));
    ///
    /// let empty = NavigationTarget::new("https:", "", "requestcatcher.com");
    /// assert_eq!(empty.url(), None);
    /// ```
    pub fn url(&self) -> Option<String> {
        if self.subdomain.is_empty() {
            return None;
        }

        Some(format!(
            "{}//{}.{}/",
            self.protocol, self.subdomain, self.host
        ))
    }
}
