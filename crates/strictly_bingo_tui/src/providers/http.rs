//! Shows served over HTTP by the record-management server.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use strictly_bingo::{CardError, ShowId, ShowProvider, ShowRecord};
use tracing::{debug, instrument};

/// Fetches `GET {base_url}/api/shows/{id}` once per call.
#[derive(Debug, Clone)]
pub struct HttpShowProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpShowProvider {
    /// Creates a provider for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Returns the URL a show is fetched from.
    ///
    /// The id is percent-encoded as a single path segment, so `/`, `?` and
    /// `#` in an id never reach another resource.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Fetch`] if the base URL cannot carry a path.
    pub fn show_url(&self, id: &ShowId) -> Result<Url, CardError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            CardError::Fetch(format!("Invalid server URL {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| CardError::Fetch(format!("Server URL {} has no path", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "shows", id.as_str()]);
        Ok(url)
    }

    /// Dot segments would be resolved away by URL normalization.
    fn is_segment_id(id: &ShowId) -> bool {
        !matches!(id.as_str(), "" | "." | "..")
    }
}

#[async_trait]
impl ShowProvider for HttpShowProvider {
    #[instrument(skip(self), fields(show_id = %id))]
    async fn get_show(&self, id: &ShowId) -> Result<ShowRecord, CardError> {
        if !Self::is_segment_id(id) {
            return Err(CardError::NotFound(id.clone()));
        }

        let url = self.show_url(id)?;
        debug!(url = %url, "Fetching show");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CardError::Fetch(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CardError::NotFound(id.clone()));
        }

        let response = response
            .error_for_status()
            .map_err(|e| CardError::Fetch(e.to_string()))?;

        response
            .json::<ShowRecord>()
            .await
            .map_err(|e| CardError::Fetch(format!("Invalid show record: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(base: &str, id: &str) -> String {
        HttpShowProvider::new(base)
            .show_url(&ShowId::new(id))
            .expect("valid base")
            .to_string()
    }

    #[test]
    fn test_show_url_handles_trailing_slash() {
        assert_eq!(
            url("http://localhost:3000/", "pilot"),
            "http://localhost:3000/api/shows/pilot"
        );
        assert_eq!(
            url("http://localhost:3000", "pilot"),
            "http://localhost:3000/api/shows/pilot"
        );
        assert_eq!(
            url("http://localhost:3000/bingo/", "pilot"),
            "http://localhost:3000/bingo/api/shows/pilot"
        );
    }

    #[test]
    fn test_show_url_encodes_id_as_one_segment() {
        let built = url("http://localhost:3000", "nope/../pilot?x=1#top");
        assert_eq!(
            built,
            "http://localhost:3000/api/shows/nope%2F..%2Fpilot%3Fx=1%23top"
        );
    }

    #[test]
    fn test_invalid_base_is_fetch_error() {
        let provider = HttpShowProvider::new("not a url");
        assert!(matches!(
            provider.show_url(&ShowId::new("pilot")),
            Err(CardError::Fetch(_))
        ));
    }

    #[test]
    fn test_dot_ids_are_rejected() {
        for id in ["", ".", ".."] {
            assert!(!HttpShowProvider::is_segment_id(&ShowId::new(id)));
        }
        assert!(HttpShowProvider::is_segment_id(&ShowId::new("pilot")));
    }
}
