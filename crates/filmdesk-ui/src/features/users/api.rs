//! HTTP client for user endpoints.

use filmdesk_api_models::UserId;
use gloo_net::http::Request;

use super::logic::delete_url;

#[derive(Clone, Debug)]
pub(crate) struct UserApi {
    base_url: String,
}

impl UserApi {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Issue the delete and return the response status.
    pub(crate) async fn delete_user(&self, id: UserId) -> anyhow::Result<u16> {
        let response = Request::delete(&delete_url(&self.base_url, id)).send().await?;
        Ok(response.status())
    }
}
