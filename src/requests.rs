use log::debug;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;

/// HTTP client for the portal. Cookies persist between calls so the token
/// fetched by a GET stays valid for the login POST.
pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = ClientBuilder::new().cookie_store(true).build()?;
        Ok(Self { client })
    }

    pub async fn fetch_url_body(&self, url: &str) -> anyhow::Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let body = response.text().await?;
        Ok(body)
    }

    /// Posts `form` url-encoded. The status code is not inspected.
    pub async fn post_form_body<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
    ) -> anyhow::Result<String> {
        debug!("POST {}", url);
        let response = self.client.post(url).form(form).send().await?;
        let body = response.text().await?;
        Ok(body)
    }
}
