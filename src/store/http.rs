//! HTTP data source for the tracker API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::error::{Result, StoreError};
use super::models::{Collaborator, Issue, NewProject, NewUser, Project, User};
use super::source::DataSource;

/// Talks to the tracker server's JSON API
pub struct HttpSource {
    http: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpSource {
    /// Create a new source for the given server
    pub fn new(base_url: &str, timeout: Duration, auth_token: Option<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("tracker-dashboard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            auth_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self.authorize(self.http.get(&url)).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self.authorize(self.http.post(&url)).json(body).send().await?;
        decode(response).await
    }
}

/// Trim trailing slashes and require an http(s) scheme
fn normalize_base_url(base_url: &str) -> Result<String> {
    let url = base_url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(StoreError::InvalidUrl("URL cannot be empty".into()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(StoreError::InvalidUrl(format!(
            "{} must start with http:// or https://",
            url
        )));
    }
    Ok(url.to_string())
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = check_status(response).await?.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch_user(&self) -> Result<User> {
        self.get_json("user").await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.get_json("projects").await
    }

    async fn fetch_all_users(&self) -> Result<Vec<Collaborator>> {
        self.get_json("users").await
    }

    async fn fetch_issues(&self) -> Result<Vec<Issue>> {
        self.get_json("issues").await
    }

    async fn create_project(&self, project: NewProject) -> Result<Project> {
        self.post_json("projects", &project).await
    }

    async fn create_user(&self, user: NewUser) -> Result<Collaborator> {
        self.post_json("users", &user).await
    }

    async fn logout(&self) -> Result<()> {
        let url = self.url("logout");
        debug!(url = %url, "POST");
        let response = self.authorize(self.http.post(&url)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
