use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use url::Url;

use super::route::Resource;
use super::transport::{ApiRequest, HttpTransport, Transport};
use crate::config::ProviderConfig;
use crate::domain::SearchPage;
use crate::error::ClientError;

const AUTH_HEADER: &str = "x-epm-auth";
const DELETE_SUCCESS: &[u8] = br#"{"success":true}"#;

/// REST client for the monitoring service.
///
/// Immutable once built: the timeout for each call is picked from the route
/// and handed to the transport with the request, so a shared client never
/// changes under a concurrent caller.
#[derive(Debug, Clone)]
pub struct MonitoringClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
    headers: HeaderMap,
    timeout: Duration,
    extended_timeout: Duration,
}

impl MonitoringClient<HttpTransport> {
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ClientError> {
        config.validate()?;
        Self::with_transport(HttpTransport::new()?, config)
    }
}

impl<T: Transport> MonitoringClient<T> {
    pub fn with_transport(transport: T, config: &ProviderConfig) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(&config.host_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut auth =
            HeaderValue::from_str(&config.api_key).map_err(|_| ClientError::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            transport,
            base_url,
            headers,
            timeout: config.timeout(),
            extended_timeout: config.extended_timeout(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn write_timeout<R: Resource>(&self) -> Duration {
        if R::ROUTE.is_long_running() {
            self.extended_timeout
        } else {
            self.timeout
        }
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        timeout: Duration,
    ) -> ApiRequest {
        ApiRequest {
            method,
            url,
            headers: self.headers.clone(),
            body,
            timeout,
        }
    }

    /// Sends the request and applies the response rules shared by every
    /// call: 404 yields `None`, any other non-200 is a remote error.
    async fn send(&self, request: ApiRequest, path: &str) -> Result<Option<Bytes>, ClientError> {
        let method = request.method.clone();
        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::warn!(
                name = "client.transport_failed",
                target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
                method = %method,
                path = %path,
                error = %e,
                message = "Request did not complete"
            );
            ClientError::from(e)
        })?;

        tracing::debug!(
            name = "client.response",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            method = %method,
            path = %path,
            status = response.status.as_u16(),
            bytes = response.body.len(),
            message = "Received response"
        );

        match response.status {
            StatusCode::OK => Ok(Some(response.body)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(ClientError::Remote {
                status,
                path: path.to_string(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }),
        }
    }

    /// Fetches one object. `Ok(None)` means the service does not know the id.
    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get<R: Resource>(&self, id: i64) -> Result<Option<R>, ClientError> {
        let path = R::ROUTE.get_path(id);
        let url = self.base_url.join(&path)?;
        let request = self.request(Method::GET, url, None, self.timeout);
        match self.send(request, &path).await? {
            Some(body) => decode_resource(&body).map(Some),
            None => Ok(None),
        }
    }

    /// Creates the object and returns it as the service stored it, id
    /// included.
    #[tracing::instrument(skip(self, resource), fields(resource = R::NAME))]
    pub async fn create<R: Resource>(&self, resource: &R) -> Result<R, ClientError> {
        let path = R::ROUTE.create_path();
        self.write(Method::PUT, path, resource).await
    }

    #[tracing::instrument(skip(self, resource), fields(resource = R::NAME, id = ?resource.id()))]
    pub async fn update<R: Resource>(&self, resource: &R) -> Result<R, ClientError> {
        let path = R::ROUTE.update_path();
        self.write(Method::POST, path, resource).await
    }

    async fn write<R: Resource>(
        &self,
        method: Method,
        path: String,
        resource: &R,
    ) -> Result<R, ClientError> {
        let url = self.base_url.join(&path)?;
        let body = serde_json::to_vec(resource).map_err(ClientError::Encode)?;
        let request = self.request(method, url, Some(body), self.write_timeout::<R>());
        match self.send(request, &path).await? {
            Some(body) => decode_resource(&body),
            None => Err(ClientError::NotFoundOnMutation { path }),
        }
    }

    /// Deletes the object. Only the exact acknowledgement body counts as
    /// success.
    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<(), ClientError> {
        let path = R::ROUTE.delete_path(id);
        let url = self.base_url.join(&path)?;
        let request = self.request(Method::DELETE, url, None, self.timeout);
        match self.send(request, &path).await? {
            Some(body) if body.as_ref() == DELETE_SUCCESS => Ok(()),
            Some(body) => Err(ClientError::DeleteRejected(
                String::from_utf8_lossy(&body).into_owned(),
            )),
            None => Err(ClientError::NotFoundOnMutation { path }),
        }
    }

    /// Ids of the objects matching `query` on the first result page.
    ///
    /// Applies no cardinality rule; `Ok(None)` when the service answers 404.
    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    pub async fn search<R: Resource>(&self, query: &str) -> Result<Option<Vec<i64>>, ClientError> {
        let path = R::ROUTE.list_path();
        let mut url = self.base_url.join(&path)?;
        url.query_pairs_mut()
            .append_pair("page", "0")
            .append_pair("search", query);
        let request = self.request(Method::GET, url, None, self.timeout);
        match self.send(request, &path).await? {
            Some(body) => decode::<SearchPage>(&body).map(|page| Some(page.ids())),
            None => Ok(None),
        }
    }
}

fn decode<R: serde::de::DeserializeOwned>(body: &[u8]) -> Result<R, ClientError> {
    serde_json::from_slice(body).map_err(ClientError::Decode)
}

fn decode_resource<R: Resource>(body: &[u8]) -> Result<R, ClientError> {
    let resource: R = decode(body)?;
    resource.ensure_kind()?;
    Ok(resource)
}
