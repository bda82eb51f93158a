use std::fmt;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{CoralfsError, CoralfsResult};

use super::{ApiError, ClientConfig, SilentObserver, TracingObserver, TrafficObserver};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The body argument for requests that carry no payload.
pub const NO_BODY: Option<&()> = None;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A connection to a CoralFS appliance's platform API.
///
/// The client holds no state beyond its immutable configuration; every
/// operation is a single stateless request/response cycle, and concurrent
/// calls may share one client freely. There are no retries, timeouts, or
/// cancellation: a call blocks until the underlying request completes.
pub struct Client {
    /// The connection configuration.
    config: ClientConfig,

    /// The resolved volumes root, e.g. `/cfs/volumes`.
    volumes_root: String,

    /// The HTTP client requests are executed with.
    http: reqwest::Client,

    /// The observer invoked around request execution.
    observer: Box<dyn TrafficObserver>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// Traffic is logged through [`TracingObserver`] when the configuration
    /// asks for it; use [`Client::with_observer`] to plug in something else.
    pub fn new(config: ClientConfig) -> CoralfsResult<Self> {
        let observer: Box<dyn TrafficObserver> = if *config.log_traffic() {
            Box::new(TracingObserver)
        } else {
            Box::new(SilentObserver)
        };

        Self::with_observer(config, observer)
    }

    /// Creates a client with a custom traffic observer.
    pub fn with_observer(
        config: ClientConfig,
        observer: Box<dyn TrafficObserver>,
    ) -> CoralfsResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(*config.insecure())
            .build()?;
        let volumes_root = config.volumes_root();

        Ok(Self {
            config,
            volumes_root,
            http,
            observer,
        })
    }

    /// Returns the connection configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the resolved volumes root.
    pub fn volumes_root(&self) -> &str {
        &self.volumes_root
    }

    /// Returns the full namespace path of the named volume.
    pub fn volume_path(&self, name: &str) -> String {
        format!("{}/{}", self.volumes_root, name)
    }

    /// Sends a request without extra headers.
    ///
    /// See [`Client::query_with_headers`].
    pub async fn query<B, T>(
        &self,
        method: Method,
        path: &str,
        id: Option<&str>,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> CoralfsResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.query_with_headers(method, path, id, params, &[], body)
            .await
    }

    /// Sends a request to the appliance and classifies the response.
    ///
    /// The target URL is `endpoint/path`, or `endpoint/path/id` when an id is
    /// given, with `params` appended as a URL-encoded query string. A present
    /// body is serialized to JSON; `Content-Type` is never defaulted, callers
    /// pass it through `headers` when the operation requires it. Basic
    /// authentication credentials are attached unconditionally.
    ///
    /// A success status decodes the body into `T`, where an empty body is a
    /// successful no-op (`None`); any other status yields the appliance's
    /// structured error. Request-construction and connection failures
    /// propagate as [`CoralfsError::Transport`] without touching the error
    /// model.
    pub async fn query_with_headers<B, T>(
        &self,
        method: Method,
        path: &str,
        id: Option<&str>,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
        body: Option<&B>,
    ) -> CoralfsResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path, id);

        let mut request = self.http.request(method, &url);

        if !params.is_empty() {
            request = request.query(params);
        }

        let payload = match body {
            Some(body) => {
                let encoded = serde_json::to_string(body).map_err(CoralfsError::Encode)?;
                request = request.body(encoded.clone());
                Some(encoded)
            }
            None => None,
        };

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        request = request.basic_auth(self.config.username(), Some(self.config.password()));

        let request = request.build()?;
        let method = request.method().to_string();
        let url = request.url().to_string();

        self.observer.on_request(&method, &url, payload.as_deref());

        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        self.observer.on_response(
            &method,
            &url,
            status.as_u16(),
            &String::from_utf8_lossy(&bytes),
        );

        if !status.is_success() {
            return Err(ApiError::from_response(status, &bytes).into());
        }

        // Deletes and updates legitimately answer with no content.
        if bytes.iter().all(|byte| byte.is_ascii_whitespace()) {
            return Ok(None);
        }

        let decoded = serde_json::from_slice::<T>(&bytes).map_err(CoralfsError::Decode)?;
        Ok(Some(decoded))
    }

    fn build_url(&self, path: &str, id: Option<&str>) -> String {
        match id {
            None => format!("{}/{}", self.config.endpoint(), path),
            Some(id) => format!("{}/{}/{}", self.config.endpoint(), path, id),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", self.config.endpoint())
            .field("username", self.config.username())
            .field("volumes_root", &self.volumes_root)
            .finish_non_exhaustive()
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
