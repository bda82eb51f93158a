//--------------------------------------------------------------------------------------------------
// Traits
//--------------------------------------------------------------------------------------------------

/// Observer invoked around request execution.
///
/// The transport pipeline calls [`on_request`](TrafficObserver::on_request)
/// immediately before dispatching a request and
/// [`on_response`](TrafficObserver::on_response) once the response status and
/// body have been read. Implementations must be cheap and must not block;
/// they run inline with the request.
pub trait TrafficObserver: Send + Sync {
    /// Called before a request is executed.
    fn on_request(&self, method: &str, url: &str, body: Option<&str>);

    /// Called after the response body has been read.
    fn on_response(&self, method: &str, url: &str, status: u16, body: &str);
}

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The default observer, logging traffic through `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

/// An observer that records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl TrafficObserver for TracingObserver {
    fn on_request(&self, method: &str, url: &str, body: Option<&str>) {
        match body {
            Some(body) => tracing::debug!("request: {method} {url} {body}"),
            None => tracing::debug!("request: {method} {url}"),
        }
    }

    fn on_response(&self, method: &str, url: &str, status: u16, body: &str) {
        tracing::debug!("response: {method} {url} -> {status} {body}");
    }
}

impl TrafficObserver for SilentObserver {
    fn on_request(&self, _method: &str, _url: &str, _body: Option<&str>) {}

    fn on_response(&self, _method: &str, _url: &str, _status: u16, _body: &str) {}
}
