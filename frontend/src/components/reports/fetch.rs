//! One-shot loading of the report list and the lifetime it is bound to.
//!
//! The component starts exactly one request per mount. The request lives in a
//! `FetchScope` owned by the component: dropping or cancelling the scope aborts
//! the browser request and ends the mount lifetime, so an outcome that arrives
//! afterwards is discarded instead of being delivered to a destroyed view.

use common::model::report::Report;
use gloo_net::http::Request;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

/// Why loading the reports failed. The view shows a single message for all of
/// them; the variant is kept for logging and tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Http(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Issues `GET endpoint` and decodes the body as a list of reports.
///
/// `signal` is the abort signal of the owning `FetchScope`; an aborted request
/// resolves to `FetchError::Network`.
pub async fn fetch_reports(
    endpoint: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Report>, FetchError> {
    let response = Request::get(endpoint)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode_reports(&body)
}

/// Any non-2xx status is a failure.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Http(status))
    }
}

pub fn decode_reports(body: &str) -> Result<Vec<Report>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Marks the span during which the component can still accept messages.
///
/// Ended explicitly by `end`, or implicitly on drop.
#[derive(Debug)]
pub struct MountLifetime {
    alive: Rc<Cell<bool>>,
}

impl MountLifetime {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn handle(&self) -> MountHandle {
        MountHandle {
            alive: self.alive.clone(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn end(&self) {
        self.alive.set(false);
    }
}

impl Default for MountLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountLifetime {
    fn drop(&mut self) {
        self.end();
    }
}

/// Held by the spawned request future to check whether delivery is still allowed.
#[derive(Debug, Clone)]
pub struct MountHandle {
    alive: Rc<Cell<bool>>,
}

impl MountHandle {
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Hands `value` to `deliver` only while the lifetime is alive.
    /// Returns whether it was delivered.
    pub fn deliver<T, F>(&self, value: T, deliver: F) -> bool
    where
        F: FnOnce(T),
    {
        if self.is_alive() {
            deliver(value);
            true
        } else {
            false
        }
    }
}

/// The in-flight request of one mount: its lifetime plus the abort action
/// wired into the request.
pub struct FetchScope {
    lifetime: MountLifetime,
    signal: Option<AbortSignal>,
    abort: Option<Box<dyn FnOnce()>>,
}

impl FetchScope {
    /// Creates the scope around a browser `AbortController`. Must run in the browser.
    pub fn begin() -> Self {
        match AbortController::new() {
            Ok(controller) => {
                let signal = controller.signal();
                Self::with_abort(Some(signal), move || controller.abort())
            }
            Err(_) => Self::with_abort(None, || {}),
        }
    }

    /// Creates the scope with an explicit abort action and the signal it controls.
    pub fn with_abort<F>(signal: Option<AbortSignal>, abort: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            lifetime: MountLifetime::new(),
            signal,
            abort: Some(Box::new(abort)),
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.signal.clone()
    }

    pub fn handle(&self) -> MountHandle {
        self.lifetime.handle()
    }

    /// The request finished and its outcome was delivered: end the lifetime
    /// without aborting.
    pub fn complete(mut self) {
        self.abort = None;
        self.lifetime.end();
    }

    /// Aborts the request and stops delivery. Calling it twice is a no-op.
    pub fn cancel(&mut self) {
        if !self.lifetime.is_alive() {
            return;
        }
        self.lifetime.end();
        if let Some(abort) = self.abort.take() {
            abort();
        }
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        self.cancel();
    }
}
