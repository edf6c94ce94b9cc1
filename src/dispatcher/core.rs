//! Dispatcher core - the request hot path.

use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::error::{classify, ApiError};
use crate::server::{ApiRequest, ApiResponse};

/// One handler in a chain.
///
/// A handler may write to the response, mutate the request (attach extensions,
/// fill in a parsed body), or fail. Failing with an [`ApiError`] keeps the
/// chosen status and message; any other error becomes a 500.
pub type Handler =
    Arc<dyn Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync>;

/// The replaceable error handler. Expected to finalize the response as its
/// only effect; its own execution is not guarded.
pub type ErrorHandler = Arc<dyn Fn(&ApiError, &ApiRequest, &mut ApiResponse) + Send + Sync>;

/// How one chain dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The chain completed or short-circuited cleanly.
    Completed,
    /// A failure was classified and routed to the error handler.
    ErrorHandled,
}

/// Executes handler chains and owns the error-handler slot.
#[derive(Clone)]
pub struct Dispatcher {
    error_handler: ErrorHandler,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher with the default error handler.
    #[must_use]
    pub fn new() -> Self {
        Dispatcher {
            error_handler: default_error_handler(),
        }
    }

    /// Replace the error handler. Last registration wins; there is no merging.
    pub fn set_error_handler(&mut self, handler: ErrorHandler) {
        self.error_handler = handler;
    }

    /// Run a chain against one request/response pair.
    ///
    /// With `require_response` set (method chains), an empty chain or a chain
    /// that completes without finalizing the response fails with
    /// `404 Not Found`. The shared pre-dispatch chain passes `false`: for it,
    /// completing without a response is the normal path.
    pub fn dispatch(
        &self,
        chain: &[Handler],
        req: &mut ApiRequest,
        res: &mut ApiResponse,
        require_response: bool,
    ) -> DispatchOutcome {
        match run_chain(chain, req, res, require_response) {
            Ok(()) => DispatchOutcome::Completed,
            Err(err) => {
                let api = classify(err);
                debug!(
                    status = api.status,
                    message = %api.message,
                    "routing failure to error handler"
                );
                (self.error_handler)(&api, req, res);
                DispatchOutcome::ErrorHandled
            }
        }
    }
}

/// The default error handler: write the error's status and a `{"message"}`
/// body to the response.
#[must_use]
pub fn default_error_handler() -> ErrorHandler {
    Arc::new(|err: &ApiError, _req: &ApiRequest, res: &mut ApiResponse| {
        res.send_json(err.status, json!({ "message": err.message }));
    })
}

fn run_chain(
    chain: &[Handler],
    req: &mut ApiRequest,
    res: &mut ApiResponse,
    require_response: bool,
) -> anyhow::Result<()> {
    if require_response && chain.is_empty() {
        return Err(ApiError::not_found().into());
    }
    for (idx, handler) in chain.iter().enumerate() {
        if res.is_ended() {
            debug!(handled = idx, chain_len = chain.len(), "response finalized, short-circuiting");
            return Ok(());
        }
        handler(req, res)?;
    }
    if require_response && !res.is_ended() {
        return Err(ApiError::not_found().into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use http::Method;
    use serde_json::json;

    fn handler(
        f: impl Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync + 'static,
    ) -> Handler {
        Arc::new(f)
    }

    #[test]
    fn test_empty_terminal_chain_is_not_found() {
        let dispatcher = Dispatcher::new();
        let mut req = ApiRequest::new(Method::GET, "/");
        let mut res = ApiResponse::new();
        let outcome = dispatcher.dispatch(&[], &mut req, &mut res, true);
        assert_eq!(outcome, DispatchOutcome::ErrorHandled);
        assert_eq!(res.status(), 404);
        assert_eq!(res.body(), &json!({ "message": "Not Found" }));
    }

    #[test]
    fn test_empty_shared_chain_is_clean() {
        let dispatcher = Dispatcher::new();
        let mut req = ApiRequest::new(Method::GET, "/");
        let mut res = ApiResponse::new();
        let outcome = dispatcher.dispatch(&[], &mut req, &mut res, false);
        assert_eq!(outcome, DispatchOutcome::Completed);
        assert!(!res.is_ended());
    }

    #[test]
    fn test_silent_terminal_chain_is_not_found() {
        let dispatcher = Dispatcher::new();
        let chain = vec![handler(|_req, _res| Ok(()))];
        let mut req = ApiRequest::new(Method::GET, "/");
        let mut res = ApiResponse::new();
        let outcome = dispatcher.dispatch(&chain, &mut req, &mut res, true);
        assert_eq!(outcome, DispatchOutcome::ErrorHandled);
        assert_eq!(res.status(), 404);
    }

    #[test]
    fn test_custom_error_handler_receives_classified_error() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.set_error_handler(Arc::new(
            |err: &ApiError, _req: &ApiRequest, res: &mut ApiResponse| {
                res.send_json(err.status, json!({ "kind": "custom", "detail": err.message }));
            },
        ));
        let chain = vec![handler(|_req, _res| {
            Err(ApiError::new(403, "Forbidden").into())
        })];
        let mut req = ApiRequest::new(Method::GET, "/");
        let mut res = ApiResponse::new();
        dispatcher.dispatch(&chain, &mut req, &mut res, true);
        assert_eq!(res.status(), 403);
        assert_eq!(res.body(), &json!({ "kind": "custom", "detail": "Forbidden" }));
    }
}
