//! Per-resource API handlers
//!
//! Each handler is bound to one zone endpoint and shares the client's
//! dispatcher. A call that reaches the service but gets a non-2xx answer is
//! reported as `false`, an empty list or `None`; only transport, binding and
//! decoding failures come back as [`ClientError`].

use reddwarf_core::request::HttpRequest;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::dispatch::Dispatch;
use crate::error::{ClientError, Result};

pub mod databases;
pub mod flavors;
pub mod instances;
pub mod users;

pub use databases::DatabaseHandler;
pub use flavors::FlavorHandler;
pub use instances::InstanceHandler;
pub use users::UserHandler;

fn log_rejection(operation: &'static str, err: &ClientError) {
    if err.is_server_error() {
        warn!(operation, error = %err, "request rejected by server");
    } else {
        debug!(operation, error = %err, "request rejected");
    }
}

/// Send a request whose only result is whether it was accepted
pub(crate) async fn send_accepted(
    dispatcher: &dyn Dispatch,
    operation: &'static str,
    request: HttpRequest,
) -> Result<bool> {
    match dispatcher.dispatch(request).await?.error_for_status() {
        Ok(_) => Ok(true),
        Err(err) => {
            log_rejection(operation, &err);
            Ok(false)
        }
    }
}

/// Send a request and decode a 2xx body; `None` for any other status
pub(crate) async fn fetch<T: DeserializeOwned>(
    dispatcher: &dyn Dispatch,
    operation: &'static str,
    request: HttpRequest,
) -> Result<Option<T>> {
    match dispatcher.dispatch(request).await?.error_for_status() {
        Ok(response) => Ok(Some(response.json()?)),
        Err(err) => {
            log_rejection(operation, &err);
            Ok(None)
        }
    }
}
