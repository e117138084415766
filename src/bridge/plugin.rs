use serde_json::Value;
use thiserror::Error;

use super::callback::CallbackContext;

/// Errors a plugin surfaces when an action's arguments are malformed.
///
/// The host turns these into a `JsonException` result on the callback.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("JSONArray[{index}] not found.")]
    MissingArgument { index: usize },
    #[error("JSONArray[{index}] is not a {expected} (found {found}).")]
    ArgumentType {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// A native plugin reachable from web content through the bridge.
///
/// `execute` returns `Ok(true)` when the action was recognized and `Ok(false)`
/// when it was not. On `Ok(false)` and on `Err` the callback must be left
/// unwritten; the host reports the outcome itself.
pub trait BridgePlugin: Send + Sync {
    fn execute(
        &self,
        action: &str,
        args: &[Value],
        callback: CallbackContext,
    ) -> Result<bool, ActionError>;
}
