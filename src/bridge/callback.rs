use log::warn;
use tokio::sync::oneshot;

use crate::core::types::PluginResult;

/// Write-once result sink handed to a plugin for a single invocation.
///
/// Every write consumes the context, so a plugin can answer at most once.
/// Dropping it unwritten is how the host learns the sink was left untouched.
#[derive(Debug)]
pub struct CallbackContext {
    callback_id: String,
    reply_tx: oneshot::Sender<PluginResult>,
}

impl CallbackContext {
    pub fn new(callback_id: impl Into<String>) -> (Self, oneshot::Receiver<PluginResult>) {
        let (reply_tx, reply_rx) = oneshot::channel();
        let context = Self {
            callback_id: callback_id.into(),
            reply_tx,
        };
        (context, reply_rx)
    }

    pub fn callback_id(&self) -> &str {
        &self.callback_id
    }

    pub fn success(self, message: impl Into<String>) {
        self.send_plugin_result(PluginResult::ok(message));
    }

    pub fn error(self, message: impl Into<String>) {
        self.send_plugin_result(PluginResult::error(message));
    }

    pub fn send_plugin_result(self, result: PluginResult) {
        if self.reply_tx.send(result).is_err() {
            warn!(
                "[bridge] callback {} dropped its receiver; result discarded",
                self.callback_id
            );
        }
    }
}
