use std::str::FromStr;

use log::debug;
use serde_json::Value;

use crate::bridge::{ActionError, Args, BridgePlugin, CallbackContext};

const GREETING_PREFIX: &str = "Hello ";

/// Actions understood by [`SamplePlugin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleAction {
    Hello,
}

impl SampleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleAction::Hello => "hello",
        }
    }
}

impl FromStr for SampleAction {
    type Err = ();

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "hello" => Ok(SampleAction::Hello),
            _ => Err(()),
        }
    }
}

/// Builds the greeting returned by the `hello` action.
pub fn greeting(name: &str) -> String {
    format!("{GREETING_PREFIX}{name}")
}

/// Sample plugin exposing a single `hello` action to web content.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePlugin;

impl BridgePlugin for SamplePlugin {
    fn execute(
        &self,
        action: &str,
        args: &[Value],
        callback: CallbackContext,
    ) -> Result<bool, ActionError> {
        let Ok(action) = action.parse::<SampleAction>() else {
            debug!("[sample] ignoring unknown action '{action}'");
            return Ok(false);
        };

        let args = Args::new(args);
        match action {
            SampleAction::Hello => {
                let name = args.get_str(0)?;
                debug!(
                    "[sample] {} for callback {}",
                    action.as_str(),
                    callback.callback_id()
                );
                callback.success(greeting(name));
            }
        }
        Ok(true)
    }
}
