use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Outcome category of a single bridge invocation.
///
/// Serialized as its numeric code so the web side can switch on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    /// The plugin accepted the call but never wrote its callback.
    NoResult,
    Ok,
    /// No plugin is registered under the requested service name.
    ClassNotFoundException,
    /// The plugin does not recognize the action.
    InvalidAction,
    /// The argument array did not have the expected shape.
    JsonException,
    Error,
}

impl PluginStatus {
    pub fn code(&self) -> u8 {
        match self {
            PluginStatus::NoResult => 0,
            PluginStatus::Ok => 1,
            PluginStatus::ClassNotFoundException => 2,
            PluginStatus::InvalidAction => 7,
            PluginStatus::JsonException => 8,
            PluginStatus::Error => 9,
        }
    }
}

impl Serialize for PluginStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Result delivered back across the bridge for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginResult {
    status: PluginStatus,
    message: Value,
}

impl PluginResult {
    pub fn with_status(status: PluginStatus, message: impl Into<Value>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::with_status(PluginStatus::Ok, message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_status(PluginStatus::Error, message.into())
    }

    pub fn no_result() -> Self {
        Self::with_status(PluginStatus::NoResult, Value::Null)
    }

    pub fn status(&self) -> PluginStatus {
        self.status
    }

    pub fn message(&self) -> &Value {
        &self.message
    }

    pub fn is_ok(&self) -> bool {
        self.status == PluginStatus::Ok
    }
}

/// A single action invocation as sent by the web side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecRequest {
    pub service: String,
    pub action: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub callback_id: Option<String>,
}
