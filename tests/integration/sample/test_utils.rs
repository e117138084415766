use sample_bridge_lib::{BridgeConfig, ExecRequest, PluginManager, logging};
use serde_json::Value;

pub fn manager() -> PluginManager {
    let config = BridgeConfig::default();
    logging::init(&config);
    PluginManager::from_config(&config)
}

pub fn request(action: &str, args: Vec<Value>) -> ExecRequest {
    ExecRequest {
        service: "Sample".to_string(),
        action: action.to_string(),
        args,
        callback_id: None,
    }
}
