use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::Value;
use uuid::Uuid;

use super::callback::CallbackContext;
use super::plugin::BridgePlugin;
use crate::config::BridgeConfig;
use crate::core::types::{ExecRequest, PluginResult, PluginStatus};
use crate::plugins::SamplePlugin;

/// Host-side registry that routes bridge invocations to plugins.
///
/// Owns the write-once callback for each call and converts whatever the
/// plugin did with it into a status-coded [`PluginResult`].
#[derive(Clone, Default)]
pub struct PluginManager {
    plugins: Arc<HashMap<String, Arc<dyn BridgePlugin>>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        let mut manager = Self::new();
        manager.register(config.service.clone(), Arc::new(SamplePlugin));
        info!(
            "[bridge] sample plugin registered under service '{}'",
            config.service
        );
        manager
    }

    /// Registers `plugin` under `service`. A later registration replaces an
    /// earlier one with the same name.
    pub fn register(&mut self, service: impl Into<String>, plugin: Arc<dyn BridgePlugin>) {
        let service = service.into();
        if Arc::make_mut(&mut self.plugins)
            .insert(service.clone(), plugin)
            .is_some()
        {
            warn!("[bridge] service '{service}' was already registered; replacing it");
        }
    }

    pub fn services(&self) -> Vec<String> {
        let mut services: Vec<String> = self.plugins.keys().cloned().collect();
        services.sort();
        services
    }

    pub async fn exec(&self, request: ExecRequest) -> PluginResult {
        let ExecRequest {
            service,
            action,
            args,
            callback_id,
        } = request;

        let Some(plugin) = self.plugins.get(&service) else {
            warn!("[bridge] exec() call to unknown service '{service}'");
            return PluginResult::with_status(
                PluginStatus::ClassNotFoundException,
                "Class not found",
            );
        };

        let callback_id =
            callback_id.unwrap_or_else(|| format!("{service}{}", Uuid::new_v4().as_simple()));
        debug!("[bridge] exec {service}.{action} callback={callback_id}");

        let (callback, reply_rx) = CallbackContext::new(callback_id);
        match plugin.execute(&action, &args, callback) {
            Ok(true) => match reply_rx.await {
                Ok(result) => result,
                Err(_) => {
                    debug!("[bridge] {service}.{action} handled without a result");
                    PluginResult::no_result()
                }
            },
            Ok(false) => {
                debug!("[bridge] {service} does not handle action '{action}'");
                PluginResult::with_status(PluginStatus::InvalidAction, Value::Null)
            }
            Err(err) => {
                warn!("[bridge] {service}.{action} rejected its arguments: {err}");
                PluginResult::with_status(PluginStatus::JsonException, err.to_string())
            }
        }
    }
}
