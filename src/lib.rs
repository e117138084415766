pub mod bridge;
pub mod config;
pub mod core;
pub mod logging;
pub mod plugins;

pub use bridge::{ActionError, BridgePlugin, CallbackContext, PluginManager};
pub use config::BridgeConfig;
pub use crate::core::types::{ExecRequest, PluginResult, PluginStatus};
pub use plugins::SamplePlugin;

/// Builds the Tauri plugin that exposes the bridge to webview content as
/// `plugin:bridge|exec`.
#[cfg(feature = "tauri-host")]
pub fn init<R: tauri::Runtime>(config: BridgeConfig) -> tauri::plugin::TauriPlugin<R> {
    use tauri::Manager;

    tauri::plugin::Builder::new("bridge")
        .invoke_handler(tauri::generate_handler![crate::core::commands::exec::exec])
        .setup(move |app, _api| {
            logging::init(&config);
            app.manage(PluginManager::from_config(&config));
            Ok(())
        })
        .build()
}
