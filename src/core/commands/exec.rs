use tauri::{State, async_runtime::spawn};

use crate::bridge::PluginManager;
use crate::core::types::{ExecRequest, PluginResult};

/// Routes one bridge invocation from the webview to the registered plugin.
///
/// # Arguments
/// * `request` - Service, action and positional JSON arguments
///
/// # Returns
/// The status-coded plugin result, or an error string if the dispatch task failed
#[tauri::command]
pub async fn exec(
    manager: State<'_, PluginManager>,
    request: ExecRequest,
) -> Result<PluginResult, String> {
    let manager = manager.inner().clone();
    spawn(async move { manager.exec(request).await })
        .await
        .map_err(|err| format!("Exec join error: {err}"))
}
