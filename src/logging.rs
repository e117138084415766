use env_logger::Env;

use crate::config::BridgeConfig;

/// Installs the global logger. `RUST_LOG` wins over the configured filter.
/// Later calls are no-ops.
pub fn init(config: &BridgeConfig) {
    let env = Env::default().default_filter_or(config.log_filter.as_str());
    if env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_ok()
    {
        log::debug!("[bridge] logging initialized ({})", config.log_filter);
    }
}
