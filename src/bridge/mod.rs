pub mod args;
pub mod callback;
pub mod manager;
pub mod plugin;

pub use args::Args;
pub use callback::CallbackContext;
pub use manager::PluginManager;
pub use plugin::{ActionError, BridgePlugin};
