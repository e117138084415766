#[cfg(feature = "tauri-host")]
pub mod commands;
pub mod types;
