pub mod client;
pub mod format;
pub mod render;
pub mod state;
