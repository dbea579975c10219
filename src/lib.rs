pub mod about;
pub mod content;
pub mod header;
pub mod intro;
pub mod log;
pub mod repulsion;
pub mod section;
pub mod title;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
