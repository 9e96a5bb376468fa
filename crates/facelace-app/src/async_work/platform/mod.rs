#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use native::{SolveHandle, enqueue};
#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::{SolveHandle, enqueue};
