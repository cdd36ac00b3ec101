// ============================================================================
// BINGO ADMIN - Panel de administración (Yew + WASM)
// ============================================================================

pub mod components;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
