// Utils compartidos

pub mod constants;
pub mod screenshot_ffi;
pub mod storage;

pub use constants::API_BASE_URL;
pub use screenshot_ffi::capture_element;
pub use storage::{clear_token, load_token, save_token};
