pub mod use_auth;
pub mod use_bingo_config;
pub mod use_lines;

pub use use_auth::use_auth;
pub use use_bingo_config::{use_bingo_config, BingoConfigFields};
pub use use_lines::{is_selected, purchase_at, use_lines};
