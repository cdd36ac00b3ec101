pub mod auth;
pub mod bingo;
pub mod purchase;

pub use auth::{LoginRequest, LoginResponse};
pub use bingo::BingoConfig;
pub use purchase::{LineStateUpdate, Purchase, PurchaseState, PurchaseUser};
