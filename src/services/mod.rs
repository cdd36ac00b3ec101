pub mod auth_service;
pub mod bingo_service;
pub mod error;
pub mod lines_service;
