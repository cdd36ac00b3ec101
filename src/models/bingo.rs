use serde::{Deserialize, Serialize};

/// Configuración de la venta de bingo tal y como la expone el backend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BingoConfig {
    pub max_lines_per_user: u32,
    pub max_purchases_per_line: u32,
    pub line_price: f64,
    pub total_lines: u32,
    pub active: bool,
}
