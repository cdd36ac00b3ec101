use serde::{Deserialize, Serialize};

/// Estado de una compra dentro de una línea.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseState {
    Requested,
    Purchased,
    Available,
}

impl PurchaseState {
    /// Clase CSS usada por la grilla para colorear la celda.
    pub fn as_class(&self) -> &'static str {
        match self {
            PurchaseState::Requested => "requested",
            PurchaseState::Purchased => "purchased",
            PurchaseState::Available => "available",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PurchaseUser {
    pub id: u64,
    pub name: String,
}

/// Registro de compra: vincula un usuario a la celda (línea, columna).
/// La columna la asigna el servidor; el cliente nunca la recalcula.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Purchase {
    pub id: u64,
    pub line_id: u32,
    pub column: u32,
    pub state: PurchaseState,
    pub user: PurchaseUser,
}

/// Elemento del cuerpo de `lines/update` (cambio de estado en lote).
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LineStateUpdate {
    pub id: u64,
    pub state: PurchaseState,
}
