// ============================================================================
// SCREENSHOT FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrapper para la captura del grid con html2canvas - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Captura el elemento indicado como PNG y llama al callback con el
    /// data URL resultante (string). Implementado en JS sobre html2canvas.
    #[wasm_bindgen(js_name = captureElement)]
    pub fn capture_element(element_id: &str, on_captured: &js_sys::Function);
}
