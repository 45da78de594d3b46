//! WebAssembly bindings for the ledger.
//!
//! Cards, wonders and requirements cross the boundary as JSON.

use wasm_bindgen::prelude::*;

use crate::card::Card;
use crate::ledger::Ledger;
use crate::resource::Requirement;
use crate::wonder::Wonder;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Decode a JSON argument, describing the failure for the JS caller
fn decode<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {}: {}", what, e))
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    decode(json, what).map_err(|e| JsValue::from_str(&e))
}

/// WASM-exposed ledger wrapper
#[wasm_bindgen]
pub struct WasmLedger {
    ledger: Ledger,
}

#[wasm_bindgen]
impl WasmLedger {
    /// Create a ledger for a player and their wonder
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str, wonder_json: &str) -> Result<WasmLedger, JsValue> {
        let wonder: Wonder = parse(wonder_json, "wonder")?;
        Ok(WasmLedger {
            ledger: Ledger::new(name, wonder),
        })
    }

    /// Get the ledger as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.ledger).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = canAfford)]
    pub fn can_afford(&self, card_json: &str) -> Result<bool, JsValue> {
        let card: Card = parse(card_json, "card")?;
        Ok(self.ledger.can_afford(&card))
    }

    #[wasm_bindgen(js_name = hasResources)]
    pub fn has_resources(&self, requirement_json: &str) -> Result<bool, JsValue> {
        let requirement: Requirement = parse(requirement_json, "requirement")?;
        Ok(self.ledger.has_resources(&requirement))
    }

    /// Play a card from JSON
    pub fn play(&mut self, card_json: &str) -> Result<(), JsValue> {
        let card: Card = parse(card_json, "card")?;
        self.ledger
            .play(card)
            .map_err(|e| JsValue::from_str(&format!("Play failed: {}", e)))
    }

    pub fn discard(&mut self, card_json: &str) -> Result<(), JsValue> {
        let card: Card = parse(card_json, "card")?;
        self.ledger.discard(&card);
        Ok(())
    }

    #[wasm_bindgen(js_name = buildWonderStage)]
    pub fn build_wonder_stage(&mut self) -> Result<(), JsValue> {
        self.ledger
            .build_wonder_stage()
            .map_err(|e| JsValue::from_str(&format!("Build failed: {}", e)))
    }
}
