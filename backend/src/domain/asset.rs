//! Fixed financial asset listing.
//!
//! Assets are not persisted anywhere: the catalogue is a hardcoded constant
//! that must be returned byte-identically on every call.

use serde::Serialize;

/// A named asset with its current value, as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Asset {
    pub name: &'static str,
    pub value: f64,
}

/// The five fixed assets, in display order.
pub const FIXED_ASSETS: [Asset; 5] = [
    Asset {
        name: "Ação PETR4",
        value: 35.50,
    },
    Asset {
        name: "Fundo XPTO11",
        value: 105.75,
    },
    Asset {
        name: "CDB Banco Alfa",
        value: 1000.00,
    },
    Asset {
        name: "Tesouro Selic 2029",
        value: 12000.00,
    },
    Asset {
        name: "BDR Apple",
        value: 95.20,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_exactly_five_entries_in_order() {
        let names: Vec<&str> = FIXED_ASSETS.iter().map(|asset| asset.name).collect();
        assert_eq!(
            names,
            vec![
                "Ação PETR4",
                "Fundo XPTO11",
                "CDB Banco Alfa",
                "Tesouro Selic 2029",
                "BDR Apple",
            ]
        );
    }

    #[test]
    fn catalogue_serialization_is_stable() {
        let first = serde_json::to_string(&FIXED_ASSETS).expect("assets serialise");
        let second = serde_json::to_string(&FIXED_ASSETS).expect("assets serialise");
        assert_eq!(first, second);

        let value: serde_json::Value = serde_json::from_str(&first).expect("valid JSON");
        assert_eq!(value[0], serde_json::json!({"name": "Ação PETR4", "value": 35.5}));
        assert_eq!(
            value[3],
            serde_json::json!({"name": "Tesouro Selic 2029", "value": 12000.0})
        );
    }
}
