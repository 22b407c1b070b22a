//! Store catalog types.
//!
//! The catalog is an external JSON document with general store info,
//! categorized products, and time-bounded promotions. It is read-only per
//! request; the infra layer reloads it from disk on every chat turn.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The full store catalog as stored on disk.
///
/// `categorias` keeps JSON declaration order (IndexMap) so the formatted
/// context lists categories and products in the order the catalog author
/// wrote them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCatalog {
    pub info_general: StoreInfo,
    #[serde(default)]
    pub categorias: IndexMap<String, Category>,
    #[serde(default)]
    pub promociones: Vec<Promotion>,
}

/// General store information block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub nombre: String,
    pub horario: String,
    pub metodos_pago: Vec<String>,
    pub politica_devoluciones: String,
}

/// A product category: just its product list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub productos: Vec<Product>,
}

/// A single product entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub nombre: String,
    pub precio: f64,
    pub tallas: Vec<String>,
    pub colores: Vec<String>,
    pub descripcion: String,
}

/// A promotion bounded by calendar dates (ISO `YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub descripcion: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
}

impl Promotion {
    /// A promotion is active when `fecha_inicio <= today <= fecha_fin`,
    /// inclusive on both ends.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.fecha_inicio <= today && today <= self.fecha_fin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_promotion_active_inclusive_bounds() {
        let promo = Promotion {
            descripcion: "2x1 en camisetas".to_string(),
            fecha_inicio: date("2026-08-01"),
            fecha_fin: date("2026-08-31"),
        };
        assert!(promo.is_active(date("2026-08-01")));
        assert!(promo.is_active(date("2026-08-15")));
        assert!(promo.is_active(date("2026-08-31")));
        assert!(!promo.is_active(date("2026-07-31")));
        assert!(!promo.is_active(date("2026-09-01")));
    }

    #[test]
    fn test_catalog_deserializes_and_keeps_category_order() {
        let json = r#"{
            "info_general": {
                "nombre": "Fashion Store",
                "horario": "Lunes a Sabado de 10:00 AM a 8:00 PM",
                "metodos_pago": ["efectivo", "tarjeta"],
                "politica_devoluciones": "30 dias con boleta"
            },
            "categorias": {
                "camisetas": { "productos": [] },
                "pantalones": { "productos": [] },
                "vestidos": { "productos": [] }
            },
            "promociones": [
                { "descripcion": "30% en vestidos", "fecha_inicio": "2026-01-01", "fecha_fin": "2026-12-31" }
            ]
        }"#;
        let catalog: StoreCatalog = serde_json::from_str(json).unwrap();
        let order: Vec<&str> = catalog.categorias.keys().map(String::as_str).collect();
        assert_eq!(order, ["camisetas", "pantalones", "vestidos"]);
        assert_eq!(catalog.promociones.len(), 1);
        assert_eq!(catalog.info_general.nombre, "Fashion Store");
    }

    #[test]
    fn test_catalog_missing_sections_default_empty() {
        let json = r#"{
            "info_general": {
                "nombre": "Fashion Store",
                "horario": "10-20",
                "metodos_pago": [],
                "politica_devoluciones": "sin cambios"
            }
        }"#;
        let catalog: StoreCatalog = serde_json::from_str(json).unwrap();
        assert!(catalog.categorias.is_empty());
        assert!(catalog.promociones.is_empty());
    }
}
