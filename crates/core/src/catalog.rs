//! The literal in-memory collections served by the stub endpoints.

use crate::theme::ThemeStyle;
use crate::types::{
    AppSettings, Feature, InventoryItem, InventoryList, ItemId, Order, OrderId, OrderList,
    OrderStatus, Sample, SampleId, SampleKind, SampleList,
};

/// Version reported by the settings endpoint.
pub const SETTINGS_VERSION: &str = "0.1.0";

/// All stub collections. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub inventory: InventoryList,
    pub orders: OrderList,
    pub samples: SampleList,
    pub settings: AppSettings,
}

impl Catalog {
    /// The hardcoded demo data.
    #[must_use]
    pub fn stub() -> Self {
        Self {
            inventory: InventoryList {
                items: vec![
                    InventoryItem {
                        id: ItemId::new(1),
                        name: "Buffer A".to_string(),
                        qty: 10,
                    },
                    InventoryItem {
                        id: ItemId::new(2),
                        name: "Tube 1.5ml".to_string(),
                        qty: 500,
                    },
                ],
            },
            orders: OrderList {
                orders: vec![
                    Order {
                        id: OrderId::new("O-1001"),
                        status: OrderStatus::Pending,
                    },
                    Order {
                        id: OrderId::new("O-1002"),
                        status: OrderStatus::Shipped,
                    },
                ],
            },
            samples: SampleList {
                samples: vec![
                    Sample {
                        id: SampleId::new("S-001"),
                        kind: SampleKind::Dna,
                    },
                    Sample {
                        id: SampleId::new("S-002"),
                        kind: SampleKind::Rna,
                    },
                ],
            },
            settings: AppSettings {
                theme: ThemeStyle::Light,
                version: SETTINGS_VERSION.to_string(),
                features: vec![Feature::Inventory, Feature::Orders, Feature::Samples],
            },
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::stub()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_payload() {
        let json = serde_json::to_string(&Catalog::stub().inventory).unwrap();
        assert_eq!(
            json,
            r#"{"items":[{"id":1,"name":"Buffer A","qty":10},{"id":2,"name":"Tube 1.5ml","qty":500}]}"#
        );
    }

    #[test]
    fn test_settings_payload() {
        let json = serde_json::to_string(&Catalog::stub().settings).unwrap();
        assert_eq!(
            json,
            r#"{"theme":"light","version":"0.1.0","features":["inventory","orders","samples"]}"#
        );
    }

    #[test]
    fn test_orders_payload() {
        let json = serde_json::to_string(&Catalog::stub().orders).unwrap();
        assert_eq!(
            json,
            r#"{"orders":[{"id":"O-1001","status":"pending"},{"id":"O-1002","status":"shipped"}]}"#
        );
    }

    #[test]
    fn test_samples_payload() {
        let json = serde_json::to_string(&Catalog::stub().samples).unwrap();
        assert_eq!(
            json,
            r#"{"samples":[{"id":"S-001","type":"DNA"},{"id":"S-002","type":"RNA"}]}"#
        );
    }
}
