//! Stub record shapes returned by the web API.
//!
//! Field order matters: it is the key order of the serialized JSON.

use serde::{Deserialize, Serialize};

use super::id::{ItemId, OrderId, SampleId};
use super::status::{Feature, OrderStatus, SampleKind};
use crate::theme::ThemeStyle;

/// A stocked consumable or reagent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub qty: u32,
}

/// A purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
}

/// A tracked biological sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: SampleId,
    #[serde(rename = "type")]
    pub kind: SampleKind,
}

/// Application settings as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub theme: ThemeStyle,
    pub version: String,
    pub features: Vec<Feature>,
}

/// `{"items": [...]}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryList {
    pub items: Vec<InventoryItem>,
}

/// `{"orders": [...]}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

/// `{"samples": [...]}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleList {
    pub samples: Vec<Sample>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_kind_field_is_named_type() {
        let sample = Sample {
            id: SampleId::new("S-009"),
            kind: SampleKind::Rna,
        };
        assert_eq!(
            serde_json::to_string(&sample).unwrap(),
            r#"{"id":"S-009","type":"RNA"}"#
        );
    }

    #[test]
    fn test_inventory_item_key_order() {
        let item = InventoryItem {
            id: ItemId::new(3),
            name: "Pipette tips".to_string(),
            qty: 96,
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"id":3,"name":"Pipette tips","qty":96}"#
        );
    }
}
