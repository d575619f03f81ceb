//! Core record types for CMT.
//!
//! This module provides type-safe wrappers for the stub inventory, order,
//! sample and settings records.

pub mod id;
pub mod records;
pub mod status;

pub use id::{ItemId, OrderId, SampleId};
pub use records::{
    AppSettings, InventoryItem, InventoryList, Order, OrderList, Sample, SampleList,
};
pub use status::{Feature, OrderStatus, SampleKind};
