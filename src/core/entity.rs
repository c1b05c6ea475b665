//! Entity descriptors.
//!
//! An entity declares, at definition time, which collection it belongs to and
//! which of its fields form the primary key. Nothing is discovered at runtime.

use super::key::KeyField;

/// Describes an audited entity instance.
///
/// Implementations must return primary-key fields in declaration order; the
/// order is part of the reference key.
///
/// # Example
///
/// ```rust
/// use statelog::core::{Entity, KeyField};
///
/// struct Shipment {
///     order_id: u64,
///     region: String,
/// }
///
/// impl Entity for Shipment {
///     fn table_name(&self) -> &str {
///         "shipments"
///     }
///
///     fn primary_key(&self) -> Vec<KeyField> {
///         vec![
///             KeyField::new("order_id", self.order_id),
///             KeyField::new("region", self.region.as_str()),
///         ]
///     }
/// }
///
/// let shipment = Shipment { order_id: 7, region: "US".to_string() };
/// assert_eq!(shipment.primary_key().len(), 2);
/// ```
pub trait Entity {
    /// Logical collection (table or kind) the entity lives in.
    fn table_name(&self) -> &str;

    /// Declared primary-key fields with their current values.
    fn primary_key(&self) -> Vec<KeyField>;
}

impl<E: Entity + ?Sized> Entity for &E {
    fn table_name(&self) -> &str {
        (**self).table_name()
    }

    fn primary_key(&self) -> Vec<KeyField> {
        (**self).primary_key()
    }
}
