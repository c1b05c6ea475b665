//! Macros for declaring audited entities and their states.

/// Implement [`Entity`](crate::core::Entity) from a table name and the
/// primary-key fields, in declaration order.
///
/// Each listed field must be cloneable into a [`KeyValue`](crate::core::KeyValue).
///
/// # Example
///
/// ```
/// use statelog::core::{Entity, KeyEncoding};
/// use statelog::entity;
///
/// struct Shipment {
///     order_id: u64,
///     region: String,
///     carrier: String,
/// }
///
/// entity!(Shipment, table: "shipments", keys: [order_id, region]);
///
/// let shipment = Shipment {
///     order_id: 7,
///     region: "US".to_string(),
///     carrier: "ACME".to_string(),
/// };
///
/// assert_eq!(shipment.table_name(), "shipments");
/// assert_eq!(
///     statelog::core::derive_reference_key(&shipment, KeyEncoding::Escaped),
///     "7::US"
/// );
/// ```
#[macro_export]
macro_rules! entity {
    ($ty:ty, table: $table:expr, keys: [$($field:ident),* $(,)?]) => {
        impl $crate::core::Entity for $ty {
            fn table_name(&self) -> &str {
                $table
            }

            fn primary_key(&self) -> ::std::vec::Vec<$crate::core::KeyField> {
                ::std::vec![
                    $($crate::core::KeyField::new(stringify!($field), self.$field.clone())),*
                ]
            }
        }
    };
}

/// Generate a fieldless enum implementing [`State`](crate::core::State).
///
/// A variant is stored under its own name unless a label is given with
/// `=> "label"`.
///
/// # Example
///
/// ```
/// use statelog::core::State;
/// use statelog::state_enum;
///
/// state_enum! {
///     pub enum OrderState {
///         Pending => "pending",
///         Shipped => "shipped",
///         Lost,
///     }
/// }
///
/// assert_eq!(OrderState::Shipped.name(), "shipped");
/// assert_eq!(OrderState::Lost.name(), "Lost");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Entity, KeyValue, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing => "processing",
            Complete => "complete",
        }
    }

    struct Account {
        tenant: String,
        number: u32,
        balance: i64,
    }

    crate::entity!(Account, table: "accounts", keys: [tenant, number]);

    struct Global {
        _value: u8,
    }

    crate::entity!(Global, table: "globals", keys: []);

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "processing");
        assert_eq!(TestState::Complete.name(), "complete");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B => "b",
            }
        }

        assert_eq!(PublicState::B.name(), "b");
    }

    #[test]
    fn entity_macro_lists_keys_in_order() {
        let account = Account {
            tenant: "acme".to_string(),
            number: 12,
            balance: 500,
        };

        assert_eq!(account.table_name(), "accounts");
        let keys = account.primary_key();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].name, "tenant");
        assert_eq!(keys[0].value, KeyValue::Str("acme".to_string()));
        assert_eq!(keys[1].name, "number");
        assert_eq!(keys[1].value, KeyValue::UInt(12));
        assert_eq!(account.balance, 500);
    }

    #[test]
    fn entity_macro_allows_no_keys() {
        let global = Global { _value: 1 };
        assert!(global.primary_key().is_empty());
    }
}
