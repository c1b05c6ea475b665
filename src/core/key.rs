//! Reference key derivation.
//!
//! A reference key identifies one entity instance inside its table. It is
//! built from the entity's primary-key values alone, rendered with a single
//! canonical formatting rule and joined with [`KEY_SEPARATOR`].

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::entity::Entity;

/// Separator placed between primary-key values in a reference key.
pub const KEY_SEPARATOR: &str = "::";

/// A single primary-key value.
///
/// Every variant renders through [`fmt::Display`], which is the canonical
/// string form used in reference keys: integers in unpadded decimal, strings
/// verbatim, UUIDs hyphenated lowercase and booleans as `true`/`false`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyValue {
    Int(i64),
    UInt(u64),
    Str(String),
    Uuid(Uuid),
    Bool(bool),
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::Uuid(v) => write!(f, "{}", v.hyphenated()),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! key_value_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for KeyValue {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

key_value_from!(Int as i64: i8, i16, i32, i64);
key_value_from!(UInt as u64: u8, u16, u32, u64);

impl From<usize> for KeyValue {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<String> for KeyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for KeyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for KeyValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Uuid> for KeyValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<bool> for KeyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A declared primary-key field paired with its current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyField {
    pub name: &'static str,
    pub value: KeyValue,
}

impl KeyField {
    pub fn new(name: &'static str, value: impl Into<KeyValue>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// How primary-key values are written into a reference key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyEncoding {
    /// Escape `\` and `:` inside each value so the separator is unambiguous.
    ///
    /// Values free of those characters render exactly as with [`Plain`](Self::Plain).
    #[default]
    Escaped,

    /// Bare concatenation. Values containing `::` can collide.
    Plain,
}

impl KeyEncoding {
    fn write_value(self, out: &mut String, value: &KeyValue) {
        let rendered = value.to_string();
        match self {
            Self::Plain => out.push_str(&rendered),
            Self::Escaped => {
                for ch in rendered.chars() {
                    if ch == '\\' || ch == ':' {
                        out.push('\\');
                    }
                    out.push(ch);
                }
            }
        }
    }
}

/// Build a reference key from primary-key fields in declaration order.
///
/// Returns an empty string when `fields` is empty.
///
/// # Example
///
/// ```rust
/// use statelog::core::{encode_reference_key, KeyEncoding, KeyField};
///
/// let fields = [KeyField::new("id", 7), KeyField::new("region", "US")];
/// assert_eq!(encode_reference_key(&fields, KeyEncoding::Escaped), "7::US");
/// ```
pub fn encode_reference_key(fields: &[KeyField], encoding: KeyEncoding) -> String {
    let mut key = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            key.push_str(KEY_SEPARATOR);
        }
        encoding.write_value(&mut key, &field.value);
    }
    key
}

/// Derive the reference key of an entity instance.
///
/// Pure and deterministic: the result depends only on the entity's
/// primary-key values.
///
/// # Example
///
/// ```rust
/// use statelog::core::{derive_reference_key, KeyEncoding};
/// use statelog::entity;
///
/// struct Order {
///     id: u64,
/// }
///
/// entity!(Order, table: "orders", keys: [id]);
///
/// assert_eq!(derive_reference_key(&Order { id: 42 }, KeyEncoding::Escaped), "42");
/// ```
pub fn derive_reference_key<E: Entity + ?Sized>(entity: &E, encoding: KeyEncoding) -> String {
    encode_reference_key(&entity.primary_key(), encoding)
}
