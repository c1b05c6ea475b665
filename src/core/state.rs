//! Typed state labels.
//!
//! The history store persists states as strings. Applications that model
//! their states as enums implement [`State`] to record them by name.

use std::fmt::Debug;

/// A state whose name is stored in transition records.
///
/// # Example
///
/// ```rust
/// use statelog::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum OrderState {
///     Pending,
///     Shipped,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "pending",
///             Self::Shipped => "shipped",
///         }
///     }
/// }
///
/// assert_eq!(OrderState::Shipped.name(), "shipped");
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Label written to the `from`/`to` columns.
    ///
    /// Must be non-empty for any state used as a transition target.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &str {
    fn name(&self) -> &str {
        self
    }
}
