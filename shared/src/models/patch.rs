//! Presence-aware field wrapper for partial updates

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A request field that distinguishes "not sent" from "sent as null".
///
/// Use with `#[serde(default)]` so a missing key becomes [`Patch::Absent`]:
///
/// ```
/// use shared::models::Patch;
///
/// #[derive(serde::Deserialize)]
/// struct Req {
///     #[serde(default)]
///     stock: Patch<i64>,
/// }
///
/// let absent: Req = serde_json::from_str("{}").unwrap();
/// let null: Req = serde_json::from_str(r#"{"stock":null}"#).unwrap();
/// let value: Req = serde_json::from_str(r#"{"stock":7}"#).unwrap();
/// assert_eq!(absent.stock, Patch::Absent);
/// assert_eq!(null.stock, Patch::Null);
/// assert_eq!(value.stock, Patch::Value(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key not present in the request: leave the stored value alone
    Absent,
    /// Key present with an explicit null
    Null,
    /// Key present with a value
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// The carried value, treating both `Absent` and `Null` as none
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(v) => serializer.serialize_some(v),
            // Absent fields should be skipped with `skip_serializing_if = "Patch::is_absent"`
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}
