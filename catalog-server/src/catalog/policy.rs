//! Reconciliation policies
//!
//! Two behaviors of option reconciliation are configurable. Defaults keep
//! negative stock on existing options as a no-op and never delete options a
//! request did not mention.

use std::str::FromStr;

use thiserror::Error;

/// What to do with a negative stock quantity on an existing option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeStockPolicy {
    /// Leave the stored stock unchanged
    #[default]
    Ignore,
    /// Fail with `InvalidStock`, same as for new options
    Reject,
}

/// What to do with persisted options absent from an update's option list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OmittedOptionPolicy {
    #[default]
    Keep,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcilePolicy {
    pub negative_stock: NegativeStockPolicy,
    pub omitted_options: OmittedOptionPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown policy value: {0}")]
pub struct UnknownPolicy(pub String);

impl FromStr for NegativeStockPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" | "ignore_negative" => Ok(Self::Ignore),
            "reject" | "reject_negative" => Ok(Self::Reject),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl FromStr for OmittedOptionPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "remove" | "delete" => Ok(Self::Remove),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
