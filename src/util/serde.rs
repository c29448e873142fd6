//! Shared value types used across the allocator, config, and API layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Caller-supplied vehicle identifier (e.g., a registration plate).
pub type VehicleId = String;

/// Vehicle and space category.
///
/// A category doubles as the physical class of a space and as the billing
/// class of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    /// Small vehicles; may borrow a large space when compact spaces run out.
    Compact,
    /// Large vehicles; only ever occupy large spaces.
    Large,
}

impl VehicleCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 2] = [Self::Compact, Self::Large];

    /// Hourly rate in currency units.
    #[must_use]
    pub const fn hourly_rate(self) -> u32 {
        match self {
            Self::Compact => 10,
            Self::Large => 20,
        }
    }

    /// Space classes a vehicle of this category may occupy, in order of
    /// preference.
    #[must_use]
    pub const fn eligible_spaces(self) -> &'static [Self] {
        match self {
            Self::Compact => &[Self::Compact, Self::Large],
            Self::Large => &[Self::Large],
        }
    }

    /// Lowercase name used in logs and serialized forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for VehicleCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "hatchback" => Ok(Self::Compact),
            "large" | "suv" => Ok(Self::Large),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Number of spaces per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LotCapacity {
    /// Compact spaces.
    pub compact: u32,
    /// Large spaces.
    pub large: u32,
}

impl LotCapacity {
    /// Create a capacity description.
    #[must_use]
    pub const fn new(compact: u32, large: u32) -> Self {
        Self { compact, large }
    }

    /// Spaces of the given class.
    #[must_use]
    pub const fn of(self, category: VehicleCategory) -> u32 {
        match category {
            VehicleCategory::Compact => self.compact,
            VehicleCategory::Large => self.large,
        }
    }

    /// Total spaces across both classes.
    #[must_use]
    pub const fn total(self) -> u64 {
        self.compact as u64 + self.large as u64
    }
}
