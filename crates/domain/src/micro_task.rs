//! Shape rules for micro-tasks returned by the breakdown endpoint.

use std::fmt;

use serde_json::Value;

/// Fields every micro-task object must carry.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "id",
    "parentTask",
    "title",
    "estimatedTime",
    "difficulty",
    "xpReward",
    "completed",
    "order",
];

/// Difficulty levels the service may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Warm-up step.
    Easy,
    /// Regular step.
    Medium,
    /// Demanding step.
    Hard,
}

impl Difficulty {
    /// Parses the wire value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value.as_str()? {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the required fields absent from `task`, in declaration order.
///
/// A non-object value is missing every field.
#[must_use]
pub fn missing_fields(task: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| task.get(field).is_none())
        .collect()
}

/// True for JSON integers greater than zero.
///
/// Floats (even `5.0`), strings, booleans, zero and negatives are rejected.
#[must_use]
pub fn is_positive_integer(value: &Value) -> bool {
    value.as_u64().is_some_and(|n| n > 0)
}
