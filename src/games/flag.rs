use crate::sheet::CellValue;
use serde::Serialize;

/// Normalized reading of an `IsActive` cell.
///
/// Only `Active` counts as active; `Unrecognized` exists so that callers can
/// tell a deliberate "no" from garbage, but both are treated as inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActiveFlag {
    Active,
    Inactive,
    Unrecognized,
}

impl ActiveFlag {
    /// - bool `true`, number `1`, text `true`/`yes`/`1` → `Active`
    /// - bool `false`, number `0`, empty, text `false`/`no`/`0`/blank → `Inactive`
    /// - anything else → `Unrecognized`
    pub fn parse(cell: &CellValue) -> Self {
        match cell {
            CellValue::Bool(true) => ActiveFlag::Active,
            CellValue::Bool(false) | CellValue::Empty => ActiveFlag::Inactive,
            CellValue::Number(n) if *n == 1.0 => ActiveFlag::Active,
            CellValue::Number(n) if *n == 0.0 => ActiveFlag::Inactive,
            CellValue::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "1" => ActiveFlag::Active,
                "false" | "no" | "0" | "" => ActiveFlag::Inactive,
                _ => ActiveFlag::Unrecognized,
            },
            _ => ActiveFlag::Unrecognized,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActiveFlag::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveFlag::Active => "yes",
            ActiveFlag::Inactive => "no",
            ActiveFlag::Unrecognized => "?",
        }
    }
}

/// Shorthand for `ActiveFlag::parse(cell).is_active()`.
pub fn is_truthy(cell: &CellValue) -> bool {
    ActiveFlag::parse(cell).is_active()
}
