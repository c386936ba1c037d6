use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four arithmetic operation kinds the API supports.
///
/// The wire names are the Spanish strings the HTTP contract uses
/// (`suma`, `resta`, `multiplicacion`, `division`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "suma")]
    Sum,
    #[serde(rename = "resta")]
    Subtract,
    #[serde(rename = "multiplicacion")]
    Multiply,
    #[serde(rename = "division")]
    Divide,
}

impl Operation {
    /// Every supported kind, in wire order.
    pub const ALL: [Operation; 4] = [
        Operation::Sum,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Sum => "suma",
            Operation::Subtract => "resta",
            Operation::Multiply => "multiplicacion",
            Operation::Divide => "division",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suma" => Ok(Operation::Sum),
            "resta" => Ok(Operation::Subtract),
            "multiplicacion" => Ok(Operation::Multiply),
            "division" => Ok(Operation::Divide),
            _ => Err(()),
        }
    }
}

/// Fields the history query can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "resultado")]
    Result,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortField::Date),
            "resultado" => Ok(SortField::Result),
            _ => Err(()),
        }
    }
}

/// Direction of a history sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_wire_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>(), Ok(op));
        }
        assert!("potencia".parse::<Operation>().is_err());
    }

    #[test]
    fn operation_serializes_to_wire_string() {
        assert_eq!(
            serde_json::to_string(&Operation::Multiply).unwrap(),
            "\"multiplicacion\""
        );
    }
}
