/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operations exposed by the dispatch endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    // Queries
    Records,
    Record,
    RecordByIdentity,
    // Mutations
    CreateRecord,
    UpdateRecord,
    DeleteRecord,
    Login,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Records,
        Operation::Record,
        Operation::RecordByIdentity,
        Operation::CreateRecord,
        Operation::UpdateRecord,
        Operation::DeleteRecord,
        Operation::Login,
    ];

    /// Name used on the wire and as the key of the response data
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Records => "records",
            Operation::Record => "record",
            Operation::RecordByIdentity => "recordByIdentity",
            Operation::CreateRecord => "createRecord",
            Operation::UpdateRecord => "updateRecord",
            Operation::DeleteRecord => "deleteRecord",
            Operation::Login => "login",
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Operation::Records | Operation::Record | Operation::RecordByIdentity
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}
