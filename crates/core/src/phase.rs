//! Phase tags carried by logged-hours records.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Work phase of a logged-hours record, stored as its upper-case tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    Sim,
    Software,
    Debug,
    Ins,
    Trv,
    /// Placeholder written by bulk logging, which has no phase input.
    Work,
}

impl Phase {
    /// Tag used for rows created by bulk hour logging.
    pub const BULK_PLACEHOLDER: Phase = Phase::Work;

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Sim => "SIM",
            Phase::Software => "SOFTWARE",
            Phase::Debug => "DEBUG",
            Phase::Ins => "INS",
            Phase::Trv => "TRV",
            Phase::Work => "WORK",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIM" => Ok(Phase::Sim),
            "SOFTWARE" => Ok(Phase::Software),
            "DEBUG" => Ok(Phase::Debug),
            "INS" => Ok(Phase::Ins),
            "TRV" => Ok(Phase::Trv),
            "WORK" => Ok(Phase::Work),
            other => Err(CoreError::Validation(format!("Unknown phase '{other}'"))),
        }
    }
}

/// Allows row structs to decode the `VARCHAR` column straight into a [`Phase`].
impl TryFrom<String> for Phase {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
