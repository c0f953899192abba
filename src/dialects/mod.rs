//! Dialect registry
//!
//! The fixed set of fantasy dialects and their compiled-in definitions.
//! Each submodule declares one dialect's rule tables, grammar order and
//! flourish policy as plain data.
//!
//! | id      | name      | first person | flavor                               |
//! |---------|-----------|--------------|--------------------------------------|
//! | `grukk` | Grukk     | Grukk        | orcish, plural `z`, possessive `'z`  |
//! | `lord`  | Lordspeak | Eth          | courtly, `-eth` verbs, formal openers |
//! | `tiny`  | Tinyspeak | Littl'un     | halfling, diminutives, repetition    |
//! | `wild`  | Wildspeak | This-one     | feral, compounds, inverted questions |

pub mod grukk;
pub mod lord;
pub mod tiny;
pub mod wild;

#[cfg(test)]
mod integration_tests;

use crate::engine::DialectDefinition;
use crate::error::{DialectError, DialectResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the known dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Grukk,
    Lord,
    Tiny,
    Wild,
}

impl Dialect {
    /// Every dialect, in batch order
    pub const ALL: [Dialect; 4] = [Dialect::Grukk, Dialect::Lord, Dialect::Tiny, Dialect::Wild];

    /// Selector id, also used in output file names
    pub fn id(&self) -> &'static str {
        match self {
            Dialect::Grukk => "grukk",
            Dialect::Lord => "lord",
            Dialect::Tiny => "tiny",
            Dialect::Wild => "wild",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dialect::Grukk => "Grukk",
            Dialect::Lord => "Lordspeak",
            Dialect::Tiny => "Tinyspeak",
            Dialect::Wild => "Wildspeak",
        }
    }

    /// Build this dialect's definition
    pub fn definition(&self) -> DialectResult<DialectDefinition> {
        match self {
            Dialect::Grukk => grukk::definition(),
            Dialect::Lord => lord::definition(),
            Dialect::Tiny => tiny::definition(),
            Dialect::Wild => wild::definition(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Dialect {
    type Err = DialectError;

    /// Case-insensitive; accepts the ids and the long display names
    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector.trim().to_lowercase().as_str() {
            "grukk" => Ok(Dialect::Grukk),
            "lord" | "lordspeak" => Ok(Dialect::Lord),
            "tiny" | "tinyspeak" => Ok(Dialect::Tiny),
            "wild" | "wildspeak" => Ok(Dialect::Wild),
            _ => Err(DialectError::UnknownDialect(selector.to_string())),
        }
    }
}
