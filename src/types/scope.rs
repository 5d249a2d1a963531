//! OAuth scope definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission level requested from the Quizlet API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Read public and private sets, user details
    Read,
    /// Create, edit and delete sets and terms
    Write,
}

impl Scope {
    /// Value sent in the `scope` parameter of the authorize URL
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Scope::Read => "read",
            Scope::Write => "write_set",
        }
    }

    /// Both scopes in acquisition order
    pub fn all() -> [Scope; 2] {
        [Scope::Read, Scope::Write]
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Read => f.write_str("read"),
            Scope::Write => f.write_str("write"),
        }
    }
}
