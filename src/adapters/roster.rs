use std::fs;

use serde::Deserialize;

use crate::domain::model::Member;
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_roster;

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    member: Vec<Member>,
}

/// Loads a roster from a TOML file of `[[member]]` tables. Dates are quoted
/// ISO strings, houses and titles UPPERCASE names; `title` may be omitted.
#[derive(Debug, Clone)]
pub struct TomlRoster {
    path: String,
}

impl TomlRoster {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for TomlRoster {
    fn load(&self) -> Result<Vec<Member>> {
        let raw = fs::read_to_string(&self.path)?;
        let parsed: RosterFile = toml::from_str(&raw)?;
        tracing::debug!("loaded {} members from {}", parsed.member.len(), self.path);
        validate_roster(&parsed.member)?;
        Ok(parsed.member)
    }
}
