pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::roster::TomlRoster;
pub use adapters::seed::{seed_members, SeedRoster};
pub use crate::core::query::InMemoryMemberDao;
pub use crate::core::report::{render, OutputFormat, ReportKind};
pub use domain::model::{House, Member, RoyaltyPartition, SalarySummary, Title};
pub use domain::ports::{MemberDao, RosterSource};
pub use utils::error::{Result, RosterError};
