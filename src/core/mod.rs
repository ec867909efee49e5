pub mod query;
pub mod report;

pub use crate::domain::model::{House, Member, RoyaltyPartition, SalarySummary, Title};
pub use crate::domain::ports::{MemberDao, RosterSource};
pub use crate::utils::error::Result;
