use std::collections::BTreeMap;

use crate::domain::model::{House, Member, RoyaltyPartition, SalarySummary};
use crate::utils::error::Result;

/// Read-only queries over a fixed member snapshot.
///
/// Every method is a pure function of the backing collection: no caching, no
/// hidden state, and absence is an ordinary return value rather than an
/// error. Sequences borrow from the snapshot and are computed fresh per call.
pub trait MemberDao {
    /// The unique member with this id, if any.
    fn find_by_id(&self, id: u64) -> Option<&Member>;

    /// First member with this exact name, in collection order.
    fn find_by_name(&self, name: &str) -> Option<&Member>;

    /// Members of a house, in collection order.
    fn find_all_by_house(&self, house: House) -> Vec<&Member>;

    /// The full snapshot, in backing order.
    fn get_all(&self) -> &[Member];

    /// Members whose name starts with "S", in natural (id) order.
    fn start_with_s_and_sort_alphabetically(&self) -> Vec<&Member>;

    /// Lannisters sorted by name.
    fn lannisters_alphabetically_by_name(&self) -> Vec<&Member>;

    /// Members earning under `max`, sorted by house.
    fn salary_less_than_and_sort_by_house(&self, max: f64) -> Vec<&Member>;

    /// All members, sorted by name ascending.
    fn sort_by_house_name_then_sort_by_name_desc(&self) -> Vec<&Member>;

    /// Members of a house sorted by date of birth, earliest first.
    fn house_by_dob(&self, house: House) -> Vec<&Member>;

    /// Kings, sorted by name ascending.
    fn kings_by_name_desc(&self) -> Vec<&Member>;

    /// Mean salary across the whole roster; 0.0 when it is empty.
    fn average_salary(&self) -> f64;

    /// Names (not members) of a house, sorted.
    fn names_sorted(&self, house: House) -> Vec<&str>;

    /// Does anyone earn more than `max`?
    fn salaries_greater_than(&self, max: f64) -> bool;

    /// Does anyone earn less than `max`?
    fn salaries_less_than(&self, max: f64) -> bool;

    /// Does the house have any members at all?
    fn any_members(&self, house: House) -> bool;

    /// Member count for a house.
    fn how_many(&self, house: House) -> usize;

    /// Names of a house joined with ", ", in collection order.
    fn house_member_names(&self, house: House) -> String;

    /// The best-paid member; the first one on a tie. None for an empty
    /// roster.
    fn highest_salary(&self) -> Option<&Member>;

    /// Split into royalty (KING or QUEEN) and everyone else.
    fn royalty_partition(&self) -> RoyaltyPartition<'_>;

    /// Members grouped by house, preserving collection order within each
    /// group.
    fn members_by_house(&self) -> BTreeMap<House, Vec<&Member>>;

    /// Member count per house present in the roster.
    fn number_of_members_by_house(&self) -> BTreeMap<House, usize>;

    /// Salary statistics per house present in the roster.
    fn house_stats(&self) -> BTreeMap<House, SalarySummary>;
}

/// Supplies the immutable snapshot a `MemberDao` is built from.
pub trait RosterSource {
    fn load(&self) -> Result<Vec<Member>>;
}
