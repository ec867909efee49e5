use std::collections::BTreeMap;

use crate::domain::model::{House, Member, RoyaltyPartition, SalarySummary, Title};
use crate::domain::ports::MemberDao;

/// Query engine over an owned, immutable roster snapshot.
///
/// The collection is injected whole at construction time and never mutated
/// afterwards; repeated calls against the same snapshot return identical
/// results.
pub struct InMemoryMemberDao {
    members: Vec<Member>,
}

impl InMemoryMemberDao {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    fn of_house(&self, house: House) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| m.house == house)
    }
}

impl MemberDao for InMemoryMemberDao {
    fn find_by_id(&self, id: u64) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    fn find_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    fn find_all_by_house(&self, house: House) -> Vec<&Member> {
        self.of_house(house).collect()
    }

    fn get_all(&self) -> &[Member] {
        &self.members
    }

    fn start_with_s_and_sort_alphabetically(&self) -> Vec<&Member> {
        let mut found: Vec<&Member> = self
            .members
            .iter()
            .filter(|m| m.name.starts_with('S'))
            .collect();
        // Natural order, not the alphabetical order the name suggests.
        found.sort();
        found
    }

    fn lannisters_alphabetically_by_name(&self) -> Vec<&Member> {
        let mut found = self.find_all_by_house(House::Lannister);
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    fn salary_less_than_and_sort_by_house(&self, max: f64) -> Vec<&Member> {
        let mut found: Vec<&Member> = self.members.iter().filter(|m| m.salary < max).collect();
        found.sort_by_key(|m| m.house);
        found
    }

    fn sort_by_house_name_then_sort_by_name_desc(&self) -> Vec<&Member> {
        // Single ascending name sort over the whole roster; the method name
        // overpromises and is kept for contract compatibility.
        let mut found: Vec<&Member> = self.members.iter().collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    fn house_by_dob(&self, house: House) -> Vec<&Member> {
        let mut found = self.find_all_by_house(house);
        found.sort_by_key(|m| m.dob);
        found
    }

    fn kings_by_name_desc(&self) -> Vec<&Member> {
        // Ascending despite the name; kept for contract compatibility.
        let mut found: Vec<&Member> = self
            .members
            .iter()
            .filter(|m| m.title == Some(Title::King))
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    fn average_salary(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let total: f64 = self.members.iter().map(|m| m.salary).sum();
        total / self.members.len() as f64
    }

    fn names_sorted(&self, house: House) -> Vec<&str> {
        let mut names: Vec<&str> = self.of_house(house).map(|m| m.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    fn salaries_greater_than(&self, max: f64) -> bool {
        self.members.iter().any(|m| m.salary > max)
    }

    fn salaries_less_than(&self, max: f64) -> bool {
        self.members.iter().any(|m| m.salary < max)
    }

    fn any_members(&self, house: House) -> bool {
        self.of_house(house).next().is_some()
    }

    fn how_many(&self, house: House) -> usize {
        self.of_house(house).count()
    }

    fn house_member_names(&self, house: House) -> String {
        self.of_house(house)
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn highest_salary(&self) -> Option<&Member> {
        // Strict comparison keeps the first of any maximal tie.
        self.members
            .iter()
            .reduce(|best, m| if m.salary > best.salary { m } else { best })
    }

    fn royalty_partition(&self) -> RoyaltyPartition<'_> {
        let mut split = RoyaltyPartition::default();
        for m in &self.members {
            if m.is_royalty() {
                split.royalty.push(m);
            } else {
                split.commoners.push(m);
            }
        }
        split
    }

    fn members_by_house(&self) -> BTreeMap<House, Vec<&Member>> {
        let mut groups: BTreeMap<House, Vec<&Member>> = BTreeMap::new();
        for m in &self.members {
            groups.entry(m.house).or_default().push(m);
        }
        groups
    }

    fn number_of_members_by_house(&self) -> BTreeMap<House, usize> {
        let mut counts: BTreeMap<House, usize> = BTreeMap::new();
        for m in &self.members {
            *counts.entry(m.house).or_insert(0) += 1;
        }
        counts
    }

    fn house_stats(&self) -> BTreeMap<House, SalarySummary> {
        let mut stats: BTreeMap<House, SalarySummary> = BTreeMap::new();
        for m in &self.members {
            stats.entry(m.house).or_default().record(m.salary);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn member(
        id: u64,
        house: House,
        name: &str,
        title: Option<Title>,
        salary: f64,
        dob: (i32, u32, u32),
    ) -> Member {
        Member {
            id,
            house,
            name: name.to_string(),
            title,
            salary,
            dob: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
        }
    }

    // The id order deliberately disagrees with alphabetical order for the
    // "S" names (Stannis before Sansa) so ordering quirks are observable.
    fn fixture() -> InMemoryMemberDao {
        InMemoryMemberDao::new(vec![
            member(
                1,
                House::Baratheon,
                "Stannis Baratheon",
                Some(Title::Lord),
                131_000.0,
                (1960, 4, 28),
            ),
            member(
                2,
                House::Stark,
                "Sansa Stark",
                None,
                42_000.0,
                (1986, 11, 2),
            ),
            member(
                3,
                House::Lannister,
                "Tywin Lannister",
                Some(Title::Lord),
                212_000.0,
                (1942, 10, 10),
            ),
            member(
                4,
                House::Lannister,
                "Cersei Lannister",
                Some(Title::Queen),
                185_000.0,
                (1966, 10, 4),
            ),
            member(
                5,
                House::Lannister,
                "Jaime Lannister",
                Some(Title::Ser),
                148_000.0,
                (1966, 10, 4),
            ),
            member(
                6,
                House::Stark,
                "Robb Stark",
                Some(Title::King),
                60_000.0,
                (1983, 6, 20),
            ),
            member(
                7,
                House::Baratheon,
                "Robert Baratheon",
                Some(Title::King),
                212_000.0,
                (1956, 2, 19),
            ),
            member(
                8,
                House::Stark,
                "Arya Stark",
                None,
                18_500.0,
                (1989, 6, 9),
            ),
        ])
    }

    fn names(members: &[&Member]) -> Vec<String> {
        members.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_find_by_id_present_and_absent() {
        let dao = fixture();
        assert_eq!(dao.find_by_id(4).unwrap().name, "Cersei Lannister");
        assert!(dao.find_by_id(99).is_none());
    }

    #[test]
    fn test_find_by_name_returns_first_match_in_collection_order() {
        let dao = InMemoryMemberDao::new(vec![
            member(1, House::Stark, "Jon", Some(Title::King), 70.0, (1983, 12, 26)),
            member(2, House::Greyjoy, "Jon", None, 10.0, (1980, 1, 1)),
        ]);
        assert_eq!(dao.find_by_name("Jon").unwrap().id, 1);
        assert!(dao.find_by_name("Hodor").is_none());
    }

    #[test]
    fn test_find_all_by_house_preserves_backing_order() {
        let dao = fixture();
        let starks = dao.find_all_by_house(House::Stark);
        assert_eq!(names(&starks), ["Sansa Stark", "Robb Stark", "Arya Stark"]);
        assert!(dao.find_all_by_house(House::Martell).is_empty());
    }

    #[test]
    fn test_get_all_is_the_backing_collection() {
        let dao = fixture();
        assert_eq!(dao.get_all().len(), 8);
        assert_eq!(dao.get_all()[0].id, 1);
    }

    // Pins the actual contract: natural (id) order, although the method name
    // says alphabetical. Stannis (id 1) comes before Sansa (id 2) even
    // though "Sansa" < "Stannis".
    #[test]
    fn test_start_with_s_sorts_by_id_not_name() {
        let dao = fixture();
        let found = dao.start_with_s_and_sort_alphabetically();
        assert_eq!(names(&found), ["Stannis Baratheon", "Sansa Stark"]);
    }

    #[test]
    fn test_lannisters_sorted_by_name() {
        let dao = fixture();
        let found = dao.lannisters_alphabetically_by_name();
        assert_eq!(
            names(&found),
            ["Cersei Lannister", "Jaime Lannister", "Tywin Lannister"]
        );
    }

    #[test]
    fn test_salary_less_than_sorts_by_house_order() {
        let dao = fixture();
        let found = dao.salary_less_than_and_sort_by_house(150_000.0);
        // House order is Stark < Lannister < Baratheon; the sort is stable,
        // so collection order survives within a house.
        assert_eq!(
            names(&found),
            [
                "Sansa Stark",
                "Robb Stark",
                "Arya Stark",
                "Jaime Lannister",
                "Stannis Baratheon"
            ]
        );
    }

    // Pins the actual contract: one ascending name sort, not the two-level
    // descending sort the method name suggests.
    #[test]
    fn test_sort_by_house_then_name_desc_is_a_single_ascending_name_sort() {
        let dao = fixture();
        let found = dao.sort_by_house_name_then_sort_by_name_desc();
        assert_eq!(found.len(), 8);
        assert_eq!(found[0].name, "Arya Stark");
        assert_eq!(found[7].name, "Tywin Lannister");
        assert!(found.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_house_by_dob_earliest_first() {
        let dao = fixture();
        let found = dao.house_by_dob(House::Stark);
        assert_eq!(names(&found), ["Robb Stark", "Sansa Stark", "Arya Stark"]);
    }

    // Pins the actual contract: ascending by name despite the "desc" in the
    // method name.
    #[test]
    fn test_kings_by_name_desc_sorts_ascending() {
        let dao = fixture();
        let found = dao.kings_by_name_desc();
        assert_eq!(names(&found), ["Robb Stark", "Robert Baratheon"]);
    }

    #[test]
    fn test_average_salary() {
        let dao = InMemoryMemberDao::new(vec![
            member(1, House::Stark, "A", None, 10.0, (1980, 1, 1)),
            member(2, House::Stark, "B", None, 20.0, (1980, 1, 1)),
            member(3, House::Stark, "C", None, 30.0, (1980, 1, 1)),
        ]);
        assert_eq!(dao.average_salary(), 20.0);
    }

    #[test]
    fn test_average_salary_of_empty_roster_is_zero() {
        let dao = InMemoryMemberDao::new(Vec::new());
        assert_eq!(dao.average_salary(), 0.0);
    }

    #[test]
    fn test_names_sorted() {
        let dao = fixture();
        assert_eq!(
            dao.names_sorted(House::Stark),
            ["Arya Stark", "Robb Stark", "Sansa Stark"]
        );
        assert!(dao.names_sorted(House::Tully).is_empty());
    }

    #[test]
    fn test_salary_threshold_checks() {
        let dao = fixture();
        assert!(dao.salaries_greater_than(200_000.0));
        assert!(!dao.salaries_greater_than(212_000.0));
        assert!(dao.salaries_less_than(20_000.0));
        assert!(!dao.salaries_less_than(18_500.0));
    }

    #[test]
    fn test_any_members_and_how_many() {
        let dao = fixture();
        assert!(dao.any_members(House::Lannister));
        assert!(!dao.any_members(House::Tyrell));
        assert_eq!(dao.how_many(House::Lannister), 3);
        assert_eq!(dao.how_many(House::Tyrell), 0);
    }

    #[test]
    fn test_house_member_names_joins_in_backing_order() {
        let dao = fixture();
        assert_eq!(
            dao.house_member_names(House::Stark),
            "Sansa Stark, Robb Stark, Arya Stark"
        );
        assert_eq!(dao.house_member_names(House::Martell), "");
    }

    #[test]
    fn test_highest_salary_keeps_the_first_of_a_tie() {
        let dao = fixture();
        // Tywin (id 3) and Robert (id 7) both earn 212_000.
        assert_eq!(dao.highest_salary().unwrap().id, 3);
    }

    #[test]
    fn test_highest_salary_of_empty_roster_is_none() {
        let dao = InMemoryMemberDao::new(Vec::new());
        assert!(dao.highest_salary().is_none());
    }

    #[test]
    fn test_royalty_partition_covers_every_member_once() {
        let dao = fixture();
        let split = dao.royalty_partition();
        assert_eq!(
            names(&split.royalty),
            ["Cersei Lannister", "Robb Stark", "Robert Baratheon"]
        );
        assert_eq!(split.royalty.len() + split.commoners.len(), 8);
        for royal in &split.royalty {
            assert!(!split.commoners.contains(royal));
        }
    }

    #[test]
    fn test_members_by_house_is_a_stable_grouping() {
        let dao = fixture();
        let groups = dao.members_by_house();
        assert_eq!(groups.len(), 3);
        assert_eq!(
            names(&groups[&House::Lannister]),
            ["Tywin Lannister", "Cersei Lannister", "Jaime Lannister"]
        );
        let regrouped: usize = groups.values().map(Vec::len).sum();
        assert_eq!(regrouped, dao.get_all().len());
    }

    #[test]
    fn test_number_of_members_by_house_sums_to_total() {
        let dao = fixture();
        let counts = dao.number_of_members_by_house();
        assert_eq!(counts[&House::Stark], 3);
        assert_eq!(counts[&House::Lannister], 3);
        assert_eq!(counts[&House::Baratheon], 2);
        assert_eq!(counts.values().sum::<usize>(), dao.get_all().len());
    }

    #[test]
    fn test_house_stats_aggregates_per_house() {
        let dao = fixture();
        let stats = dao.house_stats();

        let starks = &stats[&House::Stark];
        assert_eq!(starks.count, 3);
        assert_eq!(starks.min, 18_500.0);
        assert_eq!(starks.max, 60_000.0);
        assert_eq!(starks.sum, 120_500.0);

        let baratheons = &stats[&House::Baratheon];
        assert_eq!(baratheons.average(), (131_000.0 + 212_000.0) / 2.0);
    }
}
