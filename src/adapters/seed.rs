use chrono::NaiveDate;

use crate::domain::model::{House, Member, Title};
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;

/// The built-in roster: deterministic, ordered by id ascending, and already
/// valid. Callers own the returned vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedRoster;

impl RosterSource for SeedRoster {
    fn load(&self) -> Result<Vec<Member>> {
        Ok(seed_members())
    }
}

pub fn seed_members() -> Vec<Member> {
    vec![
        member(1, House::Stark, "Eddard Stark", Some(Title::Lord), 100_000.0, 1963, 4, 15),
        member(2, House::Stark, "Catelyn Stark", Some(Title::Lady), 83_000.0, 1964, 3, 12),
        member(3, House::Stark, "Robb Stark", Some(Title::King), 60_000.0, 1983, 6, 20),
        member(4, House::Stark, "Sansa Stark", None, 42_000.0, 1986, 11, 2),
        member(5, House::Stark, "Arya Stark", None, 18_500.0, 1989, 6, 9),
        member(6, House::Stark, "Jon Snow", Some(Title::King), 75_000.0, 1983, 12, 26),
        member(7, House::Lannister, "Tywin Lannister", Some(Title::Lord), 212_000.0, 1942, 10, 10),
        member(8, House::Lannister, "Cersei Lannister", Some(Title::Queen), 185_000.0, 1966, 10, 4),
        member(9, House::Lannister, "Jaime Lannister", Some(Title::Ser), 148_000.0, 1966, 10, 4),
        member(10, House::Lannister, "Tyrion Lannister", None, 97_500.0, 1974, 7, 11),
        member(11, House::Baratheon, "Robert Baratheon", Some(Title::King), 173_000.0, 1956, 2, 19),
        member(12, House::Baratheon, "Stannis Baratheon", Some(Title::Lord), 131_000.0, 1960, 4, 28),
        member(13, House::Baratheon, "Renly Baratheon", Some(Title::Lord), 92_000.0, 1977, 8, 21),
        member(14, House::Targaryen, "Daenerys Targaryen", Some(Title::Queen), 154_000.0, 1987, 5, 3),
        member(15, House::Targaryen, "Viserys Targaryen", Some(Title::Prince), 61_000.0, 1979, 3, 14),
        member(16, House::Greyjoy, "Theon Greyjoy", None, 38_000.0, 1984, 1, 22),
        member(17, House::Greyjoy, "Balon Greyjoy", Some(Title::Lord), 88_000.0, 1951, 9, 8),
        member(18, House::Tully, "Edmure Tully", Some(Title::Lord), 71_000.0, 1971, 5, 25),
        member(19, House::Tyrell, "Olenna Tyrell", Some(Title::Lady), 126_000.0, 1928, 9, 30),
        member(20, House::Martell, "Oberyn Martell", Some(Title::Prince), 118_000.0, 1958, 12, 15),
    ]
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: u64,
    house: House,
    name: &str,
    title: Option<Title>,
    salary: f64,
    year: i32,
    month: u32,
    day: u32,
) -> Member {
    Member {
        id,
        house,
        name: name.to_string(),
        title,
        salary,
        dob: NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid"),
    }
}
