use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::RosterError;

/// One roster entry. Members never reference each other; the owning
/// collection is the unit of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub house: House,
    pub name: String,
    #[serde(default)]
    pub title: Option<Title>,
    pub salary: f64,
    pub dob: NaiveDate,
}

impl Member {
    /// Royalty means a reigning title, KING or QUEEN. Untitled members are
    /// never royalty.
    pub fn is_royalty(&self) -> bool {
        self.title.is_some_and(Title::is_royal)
    }
}

// Identity and natural order follow the unique id. Roster validation rejects
// duplicate ids, so id-equality and record-equality coincide.
impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Member {}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Member {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Closed set of affiliations. Declaration order is the natural order used
/// wherever members are sorted or keyed by house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum House {
    Stark,
    Lannister,
    Baratheon,
    Targaryen,
    Greyjoy,
    Tully,
    Tyrell,
    Martell,
}

impl House {
    pub const ALL: [House; 8] = [
        House::Stark,
        House::Lannister,
        House::Baratheon,
        House::Targaryen,
        House::Greyjoy,
        House::Tully,
        House::Tyrell,
        House::Martell,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            House::Stark => "STARK",
            House::Lannister => "LANNISTER",
            House::Baratheon => "BARATHEON",
            House::Targaryen => "TARGARYEN",
            House::Greyjoy => "GREYJOY",
            House::Tully => "TULLY",
            House::Tyrell => "TYRELL",
            House::Martell => "MARTELL",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for House {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STARK" => Ok(House::Stark),
            "LANNISTER" => Ok(House::Lannister),
            "BARATHEON" => Ok(House::Baratheon),
            "TARGARYEN" => Ok(House::Targaryen),
            "GREYJOY" => Ok(House::Greyjoy),
            "TULLY" => Ok(House::Tully),
            "TYRELL" => Ok(House::Tyrell),
            "MARTELL" => Ok(House::Martell),
            _ => Err(RosterError::InvalidValueError {
                field: "house".to_string(),
                value: s.to_string(),
                reason: "unknown house name".to_string(),
            }),
        }
    }
}

/// Closed set of roles. A member holds at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Title {
    King,
    Queen,
    Prince,
    Princess,
    Lord,
    Lady,
    Ser,
    Maester,
}

impl Title {
    pub fn is_royal(self) -> bool {
        matches!(self, Title::King | Title::Queen)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Title::King => "KING",
            Title::Queen => "QUEEN",
            Title::Prince => "PRINCE",
            Title::Princess => "PRINCESS",
            Title::Lord => "LORD",
            Title::Lady => "LADY",
            Title::Ser => "SER",
            Title::Maester => "MAESTER",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Title {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "KING" => Ok(Title::King),
            "QUEEN" => Ok(Title::Queen),
            "PRINCE" => Ok(Title::Prince),
            "PRINCESS" => Ok(Title::Princess),
            "LORD" => Ok(Title::Lord),
            "LADY" => Ok(Title::Lady),
            "SER" => Ok(Title::Ser),
            "MAESTER" => Ok(Title::Maester),
            _ => Err(RosterError::InvalidValueError {
                field: "title".to_string(),
                value: s.to_string(),
                reason: "unknown title name".to_string(),
            }),
        }
    }
}

/// Running salary statistics for one group. Starts empty; feed it one value
/// at a time with `record`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SalarySummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

impl SalarySummary {
    pub fn record(&mut self, salary: f64) {
        if self.count == 0 {
            self.min = salary;
            self.max = salary;
        } else {
            self.min = self.min.min(salary);
            self.max = self.max.max(salary);
        }
        self.count += 1;
        self.sum += salary;
    }

    /// Arithmetic mean; 0.0 for an empty group rather than NaN.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Two-way split of a roster. Every member lands on exactly one side; either
/// side may be empty.
#[derive(Debug, Default)]
pub struct RoyaltyPartition<'a> {
    pub royalty: Vec<&'a Member>,
    pub commoners: Vec<&'a Member>,
}
