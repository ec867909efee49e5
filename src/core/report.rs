use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::model::{House, Member, SalarySummary};
use crate::domain::ports::MemberDao;
use crate::utils::error::{Result, RosterError};

/// What the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// One-screen roster overview.
    Summary,
    /// Member listing, optionally restricted to a house.
    Members,
    /// Per-house salary statistics.
    Houses,
}

impl FromStr for ReportKind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Ok(ReportKind::Summary),
            "members" => Ok(ReportKind::Members),
            "houses" => Ok(ReportKind::Houses),
            _ => Err(RosterError::InvalidValueError {
                field: "report".to_string(),
                value: s.to_string(),
                reason: "expected one of: summary, members, houses".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(RosterError::InvalidValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "expected one of: csv, json".to_string(),
            }),
        }
    }
}

/// Render one report against the snapshot. The summary is plain text and
/// ignores the format; tabular reports honor it.
pub fn render(
    dao: &impl MemberDao,
    kind: ReportKind,
    house: Option<House>,
    format: OutputFormat,
) -> Result<String> {
    match kind {
        ReportKind::Summary => Ok(summary_text(dao)),
        ReportKind::Members => {
            let members = match house {
                Some(h) => dao.find_all_by_house(h),
                None => dao.get_all().iter().collect(),
            };
            match format {
                OutputFormat::Csv => members_csv(&members),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&members)?),
            }
        }
        ReportKind::Houses => {
            let stats = dao.house_stats();
            match format {
                OutputFormat::Csv => house_stats_csv(&stats),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&stats)?),
            }
        }
    }
}

fn summary_text(dao: &impl MemberDao) -> String {
    let split = dao.royalty_partition();
    let mut out = String::new();
    out.push_str(&format!("members: {}\n", dao.get_all().len()));
    out.push_str(&format!("average salary: {:.2}\n", dao.average_salary()));
    match dao.highest_salary() {
        Some(top) => out.push_str(&format!("top earner: {} ({:.2})\n", top.name, top.salary)),
        None => out.push_str("top earner: none\n"),
    }
    out.push_str(&format!(
        "royalty: {}, commoners: {}\n",
        split.royalty.len(),
        split.commoners.len()
    ));
    out
}

fn members_csv(members: &[&Member]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["id", "house", "name", "title", "salary", "dob"])?;
    for m in members {
        wtr.write_record(&[
            m.id.to_string(),
            m.house.to_string(),
            m.name.clone(),
            m.title.map(|t| t.to_string()).unwrap_or_default(),
            format!("{:.2}", m.salary),
            m.dob.to_string(),
        ])?;
    }
    finish_csv(wtr)
}

fn house_stats_csv(stats: &BTreeMap<House, SalarySummary>) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["house", "count", "min", "max", "sum", "average"])?;
    for (house, s) in stats {
        wtr.write_record(&[
            house.to_string(),
            s.count.to_string(),
            format!("{:.2}", s.min),
            format!("{:.2}", s.max),
            format!("{:.2}", s.sum),
            format!("{:.2}", s.average()),
        ])?;
    }
    finish_csv(wtr)
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr.into_inner().map_err(|e| RosterError::ProcessingError {
        message: format!("could not flush CSV buffer: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| RosterError::ProcessingError {
        message: format!("CSV output was not UTF-8: {e}"),
    })
}
