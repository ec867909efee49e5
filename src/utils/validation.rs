use std::collections::HashSet;

use crate::domain::model::Member;
use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_salary(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RosterError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "salary must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

/// A roster is usable when ids are unique, names are non-empty, and salaries
/// are finite and non-negative. Queries assume all three.
pub fn validate_roster(members: &[Member]) -> Result<()> {
    let mut seen = HashSet::with_capacity(members.len());
    for m in members {
        validate_non_empty_string("name", &m.name)?;
        validate_salary("salary", m.salary)?;
        if !seen.insert(m.id) {
            return Err(RosterError::ValidationError {
                message: format!("duplicate member id: {}", m.id),
            });
        }
    }
    Ok(())
}
