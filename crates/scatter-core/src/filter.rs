// File: crates/scatter-core/src/filter.rs
// Summary: Checkbox-style filter selection (gender / education / parental) and the record predicate.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::FilterError;
use crate::record::{EducationScale, Gender, Parental, Record};

/// One of the three independent toggle groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    Gender,
    Education,
    Parental,
}

impl FilterGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterGroup::Gender => "gender",
            FilterGroup::Education => "education",
            FilterGroup::Parental => "parental",
        }
    }
}

impl FromStr for FilterGroup {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gender" => Ok(FilterGroup::Gender),
            "education" => Ok(FilterGroup::Education),
            "parental" => Ok(FilterGroup::Parental),
            other => Err(FilterError::UnknownGroup(other.to_string())),
        }
    }
}

/// Parse a `group=value` pair, e.g. `gender=Female` or `parental=No info`.
pub fn parse_toggle(pair: &str) -> Result<(FilterGroup, String), FilterError> {
    let (group, value) = pair
        .split_once('=')
        .ok_or_else(|| FilterError::Malformed(pair.to_string()))?;
    Ok((group.parse()?, value.to_string()))
}

/// Current filter selection. A record passes iff each field is in its accepted set
/// and, when a ceiling is set, its salary does not exceed it.
#[derive(Clone, Debug, PartialEq)]
pub struct Filters {
    pub genders: BTreeSet<Gender>,
    pub educations: BTreeSet<String>,
    pub parentals: BTreeSet<Parental>,
    pub salary_ceiling: Option<f64>,
}

impl Filters {
    /// Every category checked, no ceiling.
    pub fn all(scale: &EducationScale) -> Self {
        Self {
            genders: Gender::ALL.into_iter().collect(),
            educations: scale.labels().iter().cloned().collect(),
            parentals: Parental::ALL.into_iter().collect(),
            salary_ceiling: None,
        }
    }

    /// Nothing checked.
    pub fn none() -> Self {
        Self {
            genders: BTreeSet::new(),
            educations: BTreeSet::new(),
            parentals: BTreeSet::new(),
            salary_ceiling: None,
        }
    }

    pub fn with_ceiling(mut self, ceiling: Option<f64>) -> Self {
        self.salary_ceiling = ceiling;
        self
    }

    #[inline]
    pub fn accepts(&self, r: &Record) -> bool {
        self.genders.contains(&r.gender)
            && self.educations.contains(&r.education)
            && self.parentals.contains(&r.parental)
            && self.salary_ceiling.map_or(true, |c| r.salary <= c)
    }

    /// Filtered view in input order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.accepts(r)).collect()
    }

    pub fn is_checked(&self, group: FilterGroup, value: &str) -> bool {
        match group {
            FilterGroup::Gender => value.parse::<Gender>().map_or(false, |g| self.genders.contains(&g)),
            FilterGroup::Education => self.educations.contains(value),
            FilterGroup::Parental => value.parse::<Parental>().map_or(false, |p| self.parentals.contains(&p)),
        }
    }

    /// Set a single toggle. Gender and parental values must match their exact encoding.
    pub fn set(&mut self, group: FilterGroup, value: &str, checked: bool) -> Result<(), FilterError> {
        match group {
            FilterGroup::Gender => {
                let g = value.parse::<Gender>().map_err(|_| FilterError::UnknownValue {
                    group: group.as_str(),
                    value: value.to_string(),
                })?;
                if checked { self.genders.insert(g); } else { self.genders.remove(&g); }
            }
            FilterGroup::Education => {
                if checked { self.educations.insert(value.to_string()); } else { self.educations.remove(value); }
            }
            FilterGroup::Parental => {
                let p = value.parse::<Parental>().map_err(|_| FilterError::UnknownValue {
                    group: group.as_str(),
                    value: value.to_string(),
                })?;
                if checked { self.parentals.insert(p); } else { self.parentals.remove(&p); }
            }
        }
        Ok(())
    }

    /// Flip a toggle; returns its new checked state.
    pub fn toggle(&mut self, group: FilterGroup, value: &str) -> Result<bool, FilterError> {
        let next = !self.is_checked(group, value);
        self.set(group, value, next)?;
        Ok(next)
    }
}
