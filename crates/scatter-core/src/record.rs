// File: crates/scatter-core/src/record.rs
// Summary: Record model (one observation) and its categorical fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Wire/filter encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Human-readable label for tooltips.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Мужской",
            Gender::Female => "Женский",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parental education attainment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Parental {
    #[serde(rename = "HE")]
    He,
    #[serde(rename = "No HE")]
    NoHe,
    #[serde(rename = "No info")]
    NoInfo,
}

impl Parental {
    pub const ALL: [Parental; 3] = [Parental::He, Parental::NoHe, Parental::NoInfo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parental::He => "HE",
            Parental::NoHe => "No HE",
            Parental::NoInfo => "No info",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Parental::He => "Высшее",
            Parental::NoHe => "Без высшего",
            Parental::NoInfo => "Нет данных",
        }
    }
}

impl FromStr for Parental {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HE" => Ok(Parental::He),
            "No HE" => Ok(Parental::NoHe),
            "No info" => Ok(Parental::NoInfo),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Parental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation. Immutable after load; `id` is the identity key across renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub year: i32,
    pub salary: f64,
    pub gender: Gender,
    pub education: String,
    #[serde(rename = "eduLevel")]
    pub edu_level: u8,
    pub parental: Parental,
}

/// Ordered education categories; rank is the 1-based position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EducationScale {
    labels: Vec<String>,
}

impl EducationScale {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { labels: labels.into_iter().map(Into::into).collect() }
    }

    pub fn three_level() -> Self {
        Self::new(["Другое", "Среднее", "Высшее"])
    }

    pub fn five_level() -> Self {
        Self::new([
            "Основное общее",
            "Среднее общее",
            "Среднее профессиональное",
            "Высшее",
            "Учёная степень",
        ])
    }

    /// Built-in scale for 3 or 5 levels; anything else falls back to three.
    pub fn with_levels(levels: u8) -> Self {
        if levels == 5 { Self::five_level() } else { Self::three_level() }
    }

    pub fn levels(&self) -> u8 {
        self.labels.len().min(u8::MAX as usize) as u8
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rank_of(&self, label: &str) -> Option<u8> {
        self.labels.iter().position(|l| l == label).map(|i| (i + 1) as u8)
    }

    pub fn label_of(&self, rank: u8) -> Option<&str> {
        let idx = (rank as usize).checked_sub(1)?;
        self.labels.get(idx).map(String::as_str)
    }
}

impl Default for EducationScale {
    fn default() -> Self {
        Self::three_level()
    }
}
