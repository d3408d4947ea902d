// File: crates/scatter-core/src/generate.rs
// Summary: Seedable synthetic record generators (uniform and piecewise-realistic salaries).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::record::{EducationScale, Gender, Parental, Record};

/// Draws one salary value.
pub trait SalarySampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;
}

/// Salary uniform in `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformSalary {
    pub min: f64,
    pub max: f64,
}

impl Default for UniformSalary {
    fn default() -> Self {
        Self { min: 5.0, max: 100.0 }
    }
}

impl SalarySampler for UniformSalary {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..self.max)
    }
}

/// One bucket of the piecewise distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bucket {
    /// Continuous uniform in `[lo, hi)`.
    Uniform { lo: f64, hi: f64 },
    /// Integers in `[lo, hi)` congruent to 3 mod 4: `lo + 4k + 3`.
    Band { lo: u32, hi: u32 },
}

impl Bucket {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Bucket::Uniform { lo, hi } => rng.random_range(lo..hi),
            Bucket::Band { lo, hi } => {
                let slots = ((hi - lo) / 4).max(1);
                let k = rng.random_range(0..slots);
                (lo + 4 * k + 3) as f64
            }
        }
    }
}

/// Bucket weights sum to 1.0.
pub const PIECEWISE_BUCKETS: [(f64, Bucket); 6] = [
    (0.20, Bucket::Uniform { lo: 1.0, hi: 40.0 }),
    (0.30, Bucket::Uniform { lo: 40.0, hi: 60.0 }),
    (0.25, Bucket::Uniform { lo: 60.0, hi: 100.0 }),
    (0.10, Bucket::Band { lo: 100, hi: 200 }),
    (0.10, Bucket::Band { lo: 200, hi: 300 }),
    (0.05, Bucket::Band { lo: 300, hi: 400 }),
];

/// Six-bucket distribution mimicking clustered real-world salaries (thousands).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PiecewiseSalary;

impl PiecewiseSalary {
    /// Index into [`PIECEWISE_BUCKETS`] selected by a unit draw `u` in `[0, 1)`.
    pub fn bucket_for(u: f64) -> usize {
        let mut acc = 0.0;
        for (i, (w, _)) in PIECEWISE_BUCKETS.iter().enumerate() {
            acc += w;
            if u < acc {
                return i;
            }
        }
        PIECEWISE_BUCKETS.len() - 1
    }
}

impl SalarySampler for PiecewiseSalary {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.random();
        PIECEWISE_BUCKETS[Self::bucket_for(u)].1.sample(rng)
    }
}

/// Synthesis mode; modes are interchangeable, one per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisMode {
    #[default]
    Uniform,
    Piecewise,
}

/// Builds a record set of `count` rows with ids `0..count`.
#[derive(Clone, Debug)]
pub struct Synthesizer {
    pub mode: SynthesisMode,
    pub count: usize,
    pub seed: Option<u64>,
    pub years: Vec<i32>,
    pub scale: EducationScale,
    pub uniform: UniformSalary,
}

impl Synthesizer {
    pub fn new(mode: SynthesisMode, count: usize, seed: Option<u64>) -> Self {
        Self {
            mode,
            count,
            seed,
            years: vec![2021, 2022, 2023],
            scale: EducationScale::default(),
            uniform: UniformSalary::default(),
        }
    }

    pub fn with_years(mut self, years: Vec<i32>) -> Self {
        self.years = years;
        self
    }

    pub fn with_scale(mut self, scale: EducationScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_uniform(mut self, uniform: UniformSalary) -> Self {
        self.uniform = uniform;
        self
    }

    pub fn generate(&self) -> Result<Vec<Record>, LoadError> {
        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        self.generate_with(&mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Record>, LoadError> {
        if self.years.is_empty() {
            return Err(LoadError::Generator("year set is empty".into()));
        }
        if self.scale.is_empty() {
            return Err(LoadError::Generator("education scale is empty".into()));
        }
        let labels = self.scale.labels();
        let mut out = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let year = self.years[rng.random_range(0..self.years.len())];
            let gender = Gender::ALL[rng.random_range(0..Gender::ALL.len())];
            let edu = rng.random_range(0..labels.len());
            let parental = Parental::ALL[rng.random_range(0..Parental::ALL.len())];
            let salary = match self.mode {
                SynthesisMode::Uniform => self.uniform.sample(rng),
                SynthesisMode::Piecewise => PiecewiseSalary.sample(rng),
            };
            out.push(Record {
                id: i as u32,
                year,
                salary,
                gender,
                education: labels[edu].clone(),
                edu_level: (edu + 1) as u8,
                parental,
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_weights_sum_to_one() {
        let total: f64 = PIECEWISE_BUCKETS.iter().map(|(w, _)| w).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(PiecewiseSalary::bucket_for(0.0), 0);
        assert_eq!(PiecewiseSalary::bucket_for(0.1999), 0);
        assert_eq!(PiecewiseSalary::bucket_for(0.2), 1);
        assert_eq!(PiecewiseSalary::bucket_for(0.75), 3);
        assert_eq!(PiecewiseSalary::bucket_for(0.9499), 4);
        assert_eq!(PiecewiseSalary::bucket_for(0.96), 5);
        assert_eq!(PiecewiseSalary::bucket_for(1.0), 5);
    }

    #[test]
    fn empty_year_set_is_an_error() {
        let s = Synthesizer::new(SynthesisMode::Uniform, 3, Some(1)).with_years(Vec::new());
        assert!(matches!(s.generate(), Err(LoadError::Generator(_))));
    }
}
