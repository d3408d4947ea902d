// File: crates/scatter-core/tests/generator.rs
// Purpose: Seeded synthetic data: determinism and distributional properties over large N.

use scatter_core::generate::{UniformSalary, PIECEWISE_BUCKETS};
use scatter_core::{EducationScale, SynthesisMode, Synthesizer};

const N: usize = 100_000;

fn bucket_of(salary: f64) -> usize {
    match salary {
        s if s < 40.0 => 0,
        s if s < 60.0 => 1,
        s if s < 100.0 => 2,
        s if s < 200.0 => 3,
        s if s < 300.0 => 4,
        _ => 5,
    }
}

#[test]
fn same_seed_same_records() {
    let a = Synthesizer::new(SynthesisMode::Piecewise, 500, Some(42)).generate().unwrap();
    let b = Synthesizer::new(SynthesisMode::Piecewise, 500, Some(42)).generate().unwrap();
    assert_eq!(a, b);
    let c = Synthesizer::new(SynthesisMode::Piecewise, 500, Some(43)).generate().unwrap();
    assert_ne!(a, c);
}

#[test]
fn ids_are_unique_and_dense() {
    let records = Synthesizer::new(SynthesisMode::Uniform, 300, Some(1)).generate().unwrap();
    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, (0..300).collect::<Vec<u32>>());
}

#[test]
fn piecewise_bucket_proportions() {
    let records = Synthesizer::new(SynthesisMode::Piecewise, N, Some(7)).generate().unwrap();
    let mut counts = [0usize; 6];
    for r in &records {
        counts[bucket_of(r.salary)] += 1;
    }
    for (i, (weight, _)) in PIECEWISE_BUCKETS.iter().enumerate() {
        let share = counts[i] as f64 / N as f64;
        assert!((share - weight).abs() < 0.01, "bucket {i}: share {share:.4}, want {weight}");
    }
}

#[test]
fn banded_salaries_are_three_mod_four() {
    let records = Synthesizer::new(SynthesisMode::Piecewise, 20_000, Some(9)).generate().unwrap();
    for r in records.iter().filter(|r| r.salary >= 100.0) {
        assert_eq!(r.salary.fract(), 0.0, "banded salary {} is not an integer", r.salary);
        assert_eq!(r.salary as u32 % 4, 3, "banded salary {}", r.salary);
        assert!(r.salary < 400.0);
    }
    assert!(records.iter().all(|r| r.salary >= 1.0));
}

#[test]
fn uniform_salaries_stay_in_range() {
    let records = Synthesizer::new(SynthesisMode::Uniform, 10_000, Some(3))
        .with_uniform(UniformSalary { min: 5.0, max: 100.0 })
        .generate()
        .unwrap();
    assert!(records.iter().all(|r| (5.0..100.0).contains(&r.salary)));
    let mean = records.iter().map(|r| r.salary).sum::<f64>() / records.len() as f64;
    assert!((mean - 52.5).abs() < 1.5, "mean {mean}");
}

#[test]
fn categories_cover_the_configured_sets() {
    let years = vec![2019, 2020];
    let scale = EducationScale::five_level();
    let records = Synthesizer::new(SynthesisMode::Uniform, 2_000, Some(5))
        .with_years(years.clone())
        .with_scale(scale.clone())
        .generate()
        .unwrap();
    for r in &records {
        assert!(years.contains(&r.year));
        assert_eq!(scale.rank_of(&r.education), Some(r.edu_level));
    }
    for level in 1..=5u8 {
        assert!(records.iter().any(|r| r.edu_level == level), "level {level} never drawn");
    }
}
