// File: crates/scatter-core/tests/source.rs
// Purpose: Loading record files (JSON/CSV), validation failures and the JSON export round trip.

use std::io::Write;

use scatter_core::source::{load_file, save_json};
use scatter_core::{DataSource, EducationScale, Gender, LoadError, Parental, SynthesisMode, Synthesizer};

const YEARS: &[i32] = &[2021, 2022, 2023];

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).expect("create");
    f.write_all(body.as_bytes()).expect("write");
    path
}

#[test]
fn loads_json_and_resolves_missing_rank() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "data.json",
        r#"[
            {"id": 0, "year": 2021, "salary": 50, "gender": "Male", "education": "Высшее", "parental": "HE"},
            {"id": 1, "year": 2021, "salary": 50, "gender": "Female", "education": "Среднее", "eduLevel": 2, "parental": "No info"}
        ]"#,
    );
    let records = load_file(&path, &EducationScale::default(), YEARS).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].edu_level, 3);
    assert_eq!(records[1].gender, Gender::Female);
    assert_eq!(records[1].parental, Parental::NoInfo);
}

#[test]
fn loads_csv_with_padded_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "data.csv",
        "id,year,salary,gender,education,eduLevel,parental\n\
         7, 2022, 61.5, Female, Другое, 1, No HE\n\
         8, 2023, 12, Male, Высшее, , HE\n",
    );
    let records = load_file(&path, &EducationScale::default(), YEARS).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].salary, 61.5);
    assert_eq!(records[0].parental, Parental::NoHe);
    assert_eq!(records[1].edu_level, 3);
}

#[test]
fn rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "dup.json",
        r#"[
            {"id": 3, "year": 2021, "salary": 10, "gender": "Male", "education": "Высшее", "parental": "HE"},
            {"id": 3, "year": 2022, "salary": 20, "gender": "Male", "education": "Высшее", "parental": "HE"}
        ]"#,
    );
    assert!(matches!(load_file(&path, &EducationScale::default(), YEARS), Err(LoadError::DuplicateId(3))));
}

#[test]
fn rejects_bad_category_encodings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "bad.json",
        r#"[{"id": 0, "year": 2021, "salary": 10, "gender": "male", "education": "Высшее", "parental": "HE"}]"#,
    );
    assert!(matches!(load_file(&path, &EducationScale::default(), YEARS), Err(LoadError::Json { .. })));
}

#[test]
fn rejects_negative_salary_and_unknown_education() {
    let dir = tempfile::tempdir().unwrap();
    let neg = write(
        &dir,
        "neg.json",
        r#"[{"id": 4, "year": 2021, "salary": -1, "gender": "Male", "education": "Высшее", "parental": "HE"}]"#,
    );
    assert!(matches!(
        load_file(&neg, &EducationScale::default(), YEARS),
        Err(LoadError::InvalidRecord { id: 4, .. })
    ));

    let unknown = write(
        &dir,
        "unknown.json",
        r#"[{"id": 5, "year": 2021, "salary": 1, "gender": "Male", "education": "PhD", "parental": "HE"}]"#,
    );
    assert!(matches!(
        load_file(&unknown, &EducationScale::default(), YEARS),
        Err(LoadError::InvalidRecord { id: 5, .. })
    ));
}

#[test]
fn missing_file_and_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let scale = EducationScale::default();
    let missing = DataSource::File(dir.path().join("nope.json"));
    assert!(matches!(missing.load(&scale, YEARS), Err(LoadError::Io { .. })));

    let txt = write(&dir, "data.txt", "[]");
    assert!(matches!(load_file(&txt, &scale, YEARS), Err(LoadError::UnsupportedFormat(_))));
}

#[test]
fn exported_json_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let records = Synthesizer::new(SynthesisMode::Piecewise, 50, Some(11)).generate().unwrap();
    let path = dir.path().join("out/records.json");
    save_json(&path, &records).unwrap();
    let back = load_file(&path, &EducationScale::default(), YEARS).unwrap();
    assert_eq!(back.len(), records.len());
    for (a, b) in back.iter().zip(&records) {
        assert_eq!((a.id, a.year, a.gender, a.edu_level, a.parental), (b.id, b.year, b.gender, b.edu_level, b.parental));
        assert_eq!(a.education, b.education);
        assert!((a.salary - b.salary).abs() < 1e-9);
    }
}

#[test]
fn rejects_years_outside_the_configured_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "year.json",
        r#"[{"id": 6, "year": 2019, "salary": 30, "gender": "Male", "education": "Высшее", "parental": "HE"}]"#,
    );
    assert!(matches!(
        load_file(&path, &EducationScale::default(), YEARS),
        Err(LoadError::InvalidRecord { id: 6, .. })
    ));
    assert_eq!(load_file(&path, &EducationScale::default(), &[2019]).unwrap()[0].year, 2019);
}

#[test]
fn rejects_edu_level_outside_the_scale() {
    let dir = tempfile::tempdir().unwrap();
    for (name, level) in [("zero.json", 0), ("high.json", 4)] {
        let body = format!(
            r#"[{{"id": 7, "year": 2021, "salary": 30, "gender": "Male", "education": "Высшее", "eduLevel": {level}, "parental": "HE"}}]"#
        );
        let path = write(&dir, name, &body);
        assert!(
            matches!(load_file(&path, &EducationScale::default(), YEARS), Err(LoadError::InvalidRecord { id: 7, .. })),
            "eduLevel {level} accepted"
        );
    }
}
