// File: crates/scatter-core/tests/pipeline.rs
// Purpose: Filtering, layout, averages and trend through the public build_view API.

use scatter_core::color::{point_color, TREND_BOTH, TREND_FEMALE, TREND_MALE};
use scatter_core::layout::GroupOrder;
use scatter_core::{build_view, EducationScale, FilterGroup, Filters, Gender, LayoutConfig, Parental, Record, ValueUnit};

fn rec(id: u32, year: i32, salary: f64, gender: Gender, education: &str, parental: Parental) -> Record {
    let edu_level = EducationScale::default().rank_of(education).expect("known education");
    Record { id, year, salary, gender, education: education.to_string(), edu_level, parental }
}

fn sample() -> Vec<Record> {
    vec![
        rec(0, 2021, 30.0, Gender::Male, "Высшее", Parental::He),
        rec(1, 2021, 50.0, Gender::Female, "Среднее", Parental::NoHe),
        rec(2, 2022, 70.0, Gender::Male, "Другое", Parental::NoInfo),
        rec(3, 2022, 90.0, Gender::Female, "Высшее", Parental::He),
        rec(4, 2023, 20.0, Gender::Female, "Среднее", Parental::He),
    ]
}

#[test]
fn two_equal_salaries_sit_symmetric_about_the_zone_center() {
    let records = vec![
        rec(0, 2021, 50.0, Gender::Male, "Высшее", Parental::He),
        rec(1, 2021, 50.0, Gender::Female, "Среднее", Parental::He),
    ];
    let scale = EducationScale::default();
    let layout = LayoutConfig::default();
    let view = build_view(&records, &Filters::all(&scale), &layout, &scale);

    assert_eq!(view.points.len(), 2);
    let center = view.zones[0].center;
    assert_eq!(center, 100.0);
    let (a, b) = (&view.points[0], &view.points[1]);
    assert!(((a.x + b.x) / 2.0 - center).abs() < 1e-9);
    assert_ne!(a.x, b.x);
    assert_eq!(a.y, b.y);

    let avg = view.average(2021).expect("2021 average");
    assert_eq!(avg.stat.avg, 50.0);
    assert_eq!(avg.stat.count, 2);
}

#[test]
fn lower_education_rank_is_placed_first_in_a_group() {
    let records = vec![
        rec(0, 2021, 50.0, Gender::Male, "Высшее", Parental::He),
        rec(1, 2021, 50.0, Gender::Female, "Среднее", Parental::He),
    ];
    let scale = EducationScale::default();
    let view = build_view(&records, &Filters::all(&scale), &LayoutConfig::default(), &scale);
    let left = view.points.iter().min_by(|a, b| a.x.total_cmp(&b.x)).unwrap();
    assert_eq!(left.record.education, "Среднее");
}

#[test]
fn excluding_a_gender_yields_zero_average_for_empty_years() {
    let records = sample();
    let scale = EducationScale::default();
    let mut filters = Filters::all(&scale);
    filters.set(FilterGroup::Gender, "Female", false).unwrap();

    let view = build_view(&records, &filters, &LayoutConfig::default(), &scale);
    assert!(view.points.iter().all(|p| p.record.gender == Gender::Male));
    let y2023 = view.average(2023).expect("every configured year has an average");
    assert_eq!(y2023.stat.avg, 0.0);
    assert_eq!(y2023.stat.count, 0);
    assert!(!y2023.stat.avg.is_nan());
    assert_eq!(view.trend_color, TREND_MALE);
}

#[test]
fn trend_color_follows_gender_selection() {
    let records = sample();
    let scale = EducationScale::default();
    let layout = LayoutConfig::default();

    let all = Filters::all(&scale);
    assert_eq!(build_view(&records, &all, &layout, &scale).trend_color, TREND_BOTH);

    let mut female = Filters::all(&scale);
    female.set(FilterGroup::Gender, "Male", false).unwrap();
    assert_eq!(build_view(&records, &female, &layout, &scale).trend_color, TREND_FEMALE);
}

#[test]
fn empty_selection_draws_nothing() {
    let records = sample();
    let scale = EducationScale::default();
    let view = build_view(&records, &Filters::none(), &LayoutConfig::default(), &scale);
    assert!(view.is_empty());
    assert!(view.averages.is_empty());
    assert!(view.trend.is_empty());
    assert_eq!(view.zones.len(), 3);
}

#[test]
fn every_filter_group_narrows_the_set() {
    let records = sample();
    let scale = EducationScale::default();
    let layout = LayoutConfig::default();

    let mut f = Filters::all(&scale);
    f.set(FilterGroup::Education, "Высшее", false).unwrap();
    let ids: Vec<u32> = build_view(&records, &f, &layout, &scale).points.iter().map(|p| p.id()).collect();
    assert!(!ids.contains(&0) && !ids.contains(&3));

    let mut f = Filters::all(&scale);
    f.set(FilterGroup::Parental, "HE", false).unwrap();
    let mut ids: Vec<u32> = build_view(&records, &f, &layout, &scale).points.iter().map(|p| p.id()).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn salary_ceiling_drops_points_and_their_contribution_to_averages() {
    let records = sample();
    let scale = EducationScale::default();
    let filters = Filters::all(&scale).with_ceiling(Some(80.0));
    let view = build_view(&records, &filters, &LayoutConfig::default(), &scale);
    assert!(view.point(3).is_none());
    assert_eq!(view.average(2022).unwrap().stat.avg, 70.0);
}

#[test]
fn higher_salary_is_drawn_higher() {
    let records = sample();
    let scale = EducationScale::default();
    let view = build_view(&records, &Filters::all(&scale), &LayoutConfig::default(), &scale);
    let y30 = view.point(0).unwrap().y;
    let y90 = view.point(3).unwrap().y;
    assert!(y90 < y30);
    for p in &view.points {
        assert!(p.y >= 0.0 && p.y <= view.plot_height);
    }
}

#[test]
fn points_stay_inside_their_year_zone() {
    let records: Vec<Record> = (0..40)
        .map(|i| rec(i, 2022, 50.0, if i % 2 == 0 { Gender::Male } else { Gender::Female }, "Высшее", Parental::He))
        .collect();
    let scale = EducationScale::default();
    let view = build_view(&records, &Filters::all(&scale), &LayoutConfig::default(), &scale);
    let zone = view.zones.iter().find(|z| z.year == 2022).unwrap();
    for p in &view.points {
        assert!(p.x >= zone.left && p.x <= zone.right, "x {} outside [{}, {}]", p.x, zone.left, zone.right);
    }
}

#[test]
fn point_color_encodes_gender_and_rank() {
    let records = sample();
    let scale = EducationScale::default();
    let view = build_view(&records, &Filters::all(&scale), &LayoutConfig::default(), &scale);
    let p = view.point(3).unwrap();
    assert_eq!(p.color, point_color(Gender::Female, 3, 3));
    assert_ne!(view.point(0).unwrap().color, p.color);
}

#[test]
fn trend_passes_through_every_average() {
    let records = sample();
    let scale = EducationScale::default();
    let view = build_view(&records, &Filters::all(&scale), &LayoutConfig::default(), &scale);
    assert_eq!(view.averages.len(), 3);
    let first = view.averages[0];
    assert_eq!(view.trend.start, Some((first.x, first.y)));
    assert_eq!(view.trend.segments.len(), 2);
}

#[test]
fn same_inputs_give_the_same_view() {
    let records = sample();
    let scale = EducationScale::default();
    let layout = LayoutConfig::default();
    let f = Filters::all(&scale);
    assert_eq!(build_view(&records, &f, &layout, &scale), build_view(&records, &f, &layout, &scale));
}

#[test]
fn insertion_order_keeps_input_order_within_a_group() {
    let records = vec![
        rec(5, 2021, 50.0, Gender::Male, "Высшее", Parental::He),
        rec(2, 2021, 50.0, Gender::Female, "Среднее", Parental::He),
    ];
    let scale = EducationScale::default();
    let layout = LayoutConfig { group_order: GroupOrder::Insertion, ..LayoutConfig::default() };
    let view = build_view(&records, &Filters::all(&scale), &layout, &scale);
    assert_eq!(view.point(5).unwrap().x, 60.0);
    assert_eq!(view.point(2).unwrap().x, 140.0);

    let ranked = build_view(&records, &Filters::all(&scale), &LayoutConfig::default(), &scale);
    assert_eq!(ranked.point(2).unwrap().x, 60.0);
}

#[test]
fn rubles_group_by_rounded_thousands() {
    let records = vec![
        rec(0, 2022, 49_600.0, Gender::Male, "Высшее", Parental::He),
        rec(1, 2022, 50_400.0, Gender::Female, "Высшее", Parental::He),
        rec(2, 2022, 51_600.0, Gender::Female, "Высшее", Parental::He),
    ];
    let scale = EducationScale::default();
    let layout = LayoutConfig { unit: ValueUnit::Rubles, ..LayoutConfig::default() };
    let view = build_view(&records, &Filters::all(&scale), &layout, &scale);
    let (a, b, c) = (view.point(0).unwrap(), view.point(1).unwrap(), view.point(2).unwrap());
    assert_eq!(a.y, b.y);
    assert_ne!(a.x, b.x);
    assert!(((a.x + b.x) / 2.0 - 300.0).abs() < 1e-9);
    assert!(c.y < a.y);
    assert_eq!(c.x, 300.0);
    assert!((view.average(2022).unwrap().stat.avg - 50_533.333).abs() < 0.01);
}

#[test]
fn records_outside_every_zone_draw_nothing() {
    let records = vec![rec(0, 2019, 40.0, Gender::Male, "Высшее", Parental::He)];
    let scale = EducationScale::default();
    let view = build_view(&records, &Filters::all(&scale), &LayoutConfig::default(), &scale);
    assert!(view.is_empty());
    assert!(view.averages.is_empty());
    assert!(view.trend.is_empty());
}
