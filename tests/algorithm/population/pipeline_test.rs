//! Tests for the generate-then-summarize pipeline

use employee_stats::{
    ConsoleSink, EmployeeStatsError, GeneratorConfig, MedianRounding, NameList, NameTable,
    PopulationGenerator, StatisticsEngine, StatisticsPolicy, StatisticsSummary, SummarySink, run,
    run_with,
};

use crate::utils::{reference_now, seeded_rng};

#[test]
fn test_run_default_config() {
    let mut rng = seeded_rng(7);
    let summary = run(&GeneratorConfig::default(), &mut rng).unwrap();

    assert_eq!(summary.total, 50);
    assert_eq!(summary.workload_counts.total(), 50);
    assert!(summary.min_age >= 19);
    assert!(summary.max_age <= 35);
    assert!(summary.min_age <= summary.median_age && summary.median_age <= summary.max_age);
    assert!([10, 15, 20, 25, 30, 35, 40].contains(&summary.median_workload));
}

#[test]
fn test_run_with_is_deterministic_for_fixed_seed_and_instant() {
    let generator = PopulationGenerator::default();
    let engine = StatisticsEngine::default();
    let config = GeneratorConfig::new(120, 25, 45);

    let first =
        run_with(&generator, &engine, &config, reference_now(), &mut seeded_rng(31)).unwrap();
    let second =
        run_with(&generator, &engine, &config, reference_now(), &mut seeded_rng(31)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_run_propagates_configuration_errors() {
    let mut rng = seeded_rng(7);
    assert!(matches!(
        run(&GeneratorConfig::new(5, 30, 20), &mut rng),
        Err(EmployeeStatsError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_run_zero_count_is_empty_population() {
    let mut rng = seeded_rng(7);
    assert!(matches!(
        run(&GeneratorConfig::new(0, 20, 30), &mut rng),
        Err(EmployeeStatsError::EmptyPopulation(_))
    ));
}

#[test]
fn test_run_with_injected_collaborators() {
    let names = NameTable::new(
        NameList::new(vec!["Karel"], vec!["Holub"]).unwrap(),
        NameList::new(vec!["Lenka"], vec!["Holubová"]).unwrap(),
    );
    let engine = StatisticsEngine::new(StatisticsPolicy {
        median_rounding: MedianRounding::HalfAwayFromZero,
        mean_decimals: 1,
    });
    let summary = run_with(
        &PopulationGenerator::new(names),
        &engine,
        &GeneratorConfig::new(60, 30, 30),
        reference_now(),
        &mut seeded_rng(17),
    )
    .unwrap();

    assert_eq!((summary.min_age, summary.max_age), (30, 30));
    assert!(
        summary
            .population_sorted_by_workload
            .iter()
            .all(|r| r.family_name.starts_with("Holub"))
    );
}

#[test]
fn test_summary_survives_console_sink() {
    let summary = run_with(
        &PopulationGenerator::default(),
        &StatisticsEngine::default(),
        &GeneratorConfig::new(30, 19, 35),
        reference_now(),
        &mut seeded_rng(3),
    )
    .unwrap();

    let mut sink = ConsoleSink::new(Vec::new());
    sink.emit(&summary).unwrap();
    let parsed: StatisticsSummary = serde_json::from_slice(&sink.into_inner()).unwrap();

    assert_eq!(parsed, summary);
}
