//! Tests for population generation

use employee_stats::algorithm::population::{AgeWindowAnchor, PopulationGenerator};
use employee_stats::{EmployeeStatsError, GeneratorConfig, Gender, Workload};
use proptest::prelude::*;

use crate::utils::{reference_now, seeded_rng};

#[test]
fn test_generate_exact_count_within_age_range() {
    let config = GeneratorConfig::new(500, 19, 35);
    let mut rng = seeded_rng(2024);
    let population = PopulationGenerator::default()
        .generate_at(&config, reference_now(), &mut rng)
        .unwrap();

    assert_eq!(population.len(), 500);
    for record in &population {
        let age = record.whole_age_at(&reference_now());
        assert!(config.age_range.contains(age), "age {age} outside 19..=35");
    }
}

#[test]
fn test_generate_zero_count_is_empty() {
    let mut rng = seeded_rng(1);
    let population = PopulationGenerator::default()
        .generate_at(&GeneratorConfig::new(0, 20, 30), reference_now(), &mut rng)
        .unwrap();
    assert!(population.is_empty());
}

#[test]
fn test_generate_rejects_reversed_range() {
    let mut rng = seeded_rng(1);
    let result = PopulationGenerator::default().generate_at(
        &GeneratorConfig::new(5, 30, 20),
        reference_now(),
        &mut rng,
    );
    assert!(matches!(
        result,
        Err(EmployeeStatsError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_generate_rejects_negative_count() {
    let mut rng = seeded_rng(1);
    let result = PopulationGenerator::default().generate_at(
        &GeneratorConfig::new(-5, 20, 30),
        reference_now(),
        &mut rng,
    );
    assert!(matches!(
        result,
        Err(EmployeeStatsError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_same_seed_same_population() {
    let generator = PopulationGenerator::default();
    let config = GeneratorConfig::default();

    let first = generator
        .generate_at(&config, reference_now(), &mut seeded_rng(99))
        .unwrap();
    let second = generator
        .generate_at(&config, reference_now(), &mut seeded_rng(99))
        .unwrap();
    let other = generator
        .generate_at(&config, reference_now(), &mut seeded_rng(100))
        .unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_names_match_gender_table() {
    let generator = PopulationGenerator::default();
    let population = generator
        .generate_at(&GeneratorConfig::new(200, 19, 35), reference_now(), &mut seeded_rng(5))
        .unwrap();

    for record in &population {
        let list = generator.names().for_gender(record.gender);
        assert!(list.given_names().contains(&record.given_name));
        assert!(list.family_names().contains(&record.family_name));
    }
}

#[test]
fn test_all_categories_are_drawn() {
    let population = PopulationGenerator::default()
        .generate_at(&GeneratorConfig::new(400, 19, 35), reference_now(), &mut seeded_rng(11))
        .unwrap();

    for gender in Gender::ALL {
        assert!(population.iter().any(|r| r.gender == gender), "no {gender} drawn");
    }
    for workload in Workload::ALL {
        assert!(population.iter().any(|r| r.workload == workload), "no {workload} drawn");
    }
}

#[test]
fn test_custom_anchor_keeps_ages_in_range() {
    let generator =
        PopulationGenerator::default().with_anchor(AgeWindowAnchor::new(2, 29).unwrap());
    let config = GeneratorConfig::new(300, 40, 40);
    let population = generator
        .generate_at(&config, reference_now(), &mut seeded_rng(8))
        .unwrap();

    assert!(population.iter().all(|r| r.whole_age_at(&reference_now()) == 40));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_ages_stay_in_range(
        count in 0_i64..60,
        min in 0_i32..80,
        span in 0_i32..30,
        seed in any::<u64>(),
        day_offset in 0_i64..366,
    ) {
        let config = GeneratorConfig::new(count, min, min + span);
        let now = reference_now() + chrono::Duration::days(day_offset);
        let population = PopulationGenerator::default()
            .generate_at(&config, now, &mut seeded_rng(seed))
            .unwrap();

        prop_assert_eq!(population.len() as i64, count);
        for record in &population {
            let age = record.whole_age_at(&now);
            prop_assert!(
                config.age_range.contains(age),
                "age {} outside {}..={}",
                age,
                min,
                min + span
            );
        }
    }
}
