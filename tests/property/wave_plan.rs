//! Property-based tests for wave planning

use proptest::prelude::*;
use studyplan::calendar::{SchedulerConfig, WavePlan};

/// Every week is scheduled exactly once, in ascending batch order
#[test]
fn test_plan_tiles_all_weeks_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(1u32..60, 1u32..8, 1u32..6),
            |(total_weeks, batch_size, fan_out)| {
                let config = SchedulerConfig {
                    batch_size,
                    fan_out,
                };
                let plan = WavePlan::build(total_weeks, config).unwrap();

                let weeks: Vec<u32> = plan
                    .waves
                    .iter()
                    .flatten()
                    .flat_map(|batch| batch.week_numbers())
                    .collect();
                prop_assert_eq!(weeks, (1..=total_weeks).collect::<Vec<_>>());
                prop_assert!(plan.validate().is_ok());

                Ok(())
            },
        )
        .unwrap();
}

/// Batch and wave counts follow from the policy
#[test]
fn test_plan_shape_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(1u32..60, 1u32..8, 1u32..6),
            |(total_weeks, batch_size, fan_out)| {
                let config = SchedulerConfig {
                    batch_size,
                    fan_out,
                };
                let plan = WavePlan::build(total_weeks, config).unwrap();

                let batches = total_weeks.div_ceil(batch_size) as usize;
                prop_assert_eq!(plan.total_batches(), batches);
                prop_assert_eq!(plan.total_waves(), batches.div_ceil(fan_out as usize));
                for wave in &plan.waves {
                    prop_assert!(!wave.is_empty());
                    prop_assert!(wave.len() <= fan_out as usize);
                    for batch in wave {
                        prop_assert!(batch.count >= 1 && batch.count <= batch_size);
                    }
                }

                // Only the final wave may be short.
                let sizes = plan.wave_sizes();
                let full = config.wave_size();
                for size in &sizes[..sizes.len() - 1] {
                    prop_assert_eq!(*size, full);
                }
                prop_assert_eq!(sizes.iter().sum::<u32>(), total_weeks);

                Ok(())
            },
        )
        .unwrap();
}
