use crate::error::PlannerError;
use serde::{Deserialize, Serialize};

/// Wave scheduler policy: weeks per call and calls per wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    #[serde(default = "default_fan_out")]
    pub fan_out: u32,
}

fn default_batch_size() -> u32 {
    2
}

fn default_fan_out() -> u32 {
    2
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            fan_out: default_fan_out(),
        }
    }
}

impl SchedulerConfig {
    pub fn wave_size(&self) -> u32 {
        self.batch_size.saturating_mul(self.fan_out)
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.batch_size == 0 {
            return Err(PlannerError::InvalidInput(
                "Scheduler batch_size must be at least 1".to_string(),
            ));
        }
        if self.fan_out == 0 {
            return Err(PlannerError::InvalidInput(
                "Scheduler fan_out must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One generation call: `count` consecutive weeks starting at `start_week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSpec {
    pub start_week: u32,
    pub count: u32,
}

impl BatchSpec {
    pub fn week_numbers(&self) -> impl Iterator<Item = u32> {
        self.start_week..self.start_week + self.count
    }

    pub fn end_week(&self) -> u32 {
        self.start_week + self.count.saturating_sub(1)
    }
}

/// Weeks `1..=total_weeks` split into batches, grouped into waves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavePlan {
    pub total_weeks: u32,
    pub waves: Vec<Vec<BatchSpec>>,
}

impl WavePlan {
    pub fn build(total_weeks: u32, config: SchedulerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        if total_weeks == 0 {
            return Err(PlannerError::InvalidInput(
                "Cannot schedule a calendar with zero weeks".to_string(),
            ));
        }

        let mut batches = Vec::new();
        let mut start_week = 1;
        while start_week <= total_weeks {
            let count = config.batch_size.min(total_weeks - start_week + 1);
            batches.push(BatchSpec { start_week, count });
            start_week += count;
        }

        let waves = batches
            .chunks(config.fan_out as usize)
            .map(<[BatchSpec]>::to_vec)
            .collect();
        let plan = Self { total_weeks, waves };
        plan.validate()?;
        Ok(plan)
    }

    pub fn total_waves(&self) -> usize {
        self.waves.len()
    }

    pub fn total_batches(&self) -> usize {
        self.waves.iter().map(Vec::len).sum()
    }

    /// Number of weeks covered by each wave, in order.
    pub fn wave_sizes(&self) -> Vec<u32> {
        self.waves
            .iter()
            .map(|wave| wave.iter().map(|batch| batch.count).sum())
            .collect()
    }

    /// Batches must tile `1..=total_weeks` contiguously with no empty wave.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.waves.iter().any(Vec::is_empty) {
            return Err(PlannerError::InvalidInput(
                "Wave plan contains an empty wave".to_string(),
            ));
        }
        let mut expected = 1;
        for batch in self.waves.iter().flatten() {
            if batch.count == 0 || batch.start_week != expected {
                return Err(PlannerError::InvalidInput(format!(
                    "Wave plan batch at week {} is not contiguous (expected week {})",
                    batch.start_week, expected
                )));
            }
            expected += batch.count;
        }
        if expected != self.total_weeks + 1 {
            return Err(PlannerError::InvalidInput(format!(
                "Wave plan covers {} weeks, expected {}",
                expected - 1,
                self.total_weeks
            )));
        }
        Ok(())
    }
}
