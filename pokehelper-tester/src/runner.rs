use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenarios::{Scenario, ScenarioCtx};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_micros")]
    pub average_duration: Duration,
}

pub struct ScenarioRunner {
    verbose: bool,
}

impl ScenarioRunner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run(&self, scenario: &Scenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.key.bright_white());
        }
        let mut failures = Vec::new();
        let mut timings = Vec::with_capacity(iterations);
        for iteration in 0..iterations {
            let ctx = ScenarioCtx::new(iteration, self.verbose);
            let started = Instant::now();
            let outcome = (scenario.run)(&ctx);
            timings.push(started.elapsed());
            if let Err(err) = outcome {
                log::debug!("{} iteration {iteration} failed: {err:#}", scenario.key);
                failures.push(format!("iteration {iteration}: {err:#}"));
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.key.to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: iterations - failures.len(),
            failures,
            average_duration,
        }
    }
}

mod duration_micros {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn failing(ctx: &ScenarioCtx) -> anyhow::Result<()> {
        if ctx.iteration % 2 == 1 {
            bail!("odd iteration");
        }
        Ok(())
    }

    #[test]
    fn failures_are_counted_per_iteration() {
        let scenario = Scenario {
            key: "flaky",
            description: "fails on odd iterations",
            run: failing,
        };
        let result = ScenarioRunner::new(false).run(&scenario, 4);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 2);
        assert_eq!(result.failures, vec!["iteration 1: odd iteration", "iteration 3: odd iteration"]);
    }

    #[test]
    fn results_serialize_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "smoke".into(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(2),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 2_000);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.average_duration, Duration::from_millis(2));
    }
}
