use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Convert,
    Aggregate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Validate => "validate_dimensions",
            Stage::Convert => "convert_colorspaces",
            Stage::Aggregate => "aggregate_moments",
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct StageTimings {
    stages: Vec<(Stage, Duration)>,
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `step` and records how long it took under `stage`.
    pub fn time<T>(&mut self, stage: Stage, step: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = step();
        self.stages.push((stage, start.elapsed()));
        out
    }

    pub fn get(&self, stage: Stage) -> Option<Duration> {
        self.stages
            .iter()
            .filter(|(s, _)| *s == stage)
            .map(|(_, d)| *d)
            .reduce(|a, b| a + b)
    }

    pub fn stages(&self) -> &[(Stage, Duration)] {
        &self.stages
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, d)| *d).sum()
    }

    pub fn log_summary(&self) {
        let total = self.total().as_secs_f64();
        for (stage, duration) in &self.stages {
            let share = if total > 0.0 {
                duration.as_secs_f64() / total * 100.0
            } else {
                0.0
            };
            info!(%stage, ms = duration.as_secs_f64() * 1000.0, share, "stage timing");
        }
        info!(ms = total * 1000.0, "total");
    }
}
