use std::time::{Duration, Instant};

use log::info;
use uuid::Uuid;

use crate::GeneratorError;

use super::{build_name, step::Step};

/// Result alias for job execution.
pub type JobResult<T> = Result<T, GeneratorError>;

/// A runnable generation job: an ordered sequence of steps.
pub trait Job {
    fn run(&self) -> JobResult<JobExecution>;
}

/// Timing details of a completed job run.
#[derive(Debug)]
pub struct JobExecution {
    pub start: Instant,
    pub end: Instant,
    pub duration: Duration,
}

/// A concrete job: a named, identified sequence of steps executed in order.
///
/// The first failing step aborts the job; its name is carried in the
/// returned [`GeneratorError::Step`].
pub struct JobInstance<'a> {
    id: Uuid,
    name: String,
    steps: Vec<&'a dyn Step>,
}

impl Job for JobInstance<'_> {
    fn run(&self) -> JobResult<JobExecution> {
        let start = Instant::now();

        info!("start of job: {}, id: {}", self.name, self.id);

        for step in &self.steps {
            let execution = step
                .execute()
                .map_err(|_| GeneratorError::Step(step.name().to_owned()))?;

            info!(
                "step {} done: read {} items, wrote {} items",
                step.name(),
                execution.read_count,
                execution.write_count
            );
        }

        info!("end of job: {}, id: {}", self.name, self.id);

        Ok(JobExecution {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
        })
    }
}

/// Builder for [`JobInstance`].
#[derive(Default)]
pub struct JobBuilder<'a> {
    name: Option<String>,
    steps: Vec<&'a dyn Step>,
}

impl<'a> JobBuilder<'a> {
    pub fn new() -> Self {
        Self {
            name: None,
            steps: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> JobBuilder<'a> {
        self.name = Some(name.into());
        self
    }

    /// Sets the first step of the job. Identical to [`next`](Self::next),
    /// reads better for the opening step.
    pub fn start(mut self, step: &'a dyn Step) -> JobBuilder<'a> {
        self.steps.push(step);
        self
    }

    pub fn next(mut self, step: &'a dyn Step) -> JobBuilder<'a> {
        self.steps.push(step);
        self
    }

    pub fn build(self) -> JobInstance<'a> {
        JobInstance {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(build_name),
            steps: self.steps,
        }
    }
}
