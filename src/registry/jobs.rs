use crate::error::{LogisticsError, Result};
use crate::registry::job::{Job, JobStatus, NewJob};

/// In-memory job store with its id counter.
///
/// Jobs are kept in insertion order and looked up by linear scan.
#[derive(Debug)]
pub struct JobRegistry {
    jobs: Vec<Job>,
    next_id: i64,
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl JobRegistry {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            next_id: 1,
        }
    }

    /// Registry holding the two startup jobs, with the counter at 3.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        registry.create_job(NewJob::new(
            "Amazon SODO",
            "Bellevue Downtown",
            "Pallet of boxes",
        ));
        registry.create_job(NewJob::new(
            "Port of Seattle Terminal 18",
            "Redmond Microsoft Campus",
            "Electronics container",
        ));
        registry
    }

    /// All jobs in insertion order
    pub fn list_jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get_job(&self, id: i64) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    fn get_job_mut(&mut self, id: i64) -> Result<&mut Job> {
        self.jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(LogisticsError::JobNotFound(id))
    }

    /// Append a new `Available` job under the next id.
    pub fn create_job(&mut self, new: NewJob) -> &Job {
        let job = Job::from_submission(self.next_id, new);
        self.next_id += 1;
        self.jobs.push(job);
        &self.jobs[self.jobs.len() - 1]
    }

    /// Mark a job assigned to `driver_id`.
    ///
    /// Any prior status is overwritten and `driver_id` is not checked against
    /// the driver registry.
    pub fn assign_driver(&mut self, job_id: i64, driver_id: i64) -> Result<&Job> {
        let job = self.get_job_mut(job_id)?;
        job.status = JobStatus::Assigned;
        job.driver_id = Some(driver_id);
        Ok(job)
    }

    /// Mark a job completed regardless of its current status.
    pub fn complete_job(&mut self, job_id: i64) -> Result<&Job> {
        let job = self.get_job_mut(job_id)?;
        job.status = JobStatus::Completed;
        Ok(job)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
