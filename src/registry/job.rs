use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Available,
    Assigned,
    Completed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Available => write!(f, "available"),
            JobStatus::Assigned => write!(f, "assigned"),
            JobStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A freight movement request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: i64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub load_description: String,
    pub status: JobStatus,
    pub driver_id: Option<i64>,
    pub weight: Option<String>,
    pub equipment_type: Option<String>,
    pub delivery_window: Option<String>,
    pub contact_phone: Option<String>,
    pub price_offered: Option<f64>,
}

/// Fields a shipper submits when posting a job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewJob {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub load_description: String,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub equipment_type: Option<String>,
    #[serde(default)]
    pub delivery_window: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub price_offered: Option<f64>,
}

impl NewJob {
    pub fn new(
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        load_description: impl Into<String>,
    ) -> Self {
        Self {
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            load_description: load_description.into(),
            ..Default::default()
        }
    }
}

impl Job {
    /// Build an unassigned job from a submission. Status is always `Available`.
    pub fn from_submission(id: i64, new: NewJob) -> Self {
        Self {
            id,
            pickup_location: new.pickup_location,
            dropoff_location: new.dropoff_location,
            load_description: new.load_description,
            status: JobStatus::Available,
            driver_id: None,
            weight: new.weight,
            equipment_type: new.equipment_type,
            delivery_window: new.delivery_window,
            contact_phone: new.contact_phone,
            price_offered: new.price_offered,
        }
    }
}
