pub mod driver;
pub mod drivers;
pub mod job;
pub mod jobs;

pub use driver::{Driver, NewDriver};
pub use drivers::DriverRegistry;
pub use job::{Job, JobStatus, NewJob};
pub use jobs::JobRegistry;
