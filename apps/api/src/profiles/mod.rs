// Profile reads. `GET /` serves the lowest-id profile as a placeholder read.

pub mod handlers;
pub mod queries;
