pub mod error;
pub mod profile;

pub use error::AppError;
pub use profile::{DoctorSummary, Profile};
