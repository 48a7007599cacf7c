//! Parameter Store
//!
//! Self-reported clinical parameters of one patient, keyed by name. A value
//! may be a number, a boolean, or absent (the measurement was not taken).

mod error;
pub mod params;
mod record;
mod store;
mod value;

pub use error::StoreError;
pub use record::{load_records, read_records, PatientRecord};
pub use store::ParameterStore;
pub use value::ParameterValue;
