//! Document models and request DTOs.
//!
//! Each entity file defines the persisted document struct plus its
//! create / update / list-query types used by the repository and API layers.

pub mod admit_card;
pub mod answer_key;
pub mod dynamic_content;
pub mod job;
pub mod job_result;
pub mod location;
pub mod status;
pub mod study_material;
