//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mongodb::Database` as the first argument. Every method performs
//! exactly one round trip; there is no caching and no retry logic.

pub mod admit_card_repo;
pub mod answer_key_repo;
pub mod dynamic_content_repo;
pub mod job_repo;
pub mod job_result_repo;
pub mod location_repo;
pub mod study_material_repo;

pub use admit_card_repo::AdmitCardRepo;
pub use answer_key_repo::AnswerKeyRepo;
pub use dynamic_content_repo::DynamicContentRepo;
pub use job_repo::JobRepo;
pub use job_result_repo::JobResultRepo;
pub use location_repo::{CityRepo, StateRepo};
pub use study_material_repo::StudyMaterialRepo;
