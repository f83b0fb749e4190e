//! Helpers shared by the backend's integration tests: logging setup and
//! assertions on problem+json error responses.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details, ProblemDetailsLike};
