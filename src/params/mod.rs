//! Caller options and the pipeline that turns them into request variables.
//!
//! Every public operation that sends job fields runs them through the
//! same two steps: [`validate`] (fail fast, one error at a time) and then
//! [`normalize`] (defaults, verb casing, body/json resolution, header
//! serialization). Updates use [`validate_update`] and [`normalize_update`],
//! which inject no defaults.
//!
//! # Example
//!
//! ```rust
//! use repeater::params::{normalize, validate};
//! use repeater::JobParams;
//!
//! let params = JobParams::default()
//!     .name("ping")
//!     .verb("get")
//!     .endpoint("https://example.com/ping");
//!
//! validate(&params).unwrap();
//! let variables = normalize(&params);
//! assert_eq!(variables["verb"], "GET");
//! assert_eq!(variables["enabled"], true);
//! ```

mod duration;
mod job_params;
mod merge;
mod normalize;
mod validate;
mod verb;

pub use duration::{Duration, DurationParseError};
pub use job_params::{format_timestamp, Headers, JobParams, RunAt};
pub use merge::merge;
pub use normalize::{normalize, normalize_at, normalize_update};
pub use validate::{
    validate, validate_update, DATE_FORMAT, DURATION_FORMAT, HEADERS_FORMAT, REQUIRED,
    URL_FORMAT,
};
pub use verb::{UnknownVerb, Verb};
