//! # Repeater Rust SDK
//!
//! An async Rust SDK for [repeater.dev](https://repeater.dev), a service that
//! calls HTTP endpoints on a schedule.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`RepeaterConfig`] and [`RepeaterConfigBuilder`]
//! - Validated newtypes for the API token and endpoint
//! - Pre-flight validation of job parameters, reported as [`RepeaterError::Parameter`]
//! - Normalization of loose [`JobParams`] into GraphQL variables
//! - [`Job`] and [`JobResult`] domain objects that update, delete and navigate
//!   themselves
//! - A single root error type, [`RepeaterError`], with one variant per failing
//!   operation
//!
//! ## Quick Start
//!
//! ```rust
//! use repeater::{Repeater, RepeaterOptions};
//!
//! let _client = Repeater::new("your-api-token", None).unwrap();
//!
//! // Point the client somewhere else, and carry extra options along
//! let _client = Repeater::new(
//!     "your-api-token",
//!     Some(
//!         RepeaterOptions::default()
//!             .endpoint("http://localhost:3000/graphql")
//!             .extra("team", "ops"),
//!     ),
//! )
//! .unwrap();
//! ```
//!
//! ## Scheduling a Job
//!
//! ```rust,ignore
//! use repeater::{JobParams, Repeater};
//! use serde_json::json;
//!
//! let client = Repeater::new("your-api-token", None)?;
//!
//! // One-shot job, runs now
//! let job = client
//!     .enqueue(
//!         &JobParams::default()
//!             .name("warm-cache")
//!             .verb("get")
//!             .endpoint("https://example.com/cache/warm"),
//!     )
//!     .await?;
//!
//! // Recurring job with a JSON body
//! let job = client
//!     .enqueue(
//!         &JobParams::default()
//!             .name("nightly-report")
//!             .verb("post")
//!             .endpoint("https://example.com/hooks/report")
//!             .json(json!({"kind": "nightly"}))
//!             .run_every("P1D"),
//!     )
//!     .await?;
//! ```
//!
//! ## Managing Jobs
//!
//! ```rust,ignore
//! use repeater::{JobParams, Repeater};
//!
//! let client = Repeater::new("your-api-token", None)?;
//!
//! for job in client.jobs().await? {
//!     println!("{} next runs at {:?}", job.name(), job.next_run_at());
//! }
//!
//! if let Some(mut job) = client.job("nightly-report").await? {
//!     job.update(&JobParams::default().run_every("PT12H")).await?;
//!
//!     for result in job.results().await? {
//!         println!("run {:?}: HTTP {:?}", result.run(), result.status());
//!     }
//!
//!     job.delete().await?;
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use repeater::{ErrorKind, JobParams, Repeater};
//!
//! match client.enqueue(&JobParams::default().name("x")).await {
//!     Ok(job) => println!("created {}", job.name()),
//!     Err(error) if error.kind() == ErrorKind::Parameter => {
//!         eprintln!("fix your input: {error}");
//!     }
//!     Err(error) => eprintln!("remote failure: {error}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events (`debug` per request, `warn` for server
//! fields it cannot parse). It never installs a subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Invalid input is rejected before any request
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Every request is attempted exactly once

pub mod clients;
pub mod config;
pub mod error;
pub mod params;
pub mod queries;
mod repeater;
pub mod types;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, Endpoint, RepeaterConfig, RepeaterConfigBuilder, RepeaterOptions, API_ENDPOINT,
};
pub use error::{ConfigError, ErrorKind, RepeaterError};
pub use repeater::Repeater;

// Re-export domain and parameter types
pub use params::{Headers, JobParams, RunAt, Verb};
pub use types::{ApplyMode, Job, JobResult};

// Re-export transport types
pub use clients::{GraphqlClient, GraphqlError, HttpError};
