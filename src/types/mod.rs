//! Domain objects wrapping server state.
//!
//! - [`Job`]: a scheduled HTTP callback, able to update, delete and list
//!   its own results
//! - [`JobResult`]: one recorded execution of a job
//! - [`JobRecord`] and [`JobResultRecord`]: the raw server records both are
//!   parsed from
//! - [`ApplyMode`]: how a server record is applied to an existing [`Job`]

mod job;
mod job_result;
pub(crate) mod record;

pub use job::Job;
pub use job_result::JobResult;
pub use record::{JobRecord, JobResultRecord};

/// How a server record is applied to an existing [`Job`].
///
/// Construction from a full record always uses [`ApplyMode::Replace`].
/// After [`Job::update`] the mode comes from
/// [`RepeaterConfig::update_mode`](crate::RepeaterConfig::update_mode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApplyMode {
    /// Fields the record does not carry keep their previous value.
    #[default]
    Merge,
    /// The record is authoritative; fields it does not carry become `None`.
    Replace,
}

impl ApplyMode {
    /// Writes `value` into `slot` according to this mode.
    pub(crate) fn assign<T>(self, slot: &mut Option<T>, value: Option<T>) {
        match (self, value) {
            (Self::Merge, None) => {}
            (_, value) => *slot = value,
        }
    }
}
