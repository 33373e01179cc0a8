//! GraphQL documents for the repeater.dev API.
//!
//! Each document requests exactly the fields the domain types parse.

use crate::clients::Operation;

/// Lists every job.
pub const JOBS: Operation = Operation {
    name: "JobsQuery",
    root: "jobs",
    document: r"
  query JobsQuery {
    jobs {
      name
      enabled
      body
      endpoint
      verb
      headers
      retryable
      runAt
      runEvery
      createdAt
      updatedAt
      lastRunAt
      nextRunAt
    }
  }
",
};

/// Fetches one job by name.
pub const JOB: Operation = Operation {
    name: "JobQuery",
    root: "job",
    document: r"
  query JobQuery($name: String!) {
    job(name: $name) {
      name
      enabled
      body
      endpoint
      verb
      headers
      retryable
      runAt
      runEvery
      createdAt
      updatedAt
      lastRunAt
      nextRunAt
    }
  }
",
};

/// Creates a job.
pub const CREATE: Operation = Operation {
    name: "CreateJobMutation",
    root: "createJob",
    document: r"
  mutation CreateJobMutation(
    $name: String!,
    $enabled: Boolean!,
    $endpoint: String!,
    $verb: String!,
    $headers: String,
    $body: String,
    $retryable: Boolean!,
    $runAt: String!,
    $runEvery: String
  ) {
    createJob(
      name: $name,
      enabled: $enabled,
      endpoint: $endpoint,
      verb: $verb,
      headers: $headers,
      body: $body,
      retryable: $retryable,
      runAt: $runAt,
      runEvery: $runEvery
    ) {
      name
      enabled
      body
      endpoint
      verb
      headers
      retryable
      runAt
      runEvery
      createdAt
      updatedAt
      lastRunAt
      nextRunAt
    }
  }
",
};

/// Updates a job by name. Only the variables present are changed.
pub const UPDATE: Operation = Operation {
    name: "UpdateJobMutation",
    root: "updateJob",
    document: r"
  mutation UpdateJobMutation(
    $name: String!,
    $enabled: Boolean,
    $endpoint: String,
    $verb: String,
    $headers: String,
    $body: String,
    $retryable: Boolean,
    $runAt: String,
    $runEvery: String
  ) {
    updateJob(
      name: $name,
      enabled: $enabled,
      endpoint: $endpoint,
      verb: $verb,
      headers: $headers,
      body: $body,
      retryable: $retryable,
      runAt: $runAt,
      runEvery: $runEvery
    ) {
      name
      enabled
      body
      endpoint
      verb
      headers
      retryable
      runAt
      runEvery
      createdAt
      updatedAt
      lastRunAt
      nextRunAt
    }
  }
",
};

/// Deletes a job by name.
pub const DELETE: Operation = Operation {
    name: "DeleteJobMutation",
    root: "deleteJob",
    document: r"
  mutation DeleteJobMutation($name: String!) {
    deleteJob(name: $name) {
      name
    }
  }
",
};

/// Lists the recorded executions of a job.
pub const RESULTS: Operation = Operation {
    name: "JobResultsQuery",
    root: "jobResults",
    document: r"
  query JobResultsQuery($jobName: String!) {
    jobResults(jobName: $jobName) {
      status
      headers
      body
      runAt
      run
      duration
      createdAt
      updatedAt
    }
  }
",
};
