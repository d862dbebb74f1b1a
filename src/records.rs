//! Input records handed over by the data source
//!
//! Records are immutable once built and carry no layout state; the layout
//! engine derives positioned copies on every call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An experiment spanning an inclusive range of calendar days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentRecord {
    id: String,
    name: String,
    #[serde(default)]
    url: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    stage: String,
}

impl ExperimentRecord {
    /// Create an experiment with the required fields.
    ///
    /// `end_date` before `start_date` is accepted; the layout engine clamps it.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        ExperimentRecordBuilder::new(id, name, start_date, end_date).build()
    }

    /// Create a builder for setting the optional fields.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ExperimentRecordBuilder {
        ExperimentRecordBuilder::new(id, name, start_date, end_date)
    }

    /// Get the record ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the link to the source document (may be empty).
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the first day of the experiment.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Get the last day of the experiment (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Get the free-text stage.
    #[must_use]
    pub fn stage(&self) -> &str {
        &self.stage
    }
}

/// Builder for `ExperimentRecord`.
#[derive(Debug)]
pub struct ExperimentRecordBuilder {
    record: ExperimentRecord,
}

impl ExperimentRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            record: ExperimentRecord {
                id: id.into(),
                name: name.into(),
                url: String::new(),
                start_date,
                end_date,
                stage: String::new(),
            },
        }
    }

    /// Set the source document link.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.record.url = url.into();
        self
    }

    /// Set the free-text stage.
    #[must_use]
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.record.stage = stage.into();
        self
    }

    /// Build the `ExperimentRecord`.
    #[must_use]
    pub fn build(self) -> ExperimentRecord {
        self.record
    }
}

/// A release shipped on a single calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    id: String,
    name: String,
    #[serde(default)]
    url: String,
    date: NaiveDate,
    #[serde(default)]
    platform: String,
    #[serde(default)]
    status: String,
}

impl ReleaseRecord {
    /// Create a release with the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        ReleaseRecordBuilder::new(id, name, date).build()
    }

    /// Create a builder for setting the optional fields.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDate,
    ) -> ReleaseRecordBuilder {
        ReleaseRecordBuilder::new(id, name, date)
    }

    /// Get the record ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the release name, e.g. `"Growth Backend 2.3.1 rollout"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the link to the source document (may be empty).
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the release day.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the free-text platform.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Get the free-text status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Builder for `ReleaseRecord`.
#[derive(Debug)]
pub struct ReleaseRecordBuilder {
    record: ReleaseRecord,
}

impl ReleaseRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            record: ReleaseRecord {
                id: id.into(),
                name: name.into(),
                url: String::new(),
                date,
                platform: String::new(),
                status: String::new(),
            },
        }
    }

    /// Set the source document link.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.record.url = url.into();
        self
    }

    /// Set the free-text platform.
    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.record.platform = platform.into();
        self
    }

    /// Set the free-text status.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.record.status = status.into();
        self
    }

    /// Build the `ReleaseRecord`.
    #[must_use]
    pub fn build(self) -> ReleaseRecord {
        self.record
    }
}

/// One fetch worth of timeline input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineData {
    /// Experiments in source order
    #[serde(default)]
    pub experiments: Vec<ExperimentRecord>,
    /// Releases in source order
    #[serde(default)]
    pub releases: Vec<ReleaseRecord>,
    /// First visible day; `None` lets the caller derive one from config
    #[serde(default)]
    pub window_start: Option<NaiveDate>,
}
