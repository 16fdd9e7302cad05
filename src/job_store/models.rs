//! Job record types exchanged between the store, the search engine and the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    ClosingSoon,
}

/// A stored job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub qualification: String,
    /// Free-form date-like text, parsed only at query time.
    pub deadline: String,
    pub apply_link: String,
    pub posted_on: String,
    pub source_url: String,
    pub description: Option<String>,
    pub status: Option<JobStatus>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a job. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub department: String,
    pub location: String,
    pub qualification: String,
    pub deadline: String,
    pub apply_link: String,
    pub posted_on: String,
    pub source_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

impl NewJob {
    /// Names of required fields that are blank, in declaration order.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("department", &self.department),
            ("location", &self.location),
            ("qualification", &self.qualification),
            ("deadline", &self.deadline),
            ("applyLink", &self.apply_link),
            ("postedOn", &self.posted_on),
            ("sourceUrl", &self.source_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Partial update of a job.
///
/// For `description` and `status` the outer `Option` tells whether the key was
/// present at all, so an explicit `null` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub qualification: Option<String>,
    pub deadline: Option<String>,
    pub apply_link: Option<String>,
    pub posted_on: Option<String>,
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_value")]
    pub status: Option<Option<JobStatus>>,
}

fn present_value<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl JobUpdate {
    /// Names of supplied text fields that are blank.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("department", &self.department),
            ("location", &self.location),
            ("qualification", &self.qualification),
            ("deadline", &self.deadline),
            ("applyLink", &self.apply_link),
            ("postedOn", &self.posted_on),
            ("sourceUrl", &self.source_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    /// Merges the supplied fields onto `job`. Identity and creation time are untouched.
    pub fn apply_to(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(department) = self.department {
            job.department = department;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(qualification) = self.qualification {
            job.qualification = qualification;
        }
        if let Some(deadline) = self.deadline {
            job.deadline = deadline;
        }
        if let Some(apply_link) = self.apply_link {
            job.apply_link = apply_link;
        }
        if let Some(posted_on) = self.posted_on {
            job.posted_on = posted_on;
        }
        if let Some(source_url) = self.source_url {
            job.source_url = source_url;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
    }
}
