//! Job source backed by canned HTML shaped like real government job boards.

use async_trait::async_trait;
use regex::Regex;

use super::{JobSource, ScrapeError};
use crate::job_store::{JobStatus, NewJob};

/// Text pulled out of one listing block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFields {
    pub title: String,
    pub department: String,
    pub location: String,
    pub qualification: String,
    pub deadline: String,
    pub apply_link: String,
}

/// Markup of a job board: where each listing starts and where each field sits.
/// Every pattern must have one capture group around the value.
pub struct SiteLayout {
    pub listing_marker: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub qualification: &'static str,
    pub deadline: &'static str,
    pub apply_link: &'static str,
    pub describe: fn(&ListingFields) -> String,
}

pub const USAJOBS_LAYOUT: SiteLayout = SiteLayout {
    listing_marker: r#"<div class="job-listing">"#,
    title: r"<h2>(.*?)</h2>",
    department: r#"<div class="department">(.*?)</div>"#,
    location: r#"<div class="location">(.*?)</div>"#,
    qualification: r#"<div class="qualification">(.*?)</div>"#,
    deadline: r#"<div class="deadline">(.*?)</div>"#,
    apply_link: r#"<a class="apply-link" href="(.*?)">"#,
    describe: describe_usajobs_listing,
};

pub const OPM_LAYOUT: SiteLayout = SiteLayout {
    listing_marker: r#"<div class="position">"#,
    title: r"<h3>(.*?)</h3>",
    department: r#"<span class="org">(.*?)</span>"#,
    location: r#"<span class="loc">(.*?)</span>"#,
    qualification: r#"<span class="quals">(.*?)</span>"#,
    deadline: r#"<span class="due">(.*?)</span>"#,
    apply_link: r#"<a class="link" href="(.*?)">"#,
    describe: describe_opm_listing,
};

fn describe_usajobs_listing(f: &ListingFields) -> String {
    format!(
        "Join {} as a {}. This is an excellent opportunity to serve the public in a meaningful role.",
        f.department, f.title
    )
}

fn describe_opm_listing(f: &ListingFields) -> String {
    format!(
        "Opportunity to work with {} in {}. We are looking for qualified candidates to fill this {} position.",
        f.department, f.location, f.title
    )
}

const USAJOBS_HTML: &str = r#"
    <div class="job-listing">
      <h2>Data Scientist</h2>
      <div class="department">Department of Commerce</div>
      <div class="location">Seattle, WA</div>
      <div class="qualification">PhD in Statistics or Data Science</div>
      <div class="deadline">Jan 15, 2025</div>
      <a class="apply-link" href="https://usajobs.gov/job/DS001">Apply Now</a>
    </div>
    <div class="job-listing">
      <h2>Legal Advisor</h2>
      <div class="department">Department of Justice</div>
      <div class="location">Boston, MA</div>
      <div class="qualification">JD and Bar Admission</div>
      <div class="deadline">Dec 25, 2024</div>
      <a class="apply-link" href="https://usajobs.gov/job/LA002">Apply Now</a>
    </div>
"#;

const OPM_HTML: &str = r#"
    <div class="position">
      <h3>Human Resources Manager</h3>
      <span class="org">Office of Personnel Management</span>
      <span class="loc">Phoenix, AZ</span>
      <span class="quals">Master's in HR Management</span>
      <span class="due">Jan 10, 2025</span>
      <a class="link" href="https://opm.gov/job/HR001">View Details</a>
    </div>
"#;

struct FieldPatterns {
    title: Regex,
    department: Regex,
    location: Regex,
    qualification: Regex,
    deadline: Regex,
    apply_link: Regex,
}

pub struct MockSiteSource {
    url: String,
    html: String,
    listing_marker: &'static str,
    patterns: FieldPatterns,
    describe: fn(&ListingFields) -> String,
}

impl MockSiteSource {
    pub fn new(
        url: impl Into<String>,
        html: impl Into<String>,
        layout: &SiteLayout,
    ) -> Result<MockSiteSource, ScrapeError> {
        Ok(MockSiteSource {
            url: url.into(),
            html: html.into(),
            listing_marker: layout.listing_marker,
            patterns: FieldPatterns {
                title: Regex::new(layout.title)?,
                department: Regex::new(layout.department)?,
                location: Regex::new(layout.location)?,
                qualification: Regex::new(layout.qualification)?,
                deadline: Regex::new(layout.deadline)?,
                apply_link: Regex::new(layout.apply_link)?,
            },
            describe: layout.describe,
        })
    }

    pub fn usajobs() -> Result<MockSiteSource, ScrapeError> {
        MockSiteSource::new("https://usajobs.gov", USAJOBS_HTML, &USAJOBS_LAYOUT)
    }

    pub fn opm() -> Result<MockSiteSource, ScrapeError> {
        MockSiteSource::new("https://opm.gov", OPM_HTML, &OPM_LAYOUT)
    }

    fn parse_listing(&self, block: &str) -> Option<ListingFields> {
        let extract = |pattern: &Regex| -> Option<String> {
            let value = pattern.captures(block)?.get(1)?.as_str().trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Some(ListingFields {
            title: extract(&self.patterns.title)?,
            department: extract(&self.patterns.department)?,
            location: extract(&self.patterns.location)?,
            qualification: extract(&self.patterns.qualification)?,
            deadline: extract(&self.patterns.deadline)?,
            apply_link: extract(&self.patterns.apply_link)?,
        })
    }

    /// Parses every complete listing in the page. Incomplete ones are skipped.
    pub fn parse(&self) -> Vec<NewJob> {
        self.html
            .split(self.listing_marker)
            .skip(1)
            .filter_map(|block| self.parse_listing(block))
            .map(|fields| NewJob {
                description: Some((self.describe)(&fields)),
                title: fields.title,
                department: fields.department,
                location: fields.location,
                qualification: fields.qualification,
                deadline: fields.deadline,
                apply_link: fields.apply_link,
                posted_on: "Today".to_string(),
                source_url: self.url.clone(),
                status: Some(JobStatus::Active),
            })
            .collect()
    }
}

#[async_trait]
impl JobSource for MockSiteSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<NewJob>, ScrapeError> {
        Ok(self.parse())
    }
}
