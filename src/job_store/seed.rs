//! Demonstration dataset loaded into the store on startup.

use anyhow::{Context, Result};
use std::path::Path;

use super::models::{JobStatus, NewJob};

struct SeedJob {
    title: &'static str,
    department: &'static str,
    location: &'static str,
    qualification: &'static str,
    deadline: &'static str,
    apply_link: &'static str,
    posted_on: &'static str,
    source_url: &'static str,
    description: &'static str,
}

const DEMO_JOBS: &[SeedJob] = &[
    SeedJob {
        title: "Software Developer - Grade A",
        department: "Ministry of Electronics and IT",
        location: "New Delhi, India",
        qualification: "B.Tech/BE in Computer Science + 2 years experience",
        deadline: "Dec 15, 2025",
        apply_link: "https://ssc.nic.in/job/dev001",
        posted_on: "2 days ago",
        source_url: "https://ssc.nic.in",
        description: "Develop and maintain government software applications for digital India initiatives. Work on e-governance projects and citizen services platforms.",
    },
    SeedJob {
        title: "Medical Officer - MBBS",
        department: "Ministry of Health and Family Welfare",
        location: "Mumbai, Maharashtra",
        qualification: "MBBS degree with valid registration",
        deadline: "Nov 10, 2025",
        apply_link: "https://aiims.edu/job/med001",
        posted_on: "1 day ago",
        source_url: "https://aiims.edu",
        description: "Provide medical services in government hospitals. Work with healthcare teams to deliver quality medical care to citizens.",
    },
    SeedJob {
        title: "Income Tax Officer",
        department: "Central Board of Direct Taxes",
        location: "Bangalore, Karnataka",
        qualification: "Bachelor's degree with 60% marks",
        deadline: "Oct 25, 2025",
        apply_link: "https://incometax.gov.in/job/tax001",
        posted_on: "3 days ago",
        source_url: "https://incometax.gov.in",
        description: "Handle income tax assessments and investigations. Ensure compliance with tax laws and regulations.",
    },
    SeedJob {
        title: "Cyber Security Analyst",
        department: "Ministry of Home Affairs",
        location: "Hyderabad, Telangana",
        qualification: "B.Tech in IT/CSE + Cyber Security certification",
        deadline: "Sep 15, 2025",
        apply_link: "https://mha.gov.in/job/cyber001",
        posted_on: "1 day ago",
        source_url: "https://mha.gov.in",
        description: "Monitor and protect government digital infrastructure from cyber threats. Implement security protocols and incident response.",
    },
    SeedJob {
        title: "Education Officer",
        department: "Ministry of Education",
        location: "Chennai, Tamil Nadu",
        qualification: "Master's in Education + B.Ed degree",
        deadline: "Sep 30, 2025",
        apply_link: "https://education.gov.in/job/edu001",
        posted_on: "4 days ago",
        source_url: "https://education.gov.in",
        description: "Develop and implement education policies. Oversee government school programs and teacher training initiatives.",
    },
    SeedJob {
        title: "Railway Traffic Inspector",
        department: "Indian Railways",
        location: "Kolkata, West Bengal",
        qualification: "12th pass + Railway training certification",
        deadline: "Oct 20, 2025",
        apply_link: "https://indianrailways.gov.in/job/rail001",
        posted_on: "5 days ago",
        source_url: "https://indianrailways.gov.in",
        description: "Ensure safe railway operations and traffic management. Monitor train schedules and coordinate with station masters.",
    },
    SeedJob {
        title: "Forest Officer - IFS",
        department: "Ministry of Environment and Forests",
        location: "Dehradun, Uttarakhand",
        qualification: "Bachelor's degree + UPSC Civil Services qualification",
        deadline: "Nov 15, 2025",
        apply_link: "https://moef.gov.in/job/forest001",
        posted_on: "1 week ago",
        source_url: "https://moef.gov.in",
        description: "Protect and conserve forest resources. Implement environmental policies and wildlife conservation programs.",
    },
    SeedJob {
        title: "Bank Probationary Officer",
        department: "State Bank of India",
        location: "Pune, Maharashtra",
        qualification: "Graduate degree in any discipline",
        deadline: "Oct 18, 2025",
        apply_link: "https://sbi.co.in/job/po001",
        posted_on: "6 days ago",
        source_url: "https://sbi.co.in",
        description: "Handle banking operations and customer service. Manage loan processing and financial transactions in government bank.",
    },
];

/// The built-in dataset, identical on every start.
pub fn demo_jobs() -> Vec<NewJob> {
    DEMO_JOBS
        .iter()
        .map(|seed| NewJob {
            title: seed.title.to_string(),
            department: seed.department.to_string(),
            location: seed.location.to_string(),
            qualification: seed.qualification.to_string(),
            deadline: seed.deadline.to_string(),
            apply_link: seed.apply_link.to_string(),
            posted_on: seed.posted_on.to_string(),
            source_url: seed.source_url.to_string(),
            description: Some(seed.description.to_string()),
            status: Some(JobStatus::Active),
        })
        .collect()
}

/// Reads a JSON array of jobs to use instead of the built-in dataset.
pub fn load_seed_file(path: &Path) -> Result<Vec<NewJob>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {:?}", path))?;
    let jobs: Vec<NewJob> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file: {:?}", path))?;
    for (index, job) in jobs.iter().enumerate() {
        let blank = job.blank_fields();
        if !blank.is_empty() {
            anyhow::bail!(
                "Seed job #{} in {:?} has blank fields: {}",
                index,
                path,
                blank.join(", ")
            );
        }
    }
    Ok(jobs)
}
