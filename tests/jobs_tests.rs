use std::io::Write;

use anyhow::Result;
use serde_json::json;

use serp_harvest::data_models::Job;
use serp_harvest::jobs::{JobError, load_jobs, parse_jobs};

#[test]
fn test_list_of_jobs() -> Result<()> {
    let jobs = parse_jobs(json!([
        {"keyword": "best restaurants in NYC", "pages": 2},
        {"keyword": "pizza"}
    ]))?;
    assert_eq!(jobs, vec![Job::new("best restaurants in NYC", 2), Job::new("pizza", 1)]);
    Ok(())
}

#[test]
fn test_queries_wrapper() -> Result<()> {
    let jobs = parse_jobs(json!({"queries": [{"keyword": "tacos", "pages": "3"}]}))?;
    assert_eq!(jobs, vec![Job::new("tacos", 3)]);
    Ok(())
}

#[test]
fn test_single_job_object() -> Result<()> {
    let jobs = parse_jobs(json!({"keyword": "ramen", "pages": 0}))?;
    assert_eq!(jobs, vec![Job::new("ramen", 1)]);
    assert_eq!(jobs[0].pages, 1);
    Ok(())
}

#[test]
fn test_invalid_entries_are_skipped() -> Result<()> {
    let jobs = parse_jobs(json!([
        "not an object",
        {"pages": 2},
        {"keyword": "   "},
        {"keyword": "bagels", "pages": -4}
    ]))?;
    assert_eq!(jobs, vec![Job::new("bagels", 1)]);
    Ok(())
}

#[test]
fn test_no_valid_jobs_is_an_error() {
    let err = parse_jobs(json!([{"pages": 1}])).unwrap_err();
    assert!(matches!(err, JobError::NoJobs));
}

#[test]
fn test_scalar_payload_is_rejected() {
    let err = parse_jobs(json!("pizza")).unwrap_err();
    assert!(matches!(err, JobError::InvalidShape));
}

#[test]
fn test_missing_file() {
    let err = load_jobs(std::path::Path::new("/no/such/input.json")).unwrap_err();
    assert!(matches!(err, JobError::NotFound(_)));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{"queries": [{{"keyword": "dumplings", "pages": 2}}]}}"#)?;

    let jobs = load_jobs(file.path())?;
    assert_eq!(jobs, vec![Job::new("dumplings", 2)]);
    Ok(())
}

#[test]
fn test_malformed_json_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{{ not json")?;

    let err = load_jobs(file.path()).unwrap_err();
    assert!(matches!(err, JobError::Json { .. }));
    Ok(())
}
