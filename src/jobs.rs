use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::data_models::Job;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("input file {0} not found")]
    NotFound(PathBuf),

    #[error("failed to read input file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file {path} is not valid JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("input JSON must be an object or a list of objects")]
    InvalidShape,

    #[error("no valid jobs found in input JSON")]
    NoJobs,
}

pub fn load_jobs(path: &Path) -> Result<Vec<Job>, JobError> {
    if !path.exists() {
        return Err(JobError::NotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| JobError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: Value = serde_json::from_str(&raw).map_err(|source| JobError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let jobs = parse_jobs(payload)?;
    log::info!("Loaded {} job(s) from {}", jobs.len(), path.display());
    Ok(jobs)
}

/// Accepts a list of jobs, `{"queries": [...]}`, or a single job object.
pub fn parse_jobs(payload: Value) -> Result<Vec<Job>, JobError> {
    let entries = match payload {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("queries") {
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                map.insert("queries".to_string(), other);
                vec![Value::Object(map)]
            }
            None => vec![Value::Object(map)],
        },
        _ => return Err(JobError::InvalidShape),
    };

    let jobs: Vec<Job> = entries.iter().filter_map(normalize_job).collect();
    if jobs.is_empty() {
        return Err(JobError::NoJobs);
    }
    Ok(jobs)
}

fn normalize_job(entry: &Value) -> Option<Job> {
    let Some(object) = entry.as_object() else {
        log::warn!("Skipping non-object job entry: {entry}");
        return None;
    };

    let keyword = match object.get("keyword") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            log::warn!("Skipping job without 'keyword': {entry}");
            return None;
        }
    };

    Some(Job::new(keyword, pages_of(object.get("pages"))))
}

fn pages_of(value: Option<&Value>) -> u32 {
    let pages = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    pages.unwrap_or(1).clamp(1, u32::MAX as i64) as u32
}
