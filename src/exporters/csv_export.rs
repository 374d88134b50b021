use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::ensure_parent;
use crate::data_models::ParsedRecord;

pub const CSV_FIELDS: [&str; 7] = [
    "keyword",
    "pageNumber",
    "resultType",
    "title",
    "url",
    "description",
    "extra",
];

/// One flattened entry of any section.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CsvRow {
    pub keyword: String,
    pub page_number: u32,
    pub result_type: &'static str,
    pub title: String,
    pub url: String,
    pub description: String,
    pub extra: String,
}

/// Every entry of every section as its own row, sections in record order.
pub fn flatten_record(record: &ParsedRecord) -> Vec<CsvRow> {
    let mut rows = Vec::new();
    let mut add = |result_type: &'static str, title: &str, url: &str, description: &str, extra: String| {
        rows.push(CsvRow {
            keyword: record.keyword.clone(),
            page_number: record.page_number,
            result_type,
            title: title.to_string(),
            url: url.to_string(),
            description: description.to_string(),
            extra,
        })
    };

    for item in &record.organic_results {
        add("organic", &item.title, &item.url, &item.description, String::new());
    }
    for item in &record.related_queries {
        add("related_query", &item.text, &item.url, "", String::new());
    }
    for item in &record.people_also_ask {
        add("people_also_ask", &item.question, "", &item.answer, String::new());
    }
    for item in &record.images {
        add("image", "", &item.url, &item.description, String::new());
    }
    for item in &record.videos {
        let extra = format!(
            "views={};channel={};provider={}",
            item.views, item.channel, item.provider
        );
        add("video", &item.title, &item.url, "", extra);
    }
    for item in &record.news {
        add("news", &item.headline, &item.url, "", format!("source={}", item.source));
    }
    if let Some(wiki) = &record.knowledge_panel {
        add("wiki", &wiki.title, &wiki.url, &wiki.description, String::new());
    }

    rows
}

pub fn export_to_csv(records: &[ParsedRecord], path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to export CSV to {}", path.display()))?;

    writer.write_record(CSV_FIELDS)?;
    let mut count = 0;
    for row in records.iter().flat_map(flatten_record) {
        writer.serialize(&row)?;
        count += 1;
    }
    writer.flush()?;

    log::info!("CSV export completed: {} ({} rows)", path.display(), count);
    Ok(())
}
