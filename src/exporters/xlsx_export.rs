use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use super::ensure_parent;
use crate::data_models::{OrganicEntry, ParsedRecord};

pub const SHEET_NAME: &str = "Organic Results";

pub const XLSX_HEADERS: [&str; 10] = [
    "Keyword",
    "Page",
    "Title",
    "URL",
    "Description",
    "RelatedQueriesCount",
    "PeopleAlsoAskCount",
    "ImagesCount",
    "VideosCount",
    "NewsCount",
];

/// One sheet row: an organic result plus the other sections' entry counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganicSummaryRow {
    pub keyword: String,
    pub page_number: u32,
    pub title: String,
    pub url: String,
    pub description: String,
    pub related_queries: usize,
    pub people_also_ask: usize,
    pub images: usize,
    pub videos: usize,
    pub news: usize,
}

/// One row per organic result, annotated with how many entries the other
/// sections of the same page had. Pages without organic results still get a
/// row so their counts are not lost.
pub fn organic_summary_rows(record: &ParsedRecord) -> Vec<OrganicSummaryRow> {
    let summary = record.summary();
    let row = |item: &OrganicEntry| OrganicSummaryRow {
        keyword: record.keyword.clone(),
        page_number: record.page_number,
        title: item.title.clone(),
        url: item.url.clone(),
        description: item.description.clone(),
        related_queries: summary.related_queries,
        people_also_ask: summary.people_also_ask,
        images: summary.images,
        videos: summary.videos,
        news: summary.news,
    };

    if record.organic_results.is_empty() {
        return vec![row(&OrganicEntry::default())];
    }
    record.organic_results.iter().map(row).collect()
}

pub fn export_to_xlsx(records: &[ParsedRecord], path: &Path) -> Result<()> {
    ensure_parent(path)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in XLSX_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    let mut row: u32 = 1;
    for item in records.iter().flat_map(organic_summary_rows) {
        sheet.write_string(row, 0, item.keyword.as_str())?;
        sheet.write_number(row, 1, item.page_number as f64)?;
        sheet.write_string(row, 2, item.title.as_str())?;
        sheet.write_string(row, 3, item.url.as_str())?;
        sheet.write_string(row, 4, item.description.as_str())?;
        let counts = [
            item.related_queries,
            item.people_also_ask,
            item.images,
            item.videos,
            item.news,
        ];
        for (offset, count) in counts.iter().enumerate() {
            sheet.write_number(row, 5 + offset as u16, *count as f64)?;
        }
        row += 1;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to export XLSX to {}", path.display()))?;
    log::info!("XLSX export completed: {} ({} rows)", path.display(), row - 1);
    Ok(())
}
