//! Image, video and news carousels.
//!
//! All three share one shape: a container matched from several known markup
//! variants, a required link inside it, and optional fields looked up through
//! their own variant tables. Containers without a link are skipped.

use scraper::{ElementRef, Html};

use super::patterns::{
    IMAGE_CONTAINERS, LINK, NEWS_CONTAINERS, NEWS_SOURCE, Patterns, VIDEO_CHANNEL,
    VIDEO_CONTAINERS, VIDEO_PROVIDER, VIDEO_VIEWS,
};
use super::{
    ExtractionError, Section, SectionExtractor, attr_or_empty, non_blank_attr, normalized_text,
};
use crate::data_models::{ImageEntry, NewsEntry, VideoEntry};

/// Pairs every container with its first link, dropping linkless containers.
fn linked_containers<'a>(
    document: &'a Html,
    containers: Patterns,
) -> Result<Vec<(ElementRef<'a>, ElementRef<'a>)>, ExtractionError> {
    let mut linked = Vec::new();
    for container in containers.all(document)? {
        if let Some(link) = LINK.first_in(container)? {
            linked.push((container, link));
        }
    }
    Ok(linked)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageExtractor;

impl SectionExtractor for ImageExtractor {
    type Output = Vec<ImageEntry>;

    fn section(&self) -> Section {
        Section::Images
    }

    fn extract(&self, document: &Html) -> Result<Vec<ImageEntry>, ExtractionError> {
        let mut images = Vec::new();
        for (container, link) in linked_containers(document, IMAGE_CONTAINERS)? {
            images.push(ImageEntry {
                url: attr_or_empty(Some(link), "href"),
                description: non_blank_attr(link, "title")
                    .unwrap_or_else(|| normalized_text(container)),
            });
        }
        log::debug!("Extracted {} image entries", images.len());
        Ok(images)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VideoExtractor;

impl SectionExtractor for VideoExtractor {
    type Output = Vec<VideoEntry>;

    fn section(&self) -> Section {
        Section::Videos
    }

    fn extract(&self, document: &Html) -> Result<Vec<VideoEntry>, ExtractionError> {
        let mut videos = Vec::new();
        for (container, link) in linked_containers(document, VIDEO_CONTAINERS)? {
            videos.push(VideoEntry {
                url: attr_or_empty(Some(link), "href"),
                title: non_blank_attr(link, "title").unwrap_or_else(|| normalized_text(link)),
                views: VIDEO_VIEWS.text_in(container)?,
                channel: VIDEO_CHANNEL.text_in(container)?,
                provider: VIDEO_PROVIDER.text_in(container)?,
            });
        }
        log::debug!("Extracted {} video entries", videos.len());
        Ok(videos)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NewsExtractor;

impl SectionExtractor for NewsExtractor {
    type Output = Vec<NewsEntry>;

    fn section(&self) -> Section {
        Section::News
    }

    fn extract(&self, document: &Html) -> Result<Vec<NewsEntry>, ExtractionError> {
        let mut news = Vec::new();
        for (container, link) in linked_containers(document, NEWS_CONTAINERS)? {
            news.push(NewsEntry {
                headline: normalized_text(link),
                url: attr_or_empty(Some(link), "href"),
                source: NEWS_SOURCE.text_in(container)?,
            });
        }
        log::debug!("Extracted {} news entries", news.len());
        Ok(news)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_falls_back_to_container_text() {
        let html = Html::parse_document(
            r#"<div class="image_result"><a href="/img/1"></a><span> Skyline  at night </span></div>"#,
        );
        let images = ImageExtractor.extract(&html).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "/img/1");
        assert_eq!(images[0].description, "Skyline at night");
    }

    #[test]
    fn containers_without_links_are_skipped() {
        let html = Html::parse_document(
            r#"<div class="b_videoResult"><span class="views">1M</span></div>
               <li class="news"><a>no href</a></li>"#,
        );
        assert!(VideoExtractor.extract(&html).unwrap().is_empty());
        assert!(NewsExtractor.extract(&html).unwrap().is_empty());
    }

    #[test]
    fn video_fields_use_alternate_class_names() {
        let html = Html::parse_document(
            r#"<div class="video_result">
                 <a href="/v/2">Street food tour</a>
                 <span class="views">2M</span>
                 <span class="channel">Eater</span>
               </div>"#,
        );
        let videos = VideoExtractor.extract(&html).unwrap();
        assert_eq!(
            videos,
            vec![VideoEntry {
                url: "/v/2".to_string(),
                title: "Street food tour".to_string(),
                views: "2M".to_string(),
                channel: "Eater".to_string(),
                provider: String::new(),
            }]
        );
    }
}
