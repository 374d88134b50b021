use scraper::{ElementRef, Html};

use super::patterns::{
    PAA_BLOCK_ANSWER_TAGS, PAA_BLOCK_CONTAINERS, PAA_BLOCK_QUESTIONS, PAA_EXPANDO_ANSWER,
    PAA_EXPANDO_CONTAINERS, PAA_EXPANDO_QUESTION,
};
use super::{ExtractionError, Section, SectionExtractor, normalized_text, text_or_empty};
use crate::data_models::QaEntry;

/// The two markup shapes "People also ask" blocks come in, in the order they
/// are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `div.b_expando` cards holding a question node and an answer somewhere
    /// below it.
    Expando,
    /// Generic Q&A blocks where each question marker is directly followed by
    /// its answer.
    QaBlock,
}

impl Tier {
    pub const ORDER: [Tier; 2] = [Tier::Expando, Tier::QaBlock];

    pub fn run(&self, document: &Html) -> Result<Vec<QaEntry>, ExtractionError> {
        match self {
            Tier::Expando => expando_tier(document),
            Tier::QaBlock => qa_block_tier(document),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PeopleAlsoAskExtractor;

impl SectionExtractor for PeopleAlsoAskExtractor {
    type Output = Vec<QaEntry>;

    fn section(&self) -> Section {
        Section::PeopleAlsoAsk
    }

    /// Runs the tiers in order and returns the first non-empty result; a later
    /// tier never runs once an earlier one found something.
    fn extract(&self, document: &Html) -> Result<Vec<QaEntry>, ExtractionError> {
        for tier in Tier::ORDER {
            let entries = tier.run(document)?;
            if !entries.is_empty() {
                log::debug!("Extracted {} People Also Ask entries ({tier:?})", entries.len());
                return Ok(entries);
            }
        }
        log::debug!("Extracted 0 People Also Ask entries");
        Ok(Vec::new())
    }
}

pub fn expando_tier(document: &Html) -> Result<Vec<QaEntry>, ExtractionError> {
    let mut entries = Vec::new();
    for card in PAA_EXPANDO_CONTAINERS.all(document)? {
        let question = PAA_EXPANDO_QUESTION.text_in(card)?;
        if question.is_empty() {
            continue;
        }
        let answer = PAA_EXPANDO_ANSWER.text_in(card)?;
        entries.push(QaEntry { question, answer });
    }
    Ok(entries)
}

pub fn qa_block_tier(document: &Html) -> Result<Vec<QaEntry>, ExtractionError> {
    let mut entries = Vec::new();
    for block in PAA_BLOCK_CONTAINERS.all(document)? {
        for marker in PAA_BLOCK_QUESTIONS.all_in(block)? {
            let question = normalized_text(marker);
            if question.is_empty() {
                continue;
            }
            let answer = text_or_empty(answer_sibling(marker));
            entries.push(QaEntry { question, answer });
        }
    }
    Ok(entries)
}

/// The element right after `marker` (text between them is ignored), if it is
/// an answer tag.
fn answer_sibling(marker: ElementRef<'_>) -> Option<ElementRef<'_>> {
    marker
        .next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|next| PAA_BLOCK_ANSWER_TAGS.contains(&next.value().name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_must_be_the_immediate_sibling() {
        let html = Html::parse_document(
            r#"<div class="paa"><dl>
                 <dt>First?</dt>
                 <dt>Second?</dt>
                 <dd>Only the second has an answer.</dd>
               </dl></div>"#,
        );
        let entries = qa_block_tier(&html).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].answer, "");
        assert_eq!(entries[1].answer, "Only the second has an answer.");
    }

    #[test]
    fn nested_answer_is_not_a_sibling() {
        let html = Html::parse_document(
            r#"<div class="people-also-ask">
                 <div class="question">Why? <p>inside, not after</p></div>
                 <span>noise</span>
                 <p>too far</p>
               </div>"#,
        );
        let entries = qa_block_tier(&html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].answer, "");
    }
}
