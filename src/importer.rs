// src/importer.rs
//! One-shot bulk seeding of the answer store from the site's category
//! listings. Meant to run offline before live play; the caller decides
//! when to `save()`.

use crate::config::consts::{CATEGORY_INDEX_PATH, COUPLER, NO_ENTRY_PREFIX};
use crate::core::net::Fetch;
use crate::core::sanitize::norm_key;
use crate::error::{Error, Result};
use crate::specs::category_page;
use crate::store::AnswerStore;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// Triples already present in the store.
    pub skipped: usize,
}

/// Walk the category index, fetch every coupled listing page and feed
/// each (category, letter, answer) triple into the store.
///
/// Duplicates are expected (re-runs, overlapping listings) and skipped;
/// any other store or fetch error aborts the import. Does not save.
pub fn import_all<F: Fetch>(store: &mut AnswerStore, fetcher: &F) -> Result<ImportReport> {
    let index = fetcher.fetch(CATEGORY_INDEX_PATH)?;
    let links = category_page::index_links(&index);

    let mut report = ImportReport::default();

    for link in links {
        let Some(tag) = couple(&link.label) else {
            logd!("index heading {:?} has no category tag, skipping", link.label);
            continue;
        };

        logf!("importing {} from {}", tag, link.path);
        let doc = fetcher.fetch(&link.path)?;

        for entry in category_page::entries(&doc) {
            // The site pads letters without entries with a stock phrase.
            if entry.answer.starts_with(NO_ENTRY_PREFIX) {
                continue;
            }
            match store.add_answer(tag, entry.letter, &entry.answer) {
                Ok(()) => report.imported += 1,
                Err(Error::Duplicate { .. }) => report.skipped += 1,
                Err(e) => return Err(e),
            }
        }
    }

    logf!("import done: {} new, {} duplicates", report.imported, report.skipped);
    Ok(report)
}

/// Index heading label → internal category tag ("Städte" → "Stadt").
/// Headings carry decoration ("Städte von A bis Z"), so prefix-match.
fn couple(label: &str) -> Option<&'static str> {
    let key = norm_key(label);
    COUPLER
        .iter()
        .find(|(display, _)| key.starts_with(&norm_key(display)))
        .map(|(_, tag)| *tag)
}
