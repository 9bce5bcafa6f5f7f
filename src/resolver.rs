// src/resolver.rs
//! Answer resolution: local store first, remote scrape fallback.
//!
//! `resolve` is the driver-facing entry point and never errors for a
//! merely *missing* answer: when neither the store nor the remote page
//! yields a candidate it returns the sentinel string
//! `"{LETTER} ({category}) does not exist"`, which the driver types into
//! the form like any other answer. Unknown categories and fetch failures
//! still propagate.

use rand::seq::SliceRandom;

use crate::config::consts::{CATEGORY_PATTERNS, LETTER_PAGE_PREFIX};
use crate::core::net::Fetch;
use crate::core::sanitize::{first_token, norm_key, norm_letter};
use crate::error::{Error, Result};
use crate::specs::letter_page;
use crate::store::AnswerStore;

/// Read-only session context handed in by the browser driver. The
/// category order is the driver's form-field order; `resolve_round`
/// returns answers in the same order.
pub struct GameSession {
    pub categories: Vec<String>,
    pub rounds: u32,
    pub players: u32,
    pub language: String,
}

/// What to do when a round asks for a category the pattern table does
/// not know. The source site cannot answer it either way; the policies
/// differ in whether the whole round is given up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingCategoryPolicy {
    /// Abort the round on the first unknown category.
    Abort,
    /// Substitute the sentinel and keep resolving the rest.
    Partial,
}

pub struct Resolver<'a, F: Fetch> {
    store: &'a AnswerStore,
    fetcher: F,
    policy: MissingCategoryPolicy,
}

impl<'a, F: Fetch> Resolver<'a, F> {
    pub fn new(store: &'a AnswerStore, fetcher: F) -> Self {
        Self { store, fetcher, policy: MissingCategoryPolicy::Abort }
    }

    pub fn with_policy(mut self, policy: MissingCategoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The fetcher this resolver was built with. Tests use it to assert
    /// whether the network was consulted at all.
    pub fn fetcher_ref(&self) -> &F {
        &self.fetcher
    }

    /// One answer for (category, letter): a random stored one when the
    /// store knows the pair, otherwise whatever the site offers.
    pub fn resolve(&self, category: &str, letter: char) -> Result<String> {
        match self.store.get_random_answer(category, letter) {
            Ok(answer) => Ok(answer),
            Err(Error::NotFound { .. }) => {
                logd!("store miss for {} ({}), scraping", norm_letter(letter), norm_key(category));
                self.scrape_answer(category, letter)
            }
            Err(e) => Err(e),
        }
    }

    /// Answers for every category of the session, in category order.
    pub fn resolve_round(&self, session: &GameSession, letter: char) -> Result<Vec<String>> {
        let mut out = Vec::with_capacity(session.categories.len());
        for category in &session.categories {
            match self.resolve(category, letter) {
                Ok(answer) => out.push(answer),
                Err(Error::UnknownCategory(c)) if self.policy == MissingCategoryPolicy::Partial => {
                    loge!("no pattern for category {:?}, submitting sentinel", c);
                    out.push(sentinel(category, letter));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }

    /// Scrape one answer from the site's per-letter listing page.
    /// "Nothing listed" is a sentinel, not an error.
    pub fn scrape_answer(&self, category: &str, letter: char) -> Result<String> {
        let variants = pattern_for(category)
            .ok_or_else(|| Error::UnknownCategory(category.trim().to_string()))?;

        let path = format!("{}{}", LETTER_PAGE_PREFIX, norm_letter(letter).to_ascii_lowercase());
        let doc = self.fetcher.fetch(&path)?;

        let candidates = letter_page::candidates(&doc, variants, norm_letter(letter));
        match candidates.choose(&mut rand::thread_rng()) {
            // Entries may carry descriptive tails; only the name itself goes
            // into the form field.
            Some(c) => Ok(first_token(c)),
            None => {
                logd!("no remote candidates for {} ({})", norm_letter(letter), norm_key(category));
                Ok(sentinel(category, letter))
            }
        }
    }
}

/// Heading name variants for a category, or `None` for categories the
/// table does not cover.
pub fn pattern_for(category: &str) -> Option<&'static [&'static str]> {
    let key = norm_key(category);
    CATEGORY_PATTERNS
        .iter()
        .find(|(tag, _)| *tag == key)
        .map(|(_, variants)| *variants)
}

/// The "give up" answer the game still accepts as field text.
pub fn sentinel(category: &str, letter: char) -> String {
    format!("{} ({}) does not exist", norm_letter(letter), category.trim())
}
