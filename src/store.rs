// src/store.rs
//! Local answer store: category → letter → known answers.
//!
//! Keys are compared case-insensitively with surrounding whitespace
//! stripped; every entry point normalizes identically (see
//! `core::sanitize::norm_key`). Answers keep their original casing for
//! display but are duplicate-checked by normalized value.
//!
//! The whole map lives in memory. `save()` rewrites the backing file in
//! full; `load()` parses it in full. One CSV row per answer:
//! `category,letter,answer`. Not safe for concurrent mutation; a single
//! in-process owner serializes all access.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use rand::seq::SliceRandom;

use crate::config::consts::STORE_SEP;
use crate::core::sanitize::{norm_key, norm_letter};
use crate::csv::{parse_rows, rows_to_string};
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct AnswerStore {
    path: PathBuf,
    map: BTreeMap<String, BTreeMap<char, Vec<String>>>,
}

impl AnswerStore {
    /// Load the store from `path`, or create an empty one (and persist it
    /// immediately) when no file exists yet.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            let store = Self { path, map: BTreeMap::new() };
            store.save()?;
            return Ok(store);
        }

        let text = fs::read_to_string(&path).map_err(|e| Error::storage(&path, e))?;
        let mut map: BTreeMap<String, BTreeMap<char, Vec<String>>> = BTreeMap::new();

        for (i, row) in parse_rows(&text, STORE_SEP).into_iter().enumerate() {
            let corrupt = |why: &str| Error::storage(&path, format!("row {}: {}", i + 1, why));

            let [category, letter, answer] = row.as_slice() else {
                return Err(corrupt("expected 3 fields"));
            };
            let mut letters = letter.trim().chars();
            let (Some(l), None) = (letters.next(), letters.next()) else {
                return Err(corrupt("letter is not a single character"));
            };

            let answers = map.entry(norm_key(category)).or_default().entry(norm_letter(l)).or_default();
            if answers.iter().any(|a| norm_key(a) == norm_key(answer)) {
                return Err(corrupt("duplicate answer"));
            }
            answers.push(answer.trim().to_string());
        }

        Ok(Self { path, map })
    }

    /// Rewrite the backing file with the full current mapping.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::storage(&self.path, e))?;
            }
        }

        let mut rows = Vec::new();
        for (category, letters) in &self.map {
            for (letter, answers) in letters {
                for answer in answers {
                    rows.push(vec![category.clone(), letter.to_string(), answer.clone()]);
                }
            }
        }

        fs::write(&self.path, rows_to_string(&rows, STORE_SEP))
            .map_err(|e| Error::storage(&self.path, e))
    }

    /// Delete the backing file and start over empty. The next `save()`
    /// recreates the file.
    pub fn reset(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| Error::storage(&self.path, e))?;
        }
        self.map.clear();
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.map.contains_key(&norm_key(category))
    }

    pub fn has_letter(&self, category: &str, letter: char) -> bool {
        self.map
            .get(&norm_key(category))
            .is_some_and(|letters| letters.contains_key(&norm_letter(letter)))
    }

    pub fn has_answer(&self, category: &str, letter: char, answer: &str) -> bool {
        let Some(answers) = self
            .map
            .get(&norm_key(category))
            .and_then(|letters| letters.get(&norm_letter(letter)))
        else {
            return false;
        };
        answers.iter().any(|a| norm_key(a) == norm_key(answer))
    }

    /// All answers for a (category, letter) pair, in insertion order.
    pub fn get_answers(&self, category: &str, letter: char) -> Result<&[String]> {
        self.map
            .get(&norm_key(category))
            .and_then(|letters| letters.get(&norm_letter(letter)))
            .map(Vec::as_slice)
            .ok_or_else(|| Error::NotFound {
                category: norm_key(category),
                letter: norm_letter(letter),
            })
    }

    /// One answer chosen uniformly among the stored ones.
    pub fn get_random_answer(&self, category: &str, letter: char) -> Result<String> {
        let answers = self.get_answers(category, letter)?;
        let mut rng = rand::thread_rng();
        // get_answers never returns an empty slice (empty levels are pruned)
        Ok(answers.choose(&mut rng).cloned().unwrap_or_default())
    }

    pub fn add_answer(&mut self, category: &str, letter: char, answer: &str) -> Result<()> {
        if self.has_answer(category, letter, answer) {
            return Err(Error::Duplicate {
                category: norm_key(category),
                letter: norm_letter(letter),
                answer: norm_key(answer),
            });
        }
        self.map
            .entry(norm_key(category))
            .or_default()
            .entry(norm_letter(letter))
            .or_default()
            .push(answer.trim().to_string());
        Ok(())
    }

    /// Remove one answer; empty letter and category levels are pruned so
    /// membership checks stay meaningful.
    pub fn remove_answer(&mut self, category: &str, letter: char, answer: &str) -> Result<()> {
        let cat = norm_key(category);
        let l = norm_letter(letter);
        let not_found = || Error::NotFound { category: cat.clone(), letter: l };

        let letters = self.map.get_mut(&cat).ok_or_else(not_found)?;
        let answers = letters.get_mut(&l).ok_or_else(not_found)?;
        let pos = answers
            .iter()
            .position(|a| norm_key(a) == norm_key(answer))
            .ok_or_else(not_found)?;

        answers.remove(pos);
        if answers.is_empty() {
            letters.remove(&l);
        }
        if letters.is_empty() {
            self.map.remove(&cat);
        }
        Ok(())
    }

    pub fn list_categories(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    /// Total number of stored answers (CLI reporting).
    pub fn len(&self) -> usize {
        self.map.values().flat_map(|l| l.values()).map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
