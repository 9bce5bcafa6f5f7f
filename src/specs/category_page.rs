// src/specs/category_page.rs
//! Spec for the category index and the per-category listing pages.
//!
//! Index page: the first three section headings each wrap a link to a
//! category listing ("Städte", "Länder", "Flüsse"). Listing page: one
//! content list whose items read like "Städte mit B: Berlin".

use crate::config::consts::HOST;
use crate::core::html::{attr_value, inner_after_open_tag, next_tag_block_ci, strip_tags, to_lower};
use crate::core::sanitize::normalize_entities;
use crate::specs::letter_page::list_items;

/// One linked section heading on the category index.
pub struct IndexLink {
    pub label: String,
    pub path: String,
}

/// One `letter: answer` entry parsed out of a category listing page.
pub struct Entry {
    pub letter: char,
    pub answer: String,
}

/// The first three linked section headings of the index page.
pub fn index_links(doc: &str) -> Vec<IndexLink> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while out.len() < 3 {
        let Some((hs, he)) = next_tag_block_ci(doc, "<h3", "</h3>", pos) else {
            break;
        };
        let block = &doc[hs..he];
        pos = he;

        let Some(path) = anchor_path(block) else {
            continue;
        };
        let label = strip_tags(normalize_entities(&inner_after_open_tag(block)));
        if label.is_empty() {
            continue;
        }
        out.push(IndexLink { label, path });
    }

    out
}

/// All entries of a category listing page. Items without a colon are
/// structural noise and dropped; placeholder filtering ("Es gibt ...")
/// is the importer's call, not ours.
pub fn entries(doc: &str) -> Vec<Entry> {
    let Some((ls, le)) = next_tag_block_ci(doc, "<ul", "</ul>", 0)
        .or_else(|| next_tag_block_ci(doc, "<ol", "</ol>", 0))
    else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for item in list_items(&doc[ls..le]) {
        let Some(colon) = item.find(':') else { continue };
        let Some(letter) = item[..colon].trim_end().chars().last() else {
            continue;
        };
        let answer = item[colon + 1..].trim();
        if answer.is_empty() {
            continue;
        }
        out.push(Entry { letter, answer: answer.to_string() });
    }
    out
}

/// Site-absolute path of the first anchor inside `block`, with the own
/// host prefix stripped when the href is absolute.
fn anchor_path(block: &str) -> Option<String> {
    let a_pos = to_lower(block).find("<a")?;
    let opener_end = block[a_pos..].find('>')? + a_pos + 1;
    let href = attr_value(&block[a_pos..opener_end], "href")?;

    if let Some(rest) = href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("http://"))
    {
        let rest = rest.strip_prefix("www.").unwrap_or(rest);
        let host = HOST.strip_prefix("www.").unwrap_or(HOST);
        let path = rest.strip_prefix(host)?;
        return Some(if path.is_empty() { s!("/") } else { s!(path) });
    }
    if href.starts_with('/') {
        return Some(href.to_string());
    }
    Some(format!("/{}", href))
}
