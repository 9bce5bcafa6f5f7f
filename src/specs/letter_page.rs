// src/specs/letter_page.rs
//! Spec for the per-letter listing page (`/buchstabe-x`).
//!
//! The page stacks one section per category: an `<h3>` (sometimes `<h2>`)
//! like "Städte mit B" followed by a `<ul>`/`<ol>` of entries. We locate
//! the heading whose text matches one of the category's name variants,
//! then take the first list block after it.

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags, to_lower};
use crate::core::sanitize::normalize_entities;

/// All list-item texts of the section matching `variants`, or empty when
/// no such section (or no list under it) exists on the page.
pub fn candidates(doc: &str, variants: &[&str], letter: char) -> Vec<String> {
    for tag in ["h3", "h2"] {
        let open = format!("<{}", tag);
        let close = format!("</{}>", tag);

        let mut pos = 0usize;
        while let Some((hs, he)) = next_tag_block_ci(doc, &open, &close, pos) {
            let text = strip_tags(normalize_entities(&inner_after_open_tag(&doc[hs..he])));
            pos = he;

            if heading_matches(&text, variants, letter) {
                // A list past the next heading belongs to another section;
                // an empty section must yield no candidates.
                return first_list_items(doc, he, next_heading_pos(doc, he));
            }
        }
    }
    Vec::new()
}

/// "Städte mit B" matches `["Stadt", "Städte"]` for letter 'B'. The page
/// is already letter-specific; the "mit X" check only guards against a
/// stray section for another letter.
fn heading_matches(text: &str, variants: &[&str], letter: char) -> bool {
    let lc = text.to_lowercase();
    // variant must end at a word boundary ("Land" names "Länder mit B",
    // not "Landkreise mit B")
    let named = variants.iter().any(|v| match lc.strip_prefix(&v.to_lowercase()) {
        Some(rest) => !rest.chars().next().is_some_and(char::is_alphabetic),
        None => false,
    });
    if !named {
        return false;
    }
    match lc.rfind(" mit ") {
        Some(p) => lc[p + " mit ".len()..]
            .trim()
            .starts_with(letter.to_ascii_lowercase()),
        None => true,
    }
}

/// Start of the next `<h2>`/`<h3>` opener at or after `from`.
fn next_heading_pos(doc: &str, from: usize) -> Option<usize> {
    let lc = to_lower(doc);
    let rest = lc.get(from..)?;
    let h2 = rest.find("<h2").map(|p| p + from);
    let h3 = rest.find("<h3").map(|p| p + from);
    match (h2, h3) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// First `<ul>` or `<ol>` block at or after `from`, whichever opens
/// earlier, reduced to its item texts. A block opening at or past
/// `limit` is out of section and ignored.
fn first_list_items(doc: &str, from: usize, limit: Option<usize>) -> Vec<String> {
    let ul = next_tag_block_ci(doc, "<ul", "</ul>", from);
    let ol = next_tag_block_ci(doc, "<ol", "</ol>", from);

    let block = match (ul, ol) {
        (Some(u), Some(o)) => Some(if u.0 <= o.0 { u } else { o }),
        (u, o) => u.or(o),
    };
    let Some((ls, le)) = block else {
        return Vec::new();
    };
    if limit.is_some_and(|l| ls >= l) {
        return Vec::new();
    }
    list_items(&doc[ls..le])
}

/// Item texts of one list block, tags stripped, empties dropped.
pub fn list_items(block: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((is, ie)) = next_tag_block_ci(block, "<li", "</li>", pos) {
        let text = strip_tags(normalize_entities(&inner_after_open_tag(&block[is..ie])));
        if !text.is_empty() {
            out.push(text);
        }
        pos = ie;
    }
    out
}
