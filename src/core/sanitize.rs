// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Canonical form used for every store key and duplicate check:
/// surrounding whitespace stripped, lowercased (Unicode, so "Städte"
/// and "STÄDTE" collapse to the same key).
pub fn norm_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Letters are keyed uppercase; the round letter arrives uppercase
/// from the game page anyway.
pub fn norm_letter(c: char) -> char {
    c.to_ascii_uppercase()
}

/// First whitespace-delimited token. Listing entries often carry
/// descriptive tails ("Bonn (Hauptstadt a.D.)").
pub fn first_token(s: &str) -> String {
    s.split_whitespace().next().unwrap_or("").to_string()
}
