//! Alias list input for imports
//!
//! One alias per line, taken literally. Lines are trimmed, blank lines are
//! dropped, and duplicates collapse onto their first occurrence.

use crate::utils::Result;
use std::collections::HashSet;
use std::path::Path;

/// Parse alias-list text into distinct aliases, in first-seen order
pub fn parse_alias_list(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(String::from)
        .collect()
}

/// Read and parse an alias-list file
pub fn read_alias_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_alias_list(&text))
}
