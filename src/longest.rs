// src/longest.rs
use crate::table::UniqueItemTable;

/// Items of a table that share the greatest byte length.
#[derive(Debug, PartialEq, Eq)]
pub struct Longest<'a> {
    pub max_len: usize,
    pub items: Vec<&'a [u8]>,
}

/// Returns `None` for an empty table.
pub fn find_longest(table: &UniqueItemTable) -> Option<Longest<'_>> {
    let max_len = table.iter().map(|(content, _)| content.len()).max()?;

    let mut items: Vec<&[u8]> = table
        .iter()
        .map(|(content, _)| content)
        .filter(|content| content.len() == max_len)
        .collect();
    items.sort_unstable();
    items.dedup();

    Some(Longest { max_len, items })
}
