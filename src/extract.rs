// src/extract.rs
use log::warn;

use crate::config::Limits;
use crate::table::UniqueItemTable;

/// Whitespace as understood by C's `isspace` in the "C" locale.
pub fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Non-empty runs of non-whitespace bytes, in input order.
pub fn words(input: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    input
        .split(|&b| is_word_separator(b))
        .filter(|word| !word.is_empty())
}

/// Lines with their `\n` stripped. A final terminator does not open an
/// empty last line.
pub fn lines(input: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    input
        .split_inclusive(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\n").unwrap_or(line))
}

fn clamp<'a>(item: &'a [u8], max: usize, what: &str, order: usize) -> &'a [u8] {
    if item.len() > max {
        warn!(
            "{} #{} is {} bytes long, truncating to {}",
            what,
            order,
            item.len(),
            max
        );
        &item[..max]
    } else {
        item
    }
}

pub fn build_word_table(input: &[u8], limits: &Limits) -> UniqueItemTable {
    let mut table = UniqueItemTable::new();
    for (order, word) in words(input).enumerate() {
        table.insert(clamp(word, limits.max_word_len, "word", order), order);
    }
    table
}

pub fn build_line_table(input: &[u8], limits: &Limits) -> UniqueItemTable {
    let mut table = UniqueItemTable::new();
    for (order, line) in lines(input).enumerate() {
        table.insert(clamp(line, limits.max_line_len, "line", order), order);
    }
    table
}
