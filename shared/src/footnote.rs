use std::collections::HashMap;

use crate::row::Row;

/// Superscript glyphs for footnote numbers 1–9.
const SYMBOLS: [&str; 9] = ["¹", "²", "³", "⁴", "⁵", "⁶", "⁷", "⁸", "⁹"];

/// Marker glyph for a 1-based footnote number. Numbers past the glyph table
/// fall back to a parenthesized form.
pub fn symbol(number: usize) -> String {
    match number.checked_sub(1).and_then(|i| SYMBOLS.get(i)) {
        Some(glyph) => (*glyph).to_string(),
        None => format!("⁽{number}⁾"),
    }
}

/// One entry of a board's footnote block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteEntry {
    pub number: usize,
    pub text: String,
}

impl FootnoteEntry {
    pub fn symbol(&self) -> String {
        symbol(self.number)
    }
}

/// Derive the footnote block and per-row markers from the visible rows in
/// display order. First appearance of a text assigns the next number; repeats
/// reuse it. Markers are indexed by row id; rows without a footnote (and
/// hidden rows) get `None`, which the renderer clears.
///
/// Numbering restarts from 1 every pass, so it is idempotent for unchanged
/// state but not stable across reorderings.
pub fn reconcile(rows: &[Row], order: &[usize]) -> (Vec<FootnoteEntry>, Vec<Option<String>>) {
    let mut entries: Vec<FootnoteEntry> = Vec::new();
    let mut numbers: HashMap<&str, usize> = HashMap::new();
    let mut markers = vec![None; rows.len()];

    for &id in order {
        let row = &rows[id];
        if !row.visible {
            continue;
        }
        let Some(text) = row.footnote.as_deref() else {
            continue;
        };
        let number = *numbers.entry(text).or_insert_with(|| {
            entries.push(FootnoteEntry {
                number: entries.len() + 1,
                text: text.to_string(),
            });
            entries.len()
        });
        markers[id] = Some(symbol(number));
    }

    (entries, markers)
}
