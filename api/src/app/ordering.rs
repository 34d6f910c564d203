//! Ordering helpers for gallery listings
//!
//! Both comparators collate with the Unicode root locale, so accented names
//! sit next to their base letters and punctuation follows collation order
//! rather than code points. `natural_cmp` additionally compares digit runs by
//! value (`img2.png` before `img10.png`). Names the collator considers equal
//! fall back to a byte comparison so the order is total and repeatable.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Numeric, Strength};

thread_local! {
    static NATURAL: Collator = root_collator(Numeric::On);
    static ALPHABETICAL: Collator = root_collator(Numeric::Off);
}

/// Tertiary strength: base letters first, then accents, then case
/// (lowercase before uppercase).
fn root_collator(numeric: Numeric) -> Collator {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    options.numeric = Some(numeric);
    Collator::try_new(&Default::default(), options).expect("root collation data is compiled in")
}

/// Compare two names with numeric runs treated as numbers
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NATURAL
        .with(|collator| collator.compare(a, b))
        .then_with(|| a.cmp(b))
}

/// Collation order without numeric runs, used for folder names
pub fn alphabetical_cmp(a: &str, b: &str) -> Ordering {
    ALPHABETICAL
        .with(|collator| collator.compare(a, b))
        .then_with(|| a.cmp(b))
}
