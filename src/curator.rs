//! Filtering and ordering of a classified listing.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::CharIndices;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::DriveItem;

/// Drop hidden items, then put folders first and order each group by name.
///
/// Names are compared with [`natural_cmp`]. The sort is stable.
pub fn curate(items: Vec<DriveItem>) -> Vec<DriveItem> {
    let mut items: Vec<DriveItem> = items.into_iter().filter(|item| !item.is_hidden()).collect();

    items.sort_by(|a, b| {
        b.is_folder()
            .cmp(&a.is_folder())
            .then_with(|| natural_cmp(a.name(), b.name()))
    });

    items
}

/// Natural, case- and accent-insensitive name ordering.
///
/// Runs of ASCII digits compare by numeric value, so `item2 < item10`.
/// Whitespace and punctuation sort before numbers, numbers before letters,
/// and letters compare by the lowercase form of their base letter, so `É`
/// sorts with `e` and `ё` with `е`. `й` stays a letter of its own, after `и`.
/// Names equal under those rules are ordered by their accents (unaccented
/// first), then fewer leading zeros, then lowercase before uppercase, then
/// code point, so the result never depends on the host locale.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = decompose(a);
    let folded_b = decompose(b);

    compare_chunks(&folded_a, &folded_b, primary_cmp)
        .then_with(|| accents(&folded_a).cmp(accents(&folded_b)))
        .then_with(|| compare_chunks(&folded_a, &folded_b, tie_break_cmp))
        .then_with(|| a.cmp(b))
}

/// Canonical decomposition, keeping `й`/`Й` whole.
fn decompose(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'й' | 'Й' => out.push(c),
            _ => out.extend(std::iter::once(c).nfd()),
        }
    }
    out
}

fn accents(decomposed: &str) -> impl Iterator<Item = char> + '_ {
    decomposed.chars().filter(|&c| is_combining_mark(c))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Char(char),
}

impl Chunk<'_> {
    fn rank(&self) -> u8 {
        match self {
            Chunk::Char(c) if c.is_alphanumeric() => 2,
            Chunk::Char(_) => 0,
            Chunk::Digits(_) => 1,
        }
    }
}

struct Chunks<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Chunks<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, c) = loop {
            let (idx, c) = self.chars.next()?;
            if !is_combining_mark(c) {
                break (idx, c);
            }
        };
        if !c.is_ascii_digit() {
            return Some(Chunk::Char(c));
        }

        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = self.chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            end = idx + next.len_utf8();
            self.chars.next();
        }
        Some(Chunk::Digits(&self.source[start..end]))
    }
}

fn compare_chunks(a: &str, b: &str, cmp: fn(&Chunk<'_>, &Chunk<'_>) -> Ordering) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match cmp(&x, &y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

fn primary_cmp(a: &Chunk<'_>, b: &Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => {
            let x = x.trim_start_matches('0');
            let y = y.trim_start_matches('0');
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (Chunk::Char(x), Chunk::Char(y)) if a.rank() == b.rank() => {
            x.to_lowercase().cmp(y.to_lowercase())
        }
        _ => a.rank().cmp(&b.rank()),
    }
}

fn tie_break_cmp(a: &Chunk<'_>, b: &Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => x.len().cmp(&y.len()),
        (Chunk::Char(x), Chunk::Char(y)) => x.is_uppercase().cmp(&y.is_uppercase()),
        _ => Ordering::Equal,
    }
}
