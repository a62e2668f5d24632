//! Generic version parsing and ordering.
//!
//! A version string is split into items on `.`, `-`, `_` and on every
//! transition between digits and letters. Numbers compare numerically,
//! well-known qualifiers by rank, other strings case-insensitively.
//! Trailing padding (zeros, release qualifiers) is ignored, so `1`, `1.0`
//! and `1.0.0` are equal.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, SharedError};

const QUALIFIER_ALPHA: i32 = -5;
const QUALIFIER_BETA: i32 = -4;
const QUALIFIER_MILESTONE: i32 = -3;
const QUALIFIER_RC: i32 = -2;
const QUALIFIER_SNAPSHOT: i32 = -1;
const QUALIFIER_RELEASE: i32 = 0;
const QUALIFIER_SP: i32 = 1;

/// A parsed version.
///
/// Equality and ordering follow the generic scheme, not the text:
/// `"1.0" == "1"`, `"1.0-SNAPSHOT" < "1.0" < "1.0-sp" < "1.0.1"`.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    items: Vec<Item>,
}

impl Version {
    /// Parse a version string.
    ///
    /// Fails on blank input, embedded whitespace, and range syntax
    /// characters, which signal a constraint passed where a version was
    /// expected.
    pub fn parse(version: &str) -> Result<Self> {
        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Err(SharedError::invalid_version(version, "version must not be empty"));
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '[' | ']' | '(' | ')' | ','))
        {
            return Err(SharedError::invalid_version(
                version,
                format!("unexpected character '{}' in version", c),
            ));
        }
        Ok(Self::from_trusted(trimmed))
    }

    /// Build from text already known to be a plain version token. Used for
    /// the synthetic `min`/`max` bounds of wildcard ranges.
    pub(crate) fn from_trusted(version: &str) -> Self {
        Self {
            raw: version.to_string(),
            items: parse_items(version),
        }
    }

    /// The version as originally written (trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_items(&self.items, &other.items)
    }
}

/// One component of a version.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Min,
    Qualifier(i32),
    Text(String),
    Int(u32),
    /// Decimal digits without leading zeros.
    BigInt(String),
    Max,
}

impl Item {
    fn rank(&self) -> u8 {
        match self {
            Item::Min => 0,
            Item::Qualifier(_) => 2,
            Item::Text(_) => 3,
            Item::Int(_) => 4,
            Item::BigInt(_) => 5,
            Item::Max => 8,
        }
    }

    /// Numbers and the `min`/`max` bounds count as numeric.
    fn is_number(&self) -> bool {
        matches!(
            self,
            Item::Min | Item::Int(_) | Item::BigInt(_) | Item::Max
        )
    }

    /// Compare against the implicit padding of a shorter version.
    fn cmp_padding(&self) -> Ordering {
        match self {
            Item::Min => Ordering::Less,
            Item::Max | Item::BigInt(_) | Item::Text(_) => Ordering::Greater,
            Item::Int(v) => v.cmp(&0),
            Item::Qualifier(q) => q.cmp(&0),
        }
    }

    fn compare(&self, other: &Item) -> Ordering {
        match (self, other) {
            (Item::Int(a), Item::Int(b)) => a.cmp(b),
            (Item::Qualifier(a), Item::Qualifier(b)) => a.cmp(b),
            (Item::Text(a), Item::Text(b)) => a.cmp(b),
            (Item::BigInt(a), Item::BigInt(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn compare_items(these: &[Item], those: &[Item]) -> Ordering {
    let mut number = true;
    let mut index = 0;
    loop {
        match (these.get(index), those.get(index)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return compare_padding(those, index, None).reverse(),
            (Some(_), None) => return compare_padding(these, index, None),
            (Some(this), Some(that)) => {
                if this.is_number() != that.is_number() {
                    return if number == this.is_number() {
                        compare_padding(these, index, Some(number))
                    } else {
                        compare_padding(those, index, Some(number)).reverse()
                    };
                }
                let rel = this.compare(that);
                if rel != Ordering::Equal {
                    return rel;
                }
                number = this.is_number();
            }
        }
        index += 1;
    }
}

fn compare_padding(items: &[Item], index: usize, number: Option<bool>) -> Ordering {
    for item in &items[index..] {
        if number.is_some_and(|n| n != item.is_number()) {
            break;
        }
        let rel = item.cmp_padding();
        if rel != Ordering::Equal {
            return rel;
        }
    }
    Ordering::Equal
}

fn parse_items(version: &str) -> Vec<Item> {
    let mut items = Vec::new();
    let mut tokenizer = Tokenizer::new(version);
    while let Some(item) = tokenizer.next_item() {
        items.push(item);
    }
    trim_padding(&mut items);
    items
}

/// Drop trailing items equal to padding, walking back over runs of the
/// same kind (numbers or qualifiers).
fn trim_padding(items: &mut Vec<Item>) {
    let mut number: Option<bool> = None;
    let mut end = items.len().saturating_sub(1);
    let mut i = end;
    while i > 0 {
        let is_number = items[i].is_number();
        if number != Some(is_number) {
            end = i;
            number = Some(is_number);
        }
        if end == i
            && (i == items.len() - 1 || items[i - 1].is_number() == is_number)
            && items[i].cmp_padding() == Ordering::Equal
        {
            items.remove(i);
            end = end.saturating_sub(1);
        }
        i -= 1;
    }
}

struct Tokenizer {
    chars: Vec<char>,
    index: usize,
}

impl Tokenizer {
    fn new(version: &str) -> Self {
        let version = if version.is_empty() { "0" } else { version };
        Self {
            chars: version.chars().collect(),
            index: 0,
        }
    }

    fn next_item(&mut self) -> Option<Item> {
        let n = self.chars.len();
        if self.index >= n {
            return None;
        }

        // -2: nothing yet, -1: letters, 0: only zeros so far, 1: digits
        let mut state: i8 = -2;
        let mut start = self.index;
        let mut end = n;
        let mut terminated_by_number = false;

        while self.index < n {
            let c = self.chars[self.index];
            if matches!(c, '.' | '-' | '_') {
                end = self.index;
                self.index += 1;
                break;
            }
            match c.to_digit(10) {
                Some(digit) => {
                    if state == -1 {
                        end = self.index;
                        terminated_by_number = true;
                        break;
                    }
                    if state == 0 {
                        // strip leading zeros
                        start += 1;
                    }
                    state = if state > 0 || digit > 0 { 1 } else { 0 };
                }
                None => {
                    if state >= 0 {
                        end = self.index;
                        break;
                    }
                    state = -1;
                }
            }
            self.index += 1;
        }

        if end > start {
            let token: String = self.chars[start..end].iter().collect();
            Some(self.to_item(token, state >= 0, terminated_by_number))
        } else {
            Some(Item::Int(0))
        }
    }

    fn to_item(&self, token: String, number: bool, terminated_by_number: bool) -> Item {
        if number {
            if token.len() < 10 {
                if let Ok(value) = token.parse::<u32>() {
                    return Item::Int(value);
                }
            }
            return Item::BigInt(token);
        }

        let lower = token.to_lowercase();
        if self.index >= self.chars.len() {
            match lower.as_str() {
                "min" => return Item::Min,
                "max" => return Item::Max,
                _ => {}
            }
        }
        if terminated_by_number && lower.len() == 1 {
            match lower.as_str() {
                "a" => return Item::Qualifier(QUALIFIER_ALPHA),
                "b" => return Item::Qualifier(QUALIFIER_BETA),
                "m" => return Item::Qualifier(QUALIFIER_MILESTONE),
                _ => {}
            }
        }
        match lower.as_str() {
            "alpha" => Item::Qualifier(QUALIFIER_ALPHA),
            "beta" => Item::Qualifier(QUALIFIER_BETA),
            "milestone" => Item::Qualifier(QUALIFIER_MILESTONE),
            "cr" | "rc" => Item::Qualifier(QUALIFIER_RC),
            "snapshot" => Item::Qualifier(QUALIFIER_SNAPSHOT),
            "ga" | "final" | "release" | "" => Item::Qualifier(QUALIFIER_RELEASE),
            "sp" => Item::Qualifier(QUALIFIER_SP),
            _ => Item::Text(lower),
        }
    }
}
