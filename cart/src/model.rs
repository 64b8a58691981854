//! # Cart model
//!
//! The persisted record is an untrusted boundary: it can be absent, edited or
//! corrupted between page loads. [`RawLine`] accepts any JSON object shape and
//! [`RawLine::normalize`] converts it into a strict [`CartLine`] satisfying
//! the invariants (`quantity >= 1`, non-empty `name`). Nothing past
//! normalization trusts the boundary shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub const DEFAULT_NAME: &str = "Item";

/// One cart element as read back from storage, every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLine {
    #[serde(default)]
    pub key: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub unit_price: Value,
    #[serde(default)]
    pub quantity: Value,
}

impl RawLine {
    pub fn normalize(self) -> CartLine {
        CartLine {
            key: as_text(&self.key).unwrap_or_default(),
            name: as_text(&self.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            unit_price: as_price(&self.unit_price),
            quantity: as_quantity(&self.quantity),
        }
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}

/// Numeric coercion for prices: numbers and numeric strings pass, anything
/// else degrades to 0. Negative and non-finite values also degrade to 0.
fn as_price(value: &Value) -> u64 {
    let number = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if number.is_finite() && number > 0.0 {
        number as u64
    } else {
        0
    }
}

/// Integer coercion for quantities: truncates fractions, reads a leading
/// integer out of strings, floors the result at 1.
fn as_quantity(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(number) => number.as_f64().map(|n| n as i64),
        Value::String(text) => leading_int(text),
        _ => None,
    };

    parsed
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(1)
}

fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i64>().ok().map(|n| if negative { -n } else { n })
}

/// One normalized product entry in the cart. Deliberately not
/// deserializable: reads come in through [`RawLine::normalize`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub key: String,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price
    }
}

/// A cart edit as dispatched by the cart page, index into the line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Increment(usize),
    Decrement(usize),
    Remove(usize),
}

/// Ordered, key-unique sequence of [`CartLine`]s. Key uniqueness is upheld by
/// [`Cart::add_or_merge`]; the index-based commands operate on already-unique
/// entries and cannot introduce duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Quantity across all lines, the number the cart badge shows.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Merge-on-add: an existing line for `key` gains quantity, otherwise a
    /// new line is appended with quantity 1. Caller persists the result.
    pub fn add_or_merge(&mut self, key: &str, name: &str, unit_price: u64) {
        let existing = self
            .lines
            .iter_mut()
            .find(|line| !line.key.is_empty() && line.key == key);

        match existing {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                key: key.to_string(),
                name: name.to_string(),
                unit_price,
                quantity: 1,
            }),
        }
    }

    /// Applies one edit command. Out-of-range indices are ignored with a
    /// warning. Returns whether the command was accepted, so the caller can
    /// skip persisting untouched state.
    pub fn apply(&mut self, command: Command) -> bool {
        let (Command::Increment(index) | Command::Decrement(index) | Command::Remove(index)) =
            command;

        if index >= self.lines.len() {
            warn!(index, len = self.lines.len(), "cart command index out of range, ignoring");
            return false;
        }

        match command {
            Command::Increment(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
            }
            // Decrement floors at 1; removal stays a separate explicit action.
            Command::Decrement(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_sub(1).max(1);
            }
            Command::Remove(index) => {
                self.lines.remove(index);
            }
        }

        true
    }
}

impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self { lines: iter.into_iter().collect() }
    }
}
