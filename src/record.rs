//! Labeled records

use serde::{Deserialize, Serialize};
use std::fmt;

/// One labeled instance: boolean attributes and a digit class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Segment values followed by irrelevant attributes
    pub attributes: Vec<bool>,
    /// Digit class 0-9
    pub label: u8,
}

impl Record {
    /// Create a new record
    pub fn new(attributes: Vec<bool>, label: u8) -> Self {
        Self { attributes, label }
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check for an empty attribute vector
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Flip one attribute bit in place
    pub fn flip(&mut self, index: usize) {
        self.attributes[index] = !self.attributes[index];
    }
}

impl fmt::Display for Record {
    /// Comma-separated `0`/`1` attributes followed by the label
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &value in &self.attributes {
            write!(f, "{},", u8::from(value))?;
        }
        write!(f, "{}", self.label)
    }
}
