use std::fmt;

use super::error::BookError;

/// Byte size of each text buffer in the legacy record layout.
pub const LEGACY_FIELD_CAPACITY: usize = 50;

/// Owned text with a fixed byte capacity.
///
/// The capacity includes room for a terminating NUL, so a field of
/// capacity `N` holds at most `N - 1` bytes of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    field: &'static str,
    value: String,
    capacity: usize,
}

impl BoundedText {
    /// Create a field, rejecting values that would not fit.
    pub fn new(
        field: &'static str,
        value: impl Into<String>,
        capacity: usize,
    ) -> Result<Self, BookError> {
        let value = value.into();
        check_capacity(field, value.len(), capacity)?;
        Ok(Self {
            field,
            value,
            capacity,
        })
    }

    /// Append `suffix` in place. On failure the field is left unchanged.
    pub fn push_text(&mut self, suffix: &str) -> Result<(), BookError> {
        check_capacity(self.field, self.value.len() + suffix.len(), self.capacity)?;
        self.value.push_str(suffix);
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

fn check_capacity(field: &'static str, len: usize, capacity: usize) -> Result<(), BookError> {
    let required = len + 1;
    if required > capacity {
        return Err(BookError::CapacityExceeded {
            field,
            capacity,
            required,
        });
    }
    Ok(())
}

/// A single book with its price and discount.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub title: BoundedText,
    pub author: BoundedText,
    pub version: BoundedText,
    pub book_id: i32,
    pub price: f64,
    /// Multiplier applied to `price`; nominally within [0, 1], not enforced.
    pub discount_factor: f64,
}

impl BookRecord {
    pub fn new(
        title: &str,
        author: &str,
        version: &str,
        book_id: i32,
        price: f64,
        discount_factor: f64,
        capacity: usize,
    ) -> Result<Self, BookError> {
        Ok(Self {
            title: BoundedText::new("title", title, capacity)?,
            author: BoundedText::new("author", author, capacity)?,
            version: BoundedText::new("version", version, capacity)?,
            book_id,
            price,
            discount_factor,
        })
    }

    /// The record the report has always been printed for.
    pub fn legacy_sample(capacity: usize) -> Result<Self, BookError> {
        Self::new(
            "Compilers: Principles, Techniques, and Tools",
            "Alfred V. Aho et al.",
            " 2nd",
            13,
            100.0,
            0.8,
            capacity,
        )
    }
}
