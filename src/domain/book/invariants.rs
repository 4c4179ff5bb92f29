use std::sync::OnceLock;

use regex::Regex;

use super::entity::Book;
use crate::domain::consumption::validate_consumption;
use crate::domain::{require_text, Consumable, DomainError, DomainResult};

/// Validates all Book invariants
pub fn validate_book(book: &Book) -> DomainResult<()> {
    require_text("author", book.author().to_string())?;
    require_text("publisher", book.publisher().to_string())?;
    validate_isbn(book.isbn())?;
    validate_consumption(book.consumption())?;
    Ok(())
}

/// ISBN with separators (hyphens, spaces) removed and check digit upper-cased
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

fn isbn_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?:[0-9]{9}[0-9X]|[0-9]{13})$").unwrap())
}

/// ISBN-10 (last character may be X) or ISBN-13 once separators are removed
pub(crate) fn validate_isbn(isbn: &str) -> DomainResult<()> {
    if isbn.trim().is_empty() {
        return Err(DomainError::invalid("isbn", "cannot be empty"));
    }
    if !isbn_pattern().is_match(&normalize_isbn(isbn)) {
        return Err(DomainError::invalid(
            "isbn",
            format!("'{}' must contain 10 or 13 digits", isbn),
        ));
    }
    Ok(())
}

/// Critical Book Invariants:
///
/// 1. Title, genre, author and publisher are never blank
/// 2. Release year within [1888, current year + 2]
/// 3. ISBN has 10 or 13 digits once separators are removed
/// 4. Identity is (title, author, isbn, release year)
