use chrono::NaiveDate;

use crate::domain::{require_not_future, require_text, today, DomainResult};

/// A user's written opinion about a media item or a season
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    text: String,
    created_on: NaiveDate,
}

impl Review {
    /// Create a review written on `created_on`
    /// Fails if the text is blank or the date lies in the future
    pub fn new(text: impl Into<String>, created_on: NaiveDate) -> DomainResult<Self> {
        let text = require_text("review", text.into())?;
        let created_on = require_not_future("review_date", created_on)?;
        Ok(Self { text, created_on })
    }

    /// Create a review dated today
    pub fn today(text: impl Into<String>) -> DomainResult<Self> {
        Self::new(text, today())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.text, self.created_on.format("%d/%m/%Y"))
    }
}
