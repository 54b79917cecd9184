use serde::Serialize;
use std::fmt;

use super::types::Booking;

/// Display category of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Project,
    Event,
    Workshop,
    Seminar,
    Uncategorized,
}

impl CategoryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::Project => "project",
            CategoryTag::Event => "event",
            CategoryTag::Workshop => "workshop",
            CategoryTag::Seminar => "seminar",
            CategoryTag::Uncategorized => "uncategorized",
        }
    }

    /// Single-character marker for the terminal grid
    pub fn marker(&self) -> char {
        match self {
            CategoryTag::Project => 'P',
            CategoryTag::Event => 'E',
            CategoryTag::Workshop => 'W',
            CategoryTag::Seminar => 'S',
            CategoryTag::Uncategorized => '*',
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword rule: content containing `keyword` gets `tag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub keyword: String,
    pub tag: CategoryTag,
}

impl Rule {
    pub fn new(keyword: impl Into<String>, tag: CategoryTag) -> Self {
        Self {
            keyword: keyword.into(),
            tag,
        }
    }

    pub fn matches(&self, content: &str) -> bool {
        content.contains(self.keyword.as_str())
    }
}

/// Ordered rule list; the first matching rule decides the tag.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn classify(&self, content: &str) -> CategoryTag {
        self.rules
            .iter()
            .find(|rule| rule.matches(content))
            .map(|rule| rule.tag)
            .unwrap_or(CategoryTag::Uncategorized)
    }

    /// Classifies by the source category when it matches a rule, otherwise
    /// by the location text.
    pub fn classify_booking(&self, booking: &Booking) -> CategoryTag {
        match self.classify(&booking.category) {
            CategoryTag::Uncategorized => self.classify(&booking.location),
            tag => tag,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(vec![
            Rule::new("プロジェクト", CategoryTag::Project),
            Rule::new("イベント", CategoryTag::Event),
            Rule::new("ワークショップ", CategoryTag::Workshop),
            Rule::new("セミナー", CategoryTag::Seminar),
        ])
    }
}
