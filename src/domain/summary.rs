//! Structured payloads carried by the generic notification callbacks.

/// One labeled section of a structured notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryField {
    /// Short heading for the section.
    pub heading: String,
    /// Body text under the heading.
    pub detail: String,
}

impl SummaryField {
    pub fn new(heading: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            detail: detail.into(),
        }
    }
}

/// Free-form progress report from mid-trade checkpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSummary {
    /// Leading line of the report.
    pub headline: String,
    /// Optional labeled sections following the headline.
    pub fields: Vec<SummaryField>,
}

impl TextSummary {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, heading: impl Into<String>, detail: impl Into<String>) -> Self {
        self.fields.push(SummaryField::new(heading, detail));
        self
    }
}

/// Result of inspecting an offered item's RNG seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// The recovered 64-bit seed.
    pub seed: u64,
    /// Derived frame/result sections, in display order.
    pub fields: Vec<SummaryField>,
}

impl SeedReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, heading: impl Into<String>, detail: impl Into<String>) -> Self {
        self.fields.push(SummaryField::new(heading, detail));
        self
    }
}

/// Payload of a generic mid-trade notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationSummary {
    /// Plain progress text.
    Text(TextSummary),
    /// Seed-check result, rendered as a panel plus per-channel copies.
    Seed(SeedReport),
}
