use serde::Serialize;

/// Placeholder for a card field that could not be read.
pub const MISSING_FIELD: &str = "NONE";
/// Placeholder for an absent detail link, or for an experience requirement
/// the posting never states.
pub const NOT_MENTIONED: &str = "not mentioned";

/// Outcome of one field read against the DOM. Resolution to a sentinel
/// happens in [`JobRecord::from_card`], nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Found(String),
    Unavailable,
}

impl Field {
    pub fn or_sentinel(self, sentinel: &str) -> String {
        match self {
            Self::Found(value) => value,
            Self::Unavailable => sentinel.to_string(),
        }
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => Self::Found(value),
            None => Self::Unavailable,
        }
    }
}

/// Raw reads from one listing card, before sentinel resolution.
#[derive(Debug, Clone)]
pub struct CardFields {
    pub title: Field,
    pub location: Field,
    /// Absolute detail link. `None` means the card gets no detail visit.
    pub link: Option<String>,
}

/// One extracted posting. Field declaration order is the output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    #[serde(rename = "Job")]
    pub job: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    /// The detail link when the card had one. The same field doubles as the
    /// description column of the dump, holding `"not mentioned"` when no
    /// link was found.
    #[serde(rename = "Job Description")]
    pub description: String,
    #[serde(rename = "Source Page")]
    pub source_page: usize,
}

impl JobRecord {
    /// The single place tagged reads become sentinels.
    pub fn from_card(card: CardFields, experience: String, source_page: usize) -> Self {
        Self {
            job: card.title.or_sentinel(MISSING_FIELD),
            location: card.location.or_sentinel(MISSING_FIELD),
            experience,
            description: card.link.unwrap_or_else(|| NOT_MENTIONED.to_string()),
            source_page,
        }
    }
}
