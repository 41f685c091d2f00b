use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The three kinds of work a creator can be credited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkKind {
    Book,
    Screenplay,
    Article,
}

impl WorkKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Screenplay => "screenplay",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for WorkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown work kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown work kind '{0}' (expected book, screenplay, or article)")]
pub struct InvalidWorkKind(pub String);

impl FromStr for WorkKind {
    type Err = InvalidWorkKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "book" => Ok(Self::Book),
            "screenplay" => Ok(Self::Screenplay),
            "article" => Ok(Self::Article),
            other => Err(InvalidWorkKind(other.to_string())),
        }
    }
}

/// A single work attributed to a creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: String,
    pub title: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: WorkKind,
    #[serde(default)]
    pub description: String,
}

/// A node of the influence network.
///
/// `influenced_by` and `influenced` are expected to mirror each other across
/// creators, but nothing downstream relies on that: the network builder
/// unions both declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: String,
    pub name: String,
    /// Display string for active years, e.g. `"1899-1961"`.
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub influenced_by: Vec<String>,
    #[serde(default)]
    pub influenced: Vec<String>,
    #[serde(default)]
    pub works: Vec<Work>,
}

impl Creator {
    /// Create a creator with no edges and no works.
    pub fn new(id: impl Into<String>, name: impl Into<String>, years: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            years: years.into(),
            bio: String::new(),
            influenced_by: Vec::new(),
            influenced: Vec::new(),
            works: Vec::new(),
        }
    }

    /// Builder-style helper: declare the creators this one influenced.
    #[must_use]
    pub fn with_influenced<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.influenced.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Builder-style helper: declare the creators this one was influenced by.
    #[must_use]
    pub fn with_influenced_by<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.influenced_by.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Builder-style helper: attach a work.
    #[must_use]
    pub fn with_work(mut self, work: Work) -> Self {
        self.works.push(work);
        self
    }

    /// First year of the `years` display string, if it parses.
    ///
    /// Living creators are written `b. YYYY`, sometimes with an alternate
    /// year after a slash. `"1899-1961"` → `Some(1899)`, `"b. 1968"` →
    /// `Some(1968)`, `"b. 1954/1957"` → `Some(1954)`.
    #[must_use]
    pub fn start_year(&self) -> Option<i32> {
        let years = self.years.trim();
        let years = years.strip_prefix("b.").unwrap_or(years);
        years.split(['-', '/']).next()?.trim().parse().ok()
    }

    /// Last whitespace-separated word of the display name.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_application_dataset_shape() {
        let json = r#"{
            "id": "hemingway",
            "name": "Ernest Hemingway",
            "years": "1899-1961",
            "bio": "Iceberg theory.",
            "influencedBy": ["stein"],
            "influenced": ["carver", "mccarthy"],
            "works": [
                {"id": "old-man-sea", "title": "The Old Man and the Sea", "year": 1952, "type": "book", "description": "Santiago and the marlin"}
            ]
        }"#;

        let creator: Creator = serde_json::from_str(json).expect("valid creator");
        assert_eq!(creator.id, "hemingway");
        assert_eq!(creator.influenced_by, vec!["stein"]);
        assert_eq!(creator.influenced, vec!["carver", "mccarthy"]);
        assert_eq!(creator.works.len(), 1);
        assert_eq!(creator.works[0].kind, WorkKind::Book);
    }

    #[test]
    fn missing_edge_arrays_default_to_empty() {
        let creator: Creator =
            serde_json::from_str(r#"{"id": "a", "name": "A"}"#).expect("valid creator");
        assert!(creator.influenced.is_empty());
        assert!(creator.influenced_by.is_empty());
        assert!(creator.works.is_empty());
        assert_eq!(creator.years, "");
    }

    #[test]
    fn start_year_parses_leading_year() {
        assert_eq!(Creator::new("a", "A", "1899-1961").start_year(), Some(1899));
        assert_eq!(Creator::new("b", "B", "1948-").start_year(), Some(1948));
        assert_eq!(Creator::new("c", "C", "b. 1968").start_year(), Some(1968));
        assert_eq!(Creator::new("d", "D", "b. 1954/1957").start_year(), Some(1954));
        assert_eq!(Creator::new("e", "E", "").start_year(), None);
        assert_eq!(Creator::new("f", "F", "unknown").start_year(), None);
    }

    #[test]
    fn surname_is_last_name_word() {
        assert_eq!(Creator::new("a", "Ursula K. Le Guin", "").surname(), "Guin");
        assert_eq!(Creator::new("b", "Homer", "").surname(), "Homer");
        assert_eq!(Creator::new("c", "", "").surname(), "");
    }

    #[test]
    fn work_kind_round_trips_through_str() {
        for kind in [WorkKind::Book, WorkKind::Screenplay, WorkKind::Article] {
            assert_eq!(kind.to_string().parse::<WorkKind>(), Ok(kind));
        }
        assert!("podcast".parse::<WorkKind>().is_err());
    }
}
