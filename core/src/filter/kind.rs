use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Alphabets,
    Numbers,
    HighestLowercase,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Alphabets,
        FilterKind::Numbers,
        FilterKind::HighestLowercase,
    ];

    /// Identifier used as the key in a filtered response.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alphabets => "alphabets",
            Self::Numbers => "numbers",
            Self::HighestLowercase => "highestLowercase",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Alphabets => "Alphabets",
            Self::Numbers => "Numbers",
            Self::HighestLowercase => "Highest Lowercase Alphabet",
        }
    }

    /// Field of the service response this filter reads from.
    pub fn backend_field(self) -> &'static str {
        match self {
            Self::Alphabets => "alphabets",
            Self::Numbers => "numbers",
            Self::HighestLowercase => "highestLowercaseAlphabet",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter '{0}' (expected one of: alphabets, numbers, highestLowercase)")]
pub struct UnknownFilter(pub String);

impl FromStr for FilterKind {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "alphabets" => Ok(Self::Alphabets),
            "numbers" => Ok(Self::Numbers),
            "highestlowercase" | "highestlowercasealphabet" => Ok(Self::HighestLowercase),
            _ => Err(UnknownFilter(s.trim().to_string())),
        }
    }
}

/// Filters in the order the user picked them, without repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    kinds: Vec<FilterKind>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `kind` at the end. Returns false if it was already selected.
    pub fn select(&mut self, kind: FilterKind) -> bool {
        if self.kinds.contains(&kind) {
            return false;
        }
        self.kinds.push(kind);
        true
    }

    pub fn deselect(&mut self, kind: FilterKind) -> bool {
        let before = self.kinds.len();
        self.kinds.retain(|k| *k != kind);
        self.kinds.len() != before
    }

    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    pub fn contains(&self, kind: FilterKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FilterKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Parses a comma separated list such as `alphabets,highestLowercase`.
    pub fn parse_list(s: &str) -> Result<Self, UnknownFilter> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(FilterKind::from_str)
            .collect()
    }
}

impl FromIterator<FilterKind> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = FilterKind>>(iter: I) -> Self {
        let mut selection = Self::new();
        for kind in iter {
            selection.select(kind);
        }
        selection
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.kinds.iter().map(|k| k.as_str()).collect();
        f.write_str(&names.join(","))
    }
}
