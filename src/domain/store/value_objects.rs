use crate::domain::errors::{DomainError, DomainResult};
use regex::{Regex, RegexBuilder};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(pub i64);

impl StoreId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("store id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<StoreId> for i64 {
    fn from(value: StoreId) -> Self {
        value.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a store. Surrounding whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreName(String);

impl StoreName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("store name cannot be empty".into()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StoreName> for String {
    fn from(value: StoreName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSlug(String);

impl StoreSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Appends a numeric `-n` suffix.
    pub fn with_suffix(&self, n: usize) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoreSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StoreSlug> for String {
    fn from(value: StoreSlug) -> Self {
        value.0
    }
}

/// Optional free text. Blank input collapses to no description at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDescription(String);

impl StoreDescription {
    pub fn parse(value: Option<String>) -> Option<Self> {
        value
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreAddress(String);

impl StoreAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("address cannot be empty".into()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationKind {
    #[default]
    Point,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
        }
    }
}

impl FromStr for LocationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(Self::Point),
            other => Err(DomainError::Validation(format!(
                "unsupported location type: {other}"
            ))),
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a store is. `coordinates` is conventionally `[longitude, latitude]`
/// but its length is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub kind: LocationKind,
    pub coordinates: Vec<f64>,
    pub address: StoreAddress,
}

impl Location {
    pub fn new(
        kind: LocationKind,
        coordinates: Vec<f64>,
        address: StoreAddress,
    ) -> DomainResult<Self> {
        if coordinates.is_empty() {
            return Err(DomainError::Validation(
                "coordinates must be supplied".into(),
            ));
        }
        if coordinates.iter().any(|c| !c.is_finite()) {
            return Err(DomainError::Validation(
                "coordinates must be finite numbers".into(),
            ));
        }
        Ok(Self {
            kind,
            coordinates,
            address,
        })
    }

    pub fn point(coordinates: Vec<f64>, address: StoreAddress) -> DomainResult<Self> {
        Self::new(LocationKind::Point, coordinates, address)
    }
}

/// Matches a base slug on its own or followed by `-` and digits, anchored at
/// both ends and ignoring case.
#[derive(Debug, Clone)]
pub struct SlugPattern {
    base: StoreSlug,
    regex: Regex,
}

impl SlugPattern {
    pub fn for_base(base: &StoreSlug) -> DomainResult<Self> {
        let source = format!(r"^({})((-[0-9]*)?)$", regex::escape(base.as_str()));
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|err| DomainError::Validation(format!("invalid slug pattern: {err}")))?;
        Ok(Self {
            base: base.clone(),
            regex,
        })
    }

    pub fn base(&self) -> &StoreSlug {
        &self.base
    }

    pub fn matches(&self, slug: &str) -> bool {
        self.regex.is_match(slug)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
