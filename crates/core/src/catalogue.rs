use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CoreError;

/// Backend-assigned (or caller-supplied) catalogue identifier.
pub type CatalogueId = i64;

/// One catalogue as returned by the backend.
///
/// Decoding is lenient because the backend is not consistent about
/// representations: ids may be numeric strings, the active flag may be a bool,
/// an integer or a `"0"`/`"1"` string, and dates may be ISO or RFC 2822.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(deserialize_with = "de_id")]
    pub catalogue_id: CatalogueId,
    #[serde(default, deserialize_with = "de_text")]
    pub catalogue_name: String,
    #[serde(default, deserialize_with = "de_text")]
    pub catalogue_version: String,
    #[serde(default, deserialize_with = "de_active")]
    pub is_cat_active: bool,
    #[serde(default, deserialize_with = "de_date")]
    pub catalogue_start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_date")]
    pub catalogue_end: Option<NaiveDate>,
}

impl Catalogue {
    /// Overwrite the fields present in `draft`. The id never changes.
    pub fn apply(&mut self, draft: &CatalogueDraft) {
        if let Some(name) = &draft.catalogue_name {
            self.catalogue_name.clone_from(name);
        }
        if let Some(version) = &draft.catalogue_version {
            self.catalogue_version.clone_from(version);
        }
        if let Some(flag) = draft.is_cat_active {
            self.is_cat_active = flag.is_active();
        }
        if let Some(start) = draft.catalogue_start.as_deref().and_then(|s| parse_wire_date(s).ok())
        {
            self.catalogue_start = Some(start);
        }
        if let Some(end) = draft.catalogue_end.as_deref().and_then(|s| parse_wire_date(s).ok()) {
            self.catalogue_end = Some(end);
        }
    }
}

/// Active flag as carried by form controls and write payloads: `"1"` / `"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFlag {
    #[default]
    Active,
    Inactive,
}

impl ActiveFlag {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "1",
            Self::Inactive => "0",
        }
    }
}

impl From<bool> for ActiveFlag {
    fn from(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }
}

impl std::str::FromStr for ActiveFlag {
    type Err = CoreError;

    /// A blank control is not a choice, so it is refused rather than read as `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Some(s)
            .filter(|s| !s.trim().is_empty())
            .and_then(parse_flag)
            .map(Self::from)
            .ok_or_else(|| CoreError::InvalidInput(format!("invalid active flag: {s}")))
    }
}

impl std::fmt::Display for ActiveFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ActiveFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Write payload for create and update calls.
///
/// Absent fields are left out of the JSON body so the backend, not the
/// client, decides what a missing field means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogueDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogue_id: Option<CatalogueId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogue_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogue_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cat_active: Option<ActiveFlag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogue_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogue_end: Option<String>,
}

impl CatalogueDraft {
    /// Full payload mirroring an existing record.
    pub fn from_record(record: &Catalogue) -> Self {
        Self {
            catalogue_id: Some(record.catalogue_id),
            catalogue_name: Some(record.catalogue_name.clone()),
            catalogue_version: Some(record.catalogue_version.clone()),
            is_cat_active: Some(record.is_cat_active.into()),
            catalogue_start: record.catalogue_start.map(|d| d.to_string()),
            catalogue_end: record.catalogue_end.map(|d| d.to_string()),
        }
    }

    /// Update bodies are keyed by the URL, so the id is dropped.
    #[must_use]
    pub fn without_id(mut self) -> Self {
        self.catalogue_id = None;
        self
    }
}

/// Parse a date the way the backend may send it.
///
/// Accepts `YYYY-MM-DD`, an ISO date-time (the date part is kept) and RFC 2822
/// (`Tue, 01 Sep 2025 00:00:00 GMT`).
pub fn parse_wire_date(raw: &str) -> crate::Result<NaiveDate> {
    let s = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Some(date) = s
        .get(..10)
        .filter(|_| s.as_bytes().get(10).is_some_and(|b| *b == b'T' || *b == b' '))
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    {
        return Ok(date);
    }
    DateTime::parse_from_rfc2822(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| CoreError::InvalidDate(raw.to_owned()))
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "active" => Some(true),
        "0" | "false" | "no" | "off" | "inactive" | "" => Some(false),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CatalogueId, D::Error> {
    use serde::de::Error;
    match Loose::deserialize(deserializer)? {
        Loose::Int(n) => Ok(n),
        Loose::Float(f) if f.fract() == 0.0 => Ok(f as CatalogueId),
        Loose::Text(s) => {
            s.trim().parse().map_err(|_| D::Error::custom(format!("invalid catalogue_id: {s}")))
        },
        _ => Err(D::Error::custom("catalogue_id must be an integer")),
    }
}

fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => String::new(),
        Some(Loose::Text(s)) => s,
        Some(Loose::Int(n)) => n.to_string(),
        Some(Loose::Float(f)) => f.to_string(),
        Some(Loose::Bool(b)) => b.to_string(),
    })
}

fn de_active<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    use serde::de::Error;
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Loose::Bool(b)) => Ok(b),
        Some(Loose::Int(n)) => Ok(n != 0),
        Some(Loose::Float(f)) => Ok(f != 0.0),
        Some(Loose::Text(s)) => {
            parse_flag(&s).ok_or_else(|| D::Error::custom(format!("invalid is_cat_active: {s}")))
        },
    }
}

fn de_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    use serde::de::Error;
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_wire_date(&s).map(Some).map_err(D::Error::custom),
    }
}
