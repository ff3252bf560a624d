// Rust guideline compliant 2026-10-17

//! Core data models for Petstore.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sale status of a Pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Pet is available for adoption.
    Available,
    /// Pet has an adoption in progress.
    Pending,
    /// Pet has been sold.
    Sold,
}

impl Status {
    /// All statuses in their canonical order.
    pub const ALL: [Status; 3] = [Status::Available, Status::Pending, Status::Sold];

    /// Parses a wire value into a `Status`.
    ///
    /// Matching is exact; `"Available"` is not accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Status::Available),
            "pending" => Some(Status::Pending),
            "sold" => Some(Status::Sold),
            _ => None,
        }
    }

    /// Returns the wire value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Pending => "pending",
            Status::Sold => "sold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category a Pet belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Category display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Free-form tag attached to a Pet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Tag display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A Pet record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique positive identifier chosen by the client.
    pub id: i64,
    /// Category of the Pet.
    #[serde(default)]
    pub category: Category,
    /// Display name.
    pub name: String,
    /// URLs of photos of the Pet.
    #[serde(rename = "photoUrls", default)]
    pub photo_urls: Vec<String>,
    /// Tags for the Pet.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Current sale status.
    pub status: Status,
}

impl Pet {
    /// Creates a Pet with the given id, name and status and empty collections.
    pub fn new(id: i64, name: impl Into<String>, status: Status) -> Self {
        Self {
            id,
            category: Category::default(),
            name: name.into(),
            photo_urls: Vec::new(),
            tags: Vec::new(),
            status,
        }
    }

    /// Validates the Pet data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is not positive
    /// - The name is blank
    /// - A photo URL is blank
    pub fn validate(&self) -> crate::Result<()> {
        if self.id <= 0 {
            return Err(crate::Error::InvalidPet(format!(
                "ID must be a positive integer, got {}",
                self.id
            )));
        }

        if self.name.trim().is_empty() {
            return Err(crate::Error::InvalidPet("Name cannot be empty".to_string()));
        }

        if self.photo_urls.iter().any(|url| url.trim().is_empty()) {
            return Err(crate::Error::InvalidPet(
                "Photo URLs cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parses a raw path segment into a Pet identifier.
///
/// # Errors
///
/// Returns `Error::InvalidId` unless the value is a base-10 integer greater than zero.
pub fn parse_pet_id(raw: &str) -> crate::Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(crate::Error::InvalidId(raw.to_string())),
    }
}
