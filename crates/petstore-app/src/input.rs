// Rust guideline compliant 2026-10-17

//! Request body validation for Pet writes.
//!
//! Bodies arrive as loose JSON so every required field can be reported with
//! its own help text before any status or existence checks run.

use crate::error::{AppError, Result};
use petstore_core::{Category, Pet, Status, Tag};
use serde::Deserialize;
use serde_json::{Map, Value};

const ID_HELP: &str = "id is required";
const CATEGORY_HELP: &str = "category is required and it has to be of type dict";
const NAME_HELP: &str = "name is required";
const PHOTO_URLS_HELP: &str = "photoUrls is required";
const TAGS_HELP: &str = "tags is required and it has to be of type dict";
const STATUS_HELP: &str = "status is required";

/// Form fields accepted by the partial update operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetForm {
    /// New name, kept unchanged when absent or blank.
    #[serde(default)]
    pub name: Option<String>,
    /// New status, required.
    #[serde(default)]
    pub status: Option<String>,
}

/// Parses and validates a full Pet body.
///
/// All six fields are required. `id` may be a JSON integer or a numeric
/// string. `photoUrls` and `tags` accept a single item in place of a list.
///
/// # Errors
///
/// - `MissingField` / `InvalidField` for absent or malformed fields
/// - `InvalidStatus` if every field is present but the status is unknown,
///   reported ahead of a malformed `id`
pub fn parse_pet_body(body: &Value) -> Result<Pet> {
    let object = body.as_object().ok_or_else(|| AppError::InvalidField {
        field: "body",
        message: "Request body must be a JSON object".to_string(),
    })?;

    let raw_id = required(object, "id", ID_HELP)?;
    let category = parse_category(required(object, "category", CATEGORY_HELP)?)?;
    let name = parse_name(required(object, "name", NAME_HELP)?)?;
    let photo_urls = parse_photo_urls(required(object, "photoUrls", PHOTO_URLS_HELP)?)?;
    let tags = parse_tags(required(object, "tags", TAGS_HELP)?)?;
    let status = required(object, "status", STATUS_HELP)?;

    let status = match status {
        Value::String(raw) => Status::parse(raw).ok_or_else(|| AppError::InvalidStatus(raw.clone()))?,
        other => return Err(AppError::InvalidStatus(other.to_string())),
    };

    let id = parse_id(raw_id)?;

    Ok(Pet {
        id,
        category,
        name,
        photo_urls,
        tags,
        status,
    })
}

/// Expands status query values into statuses, in request order, without repeats.
///
/// Each value may itself be a comma-separated list.
///
/// # Errors
///
/// Returns `InvalidStatusFilter` for the first unknown value.
pub fn parse_status_filters<S: AsRef<str>>(values: &[S]) -> Result<Vec<Status>> {
    let mut statuses = Vec::new();
    for value in values {
        for part in value.as_ref().split(',') {
            let part = part.trim();
            let status =
                Status::parse(part).ok_or_else(|| AppError::InvalidStatusFilter(part.to_string()))?;
            if !statuses.contains(&status) {
                statuses.push(status);
            }
        }
    }
    Ok(statuses)
}

/// Parses a form status, where absence is also an invalid status.
pub(crate) fn parse_form_status(value: Option<&str>) -> Result<Status> {
    let raw = value.unwrap_or_default();
    Status::parse(raw.trim()).ok_or_else(|| AppError::InvalidStatus(raw.to_string()))
}

fn required<'a>(object: &'a Map<String, Value>, field: &'static str, help: &str) -> Result<&'a Value> {
    match object.get(field) {
        None | Some(Value::Null) => Err(AppError::MissingField {
            field,
            message: help.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

fn invalid(field: &'static str, message: &str) -> AppError {
    AppError::InvalidField {
        field,
        message: message.to_string(),
    }
}

fn parse_id(value: &Value) -> Result<i64> {
    let id = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.trim().parse::<i64>().ok(),
        _ => None,
    };
    match id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(invalid("id", "id must be a positive integer")),
    }
}

fn parse_category(value: &Value) -> Result<Category> {
    if !value.is_object() {
        return Err(invalid("category", CATEGORY_HELP));
    }
    Category::deserialize(value).map_err(|e| invalid("category", &format!("{}: {}", CATEGORY_HELP, e)))
}

fn parse_name(value: &Value) -> Result<String> {
    match value {
        Value::String(name) if !name.trim().is_empty() => Ok(name.clone()),
        _ => Err(invalid("name", NAME_HELP)),
    }
}

fn parse_photo_urls(value: &Value) -> Result<Vec<String>> {
    let items = one_or_many(value);
    items
        .into_iter()
        .map(|item| match item {
            Value::String(url) if !url.trim().is_empty() => Ok(url.clone()),
            _ => Err(invalid("photoUrls", "photoUrls must be a list of non-empty strings")),
        })
        .collect()
}

fn parse_tags(value: &Value) -> Result<Vec<Tag>> {
    let items = one_or_many(value);
    items
        .into_iter()
        .map(|item| {
            if !item.is_object() {
                return Err(invalid("tags", TAGS_HELP));
            }
            Tag::deserialize(item).map_err(|e| invalid("tags", &format!("{}: {}", TAGS_HELP, e)))
        })
        .collect()
}

fn one_or_many(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}
