// Rust guideline compliant 2026-10-17

//! Output formatting module for the Petstore CLI.
//!
//! This module provides functionality for formatting Pets
//! in various output formats (JSON, table, plain text).

use petstore_core::Pet;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting Pets in different output formats.
pub trait OutputFormatter {
    /// Formats a single Pet for display.
    ///
    /// # Arguments
    /// * `pet` - The Pet to format
    ///
    /// # Returns
    /// A formatted string representation of the Pet
    fn format_pet(&self, pet: &Pet) -> String;

    /// Formats a list of Pets for display.
    fn format_list(&self, pets: &[Pet]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats Pets exactly as the HTTP API returns them.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_pet(&self, pet: &Pet) -> String {
        serde_json::to_string_pretty(pet)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize Pet" }).to_string())
    }

    fn format_list(&self, pets: &[Pet]) -> String {
        let output = json!({
            "pets": pets,
            "total": pets.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize Pet list" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
pub struct TableFormatter;

fn tag_names(pet: &Pet) -> String {
    pet.tags
        .iter()
        .filter_map(|tag| tag.name.as_deref())
        .collect::<Vec<_>>()
        .join(", ")
}

impl OutputFormatter for TableFormatter {
    fn format_pet(&self, pet: &Pet) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:       {}\n", pet.id));
        output.push_str(&format!("Name:     {}\n", pet.name));
        output.push_str(&format!("Status:   {}\n", pet.status));

        if let Some(category) = &pet.category.name {
            output.push_str(&format!("Category: {}\n", category));
        }

        let tags = tag_names(pet);
        if !tags.is_empty() {
            output.push_str(&format!("Tags:     {}\n", tags));
        }

        if !pet.photo_urls.is_empty() {
            output.push_str("Photos:\n");
            for url in &pet.photo_urls {
                output.push_str(&format!("  - {}\n", url));
            }
        }

        output
    }

    fn format_list(&self, pets: &[Pet]) -> String {
        if pets.is_empty() {
            return "No Pets found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name", "Status", "Category", "Photos"]);

        for pet in pets {
            builder.push_record(vec![
                pet.id.to_string(),
                pet.name.clone(),
                pet.status.to_string(),
                pet.category.name.clone().unwrap_or_default(),
                pet.photo_urls.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// One Pet per line, suitable for piping into other tools.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_pet(&self, pet: &Pet) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", pet.id));
        output.push_str(&format!("{}\n", pet.name));
        output.push_str(&format!("{}\n", pet.status));
        for url in &pet.photo_urls {
            output.push_str(&format!("{}\n", url));
        }

        output
    }

    fn format_list(&self, pets: &[Pet]) -> String {
        if pets.is_empty() {
            return "No Pets found.".to_string();
        }

        let mut output = String::new();
        for pet in pets {
            output.push_str(&format!("{} {} {}\n", pet.id, pet.status, pet.name));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter),
    }
}
