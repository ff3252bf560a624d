// Rust guideline compliant 2026-10-17

//! Pet use cases shared by every transport.

use crate::error::{AppError, Result};
use crate::input::{parse_form_status, parse_pet_body, parse_status_filters, PetForm};
use crate::repo::StoreContext;
use crate::response::ApiResponse;
use petstore_core::{
    is_supported_image, parse_pet_id, Config, Error as CoreError, ImageStore, Pet, Storage,
};
use serde_json::Value;
use std::path::Path;

/// A file received in an upload request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name.
    pub file_name: String,
    /// Declared content type.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Parts of an image upload request.
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    /// The `file` part, if one was sent.
    pub file: Option<UploadedFile>,
    /// The optional `additionalMetadata` part.
    pub additional_metadata: Option<String>,
}

/// Pet operations bound to one data directory.
#[derive(Debug, Clone)]
pub struct PetService {
    context: StoreContext,
    config: Config,
    storage: Storage,
    images: ImageStore,
}

impl PetService {
    /// Opens the service for the data directory under `root` (or the current directory).
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not initialized or its config is invalid.
    pub fn open(root: Option<&Path>) -> Result<Self> {
        Self::from_context(StoreContext::discover(root)?)
    }

    /// Builds the service from an already discovered store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn from_context(context: StoreContext) -> Result<Self> {
        let config = context.load_config()?;
        Self::with_config(context, config)
    }

    /// Builds the service with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage path is unusable.
    pub fn with_config(context: StoreContext, config: Config) -> Result<Self> {
        let storage = context.open_storage()?;
        let images = context.open_images(&config);
        Ok(Self {
            context,
            config,
            storage,
            images,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the store this service operates on.
    #[must_use]
    pub fn context(&self) -> &StoreContext {
        &self.context
    }

    /// Returns the directory uploaded images are written to.
    #[must_use]
    pub fn images_dir(&self) -> &Path {
        self.images.dir()
    }

    /// Creates a Pet, replacing any existing record with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is invalid or the store cannot be written.
    pub fn add_pet(&self, body: &Value) -> Result<Pet> {
        let pet = parse_pet_body(body)?;
        self.storage.with_lock(|| self.storage.save(&pet))?;
        tracing::info!(pet_id = pet.id, status = %pet.status, "Pet added");
        Ok(pet)
    }

    /// Replaces an existing Pet.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is invalid, the Pet does not exist, or the
    /// store cannot be written.
    pub fn update_pet(&self, body: &Value) -> Result<Pet> {
        let pet = parse_pet_body(body)?;
        self.storage.with_lock(|| {
            if !self.storage.contains(pet.id)? {
                return Err(CoreError::NotFound(pet.id));
            }
            self.storage.save(&pet)
        })?;
        tracing::info!(pet_id = pet.id, status = %pet.status, "Pet updated");
        Ok(pet)
    }

    /// Returns Pets matching any requested status, grouped in request order.
    ///
    /// # Errors
    ///
    /// Returns an error if a status is unknown or the store cannot be read.
    pub fn find_by_status<S: AsRef<str>>(&self, values: &[S]) -> Result<Vec<Pet>> {
        let statuses = parse_status_filters(values)?;
        let mut pets = Vec::new();
        for status in statuses {
            pets.extend(self.storage.find_by_status(status)?);
        }
        tracing::debug!(count = pets.len(), "Pets found by status");
        Ok(pets)
    }

    /// Returns a single Pet.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is invalid or the Pet does not exist.
    pub fn get_pet(&self, raw_id: &str) -> Result<Pet> {
        let id = parse_pet_id(raw_id)?;
        Ok(self.storage.load_by_id(id)?)
    }

    /// Updates the name and status of a Pet from form fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or status is invalid, or the Pet does not exist.
    pub fn update_pet_with_form(&self, raw_id: &str, form: &PetForm) -> Result<Pet> {
        let id = parse_pet_id(raw_id)?;
        let status = parse_form_status(form.status.as_deref())?;
        let name = form
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        let pet = self.storage.with_lock(|| {
            let mut pet = self.storage.load_by_id(id)?;
            if let Some(name) = name {
                pet.name = name.to_string();
            }
            pet.status = status;
            self.storage.save(&pet)?;
            Ok(pet)
        })?;

        tracing::info!(pet_id = pet.id, status = %pet.status, "Pet updated from form");
        Ok(pet)
    }

    /// Deletes a Pet after checking the API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is wrong, the id is invalid, or the Pet does
    /// not exist.
    pub fn delete_pet(&self, api_key: Option<&str>, raw_id: &str) -> Result<ApiResponse> {
        if api_key != Some(self.config.api_key.as_str()) {
            tracing::warn!(raw_id, "Rejected delete with invalid API key");
            return Err(AppError::InvalidApiKey);
        }

        let id = parse_pet_id(raw_id)?;
        self.storage.with_lock(|| self.storage.delete(id))?;

        tracing::info!(pet_id = id, "Pet deleted");
        Ok(ApiResponse::ok("success", "Pet deleted"))
    }

    /// Stores an uploaded image and links it from the Pet's photo URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if no file was sent, the id is invalid, the Pet does not
    /// exist, the content type is not an image, or the file cannot be written.
    pub fn upload_image(&self, raw_id: &str, upload: ImageUpload) -> Result<ApiResponse> {
        let file = upload.file.ok_or(AppError::MissingFile)?;
        let id = parse_pet_id(raw_id)?;

        // Fail fast before touching the image directory.
        self.storage.load_by_id(id)?;

        if !is_supported_image(&file.content_type) {
            return Err(AppError::UnsupportedImage(file.content_type));
        }

        let stored = self.images.save(&file.file_name, &file.bytes)?;
        let link = format!("{}{}", self.config.images_link, stored);

        let linked = self.storage.with_lock(|| {
            let mut pet = self.storage.load_by_id(id)?;
            pet.photo_urls.push(link.clone());
            self.storage.save(&pet)
        });

        if let Err(error) = linked {
            if let Err(cleanup) = std::fs::remove_file(self.images.dir().join(&stored)) {
                tracing::warn!(file = %stored, error = %cleanup, "Failed to remove orphaned image");
            }
            return Err(error.into());
        }

        tracing::info!(
            pet_id = id,
            file = %stored,
            bytes = file.bytes.len(),
            metadata = upload.additional_metadata.as_deref().unwrap_or(""),
            "Image uploaded"
        );

        Ok(ApiResponse::ok(
            file.content_type,
            format!("file was uploaded to {}", stored),
        ))
    }
}
