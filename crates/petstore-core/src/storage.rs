// Rust guideline compliant 2026-10-17

//! Storage module for the JSONL pet document store.
//!
//! Each line of the store file holds one serialized [`Pet`]. Writes rewrite the
//! whole file through a temp file and an atomic rename, and callers that perform
//! read-modify-write cycles wrap them in [`Storage::with_lock`].

use crate::{Error, Pet, Result, Status};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Number of records above which status filtering runs on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Storage engine for Pets.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage {
    /// Loads all Pets from the JSONL file.
    ///
    /// A missing file is treated as an empty store. Malformed lines are skipped
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - A Pet fails validation
    pub fn load_all(&self) -> Result<Vec<Pet>> {
        let mut pets = Vec::new();
        self.scan(|pet| {
            pets.push(pet);
            false
        })?;
        Ok(pets)
    }

    /// Loads a single Pet by ID with early termination.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The Pet is not found
    pub fn load_by_id(&self, id: i64) -> Result<Pet> {
        let mut found = None;
        self.scan(|pet| {
            if pet.id == id {
                found = Some(pet);
                return true;
            }
            false
        })?;
        found.ok_or(Error::NotFound(id))
    }

    /// Streams validated Pets to `visit` line by line until it returns true.
    fn scan<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(Pet) -> bool,
    {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(());
        }

        let reader = BufReader::new(File::open(&self.path)?);

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Pet>(&line) {
                Ok(pet) => {
                    pet.validate()?;
                    if visit(pet) {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = number + 1,
                        error = %e,
                        "Skipping malformed JSON line"
                    );
                }
            }
        }

        Ok(())
    }

    /// Returns true if a Pet with the given ID is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn contains(&self, id: i64) -> Result<bool> {
        match self.load_by_id(id) {
            Ok(_) => Ok(true),
            Err(Error::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Returns all Pets with the given status, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn find_by_status(&self, status: Status) -> Result<Vec<Pet>> {
        let pets = self.load_all()?;
        let matches = if pets.len() >= PARALLEL_THRESHOLD {
            pets.into_par_iter().filter(|p| p.status == status).collect()
        } else {
            pets.into_iter().filter(|p| p.status == status).collect()
        };
        Ok(matches)
    }
}

impl Storage {
    /// Saves a single Pet to the JSONL file.
    ///
    /// If a Pet with the same ID exists it is replaced in place, otherwise the Pet
    /// is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The Pet fails validation
    /// - The file cannot be read or written
    pub fn save(&self, pet: &Pet) -> Result<()> {
        pet.validate()?;

        let mut pets = self.load_all()?;

        if let Some(pos) = pets.iter().position(|p| p.id == pet.id) {
            pets[pos] = pet.clone();
        } else {
            pets.push(pet.clone());
        }

        self.save_all(&pets)
    }

    /// Replaces the entire file with the provided Pets.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any Pet fails validation
    /// - The file cannot be written
    /// - The atomic rename fails
    pub fn save_all(&self, pets: &[Pet]) -> Result<()> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        for pet in pets {
            pet.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);

            for pet in pets {
                let json = serde_json::to_string(pet)?;
                writer.write_all(json.as_bytes())?;
                writer.write_all(b"\n")?;
            }

            let file = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Deletes a Pet by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or written
    /// - The Pet is not found
    pub fn delete(&self, id: i64) -> Result<()> {
        let mut pets = self.load_all()?;

        let initial_len = pets.len();
        pets.retain(|p| p.id != id);

        if pets.len() == initial_len {
            return Err(Error::NotFound(id));
        }

        self.save_all(&pets)
    }
}

impl Storage {
    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// The lock lives on a sibling `.lock` file and blocks until it is acquired,
    /// so concurrent writers (threads or processes) run one at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock file cannot be opened or locked
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        if let Err(e) = FileExt::unlock(&lock_file) {
            tracing::warn!(path = %lock_path.display(), error = %e, "Failed to release store lock");
        }

        result
    }
}
