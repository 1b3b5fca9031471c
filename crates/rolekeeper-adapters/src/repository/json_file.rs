//! JSON file role repository.
//!
//! The whole role set lives in one JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "last_id": 2,
//!   "roles": [
//!     { "id": 1, "name": "ADMIN", "created_at": "2024-05-01T09:30:00Z" }
//!   ]
//! }
//! ```
//!
//! Every call reads the file; every mutation rewrites it through a sibling
//! temp file and a rename, so readers see the old or the new document and
//! never a partial one. A missing file is an empty store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rolekeeper_core::{
    application::{RepositoryError, ports::RolePort},
    domain::{Role, RoleId, RoleName},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::table::RoleTable;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct RoleDocument {
    version: u32,
    #[serde(default)]
    last_id: i64,
    #[serde(default)]
    roles: Vec<Role>,
}

/// Role store backed by a JSON file.
pub struct JsonFileRoleRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    guard: Mutex<()>,
}

impl JsonFileRoleRepository {
    /// Open (lazily) the store at `path`. Nothing is touched until the
    /// first call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<RoleTable, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(RoleTable::default()),
            Err(e) => return Err(map_io_error(&self.path, e, "read role store")),
        };

        if raw.trim().is_empty() {
            return Ok(RoleTable::default());
        }

        let doc: RoleDocument =
            serde_json::from_str(&raw).map_err(|e| RepositoryError::Corrupted {
                reason: format!("{}: {}", self.path.display(), e),
            })?;

        if doc.version != FORMAT_VERSION {
            return Err(RepositoryError::Corrupted {
                reason: format!(
                    "{}: unsupported format version {} (expected {})",
                    self.path.display(),
                    doc.version,
                    FORMAT_VERSION
                ),
            });
        }

        RoleTable::from_rows(doc.last_id, doc.roles)
    }

    fn store(&self, table: &RoleTable) -> Result<(), RepositoryError> {
        let doc = RoleDocument {
            version: FORMAT_VERSION,
            last_id: table.last_id(),
            roles: table.rows().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&doc).map_err(|e| RepositoryError::Unavailable {
            reason: format!("failed to encode role store: {e}"),
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| map_io_error(&tmp, e, "write role store"))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            map_io_error(&self.path, e, "replace role store")
        })?;

        debug!(path = %self.path.display(), roles = table.len(), "Role store written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "roles.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read<T>(&self, f: impl FnOnce(&RoleTable) -> T) -> Result<T, RepositoryError> {
        let _lock = self.guard.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(f(&self.load()?))
    }

    fn modify<T>(
        &self,
        f: impl FnOnce(&mut RoleTable) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let _lock = self.guard.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        let mut table = self.load()?;
        let out = f(&mut table)?;
        self.store(&table)?;
        Ok(out)
    }
}

impl RolePort for JsonFileRoleRepository {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, role: Role) -> Result<Role, RepositoryError> {
        self.modify(|table| table.save(role))
    }

    fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RepositoryError> {
        self.read(|table| table.find_by_id(id).cloned())
    }

    fn find_by_name(&self, name: &RoleName) -> Result<Option<Role>, RepositoryError> {
        self.read(|table| table.find_by_name(name).cloned())
    }

    fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        self.read(|table| table.rows().cloned().collect())
    }

    fn find_by_name_containing(&self, pattern: &str) -> Result<Vec<Role>, RepositoryError> {
        self.read(|table| table.find_by_name_containing(pattern))
    }

    fn exists_by_name(&self, name: &RoleName) -> Result<bool, RepositoryError> {
        self.read(|table| table.find_by_name(name).is_some())
    }

    #[instrument(skip_all, fields(path = %self.path.display(), %id))]
    fn delete_by_id(&self, id: RoleId) -> Result<bool, RepositoryError> {
        let _lock = self.guard.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        let mut table = self.load()?;
        if !table.remove(id) {
            return Ok(false);
        }
        self.store(&table)?;
        Ok(true)
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        self.read(|table| table.len() as u64)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> RepositoryError {
    RepositoryError::Unavailable {
        reason: format!("Failed to {} at {}: {}", operation, path.display(), e),
    }
}
