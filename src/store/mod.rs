//! Model Store - persistence of the item and permutation tables
//!
//! Document layout:
//!
//! ```json
//! { "vectors": { "a": [..], "dummyvector": [..] },
//!   "permutations": { "a": [..], "vowelsequence": [..] } }
//! ```
//!
//! Each field is loaded into the table of the same name. A reload never
//! patches a live space: [`SharedSpace`] swaps the whole bundle at once.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::{PhoneticError, Result};
use crate::space::{ItemTable, PermutationTable, SymbolSpace};

#[derive(Serialize)]
struct ModelDocumentRef<'a> {
    vectors: &'a ItemTable,
    permutations: &'a PermutationTable,
}

#[derive(Deserialize)]
struct ModelDocument {
    vectors: ItemTable,
    permutations: PermutationTable,
}

pub struct ModelStore;

impl ModelStore {
    pub fn save(path: impl AsRef<Path>, space: &SymbolSpace) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| PhoneticError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let document = ModelDocumentRef {
            vectors: space.items(),
            permutations: space.permutations(),
        };
        serde_json::to_writer(&mut writer, &document)?;
        writer.flush().map_err(|e| PhoneticError::io(path, e))?;

        info!(
            path = %path.display(),
            items = space.items().len(),
            permutations = space.permutations().len(),
            "model saved"
        );
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<SymbolSpace> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| PhoneticError::io(path, e))?;
        let document: ModelDocument = serde_json::from_slice(&bytes)?;
        let space = SymbolSpace::from_tables(document.vectors, document.permutations)?;

        info!(
            path = %path.display(),
            dimensionality = space.dimensionality(),
            items = space.items().len(),
            permutations = space.permutations().len(),
            "model loaded"
        );
        Ok(space)
    }

    /// Save, logging instead of failing; returns whether the model was written
    pub fn save_logged(path: impl AsRef<Path>, space: &SymbolSpace) -> bool {
        let path = path.as_ref();
        match Self::save(path, space) {
            Ok(()) => true,
            Err(err) => {
                error!(path = %path.display(), error = %err, "could not write model");
                false
            }
        }
    }

    /// Load, logging failures and falling back to an empty (unusable) space
    pub fn load_or_empty(path: impl AsRef<Path>) -> SymbolSpace {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(space) => space,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read model");
                SymbolSpace::empty()
            }
        }
    }
}

/// Process-wide handle to the current symbol space
///
/// Readers take an `Arc` snapshot and keep using it even if a reload
/// happens meanwhile.
pub struct SharedSpace {
    inner: RwLock<Arc<SymbolSpace>>,
}

impl SharedSpace {
    pub fn new(space: SymbolSpace) -> Self {
        Self {
            inner: RwLock::new(Arc::new(space)),
        }
    }

    pub fn current(&self) -> Arc<SymbolSpace> {
        Arc::clone(&self.inner.read())
    }

    /// Swap in a new space, returning the previous one
    pub fn replace(&self, space: SymbolSpace) -> Arc<SymbolSpace> {
        std::mem::replace(&mut *self.inner.write(), Arc::new(space))
    }

    /// Load from disk and swap only when the load succeeded
    pub fn reload(&self, path: impl AsRef<Path>) -> Result<()> {
        let space = ModelStore::load(path)?;
        self.replace(space);
        Ok(())
    }
}
