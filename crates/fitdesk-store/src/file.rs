//! The generic flat-file store.
//!
//! Every operation performs a full read of the backing file; every mutation
//! rewrites it completely. A per-store mutex serializes all access so that
//! each read-modify-write cycle is atomic with respect to this process, and
//! the rewrite goes through a sibling temp file followed by a rename so a
//! crash mid-write never leaves a truncated file behind.
//!
//! Cross-process coordination is deliberately out of scope: the counter
//! behind sequential identifiers is seeded once at open, so two processes
//! sharing a data directory could both observe the same maximum and
//! collide. One writer per data directory.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::alloc::IdAllocator;
use crate::codec::{self, CodecError};
use crate::error::{Result, StoreError};
use crate::{IdStrategy, Record};

/// A flat-file backed collection of one record type.
#[derive(Debug)]
pub struct FlatFileStore<R> {
    path: PathBuf,
    state: Mutex<StoreState>,
    _record: PhantomData<R>,
}

#[derive(Debug)]
struct StoreState {
    allocator: Option<IdAllocator>,
}

impl<R: Record> FlatFileStore<R> {
    /// Open a store backed by the given file, creating parent directories
    /// as needed. The file itself is created lazily on first save.
    ///
    /// For sequentially-identified records this scans the existing file to
    /// seed the identifier counter at the highest suffix present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the parent directory cannot be created
    /// or an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let allocator = match R::ID_STRATEGY {
            IdStrategy::Sequential { prefix } => {
                let records = load_records::<R>(&path)?;
                Some(IdAllocator::seed(
                    prefix,
                    records.iter().filter_map(Record::id),
                ))
            }
            IdStrategy::Token | IdStrategy::Timestamped => None,
        };

        Ok(Self {
            path,
            state: Mutex::new(StoreState { allocator }),
            _record: PhantomData,
        })
    }

    /// The store's backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every decodable record, in on-file order.
    ///
    /// A missing file is an empty collection. Malformed lines are skipped
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if an existing file cannot be read.
    pub fn find_all(&self) -> Result<Vec<R>> {
        let _guard = self.lock();
        load_records(&self.path)
    }

    /// Find the record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if an existing file cannot be read.
    pub fn find_by_id(&self, id: &str) -> Result<Option<R>> {
        Ok(self
            .find_all()?
            .into_iter()
            .find(|record| record.id() == Some(id)))
    }

    /// Find every record matching the predicate, in on-file order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if an existing file cannot be read.
    pub fn find_where(&self, predicate: impl Fn(&R) -> bool) -> Result<Vec<R>> {
        let mut records = self.find_all()?;
        records.retain(|record| predicate(record));
        Ok(records)
    }

    /// Save a record, returning it with its identifier attached.
    ///
    /// A record without an identifier is assigned one and appended. A
    /// record whose identifier matches a stored record replaces it
    /// (remove-then-add; ordering across updates is not stable). A record
    /// carrying an identifier with no match is inserted as new; callers
    /// that mean "update" should check existence first, and the insert is
    /// logged to keep the path visible.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or replaced;
    /// stored state is untouched in that case.
    pub fn save(&self, mut record: R) -> Result<R> {
        let mut state = self.lock();
        let mut records = load_records::<R>(&self.path)?;

        match record.id().map(ToString::to_string) {
            None => {
                record.assign_id(Self::next_id(&mut state));
                records.push(record.clone());
            }
            Some(id) => {
                if let Some(pos) = records.iter().position(|r| r.id() == Some(id.as_str())) {
                    records.remove(pos);
                } else {
                    tracing::warn!(
                        kind = R::KIND,
                        id = %id,
                        "no stored record matches identifier, inserting as new"
                    );
                }
                records.push(record.clone());
            }
        }

        self.persist(&records)?;
        Ok(record)
    }

    /// Delete the record with the given identifier.
    ///
    /// Returns whether a record was removed. When nothing matches, the
    /// backing file is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or replaced.
    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let _guard = self.lock();
        let mut records = load_records::<R>(&self.path)?;

        let Some(pos) = records.iter().position(|r| r.id() == Some(id)) else {
            return Ok(false);
        };
        records.remove(pos);

        self.persist(&records)?;
        Ok(true)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the next rewrite starts from the file, which is always complete.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_id(state: &mut StoreState) -> String {
        match R::ID_STRATEGY {
            IdStrategy::Sequential { prefix } => state
                .allocator
                .get_or_insert_with(|| IdAllocator::seed(prefix, []))
                .allocate(),
            IdStrategy::Token => uuid::Uuid::new_v4().to_string(),
            IdStrategy::Timestamped => ulid::Ulid::new().to_string(),
        }
    }

    fn persist(&self, records: &[R]) -> Result<()> {
        let mut contents = String::new();
        for record in records {
            contents.push_str(&codec::encode_line(&record.to_fields()));
            contents.push('\n');
        }

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, contents).map_err(|e| StoreError::io(&tmp, e))?;
        replace_file(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}

fn load_records<R: Record>(path: &Path) -> Result<Vec<R>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;

    let mut records = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line::<R>(line) {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::warn!(
                    kind = R::KIND,
                    line = number + 1,
                    %error,
                    "skipping malformed record"
                );
            }
        }
    }
    Ok(records)
}

fn decode_line<R: Record>(line: &str) -> std::result::Result<R, CodecError> {
    R::from_fields(codec::split_line(line)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("store"), ToOwned::to_owned);
    name.push(".tmp");
    path.with_file_name(name)
}

/// Move the freshly-written temp file over the destination, retrying once
/// for platforms where rename refuses to overwrite. The temp file is
/// removed if the replacement ultimately fails.
fn replace_file(tmp: &Path, dst: &Path) -> io::Result<()> {
    if let Err(first) = fs::rename(tmp, dst) {
        let _ = fs::remove_file(dst);
        if let Err(retry) = fs::rename(tmp, dst) {
            let _ = fs::remove_file(tmp);
            return Err(io::Error::new(
                retry.kind(),
                format!("atomic replace failed: {first}; retry: {retry}"),
            ));
        }
    }
    Ok(())
}
