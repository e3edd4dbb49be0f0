//! Sequential identifier allocation.
//!
//! Stores using [`IdStrategy::Sequential`](crate::IdStrategy::Sequential)
//! hand out `"<prefix><N>"` identifiers from an in-memory counter. The
//! counter is seeded once, at store open, with the highest numeric suffix
//! found among the existing records; it is not durable beyond that scan, so
//! a single writer per data directory is assumed.

/// Allocator for `"<prefix><N>"` identifiers.
#[derive(Debug)]
pub struct IdAllocator {
    prefix: &'static str,
    last: u64,
}

impl IdAllocator {
    /// Seed an allocator from the identifiers already present in a store.
    ///
    /// Identifiers that do not match `<prefix><digits>` (prefix compared
    /// case-insensitively) are logged and ignored; they never advance the
    /// counter.
    pub fn seed<'a>(prefix: &'static str, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut last = 0;
        for id in ids {
            match suffix(prefix, id) {
                Some(n) => last = last.max(n),
                None => {
                    tracing::warn!(
                        id,
                        prefix,
                        "identifier does not match the sequential scheme, ignoring for counter seed"
                    );
                }
            }
        }
        Self { prefix, last }
    }

    /// Allocate the next identifier. Never reissues a suffix, never fills
    /// gaps left by deletions.
    pub fn allocate(&mut self) -> String {
        self.last += 1;
        format!("{}{}", self.prefix, self.last)
    }
}

fn suffix(prefix: &str, id: &str) -> Option<u64> {
    let head = id.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    id[prefix.len()..].parse().ok()
}
