// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A wrapper that makes a malformed artifact unrepresentable.
//!
//! ```ignore
//! // Construction validates everything
//! let artifact = WellFormedArtifact::from_artifact(raw)?;
//!
//! // Now lookups can't panic: ranges were checked at construction
//! let name = artifact.name(0);
//! ```

use std::fmt;

use crate::types::GeneratedArtifact;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Key and name sequences differ in length.
    MisalignedSequences { keys_len: usize, names_len: usize },
    /// Keys not strictly ascending (unsorted, or a duplicate).
    UnsortedKeys { position: usize },
    /// A key lies outside the target kind's domain.
    KeyOutOfDomain { position: usize, value: i128 },
    /// A range does not start where the previous one ended.
    NonContiguousRange { position: usize, start: usize, expected: usize },
    /// A range runs past the blob or splits a character.
    RangeOutOfBounds { position: usize, end: usize, blob_len: usize },
    /// Ranges stop short of the end of the blob.
    TrailingBlob { covered: usize, blob_len: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MisalignedSequences {
                keys_len,
                names_len,
            } => write!(f, "keys.len() {} != names.len() {}", keys_len, names_len),
            InvariantError::UnsortedKeys { position } => {
                write!(f, "keys not strictly ascending at position {}", position)
            }
            InvariantError::KeyOutOfDomain { position, value } => {
                write!(f, "key {} at position {} outside the type's domain", value, position)
            }
            InvariantError::NonContiguousRange {
                position,
                start,
                expected,
            } => write!(
                f,
                "range {} starts at {}, expected {}",
                position, start, expected
            ),
            InvariantError::RangeOutOfBounds {
                position,
                end,
                blob_len,
            } => write!(
                f,
                "range {} ends at {} (blob is {} bytes)",
                position, end, blob_len
            ),
            InvariantError::TrailingBlob { covered, blob_len } => {
                write!(f, "ranges cover {} of {} blob bytes", covered, blob_len)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// A generated artifact whose structure has been checked.
///
/// # Invariants (enforced at construction)
/// - `keys.len() == names.len()`
/// - keys strictly ascending and inside the kind's domain
/// - ranges contiguous from 0 to `blob.len()`, on character boundaries
#[derive(Debug, Clone)]
pub struct WellFormedArtifact {
    inner: GeneratedArtifact,
}

impl WellFormedArtifact {
    /// Validate an artifact. Returns the first violation found.
    pub fn from_artifact(artifact: GeneratedArtifact) -> Result<Self, InvariantError> {
        let keys = &artifact.keys;
        if keys.len() != artifact.names.len() {
            return Err(InvariantError::MisalignedSequences {
                keys_len: keys.len(),
                names_len: artifact.names.len(),
            });
        }

        for (position, value) in keys.iter().enumerate() {
            if value < keys.kind.min_value() || value > keys.kind.max_value() {
                return Err(InvariantError::KeyOutOfDomain { position, value });
            }
        }
        for i in 1..keys.len() {
            if keys.values[i - 1] >= keys.values[i] {
                return Err(InvariantError::UnsortedKeys { position: i });
            }
        }

        let blob_len = artifact.blob.len();
        let mut expected = 0;
        for (position, range) in artifact.names.iter().enumerate() {
            if range.start != expected {
                return Err(InvariantError::NonContiguousRange {
                    position,
                    start: range.start,
                    expected,
                });
            }
            if range.end < range.start
                || range.end > blob_len
                || !artifact.blob.is_char_boundary(range.end)
            {
                return Err(InvariantError::RangeOutOfBounds {
                    position,
                    end: range.end,
                    blob_len,
                });
            }
            expected = range.end;
        }
        if expected != blob_len {
            return Err(InvariantError::TrailingBlob {
                covered: expected,
                blob_len,
            });
        }

        Ok(Self { inner: artifact })
    }

    pub fn inner(&self) -> &GeneratedArtifact {
        &self.inner
    }

    pub fn into_inner(self) -> GeneratedArtifact {
        self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Name at position `i`. Cannot slice out of bounds for `i < len()`.
    pub fn name(&self, i: usize) -> Option<&str> {
        self.inner.name_at(i)
    }

    /// Key at position `i`.
    pub fn key(&self, i: usize) -> Option<i128> {
        self.inner.keys.get(i)
    }
}
