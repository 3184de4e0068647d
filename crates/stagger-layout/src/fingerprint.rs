//! Structural fingerprint of a data source.
//!
//! The engine has no notion of structural diffing: any change to the number
//! of sections, their item counts or their descriptors drops the whole
//! cache. Hashing that shape once per pass lets the engine notice such
//! changes even when the host forgets to invalidate.

use std::hash::{Hash, Hasher};

use crate::source::LayoutDataSource;

#[cfg(feature = "std-hash")]
fn new_hasher() -> std::collections::hash_map::DefaultHasher {
    std::collections::hash_map::DefaultHasher::new()
}

#[cfg(not(feature = "std-hash"))]
fn new_hasher() -> ahash::AHasher {
    ahash::AHasher::default()
}

/// Hashes section count, item counts and section descriptors of `source`.
///
/// Descriptors that fail to load hash as a marker, so a section whose
/// descriptor starts or stops failing also changes the fingerprint.
pub fn structure_fingerprint<S: LayoutDataSource + ?Sized>(source: &S) -> u64 {
    let mut hasher = new_hasher();
    let section_count = source.section_count();
    section_count.hash(&mut hasher);
    for section in 0..section_count {
        source.item_count(section).hash(&mut hasher);
        source.section_layout(section).ok().hash(&mut hasher);
    }
    hasher.finish()
}
