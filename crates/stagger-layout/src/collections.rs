#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashMap;

    pub type BuildHasher = std::collections::hash_map::RandomState;
    pub type IndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasher>;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxBuildHasher as BuildHasher;
    pub use rustc_hash::FxHashMap as HashMap;

    pub type IndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasher>;
}
