pub mod attractor;
pub mod buchi;
pub mod promotion;
pub mod reachability;
pub mod recursive;
pub mod solution;


pub type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
pub type Map<K, V> = rustc_hash::FxHashMap<K, V>;
