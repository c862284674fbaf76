//! # anytrie
//!
//! A persistent (immutable) byte-keyed trie whose keys may hold values of
//! differing concrete types.
//!
//! ## Overview
//!
//! This library provides [`PersistentTrie`], a map from byte strings to
//! values, implemented as a copy-on-write trie. It differs from the maps in
//! the standard library in two ways:
//!
//! - **Persistence**: every modifying operation returns a new trie and
//!   leaves the receiver untouched. Old versions remain fully usable, and
//!   unchanged subtrees are shared between versions via `Arc`.
//! - **Heterogeneous values**: each key may store a value of a different
//!   concrete type. A value is recovered only under the type it was stored
//!   as; looking it up under any other type reports absence.
//!
//! ## Example
//!
//! ```rust
//! use anytrie::PersistentTrie;
//!
//! let trie = PersistentTrie::new()
//!     .insert(b"answer", 42_u32)
//!     .insert(b"greeting", String::from("hello"));
//!
//! assert_eq!(trie.get::<u32>(b"answer"), Some(&42));
//! assert_eq!(trie.get::<String>(b"greeting"), Some(&String::from("hello")));
//!
//! // The stored type is part of the contract: a lookup under the wrong
//! // type reports absence.
//! assert_eq!(trie.get::<u32>(b"greeting"), None);
//!
//! // Structural sharing: the original trie is preserved.
//! let updated = trie.insert(b"answer", 43_u32);
//! assert_eq!(trie.get::<u32>(b"answer"), Some(&42));
//! assert_eq!(updated.get::<u32>(b"answer"), Some(&43));
//! ```
//!
//! ## Thread Safety
//!
//! Nodes are immutable after construction and shared via `Arc`, so distinct
//! threads may hold and read tries that share structure without any
//! coordination. Modifying operations never write through an existing
//! handle; they return a new one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod trie;

pub use crate::trie::PersistentTrie;
