//! A growable object store whose indices stay valid across insertions and removals.
//!
//! This crate provides [`StableVec`], a vector-like collection that hands out a plain
//! `usize` index for every stored value and guarantees that the index keeps referring
//! to the same logical value until that value is removed or the collection is cleared.
//! Removing a value never shifts the others; the vacated slot is instead linked into an
//! internal free list and handed back out by a later [`insert()`][StableVec::insert].
//!
//! # Key properties
//!
//! - **Stable indices**: values never move to a different index once inserted.
//! - **Storage reuse**: [`insert()`][StableVec::insert] fills the most recently vacated
//!   slot before growing the backing storage; [`push()`][StableVec::push] always appends.
//! - **No free-list memory overhead**: the free list is threaded through the vacant
//!   slots themselves.
//! - **Allocator aware**: the backing storage can be parameterized with any
//!   [`allocator_api2::alloc::Allocator`].
//!
//! # Index reuse
//!
//! Indices are plain integers without a generation counter. After a value is removed,
//! its index may be handed out again for a *different* value, so a stale index held
//! across a remove-then-insert cycle silently refers to the new occupant instead of
//! failing. Callers that need to detect staleness must layer their own versioning on
//! top. The `strict_index` package can at least keep indices of unrelated collections
//! apart at compile time.
//!
//! # Example
//!
//! ```rust
//! use stable_vec::StableVec;
//!
//! let mut values = StableVec::new();
//!
//! let a = values.insert("alpha");
//! let b = values.insert("beta");
//!
//! // Removing a value leaves every other index untouched.
//! values.remove(a);
//! assert_eq!(values.get(b), Some(&"beta"));
//!
//! // The vacated slot is reused by the next insert.
//! let c = values.insert("gamma");
//! assert_eq!(c, a);
//! ```
//!
//! # Thread safety
//!
//! The collection performs no internal synchronization. Wrap it in a `Mutex` (or shard
//! it) for concurrent use.

mod stable_vec;

pub use stable_vec::*;
