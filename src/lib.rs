//! Iterate heterogeneous sequences in lockstep.
//!
//! Zip up slices, fixed-size arrays, `Vec`s, `VecDeque`s, `LinkedList`s and
//! text streams, then walk them all together. Every step exposes the current
//! element of each sequence, either one slot at a time or all at once through
//! [`apply`](zip::Step::apply). The loop stops as soon as any sequence runs
//! out, so the shortest bounded sequence sets the number of steps.
//!
//! # Operations
//!
//! - [`Lockstep`]: zip a tuple, array or vector of sequences into a [`Zip`].
//! - [`Zip::for_each`] and [`Zip::walk`]: drive the loop.
//! - [`Step::get`](zip::Step::get) and [`Step::peek`](zip::Step::peek): access
//!   one slot by compile-time index.
//! - [`Step::apply`](zip::Step::apply) and
//!   [`Step::apply_ref`](zip::Step::apply_ref): call a function with every
//!   slot as an argument.
//! - [`stream::input`] and [`stream::output`]: treat text streams as
//!   sequences.
//!
//! # Examples
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let mut v1 = vec![1, 2, 3];
//! let v2 = [-2, -3, -4, -5];
//!
//! (&mut v1, &v2).lockstep().for_each(|step| {
//!     step.apply(|a, b| *a += *b);
//! });
//! assert_eq!(v1, [-1, -1, -1]);
//! ```
//!
//! # Mutability
//!
//! Each slot is read-only or mutable depending on how its sequence was bound:
//! `&v` gives `&T`, `&mut v` gives `&mut T`. This is fixed when the zip is
//! built and checked by the compiler. Through a shared `&Step` every slot is
//! read-only, which is what [`apply_ref`](zip::Step::apply_ref) offers.
//!
//! # Features
//!
//! - `std` (default): the [`stream`] adapters and [`StreamError`].
//! - `alloc`: `Vec`, `VecDeque` and `LinkedList` sequences, and zips over a
//!   `Vec` of sequences.
//!
//! Without any features the crate is `no_std`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod utils;

#[doc(hidden)]
pub use utils::private;

/// The lockstep prelude.
pub mod prelude {
    pub use super::cursor::Cursor as _;
    pub use super::cursor::ReadCursor as _;
    pub use super::zip::Lockstep as _;
    pub use super::Sequence as _;
}

pub mod cursor;
#[cfg(feature = "std")]
pub mod stream;
pub mod zip;

#[cfg(feature = "std")]
mod error;
mod sequence;

#[cfg(feature = "std")]
pub use error::StreamError;
pub use sequence::Sequence;
pub use zip::{lockstep, Lockstep, Zip};
