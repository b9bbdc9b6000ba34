//! Text streams as sequences.
//!
//! [`input`] turns a [`BufRead`](std::io::BufRead) into a sequence of parsed
//! values, and [`output`] turns a [`Write`](std::io::Write) into a sequence of
//! write slots. Both can be zipped with containers and with each other.
//!
//! # Examples
//!
//! Copy whitespace-separated numbers from one stream to another:
//!
//! ```
//! use lockstep::prelude::*;
//! use lockstep::stream;
//!
//! let mut source = "0.5 0.6 0.7 0.8".as_bytes();
//! let mut sink = Vec::new();
//!
//! let numbers = stream::input::<f64, _>(&mut source);
//! let out = stream::output::<f64, _>(&mut sink).separated_by(", ");
//!
//! (out, numbers).lockstep().for_each(|step| {
//!     let value = *step.peek::<1>();
//!     step.get::<0>().set(value);
//! });
//! assert_eq!(sink, b"0.5, 0.6, 0.7, 0.8, ");
//! ```
//!
//! # Termination
//!
//! An output sequence never runs out: its cursors are never equal to each
//! other. A zip made only of output sequences loops forever, so always pair
//! one with a bounded sequence.

mod input;
mod output;

pub use input::{input, Input, InputCursor};
pub use output::{output, Emit, Output, OutputCursor};
