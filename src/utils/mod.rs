//! Utilities shared by the different zip shapes of this crate.

mod array;

#[doc(hidden)]
pub mod private;

pub(crate) use array::unzip_array;
