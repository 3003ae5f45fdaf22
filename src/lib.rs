//! Fixed-capacity, allocation-free vectors.
//!
//! [`StaticVec<T, C>`] stores up to `C` elements inline, in a buffer that is
//! never initialized until an element is written to it. It behaves like a
//! [`Vec`](https://doc.rust-lang.org/std/vec/struct.Vec.html) that can never
//! reallocate: pushing past `C` is a caller error and panics, while the
//! `try_*` methods hand the element back in a [`CapacityError`] instead.
//!
//! ```
//! use staticarr::{static_vec, StaticVec};
//!
//! let mut v: StaticVec<i32, 8> = static_vec![1, 2, 3];
//! v.insert(1, 9);
//! assert_eq!(v, [1, 9, 2, 3]);
//!
//! assert_eq!(v.erase(1..2), 1);
//! assert_eq!(v, [1, 2, 3]);
//! assert_eq!(v.capacity(), 8);
//! ```
//!
//! # Features
//!
//! - `std` (default): conversions to and from `Vec<T>`. Without it the crate
//!   is `no_std`.
//! - `log`: emit `log::debug!` records when a fallible operation rejects an
//!   element for lack of capacity.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

#[macro_use]
mod macros;
mod errors;
mod staticvec;

#[cfg(test)]
mod test_helpers;

pub use errors::CapacityError;
pub use staticvec::{StaticVec, Drain, IntoIter, swap};
