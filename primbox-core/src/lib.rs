#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod kind;
pub use kind::*;

mod descriptor;
pub use descriptor::*;

mod table;
pub use table::*;

mod resolve;
pub use resolve::*;

mod error;
pub use error::*;

pub mod well_known;

mod described;
pub use described::*;

static_assertions::assert_impl_all!(TypeDescriptor: Send, Sync, Copy);
static_assertions::assert_impl_all!(BoxingTable: Send, Sync);
static_assertions::const_assert_eq!(PrimitiveKind::COUNT, 8);
