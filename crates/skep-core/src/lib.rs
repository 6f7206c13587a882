//! Core value types for the Skep swarm-thermal toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Skep workspace: the
//! [`State`] search record and its position ordering, bee headings
//! ([`Direction`]), and the hive-map cell alphabet ([`Cell`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod state;

pub use cell::Cell;
pub use direction::Direction;
pub use error::CodeError;
pub use state::{ByPosition, State};
