//! Classic algorithm and data-structure utilities
//!
//! **Contents**:
//! - [`geohash`]: latitude/longitude → base32 geohash
//! - [`luhn`]: Luhn checksum validation and missing-digit recovery
//! - [`sorted_list`]: list kept ordered by binary-search insertion
//! - [`stack`]: LIFO stack on a linked list
//!
//! The modules are independent of one another.

pub mod error;
pub mod geohash;
pub mod luhn;
pub mod sorted_list;
pub mod stack;

pub use error::{AlgorithmError, Result};
pub use sorted_list::SortedList;
pub use stack::ListBasedStack;
