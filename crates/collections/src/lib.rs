//! Hand-rolled collections that keep their internals in plain sight.
//!
//! [`HashMap`] is a fixed-capacity, separately chained string map: every
//! bucket owns a singly linked chain of entries and nothing is ever rehashed.
//! [`List`] is a doubly linked list over an index arena.

mod error;
pub mod hashmap;
pub mod linked_list;
mod macros;

pub use error::{Error, Result};
pub use hashmap::{DEFAULT_CAPACITY, HashMap};
pub use linked_list::List;

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
