//! Adding new files to a project.
//!
//! [`parse_input`] turns a line of user input into item requests and
//! [`FileCreator`] writes them, filling each file from its template or
//! leaving it empty when no template matches.

pub mod creator;
pub mod input;

pub use creator::{CreatedItem, FileCreator};
pub use input::{parse_input, ItemKind, ItemRequest};
