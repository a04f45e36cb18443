//! Table operations - each module contains an `impl Database` block for one table.

mod folders;
mod notes;
