//! Configuration section definitions.
//!
//! | Module | TOML Section | Purpose                              |
//! |--------|--------------|--------------------------------------|
//! | `dir`  | `[dir]`      | Component and output directories     |

mod dir;

pub use dir::DirConfig;
