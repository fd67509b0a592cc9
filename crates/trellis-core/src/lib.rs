#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Leaf utilities for the trellis recognizer runtime.
//!
//! Nothing in here knows about automata or parse trees:
//! - **Text helpers**: joining, hex and whitespace escaping (`utils`)
//! - **Interning**: `Interner` handles and the ordered `to_map` builder
//! - **Scope guards**: run-on-exit closures (`finally`, `guard`)
//! - **Input primitives**: `Token` and the closed `Interval` used for spans

pub mod colors;
pub mod guard;
pub mod interner;
pub mod interval;
pub mod token;
pub mod utils;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod guard_tests;
#[cfg(test)]
mod interval_tests;
#[cfg(test)]
mod utils_tests;

pub use colors::Colors;
pub use guard::{FinalAction, ScopeGuard, finally, guard};
pub use interner::{Interner, Symbol};
pub use interval::Interval;
pub use token::{Token, TokenType};
