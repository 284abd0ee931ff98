#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
mod game_loop;
#[cfg(feature = "std")]
pub mod interface;
#[cfg(feature = "std")]
mod logging;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use game_loop::GameLoop;
#[cfg(feature = "std")]
pub use interface::{parse_move, Interface, Notice, TextInterface};
#[cfg(feature = "std")]
pub use logging::{init_logging, resolve_level, LOG_ENV};
