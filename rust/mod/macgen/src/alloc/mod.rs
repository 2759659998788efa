//! Allocation and generation engine: the pure half of the module.
//!
//! - [`range`]: MAC-ID range arithmetic and overlap detection.
//! - [`code`]: work-order code rendering.
//! - [`expand`]: per-device identifier derivation.
//!
//! Nothing here touches storage; [`crate::service`] wraps these in
//! transactions.

pub mod code;
pub mod expand;
pub mod range;

pub use code::{build_code, month_code};
pub use expand::{expand, mac_key, pon_serial, ExpandError, GenerationParams, MAX_ITEM_QUANTITY};
pub use range::{check_overlap, parse_hex, render_hex, AllocError, MacRange, OccupiedRange};
