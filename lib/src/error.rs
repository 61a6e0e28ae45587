//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Step interval should be positive.
    NonPositiveInterval,
    /// Seeding spread should be positive.
    NonPositiveSpread,
}
