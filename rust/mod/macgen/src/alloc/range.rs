//! MAC-ID ranges: arbitrary-precision hex arithmetic and overlap checks.
//!
//! A range starts at the integer value of a hex string `S` of width `W`
//! (its character count) and covers `stride * quantity` addresses:
//! `[S, S + stride*quantity - 1]`. Every address of the range is rendered
//! back as uppercase hex zero-padded to `W`.

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;

/// Errors from range construction and overlap checking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    #[error("startMacId must not be empty")]
    EmptyStart,

    #[error("startMacId '{0}' is not a hexadecimal string")]
    InvalidHex(String),

    #[error("{0} must be a positive integer")]
    NonPositive(&'static str),

    #[error("MAC-ID value {value} does not fit in {width} hex digits")]
    ExceedsWidth { value: String, width: usize },

    #[error("Requested MAC-ID range {requested} overlaps with work-order {work_order_number} ({existing})")]
    Overlap {
        work_order_number: String,
        requested: MacRange,
        existing: MacRange,
    },
}

/// A contiguous, inclusive block of MAC addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacRange {
    start: BigUint,
    end: BigUint,
    stride: u64,
    width: usize,
}

impl MacRange {
    /// Compute the range occupied by `quantity` devices using `stride`
    /// addresses each, starting at `start_hex`.
    ///
    /// The range may run past `W` hex digits; call [`MacRange::check_width`]
    /// before handing it out.
    pub fn new(start_hex: &str, stride: u64, quantity: u64) -> Result<Self, AllocError> {
        let start = parse_hex(start_hex)?;
        if stride == 0 {
            return Err(AllocError::NonPositive("requiredPerDevice"));
        }
        if quantity == 0 {
            return Err(AllocError::NonPositive("itemQuantity"));
        }

        let total = BigUint::from(stride) * BigUint::from(quantity);
        let end = &start + total - BigUint::one();
        Ok(Self {
            start,
            end,
            stride,
            width: start_hex.len(),
        })
    }

    pub fn start(&self) -> &BigUint {
        &self.start
    }

    pub fn end(&self) -> &BigUint {
        &self.end
    }

    /// Hex digit count every address of this range is rendered with.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of addresses covered (`stride * quantity`).
    pub fn size(&self) -> BigUint {
        &self.end - &self.start + BigUint::one()
    }

    /// First address of device `index`: `start + stride * index`.
    pub fn device_address(&self, index: u64) -> BigUint {
        &self.start + BigUint::from(self.stride) * BigUint::from(index)
    }

    /// Reject ranges whose last address needs more than `W` hex digits.
    pub fn check_width(&self) -> Result<(), AllocError> {
        render_hex(&self.end, self.width).map(|_| ())
    }

    /// Inclusive ranges intersect unless one ends before the other starts.
    pub fn overlaps(&self, other: &MacRange) -> bool {
        !(other.end < self.start || other.start > self.end)
    }
}

impl fmt::Display for MacRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0w$X}-{:0w$X}",
            self.start,
            self.end,
            w = self.width
        )
    }
}

/// A range already held by some work order.
#[derive(Debug, Clone)]
pub struct OccupiedRange {
    pub work_order_number: String,
    pub range: MacRange,
}

/// Fail with [`AllocError::Overlap`] on the first occupied range that
/// intersects `requested`.
pub fn check_overlap<'a, I>(requested: &MacRange, occupied: I) -> Result<(), AllocError>
where
    I: IntoIterator<Item = &'a OccupiedRange>,
{
    for held in occupied {
        if requested.overlaps(&held.range) {
            return Err(AllocError::Overlap {
                work_order_number: held.work_order_number.clone(),
                requested: requested.clone(),
                existing: held.range.clone(),
            });
        }
    }
    Ok(())
}

/// Parse a non-empty string of hex digits. Signs, prefixes and separators
/// are rejected.
pub fn parse_hex(s: &str) -> Result<BigUint, AllocError> {
    if s.is_empty() {
        return Err(AllocError::EmptyStart);
    }
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AllocError::InvalidHex(s.to_string()));
    }
    BigUint::parse_bytes(s.as_bytes(), 16).ok_or_else(|| AllocError::InvalidHex(s.to_string()))
}

/// Render `value` as uppercase hex, zero-padded to `width`. Never truncates:
/// a value wider than `width` is an error.
pub fn render_hex(value: &BigUint, width: usize) -> Result<String, AllocError> {
    let hex = format!("{:X}", value);
    if hex.len() > width {
        return Err(AllocError::ExceedsWidth { value: hex, width });
    }
    Ok(format!("{:0>w$}", hex, w = width))
}
