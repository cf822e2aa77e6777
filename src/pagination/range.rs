use super::error::PaginationError;

const MAX_BOUND: u64 = i64::MAX as u64;

/// Zero-based `[lower, upper)` window of rows requested for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetRange {
    pub lower: u64,
    pub upper: u64,
}

impl OffsetRange {
    /// Window for a validated page; `number` and `size` are both at least 1.
    /// Both bounds stay within `i64::MAX`, the largest SQL LIMIT/OFFSET.
    pub fn for_page(number: u64, size: u64) -> Result<Self, PaginationError> {
        let out_of_range = PaginationError::PageOutOfRange { number, size };
        let lower = number
            .checked_sub(1)
            .and_then(|skipped| skipped.checked_mul(size))
            .ok_or(out_of_range.clone())?;
        let upper = lower.checked_add(size).ok_or(out_of_range.clone())?;
        if upper > MAX_BOUND {
            return Err(out_of_range);
        }

        Ok(Self { lower, upper })
    }

    pub fn offset(&self) -> u64 {
        self.lower
    }

    pub fn len(&self) -> u64 {
        self.upper - self.lower
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
