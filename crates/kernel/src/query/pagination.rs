//! Pagination normalization.

/// Page used when the request carries none (or an unusable one).
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the request carries none (or an unusable one).
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size. Requests above this are capped, never rejected,
/// which keeps unbounded scans away from the repository without failing
/// the call.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Normalize raw page/limit inputs into the allowed ranges.
///
/// - page: as given when ≥ 1, otherwise [`DEFAULT_PAGE`].
/// - limit: [`DEFAULT_PAGE_SIZE`] when absent or < 1, capped at
///   [`MAX_PAGE_SIZE`] otherwise.
pub fn normalize(page: Option<i64>, limit: Option<i64>) -> (u32, u32) {
    let page = match page {
        Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
        _ => DEFAULT_PAGE,
    };

    let limit = match limit {
        Some(l) if l >= 1 => {
            if l > i64::from(MAX_PAGE_SIZE) {
                tracing::warn!(requested = l, capped = MAX_PAGE_SIZE, "limit exceeds maximum, capping");
                MAX_PAGE_SIZE
            } else {
                u32::try_from(l).unwrap_or(MAX_PAGE_SIZE)
            }
        }
        _ => DEFAULT_PAGE_SIZE,
    };

    (page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_valid_values_through() {
        assert_eq!(normalize(Some(3), Some(25)), (3, 25));
        assert_eq!(normalize(Some(1), Some(1)), (1, 1));
        assert_eq!(normalize(Some(1), Some(100)), (1, 100));
    }

    #[test]
    fn defaults_absent_inputs() {
        assert_eq!(normalize(None, None), (DEFAULT_PAGE, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn caps_every_limit_above_maximum() {
        for l in [101, 150, 1_000, i64::MAX] {
            assert_eq!(normalize(Some(1), Some(l)).1, MAX_PAGE_SIZE);
        }
    }

    #[test]
    fn defaults_every_limit_below_one() {
        for l in [0, -1, -100, i64::MIN] {
            assert_eq!(normalize(Some(1), Some(l)).1, DEFAULT_PAGE_SIZE);
        }
    }

    #[test]
    fn defaults_every_page_below_one() {
        for p in [0, -1, -42, i64::MIN] {
            assert_eq!(normalize(Some(p), Some(10)).0, DEFAULT_PAGE);
        }
    }
}
