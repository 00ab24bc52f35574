use sarja_core::types::SarjaError;

const MAX_ID_LEN: usize = 64;

/// Validate the shape of a series identifier before any store call.
///
/// Accepts 1-64 characters drawn from ASCII alphanumerics plus `_`, `.`, `-`.
pub(crate) fn validate_series_id(id: &str) -> Result<(), SarjaError> {
    let ok = !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'));
    if ok {
        Ok(())
    } else {
        Err(SarjaError::invalid_parameter(format!(
            "invalid series id {id:?}; expected 1-64 characters of [A-Za-z0-9_.-]"
        )))
    }
}

/// 1-based pagination window over `total` items.
///
/// Returns `(from, to, total_pages)` with both indices clamped into
/// `0..=total`; a page past the end yields an empty window.
pub(crate) fn page_window(total: usize, page: u32, page_size: u32) -> (usize, usize, u32) {
    let size = page_size as usize;
    let from = (page as usize - 1).saturating_mul(size).min(total);
    let to = from.saturating_add(size).min(total);
    let total_pages = if total == 0 {
        0
    } else {
        u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX)
    };
    (from, to, total_pages)
}
