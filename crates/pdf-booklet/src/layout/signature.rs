//! Signature splitting and nested leaf order
//!
//! Pages are cut into signatures of at most `pages_per_signature` pages,
//! each padded with blanks to a multiple of 4 and then reordered so that
//! stacking the printed sheets and folding them in half reads in sequence.
//!
//! ## Folding order
//!
//! For a padded signature of `T` slots, sheet `k` (outermost first) carries
//! padded positions `T-2k-1, 2k, 2k+1, T-2k-2`:
//!
//! ```text
//! 8 pages, 2 sheets:
//!   sheet 0: [8, 1] [2, 7]
//!   sheet 1: [6, 3] [4, 5]
//! ```

use tracing::debug;

use crate::constants::PAGES_PER_SHEET;
use crate::types::{BookletError, Result};

use super::{ImpositionOrder, PageSlot, Signature};

// =============================================================================
// Signature Calculation
// =============================================================================

/// Build the booklet printing order for `num_pages` source pages.
///
/// Signatures are concatenated in document order. An empty document gives
/// an empty order.
pub fn booklet_order(num_pages: usize, pages_per_signature: usize) -> Result<ImpositionOrder> {
    let signatures = split_signatures(num_pages, pages_per_signature)?;
    let order = ImpositionOrder::from(signatures);
    debug!(num_pages, pages_per_signature, %order, "Built signature order");
    Ok(order)
}

/// Split `num_pages` into signatures, each already in folding order.
pub fn split_signatures(num_pages: usize, pages_per_signature: usize) -> Result<Vec<Signature>> {
    if pages_per_signature == 0 {
        return Err(BookletError::InvalidArgument(
            "Pages per signature must be positive".to_string(),
        ));
    }

    let mut signatures = Vec::with_capacity(num_pages.div_ceil(pages_per_signature));
    let mut first_page = 1;

    while first_page <= num_pages {
        let remaining = num_pages - first_page + 1;
        let page_count = pages_per_signature.min(remaining);

        signatures.push(Signature {
            first_page,
            page_count,
            slots: nested_leaf_order(&pad_signature(first_page, page_count)),
        });

        first_page += page_count;
    }

    Ok(signatures)
}

/// Slot count of a signature holding `page_count` pages: the next multiple of 4
pub fn padded_signature_len(page_count: usize) -> usize {
    page_count.div_ceil(PAGES_PER_SHEET) * PAGES_PER_SHEET
}

// =============================================================================
// Page Ordering
// =============================================================================

/// Pages `first_page..first_page + page_count` followed by trailing blanks
fn pad_signature(first_page: usize, page_count: usize) -> Vec<PageSlot> {
    let padded_len = padded_signature_len(page_count);
    (first_page..first_page + page_count)
        .map(PageSlot::Page)
        .chain(std::iter::repeat_n(PageSlot::Blank, padded_len - page_count))
        .collect()
}

/// Reorder a padded signature into folding order, four slots per sheet:
/// outer-left, outer-right, inner-left, inner-right.
fn nested_leaf_order(padded: &[PageSlot]) -> Vec<PageSlot> {
    let total = padded.len();
    debug_assert_eq!(total % PAGES_PER_SHEET, 0);

    let mut order = Vec::with_capacity(total);
    for i in (0..total / 2).step_by(2) {
        order.extend([
            padded[total - i - 1],
            padded[i],
            padded[i + 1],
            padded[total - i - 2],
        ]);
    }
    order
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(numbers: &[usize]) -> Vec<PageSlot> {
        numbers.iter().copied().map(PageSlot::Page).collect()
    }

    #[test]
    fn test_padded_signature_len() {
        assert_eq!(padded_signature_len(0), 0);
        assert_eq!(padded_signature_len(1), 4);
        assert_eq!(padded_signature_len(4), 4);
        assert_eq!(padded_signature_len(5), 8);
        assert_eq!(padded_signature_len(16), 16);
    }

    #[test]
    fn test_pad_signature_appends_blanks() {
        let padded = pad_signature(17, 3);
        assert_eq!(
            padded,
            vec![
                PageSlot::Page(17),
                PageSlot::Page(18),
                PageSlot::Page(19),
                PageSlot::Blank,
            ]
        );
    }

    #[test]
    fn test_nested_leaf_order_folio() {
        assert_eq!(nested_leaf_order(&pages(&[1, 2, 3, 4])), pages(&[4, 1, 2, 3]));
    }

    #[test]
    fn test_nested_leaf_order_twelve() {
        let padded = pages(&(1..=12).collect::<Vec<_>>());
        assert_eq!(
            nested_leaf_order(&padded),
            pages(&[12, 1, 2, 11, 10, 3, 4, 9, 8, 5, 6, 7])
        );
    }

    #[test]
    fn test_blanks_land_on_outer_sheet() {
        let signatures = split_signatures(6, 16).unwrap();
        assert_eq!(signatures.len(), 1);
        assert_eq!(
            signatures[0].slots,
            vec![
                PageSlot::Blank,
                PageSlot::Page(1),
                PageSlot::Page(2),
                PageSlot::Blank,
                PageSlot::Page(6),
                PageSlot::Page(3),
                PageSlot::Page(4),
                PageSlot::Page(5),
            ]
        );
    }

    #[test]
    fn test_zero_pages_per_signature_rejected() {
        assert!(matches!(
            split_signatures(8, 0),
            Err(BookletError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_signature_bounds() {
        let signatures = split_signatures(37, 16).unwrap();
        let bounds: Vec<_> = signatures
            .iter()
            .map(|s| (s.first_page, s.last_page(), s.padded_len()))
            .collect();
        assert_eq!(bounds, vec![(1, 16, 16), (17, 32, 16), (33, 37, 8)]);
        assert_eq!(signatures[2].blank_count(), 3);
        assert_eq!(signatures[2].sheet_count(), 2);
    }
}
