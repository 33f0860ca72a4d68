//! Manual duplex sequencing
//!
//! Printers without a duplex unit print the order in two passes. The first
//! pass takes the leading pair of every sheet in forward order. The operator
//! then flips the printed stack and feeds it back, and the second pass takes
//! the trailing pair of every sheet starting from the last sheet.
//!
//! ```text
//! signature order: [8, 1, 2, 7] [6, 3, 4, 5]
//! front pass:      8, 1, 6, 3
//! back pass:       4, 5, 2, 7
//! ```

use tracing::debug;

use crate::constants::PAGES_PER_SHEET;
use crate::types::{BookletError, Result};

use super::ImpositionOrder;

/// Resequence a sheet-aligned order for flip-and-refeed printing.
///
/// The result is a permutation of `order`. Orders whose length is not a
/// multiple of 4 are rejected before anything is built.
pub fn reorder_for_manual_duplex(order: &ImpositionOrder) -> Result<ImpositionOrder> {
    let slots = order.slots();
    let len = slots.len();
    if len % PAGES_PER_SHEET != 0 {
        return Err(BookletError::UnalignedOrder { len });
    }

    let sheets = len / PAGES_PER_SHEET;
    let mut reordered = Vec::with_capacity(len);

    // Front pass
    for i in 0..sheets {
        reordered.push(slots[i * 4]);
        reordered.push(slots[i * 4 + 1]);
    }

    // Back pass, last sheet first
    for i in 0..sheets {
        reordered.push(slots[len - i * 4 - 2]);
        reordered.push(slots[len - i * 4 - 1]);
    }

    let reordered = ImpositionOrder::from_slots(reordered);
    debug!(%reordered, "Resequenced for manual duplex");
    Ok(reordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageSlot;

    #[test]
    fn test_empty_order() {
        let reordered = reorder_for_manual_duplex(&ImpositionOrder::default()).unwrap();
        assert!(reordered.is_empty());
    }

    #[test]
    fn test_single_sheet_unchanged() {
        let order = ImpositionOrder::from_slots(
            [4, 1, 2, 3].into_iter().map(PageSlot::Page).collect(),
        );
        assert_eq!(reorder_for_manual_duplex(&order).unwrap(), order);
    }

    #[test]
    fn test_unaligned_rejected() {
        let order = ImpositionOrder::from_slots(vec![PageSlot::Page(1); 6]);
        match reorder_for_manual_duplex(&order) {
            Err(BookletError::UnalignedOrder { len }) => assert_eq!(len, 6),
            other => panic!("Expected UnalignedOrder, got {other:?}"),
        }
    }
}
