use pdf_booklet::*;
use std::collections::HashMap;

fn pages(numbers: &[usize]) -> Vec<PageSlot> {
    numbers.iter().copied().map(PageSlot::Page).collect()
}

fn multiset(slots: &[PageSlot]) -> HashMap<PageSlot, usize> {
    let mut counts = HashMap::new();
    for slot in slots {
        *counts.entry(*slot).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_empty_document() {
    let order = booklet_order(0, 16).unwrap();
    assert!(order.is_empty());
    assert!(split_signatures(0, 16).unwrap().is_empty());
}

#[test]
fn test_four_pages() {
    let order = booklet_order(4, 16).unwrap();
    assert_eq!(order.slots(), pages(&[4, 1, 2, 3]).as_slice());
}

#[test]
fn test_eight_pages() {
    let order = booklet_order(8, 16).unwrap();
    assert_eq!(order.slots(), pages(&[8, 1, 2, 7, 6, 3, 4, 5]).as_slice());
}

#[test]
fn test_sixteen_pages_single_signature() {
    let order = booklet_order(16, 16).unwrap();
    assert_eq!(
        order.slots(),
        pages(&[16, 1, 2, 15, 14, 3, 4, 13, 12, 5, 6, 11, 10, 7, 8, 9]).as_slice()
    );
}

#[test]
fn test_multi_signature_split() {
    let signatures = split_signatures(20, 16).unwrap();
    assert_eq!(signatures.len(), 2);
    assert_eq!(signatures[0].page_count, 16);
    assert_eq!(signatures[0].blank_count(), 0);
    assert_eq!(signatures[1].first_page, 17);
    assert_eq!(signatures[1].page_count, 4);

    let order = booklet_order(20, 16).unwrap();
    assert_eq!(order.len(), 20);
    assert_eq!(&order.slots()[..16], booklet_order(16, 16).unwrap().slots());
    assert_eq!(&order.slots()[16..], pages(&[20, 17, 18, 19]).as_slice());
}

#[test]
fn test_length_is_multiple_of_four() {
    for pages_per_signature in [1, 3, 4, 6, 8, 12, 16, 32] {
        for num_pages in 0..70 {
            let order = booklet_order(num_pages, pages_per_signature).unwrap();
            assert_eq!(order.len() % 4, 0, "{num_pages} pages / {pages_per_signature}");
        }
    }
}

#[test]
fn test_every_page_appears_once() {
    for num_pages in 0..50 {
        let order = booklet_order(num_pages, 16).unwrap();
        let mut numbers: Vec<usize> = order.slots().iter().filter_map(|s| s.page_number()).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=num_pages).collect::<Vec<_>>());
        assert_eq!(order.page_count(), num_pages);
    }
}

#[test]
fn test_length_matches_padded_signatures() {
    let order = booklet_order(37, 16).unwrap();
    // 16 + 16 + 5 padded to 8
    assert_eq!(order.len(), 40);
    assert_eq!(order.blank_count(), 3);
    assert_eq!(order.sheets().count(), 10);
}

#[test]
fn test_odd_signature_size_pads_each_signature() {
    // Signatures of 6 pages are padded to 8 individually
    let signatures = split_signatures(12, 6).unwrap();
    assert_eq!(signatures.len(), 2);
    assert!(signatures.iter().all(|s| s.padded_len() == 8));
    assert_eq!(
        signatures[1].slots,
        vec![
            PageSlot::Blank,
            PageSlot::Page(7),
            PageSlot::Page(8),
            PageSlot::Blank,
            PageSlot::Page(12),
            PageSlot::Page(9),
            PageSlot::Page(10),
            PageSlot::Page(11),
        ]
    );
}

#[test]
fn test_deterministic() {
    assert_eq!(booklet_order(29, 8).unwrap(), booklet_order(29, 8).unwrap());
}

#[test]
fn test_invalid_signature_size() {
    let result = booklet_order(10, 0);
    assert!(matches!(result, Err(BookletError::InvalidArgument(_))));
}

#[test]
fn test_manual_duplex_eight_pages() {
    let order = booklet_order(8, 16).unwrap();
    let reordered = reorder_for_manual_duplex(&order).unwrap();
    assert_eq!(reordered.slots(), pages(&[8, 1, 6, 3, 4, 5, 2, 7]).as_slice());
}

#[test]
fn test_manual_duplex_twenty_pages() {
    let order = booklet_order(20, 16).unwrap();
    let reordered = reorder_for_manual_duplex(&order).unwrap();
    assert_eq!(
        reordered.slots(),
        pages(&[
            16, 1, 14, 3, 12, 5, 10, 7, 20, 17, // fronts, forward
            18, 19, 8, 9, 6, 11, 4, 13, 2, 15, // backs, last sheet first
        ])
        .as_slice()
    );
}

#[test]
fn test_manual_duplex_is_permutation() {
    for num_pages in 0..45 {
        let order = booklet_order(num_pages, 12).unwrap();
        let reordered = reorder_for_manual_duplex(&order).unwrap();
        assert_eq!(reordered.len(), order.len());
        assert_eq!(multiset(reordered.slots()), multiset(order.slots()));
    }
}

#[test]
fn test_manual_duplex_keeps_blanks() {
    let order = booklet_order(5, 16).unwrap();
    let reordered = reorder_for_manual_duplex(&order).unwrap();
    assert_eq!(reordered.blank_count(), 3);
    assert_eq!(
        reordered.slots(),
        &[
            PageSlot::Blank,
            PageSlot::Page(1),
            PageSlot::Blank,
            PageSlot::Page(3),
            PageSlot::Page(4),
            PageSlot::Page(5),
            PageSlot::Page(2),
            PageSlot::Blank,
        ]
    );
}

#[test]
fn test_manual_duplex_rejects_unaligned() {
    let order = ImpositionOrder::from_slots(pages(&[1, 2, 3, 4, 5]));
    let result = reorder_for_manual_duplex(&order);
    assert!(matches!(result, Err(BookletError::UnalignedOrder { len: 5 })));
}
