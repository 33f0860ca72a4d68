//! Layout data types for booklet imposition
//!
//! These types carry the page order between signature building, the
//! non-duplex sequencer and the page list handed to the renderer.

use std::fmt;

use crate::constants::PAGES_PER_SHEET;
use crate::page_list::format_page_list;

/// One page position in a printing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageSlot {
    /// A source page, 1-based
    Page(usize),
    /// Padding; prints as an empty page
    Blank,
}

impl PageSlot {
    pub fn is_blank(self) -> bool {
        matches!(self, PageSlot::Blank)
    }

    /// The 1-based page number, or `None` for a blank
    pub fn page_number(self) -> Option<usize> {
        match self {
            PageSlot::Page(number) => Some(number),
            PageSlot::Blank => None,
        }
    }
}

impl From<Option<usize>> for PageSlot {
    fn from(page: Option<usize>) -> Self {
        page.map_or(PageSlot::Blank, PageSlot::Page)
    }
}

/// A contiguous run of source pages folded together as one booklet unit
///
/// `slots` is already in folding order; its length is a multiple of 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// First source page in this signature (1-based)
    pub first_page: usize,
    /// Number of real pages, before padding
    pub page_count: usize,
    /// Slots in nested leaf order, four per sheet
    pub slots: Vec<PageSlot>,
}

impl Signature {
    /// Slot count after padding
    pub fn padded_len(&self) -> usize {
        self.slots.len()
    }

    pub fn blank_count(&self) -> usize {
        self.padded_len() - self.page_count
    }

    pub fn sheet_count(&self) -> usize {
        self.padded_len() / PAGES_PER_SHEET
    }

    /// Last source page in this signature (1-based, inclusive)
    pub fn last_page(&self) -> usize {
        self.first_page + self.page_count - 1
    }
}

/// The full printing order handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImpositionOrder(Vec<PageSlot>);

impl ImpositionOrder {
    /// Wrap an arbitrary slot sequence. No length check happens here;
    /// the sequencer rejects orders that are not sheet-aligned.
    pub fn from_slots(slots: Vec<PageSlot>) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> &[PageSlot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Four-slot runs, one per physical sheet. A trailing partial run is skipped.
    pub fn sheets(&self) -> impl Iterator<Item = &[PageSlot]> {
        self.0.chunks_exact(PAGES_PER_SHEET)
    }

    /// Number of real pages
    pub fn page_count(&self) -> usize {
        self.0.iter().filter(|slot| !slot.is_blank()).count()
    }

    pub fn blank_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_blank()).count()
    }
}

impl From<Vec<Signature>> for ImpositionOrder {
    fn from(signatures: Vec<Signature>) -> Self {
        Self(
            signatures
                .into_iter()
                .flat_map(|signature| signature.slots)
                .collect(),
        )
    }
}

impl fmt::Display for ImpositionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_page_list(&self.0))
    }
}
