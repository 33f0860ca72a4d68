use crate::constants::PAGES_PER_SHEET;
use crate::layout::split_signatures;
use crate::types::*;

/// Calculate statistics for a booklet of `source_pages` pages
pub fn calculate_statistics(
    source_pages: usize,
    pages_per_signature: usize,
) -> Result<BookletStatistics> {
    let signatures = split_signatures(source_pages, pages_per_signature)?;

    // Padded size of each signature (for display)
    let padded: Vec<usize> = signatures.iter().map(|s| s.padded_len()).collect();
    let total_slots: usize = padded.iter().sum();

    let blank_pages_added = total_slots - source_pages;
    let output_sheets = total_slots / PAGES_PER_SHEET;

    // Output pages (front and back of each sheet)
    let output_pages = output_sheets * 2;

    Ok(BookletStatistics {
        source_pages,
        signatures: signatures.len(),
        pages_per_signature: padded,
        output_sheets,
        output_pages,
        blank_pages_added,
    })
}
