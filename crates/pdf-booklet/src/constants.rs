//! Shared constants for booklet imposition

// =============================================================================
// Signatures
// =============================================================================

/// Pages folded into one signature unless configured otherwise (4 sheets)
pub const DEFAULT_PAGES_PER_SIGNATURE: usize = 16;

/// Page positions on one folded sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

// =============================================================================
// Page List Syntax
// =============================================================================

/// Token pdfjam reads as an empty page
pub const BLANK_PAGE_TOKEN: &str = "{}";

/// Separator between page list entries
pub const PAGE_LIST_SEPARATOR: char = ',';

// =============================================================================
// Renderer Defaults
// =============================================================================

/// Renderer executable looked up on PATH
pub const DEFAULT_PDFJAM_PROGRAM: &str = "pdfjam";

/// Two source pages side by side on each output page
pub const DEFAULT_NUP: &str = "2x1";

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);
