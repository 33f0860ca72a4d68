pub mod constants;
mod geometry;
pub mod impose;
pub mod layout;
mod options;
pub mod page_list;
mod stats;
mod types;

pub use geometry::{PageGeometry, SheetGeometry};
pub use impose::{
    BookletPlan, DocumentInfo, PdfjamCommand, RendererOutput, document_info, impose,
    load_document_info, plan_booklet,
};
pub use layout::{
    ImpositionOrder, PageSlot, Signature, booklet_order, reorder_for_manual_duplex,
    split_signatures,
};
pub use options::*;
pub use page_list::{format_page_list, parse_page_list};
pub use stats::calculate_statistics;
pub use types::*;
