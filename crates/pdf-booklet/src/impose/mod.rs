//! Booklet imposition - ordering pages for signature binding
//!
//! This module orchestrates the imposition process:
//! 1. Read page count and geometry from the source document
//! 2. Build the signature order, resequenced for manual duplex if needed
//! 3. Serialize the order and compute the output sheet
//! 4. Hand everything to pdfjam

mod io;
mod pdfjam;

pub use io::{DocumentInfo, document_info, load_document_info};
pub use pdfjam::{PdfjamCommand, RendererOutput};

use crate::geometry::{PageGeometry, SheetGeometry};
use crate::layout::{ImpositionOrder, booklet_order, reorder_for_manual_duplex};
use crate::options::BookletOptions;
use crate::page_list::format_page_list;
use crate::types::*;
use tracing::debug;

/// Everything the renderer needs, computed without touching the filesystem
#[derive(Debug, Clone, PartialEq)]
pub struct BookletPlan {
    /// Final printing order
    pub order: ImpositionOrder,
    /// `order` in pdfjam page list syntax
    pub page_list: String,
    /// Output paper and orientation
    pub sheet: SheetGeometry,
}

impl BookletPlan {
    /// pdfjam invocation for this plan
    pub fn pdfjam_command(&self, options: &BookletOptions) -> PdfjamCommand {
        PdfjamCommand::new(
            &options.input_file,
            &options.output_file,
            self.page_list.clone(),
            self.sheet,
        )
        .with_program(&options.pdfjam_program)
        .with_nup(options.nup.clone())
        .with_paper(options.paper.clone())
    }
}

/// Compute the printing order and output sheet for a document
pub fn plan_booklet(
    pages: usize,
    geometry: PageGeometry,
    options: &BookletOptions,
) -> Result<BookletPlan> {
    let order = booklet_order(pages, options.pages_per_signature)?;
    let order = match options.duplex {
        DuplexMode::Manual => reorder_for_manual_duplex(&order)?,
        DuplexMode::Automatic => order,
    };

    let page_list = format_page_list(order.slots());
    let sheet = geometry.output_sheet();
    debug!(?sheet, %page_list, "Planned booklet");

    Ok(BookletPlan {
        order,
        page_list,
        sheet,
    })
}

/// Main imposition function: plan the booklet for `options.input_file` and
/// run pdfjam to write `options.output_file`.
pub async fn impose(options: &BookletOptions) -> Result<RendererOutput> {
    options.validate()?;

    let info = load_document_info(&options.input_file).await?;
    let plan = plan_booklet(info.pages, info.geometry, options)?;

    plan.pdfjam_command(options).run().await
}
