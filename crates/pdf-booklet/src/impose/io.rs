//! Source document metadata

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::geometry::PageGeometry;
use crate::types::*;
use lopdf::{Document, Object, ObjectId};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Inheritance chains deeper than this are treated as missing
const MAX_PARENT_DEPTH: usize = 32;

/// Page count and first-page geometry of a source PDF
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub path: PathBuf,
    pub pages: usize,
    pub geometry: PageGeometry,
}

impl DocumentInfo {
    pub fn orientation(&self) -> Orientation {
        self.geometry.orientation()
    }
}

/// Read page count and geometry from a PDF on disk
pub async fn load_document_info(path: impl AsRef<Path>) -> Result<DocumentInfo> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    document_info(&doc, path)
}

/// Read page count and geometry from a loaded document
pub fn document_info(doc: &Document, path: impl Into<PathBuf>) -> Result<DocumentInfo> {
    let pages = doc.get_pages();
    let first_page = *pages.values().next().ok_or(BookletError::NoPages)?;

    let (width_pt, height_pt) = page_dimensions(doc, first_page).unwrap_or_else(|| {
        warn!("First page has no usable MediaBox, assuming US Letter");
        DEFAULT_PAGE_DIMENSIONS
    });

    let info = DocumentInfo {
        path: path.into(),
        pages: pages.len(),
        geometry: PageGeometry::new(width_pt, height_pt),
    };
    debug!(
        path = %info.path.display(),
        pages = info.pages,
        width_pt,
        height_pt,
        orientation = ?info.orientation(),
        "Loaded document info"
    );
    Ok(info)
}

/// MediaBox width and height, following inheritance through the page tree
fn page_dimensions(doc: &Document, page_id: ObjectId) -> Option<(f32, f32)> {
    let mut node_id = page_id;
    for _ in 0..MAX_PARENT_DEPTH {
        let node = doc.get_dictionary(node_id).ok()?;

        if let Ok(media_box) = node.get(b"MediaBox") {
            return media_box_dimensions(doc, media_box);
        }

        node_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
    }
    None
}

fn media_box_dimensions(doc: &Document, media_box: &Object) -> Option<(f32, f32)> {
    let media_box = match media_box {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    let rect = media_box.as_array().ok()?;
    if rect.len() != 4 {
        return None;
    }

    let llx = extract_number(&rect[0])?;
    let lly = extract_number(&rect[1])?;
    let urx = extract_number(&rect[2])?;
    let ury = extract_number(&rect[3])?;

    let (width, height) = ((urx - llx).abs(), (ury - lly).abs());
    (width > 0.0 && height > 0.0).then_some((width, height))
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
