//! pdfjam page list syntax
//!
//! Real pages are written as 1-based decimal numbers and blanks as `{}`,
//! separated by commas with no spaces: `[4, blank, 1]` becomes `4,{},1`.

use crate::constants::{BLANK_PAGE_TOKEN, PAGE_LIST_SEPARATOR};
use crate::layout::PageSlot;
use crate::types::{BookletError, Result};

/// Render slots in the renderer's page list syntax
pub fn format_page_list(slots: &[PageSlot]) -> String {
    let mut out = String::with_capacity(slots.len() * 3);
    for (idx, slot) in slots.iter().enumerate() {
        if idx > 0 {
            out.push(PAGE_LIST_SEPARATOR);
        }
        match slot {
            PageSlot::Page(number) => out.push_str(&number.to_string()),
            PageSlot::Blank => out.push_str(BLANK_PAGE_TOKEN),
        }
    }
    out
}

/// Parse a page list produced by [`format_page_list`].
///
/// Only plain page numbers and `{}` are accepted; pdfjam ranges such as
/// `1-4` are rejected. The empty string is the empty list.
pub fn parse_page_list(text: &str) -> Result<Vec<PageSlot>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(PAGE_LIST_SEPARATOR)
        .enumerate()
        .map(|(idx, token)| parse_token(token.trim(), idx))
        .collect()
}

fn parse_token(token: &str, idx: usize) -> Result<PageSlot> {
    if token == BLANK_PAGE_TOKEN {
        return Ok(PageSlot::Blank);
    }

    match token.parse::<usize>() {
        Ok(0) => Err(BookletError::PageList(format!(
            "entry {idx}: page numbers start at 1"
        ))),
        Ok(number) => Ok(PageSlot::Page(number)),
        Err(_) => Err(BookletError::PageList(format!(
            "entry {idx}: expected a page number or {BLANK_PAGE_TOKEN}, found '{token}'"
        ))),
    }
}
