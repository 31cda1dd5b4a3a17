use web_sys::{Document, Window};

use crate::config::HeaderConfig;
use crate::dom::{self, ClassList};
use crate::error::Result;

pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Brings the header's marker class in line with `scroll_y`.
pub fn on_scroll<C: ClassList>(header: &C, scroll_y: f64, config: &HeaderConfig) -> Result<()> {
    dom::sync_class(
        header,
        config.scrolled_class,
        is_scrolled(scroll_y, config.threshold_px),
    )
}

pub fn bind(window: &Window, document: &Document, config: &HeaderConfig) -> Result<()> {
    let Some(header) = dom::query(document, config.selector)? else {
        log::debug!("No {} on page, skipping scroll marker", config.selector);
        return Ok(());
    };

    let config = config.clone();
    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        on_scroll(&header, win.scroll_y()?, &config)
    })
}
