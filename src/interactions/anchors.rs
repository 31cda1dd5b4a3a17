use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::config::AnchorConfig;
use crate::dom;
use crate::error::Result;

/// Selector to scroll to for an in-page `href`. A bare `#` links to nothing.
pub fn fragment_target(href: &str) -> Option<&str> {
    match href {
        "#" | "" => None,
        fragment if fragment.starts_with('#') => Some(fragment),
        _ => None,
    }
}

/// Page offset that lands `target` just below the fixed header.
pub fn scroll_destination(rect_top: f64, page_y_offset: f64, header_offset_px: f64) -> f64 {
    rect_top + page_y_offset - header_offset_px
}

/// Where to scroll for a click on a link with `href`, or `None` to let the
/// browser navigate. `find_rect_top` looks a selector up and returns the
/// matching element's viewport-relative top edge.
pub fn resolve_click<F>(
    href: Option<&str>,
    page_y_offset: f64,
    header_offset_px: f64,
    find_rect_top: F,
) -> Result<Option<f64>>
where
    F: FnOnce(&str) -> Result<Option<f64>>,
{
    let Some(selector) = href.and_then(fragment_target) else {
        return Ok(None);
    };
    Ok(find_rect_top(selector)?
        .map(|rect_top| scroll_destination(rect_top, page_y_offset, header_offset_px)))
}

pub fn bind(window: &Window, document: &Document, config: &AnchorConfig) -> Result<()> {
    let anchors = dom::query_all(document, config.selector)?;
    for anchor in &anchors {
        let link = anchor.clone();
        let win = window.clone();
        let doc = document.clone();
        let header_offset = config.header_offset_px;
        dom::listen(anchor, "click", move |e| {
            let href = link.get_attribute("href");
            let destination = resolve_click(
                href.as_deref(),
                win.page_y_offset()?,
                header_offset,
                |selector| {
                    Ok(dom::query(&doc, selector)?
                        .map(|target| target.get_bounding_client_rect().top()))
                },
            )?;
            let Some(top) = destination else {
                return Ok(());
            };

            e.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
            Ok(())
        })?;
    }
    log::debug!("Smooth scrolling bound to {} anchors", anchors.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_not_a_target() {
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn fragment_is_used_as_selector() {
        assert_eq!(fragment_target("#services"), Some("#services"));
        assert_eq!(fragment_target("tel:+358401234567"), None);
    }

    #[test]
    fn bare_hash_never_looks_anything_up() {
        let result = resolve_click(Some("#"), 0.0, 80.0, |_| panic!("no lookup for a bare hash"));
        assert_eq!(result.unwrap(), None);
        assert_eq!(resolve_click(None, 0.0, 80.0, |_| Ok(Some(0.0))).unwrap(), None);
    }

    #[test]
    fn existing_target_takes_over_navigation() {
        let mut looked_up = None;
        let result = resolve_click(Some("#services"), 900.0, 80.0, |selector| {
            looked_up = Some(selector.to_string());
            Ok(Some(340.0))
        });
        assert_eq!(result.unwrap(), Some(1160.0));
        assert_eq!(looked_up.as_deref(), Some("#services"));
    }

    #[test]
    fn missing_target_leaves_navigation_alone() {
        let result = resolve_click(Some("#gallery"), 900.0, 80.0, |_| Ok(None));
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn destination_clears_the_header() {
        assert_eq!(scroll_destination(420.0, 300.0, 80.0), 640.0);
        assert_eq!(scroll_destination(-200.0, 1000.0, 80.0), 720.0);
    }
}
