//! Mobile navigation menu.
//!
//! The toggle and the `.nav-links` container are expected to ship together.
//! A page that has nav links but no toggle gets a logged fault on link
//! click, after the container has been closed.

use web_sys::Document;

use crate::config::MenuConfig;
use crate::dom::{self, ClassList, InlineStyle};
use crate::error::{EnhanceError, Result};

/// Body `overflow` value while the menu is open or closed.
pub fn body_overflow(menu_open: bool) -> &'static str {
    if menu_open {
        "hidden"
    } else {
        "auto"
    }
}

fn lock_scroll<S: InlineStyle>(body: Option<&S>, menu_open: bool) -> Result<()> {
    match body {
        Some(body) => body.set_style_property("overflow", body_overflow(menu_open)),
        None => Ok(()),
    }
}

/// Flips the menu open or closed. Returns whether it is now open.
pub fn toggle<C: ClassList, S: InlineStyle>(
    toggle: &C,
    container: Option<&C>,
    body: Option<&S>,
    config: &MenuConfig,
) -> Result<bool> {
    let container = container.ok_or(EnhanceError::MissingElement(config.container_selector))?;
    let open = container.toggle_class(config.active_class)?;
    toggle.toggle_class(config.open_class)?;
    lock_scroll(body, open)?;
    Ok(open)
}

pub fn close<C: ClassList, S: InlineStyle>(
    container: Option<&C>,
    toggle: Option<&C>,
    body: Option<&S>,
    config: &MenuConfig,
) -> Result<()> {
    let container = container.ok_or(EnhanceError::MissingElement(config.container_selector))?;
    container.remove_class(config.active_class)?;
    let toggle = toggle.ok_or(EnhanceError::MissingElement(config.toggle_selector))?;
    toggle.remove_class(config.open_class)?;
    lock_scroll(body, false)
}

pub fn bind(document: &Document, config: &MenuConfig) -> Result<()> {
    let toggle_el = dom::query(document, config.toggle_selector)?;
    let container = dom::query(document, config.container_selector)?;
    let body = document.body();

    if let Some(button) = toggle_el.clone() {
        let target = button.clone();
        let container = container.clone();
        let body = body.clone();
        let config = config.clone();
        dom::listen(&target, "click", move |_| {
            toggle(&button, container.as_ref(), body.as_ref(), &config).map(|_| ())
        })?;
    } else {
        log::debug!("No {} on page", config.toggle_selector);
    }

    let links = dom::query_all(document, config.link_selector)?;
    for link in &links {
        let toggle_el = toggle_el.clone();
        let container = container.clone();
        let body = body.clone();
        let config = config.clone();
        dom::listen(link, "click", move |_| {
            close(
                container.as_ref(),
                toggle_el.as_ref(),
                body.as_ref(),
                &config,
            )
        })?;
    }
    log::debug!("Mobile menu bound to {} nav links", links.len());
    Ok(())
}
