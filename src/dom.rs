use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{EnhanceError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(EnhanceError::NoDocument)
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Class list operations the interactions need from an element.
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<()>;
    fn remove_class(&self, class: &str) -> Result<()>;
    /// Returns whether `class` is present afterwards.
    fn toggle_class(&self, class: &str) -> Result<bool>;
}

impl ClassList for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        Ok(self.class_list().add_1(class)?)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        Ok(self.class_list().remove_1(class)?)
    }

    fn toggle_class(&self, class: &str) -> Result<bool> {
        Ok(self.class_list().toggle(class)?)
    }
}

pub trait InlineStyle {
    fn set_style_property(&self, property: &str, value: &str) -> Result<()>;
}

impl InlineStyle for HtmlElement {
    fn set_style_property(&self, property: &str, value: &str) -> Result<()> {
        set_style(self, property, value)
    }
}

/// Adds or removes `class` so its presence matches `present`. Leaves the
/// class list alone when it already matches.
pub fn sync_class<C: ClassList + ?Sized>(element: &C, class: &str, present: bool) -> Result<()> {
    if element.has_class(class) == present {
        return Ok(());
    }
    if present {
        element.add_class(class)
    } else {
        element.remove_class(class)
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    Ok(element.style().set_property(property, value)?)
}

/// Attaches `handler` to `event` on `target` for the rest of the page's life.
/// Handler errors end up in the console log.
pub fn listen<F>(target: &EventTarget, event: &str, mut handler: F) -> Result<()>
where
    F: FnMut(Event) -> Result<()> + 'static,
{
    let event_name = event.to_string();
    let callback = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        if let Err(err) = handler(e) {
            log::error!("{} handler failed: {}", event_name, err);
        }
    });
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
