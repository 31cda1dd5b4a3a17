use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::RevealConfig;
use crate::dom::{self, ClassList};
use crate::error::Result;

/// Something that stops reporting on a target once asked to.
pub trait Watcher {
    type Target: ClassList;

    fn unwatch(&self, target: &Self::Target);
}

impl Watcher for IntersectionObserver {
    type Target = Element;

    fn unwatch(&self, target: &Element) {
        self.unobserve(target);
    }
}

/// Reveals `target` the first time it intersects, then stops watching it.
/// Returns whether it was revealed.
pub fn on_entry<W: Watcher>(
    watcher: &W,
    target: &W::Target,
    is_intersecting: bool,
    appear_class: &str,
) -> Result<bool> {
    if !is_intersecting {
        return Ok(false);
    }
    target.add_class(appear_class)?;
    watcher.unwatch(target);
    Ok(true)
}

pub fn bind(document: &Document, config: &RevealConfig) -> Result<()> {
    let sections = dom::query_all(document, config.selector)?;
    if sections.is_empty() {
        log::debug!("No {} elements to reveal", config.selector);
        return Ok(());
    }

    let appear_class = config.appear_class;
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if let Err(err) = on_entry(&observer, &target, entry.is_intersecting(), appear_class) {
                    log::error!("Failed to reveal section: {}", err);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin());
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for section in &sections {
        section.add_class(config.hidden_class)?;
        observer.observe(section);
    }
    log::debug!("Watching {} sections for fade-in", sections.len());
    Ok(())
}
