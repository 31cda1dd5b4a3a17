use log::info;

mod config;
mod dom;
mod error;
mod page;
mod styles;
mod interactions {
    pub mod anchors;
    pub mod cta;
    pub mod header;
    pub mod menu;
    pub mod reveal;
    pub mod testimonials;
}

use config::PageConfig;
use error::Result;

/// `document.readyState` while the markup is still being parsed.
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn start() -> Result<()> {
    let document = dom::document()?;

    if let Err(err) = styles::inject(&document) {
        log::warn!("Animation styles not injected: {}", err);
    }

    if is_loading(&document.ready_state()) {
        info!("Waiting for DOMContentLoaded");
        let mut pending = Some(PageConfig::default());
        dom::listen(&document, "DOMContentLoaded", move |_| match pending.take() {
            Some(config) => page::enhance(&config),
            None => Ok(()),
        })
    } else {
        page::enhance(&PageConfig::default())
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page enhancements");
    if let Err(err) = start() {
        log::error!("Page enhancements unavailable: {}", err);
    }
}
