use web_sys::Document;

use crate::config::CtaConfig;
use crate::dom;
use crate::error::Result;

pub fn is_phone_link(href: Option<&str>, phone_scheme: &str) -> bool {
    href.is_some_and(|href| href.starts_with(phone_scheme))
}

pub fn bind(document: &Document, config: &CtaConfig) -> Result<()> {
    let buttons = dom::query_all(document, config.selector)?;
    for button in &buttons {
        let btn = button.clone();
        let phone_scheme = config.phone_scheme;
        dom::listen(button, "click", move |_| {
            if is_phone_link(btn.get_attribute("href").as_deref(), phone_scheme) {
                log::info!("Call-to-action: Phone booking initiated");
            }
            Ok(())
        })?;
    }
    log::debug!("Tracking {} call-to-action buttons", buttons.len());
    Ok(())
}
