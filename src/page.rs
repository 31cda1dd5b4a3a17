use crate::config::PageConfig;
use crate::dom;
use crate::error::Result;
use crate::interactions::{anchors, cta, header, menu, reveal, testimonials};

fn report(name: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("Skipping {} enhancement: {}", name, err);
    }
}

pub fn ready_message(site_name: &str) -> String {
    format!("{}: Technical Architecture Interface Initialized.", site_name)
}

/// Binds every page interaction. A binding that fails is logged and the rest
/// still run.
pub fn enhance(config: &PageConfig) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    report("header", header::bind(&window, &document, &config.header));
    report("mobile menu", menu::bind(&document, &config.menu));
    report("anchor", anchors::bind(&window, &document, &config.anchors));
    report("reveal", reveal::bind(&document, &config.reveal));
    report("testimonial", testimonials::bind(&document, &config.testimonials));
    report("call-to-action", cta::bind(&document, &config.cta));

    log::info!("{}", ready_message(config.site_name));
    Ok(())
}
