use web_sys::Document;

use crate::error::{EnhanceError, Result};

/// Rules the scroll reveal and the open mobile menu rely on.
pub const ANIMATION_CSS: &str = r#"
    .fade-in-section {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .fade-in-section.appear {
        opacity: 1;
        transform: translateY(0);
    }
    .nav-links.active {
        display: flex !important;
        flex-direction: column;
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100vh;
        background: #121212;
        justify-content: center;
        align-items: center;
        z-index: 999;
    }
    .nav-links.active li {
        margin: 20px 0;
    }
    .nav-links.active a {
        font-size: 1.5rem;
    }
"#;

pub fn inject(document: &Document) -> Result<()> {
    let head = document.head().ok_or(EnhanceError::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(ANIMATION_CSS));
    head.append_child(&style)?;
    log::debug!("Animation styles injected");
    Ok(())
}
