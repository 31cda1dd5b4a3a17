use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderConfig {
    pub selector: &'static str,
    pub scrolled_class: &'static str,
    pub threshold_px: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuConfig {
    pub toggle_selector: &'static str,
    pub container_selector: &'static str,
    pub link_selector: &'static str,
    pub active_class: &'static str,
    pub open_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnchorConfig {
    pub selector: &'static str,
    pub header_offset_px: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub selector: &'static str,
    pub hidden_class: &'static str,
    pub appear_class: &'static str,
    /// Fraction of the element that must be visible before it appears.
    pub threshold: f64,
    /// Shrinks the viewport's bottom edge so sections appear a bit later.
    pub bottom_margin_px: u32,
}

impl RevealConfig {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// Rotation cadence in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationTiming {
    pub period_ms: u32,
    /// Matches the opacity transition on `.testimonial-item`.
    pub fade_ms: u32,
    /// Lets the display change land before the fade-in starts.
    pub settle_ms: u32,
}

impl RotationTiming {
    /// The fade and settle steps must finish before the next cycle begins.
    pub fn is_consistent(&self) -> bool {
        self.fade_ms + self.settle_ms < self.period_ms
    }

    pub fn rest_ms(&self) -> u32 {
        self.period_ms
            .saturating_sub(self.fade_ms)
            .saturating_sub(self.settle_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestimonialConfig {
    pub selector: &'static str,
    pub timing: RotationTiming,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CtaConfig {
    pub selector: &'static str,
    pub phone_scheme: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub site_name: &'static str,
    pub header: HeaderConfig,
    pub menu: MenuConfig,
    pub anchors: AnchorConfig,
    pub reveal: RevealConfig,
    pub testimonials: TestimonialConfig,
    pub cta: CtaConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            site_name: "Arena Salon",
            header: HeaderConfig {
                selector: "header",
                scrolled_class: "scrolled",
                threshold_px: 50.0,
            },
            menu: MenuConfig {
                toggle_selector: ".mobile-menu-toggle",
                container_selector: ".nav-links",
                link_selector: ".nav-links a",
                active_class: "active",
                open_class: "open",
            },
            anchors: AnchorConfig {
                selector: "a[href^=\"#\"]",
                header_offset_px: 80.0,
            },
            reveal: RevealConfig {
                selector: "section",
                hidden_class: "fade-in-section",
                appear_class: "appear",
                threshold: 0.1,
                bottom_margin_px: 50,
            },
            testimonials: TestimonialConfig {
                selector: ".testimonial-item",
                timing: RotationTiming {
                    period_ms: 5000,
                    fade_ms: 500,
                    settle_ms: 20,
                },
            },
            cta: CtaConfig {
                selector: ".cta-button, .primary-btn",
                phone_scheme: "tel:",
            },
        }
    }
}
