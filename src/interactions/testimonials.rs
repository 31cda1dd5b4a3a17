//! Testimonial auto-rotation.
//!
//! One testimonial is shown at a time. Each cycle fades the current one out,
//! swaps it for the next, then fades the new one in:
//!
//! ```text
//! Showing --(opacity 0)--> FadingOut --(swap display)--> Settling --(opacity 1)--> Showing
//! ```
//!
//! [`Rotation::step`] performs one transition and returns how long to wait
//! before the next, so a single task awaiting those delays drives the whole
//! cycle in order.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::config::{RotationTiming, TestimonialConfig};
use crate::dom;
use crate::error::Result;

/// The ordered elements a [`Rotation`] cycles through.
pub trait SlideDeck {
    fn len(&self) -> usize;
    fn set_opacity(&self, index: usize, opacity: &str);
    fn set_display(&self, index: usize, display: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Showing,
    FadingOut,
    Settling,
}

pub struct Rotation<D> {
    deck: D,
    index: usize,
    phase: Phase,
    timing: RotationTiming,
}

impl<D: SlideDeck> Rotation<D> {
    /// `None` when there is nothing to rotate.
    pub fn new(deck: D, timing: RotationTiming) -> Option<Self> {
        if deck.len() <= 1 {
            return None;
        }
        Some(Self {
            deck,
            index: 0,
            phase: Phase::Showing,
            timing,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Wait before the first fade-out.
    pub fn first_delay_ms(&self) -> u32 {
        self.timing.period_ms
    }

    /// Runs the current phase's effect and returns the delay until the next.
    pub fn step(&mut self) -> u32 {
        match self.phase {
            Phase::Showing => {
                self.deck.set_opacity(self.index, "0");
                self.phase = Phase::FadingOut;
                self.timing.fade_ms
            }
            Phase::FadingOut => {
                self.deck.set_display(self.index, "none");
                self.index = (self.index + 1) % self.deck.len();
                self.deck.set_display(self.index, "block");
                self.phase = Phase::Settling;
                self.timing.settle_ms
            }
            Phase::Settling => {
                self.deck.set_opacity(self.index, "1");
                self.phase = Phase::Showing;
                self.timing.rest_ms()
            }
        }
    }
}

struct ElementDeck(Vec<HtmlElement>);

impl ElementDeck {
    fn apply(&self, index: usize, property: &str, value: &str) {
        if let Some(element) = self.0.get(index) {
            if let Err(err) = dom::set_style(element, property, value) {
                log::warn!("Testimonial {} {}: {}", index, property, err);
            }
        }
    }
}

impl SlideDeck for ElementDeck {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn set_opacity(&self, index: usize, opacity: &str) {
        self.apply(index, "opacity", opacity);
    }

    fn set_display(&self, index: usize, display: &str) {
        self.apply(index, "display", display);
    }
}

/// Drives `rotation` for the rest of the page's life.
pub fn run<D: SlideDeck + 'static>(mut rotation: Rotation<D>) {
    spawn_local(async move {
        let mut wait = rotation.first_delay_ms();
        loop {
            TimeoutFuture::new(wait).await;
            log::trace!("Testimonial {} {:?}", rotation.index(), rotation.phase());
            wait = rotation.step();
        }
    });
}

pub fn bind(document: &Document, config: &TestimonialConfig) -> Result<()> {
    if !config.timing.is_consistent() {
        log::warn!(
            "Testimonial fade ({}ms + {}ms) overruns the {}ms period",
            config.timing.fade_ms,
            config.timing.settle_ms,
            config.timing.period_ms
        );
    }

    let items = dom::query_all_html(document, config.selector)?;
    let count = items.len();
    match Rotation::new(ElementDeck(items), config.timing) {
        Some(rotation) => {
            log::debug!("Rotating {} testimonials", count);
            run(rotation);
        }
        None => log::debug!("{} testimonial(s), rotation disabled", count),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::PageConfig;

    #[derive(Clone, Debug, PartialEq)]
    struct Slide {
        display: String,
        opacity: String,
    }

    /// Mimics page CSS: first testimonial visible, the rest hidden.
    #[derive(Clone)]
    struct FakeDeck {
        slides: Rc<RefCell<Vec<Slide>>>,
        writes: Rc<RefCell<usize>>,
    }

    impl FakeDeck {
        fn new(count: usize) -> Self {
            let slides = (0..count)
                .map(|i| Slide {
                    display: if i == 0 { "block" } else { "none" }.to_string(),
                    opacity: "1".to_string(),
                })
                .collect();
            Self {
                slides: Rc::new(RefCell::new(slides)),
                writes: Rc::new(RefCell::new(0)),
            }
        }

        fn visible(&self) -> Vec<usize> {
            self.slides
                .borrow()
                .iter()
                .enumerate()
                .filter(|(_, s)| s.display != "none")
                .map(|(i, _)| i)
                .collect()
        }

        fn opacity(&self, index: usize) -> String {
            self.slides.borrow()[index].opacity.clone()
        }
    }

    impl SlideDeck for FakeDeck {
        fn len(&self) -> usize {
            self.slides.borrow().len()
        }

        fn set_opacity(&self, index: usize, opacity: &str) {
            *self.writes.borrow_mut() += 1;
            self.slides.borrow_mut()[index].opacity = opacity.to_string();
        }

        fn set_display(&self, index: usize, display: &str) {
            *self.writes.borrow_mut() += 1;
            self.slides.borrow_mut()[index].display = display.to_string();
        }
    }

    fn timing() -> RotationTiming {
        PageConfig::default().testimonials.timing
    }

    /// Advances a virtual clock to `until_ms`, firing every step due by then.
    fn run_until<D: SlideDeck>(rotation: &mut Rotation<D>, until_ms: u32) {
        let mut clock = 0;
        let mut next = rotation.first_delay_ms();
        while clock + next <= until_ms {
            clock += next;
            next = rotation.step();
        }
    }

    #[test]
    fn nothing_to_rotate_with_fewer_than_two() {
        for count in [0, 1] {
            let deck = FakeDeck::new(count);
            assert!(Rotation::new(deck.clone(), timing()).is_none());
            assert_eq!(*deck.writes.borrow(), 0);
        }
    }

    #[test]
    fn phases_cycle_with_their_delays() {
        let mut rotation = Rotation::new(FakeDeck::new(3), timing()).unwrap();
        assert_eq!(rotation.first_delay_ms(), 5000);
        assert_eq!(rotation.phase(), Phase::Showing);

        assert_eq!(rotation.step(), 500);
        assert_eq!(rotation.phase(), Phase::FadingOut);
        assert_eq!(rotation.step(), 20);
        assert_eq!(rotation.phase(), Phase::Settling);
        assert_eq!(rotation.step(), 4480);
        assert_eq!(rotation.phase(), Phase::Showing);
        assert_eq!(rotation.step(), 500);
    }

    #[test]
    fn fade_out_leaves_the_current_slide_visible() {
        let deck = FakeDeck::new(2);
        let mut rotation = Rotation::new(deck.clone(), timing()).unwrap();
        rotation.step();
        assert_eq!(deck.visible(), vec![0]);
        assert_eq!(deck.opacity(0), "0");
    }

    #[test]
    fn swapped_slide_starts_transparent() {
        let deck = FakeDeck::new(2);
        let mut rotation = Rotation::new(deck.clone(), timing()).unwrap();
        deck.slides.borrow_mut()[1].opacity = "0".to_string();
        rotation.step();
        rotation.step();
        assert_eq!(deck.visible(), vec![1]);
        assert_eq!(deck.opacity(1), "0");
        rotation.step();
        assert_eq!(deck.opacity(1), "1");
    }

    #[test]
    fn one_period_later_exactly_one_slide_shows() {
        let deck = FakeDeck::new(4);
        let mut rotation = Rotation::new(deck.clone(), timing()).unwrap();
        run_until(&mut rotation, 5000 + 500 + 20);

        assert_eq!(rotation.index(), 1);
        assert_eq!(deck.visible(), vec![1]);
        assert_eq!(deck.opacity(1), "1");
    }

    #[test]
    fn nothing_moves_before_the_first_period() {
        let deck = FakeDeck::new(3);
        let mut rotation = Rotation::new(deck.clone(), timing()).unwrap();
        run_until(&mut rotation, 4999);
        assert_eq!(*deck.writes.borrow(), 0);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn index_advances_once_per_period_and_wraps() {
        let mut seen = Vec::new();
        for cycle in 1..=7 {
            let mut rotation = Rotation::new(FakeDeck::new(3), timing()).unwrap();
            run_until(&mut rotation, cycle * 5000 + 520);
            seen.push(rotation.index());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn three_cycles_over_three_slides_returns_to_the_first() {
        let deck = FakeDeck::new(3);
        let mut rotation = Rotation::new(deck.clone(), timing()).unwrap();
        run_until(&mut rotation, 3 * 5000 + 520);

        assert_eq!(rotation.index(), 0);
        assert_eq!(rotation.phase(), Phase::Showing);
        assert_eq!(deck.visible(), vec![0]);
        assert_eq!(deck.opacity(0), "1");
    }

    #[test]
    fn steps_never_overlap_across_cycles() {
        let mut rotation = Rotation::new(FakeDeck::new(2), timing()).unwrap();
        let mut clock = rotation.first_delay_ms();
        let mut fade_outs = Vec::new();
        for _ in 0..30 {
            if rotation.phase() == Phase::Showing {
                fade_outs.push(clock);
            }
            clock += rotation.step();
        }
        let gaps: Vec<u32> = fade_outs.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps.iter().all(|gap| *gap == 5000));
    }
}
