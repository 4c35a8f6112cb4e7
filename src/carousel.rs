use std::time::Duration;
use tracing::{debug, trace};

use crate::constants::*;
use crate::error::CarouselError;
use crate::position::{self, Position};
use crate::schedule::{Scheduler, TimerHandle};
use crate::state::{ClickMode, StackState};

/// Current index of a deck of `total` cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    total: usize,
    current_index: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Result<Self, CarouselError> {
        if total == 0 {
            return Err(CarouselError::EmptyDeck);
        }
        Ok(Self { total, current_index: 0 })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Moves to `index`, wrapping one step past either end. Returns true when
    /// the current card changed.
    pub fn go_to(&mut self, index: isize) -> bool {
        let target = if index < 0 {
            self.total - 1
        } else if index as usize >= self.total {
            0
        } else {
            index as usize
        };

        if target == self.current_index {
            return false;
        }
        self.current_index = target;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_index as isize + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.current_index as isize - 1)
    }

    /// Slot of card `index`, or `None` past the end of the deck.
    pub fn position_of(&self, index: usize) -> Option<Position> {
        position::position_of(self.total, self.current_index, index).ok()
    }

    pub fn positions(&self) -> Vec<Position> {
        (0..self.total).filter_map(|i| self.position_of(i)).collect()
    }
}

/// Input the controller reacts to, already decoded from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Prev,
    Next,
    GoTo(isize),
    Click(usize),
    Swipe { start_x: f32, end_x: f32 },
    PointerEnter,
    PointerLeave,
    CloseLightbox,
}

/// Carousel plus the behaviour around it: auto-advance, pause, progress,
/// swipe and click navigation, lightbox.
#[derive(Debug)]
pub struct CardStack {
    carousel: Carousel,
    scheduler: Scheduler,
    auto_advance: Option<TimerHandle>,
    interval: Duration,
    click_mode: ClickMode,
    state: StackState,
    paused: bool,
    touch_device: bool,
}

impl CardStack {
    pub fn new(total: usize, interval: Duration, click_mode: ClickMode) -> Result<Self, CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::InvalidArgument("auto-advance interval must be positive".into()));
        }
        Ok(Self {
            carousel: Carousel::new(total)?,
            scheduler: Scheduler::new(),
            auto_advance: None,
            interval,
            click_mode,
            state: StackState::Browsing,
            paused: false,
            touch_device: false,
        })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn positions(&self) -> Vec<Position> {
        self.carousel.positions()
    }

    pub fn state(&self) -> StackState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_some_and(|h| self.scheduler.is_active(h))
    }

    /// Hover no longer pauses once the input is known to be touch.
    pub fn set_touch_device(&mut self, touch: bool) {
        self.touch_device = touch;
    }

    /// Starts the auto-advance timer unless the viewport is mobile sized.
    /// Returns whether a timer is running afterwards.
    pub fn start_auto_advance(&mut self, viewport_width: i32) -> bool {
        if viewport_width <= MOBILE_BREAKPOINT {
            debug!(viewport_width, "auto-advance disabled on narrow viewport");
            return self.is_auto_advancing();
        }
        if self.auto_advance.is_none() {
            let handle = self.scheduler.every(self.interval);
            self.scheduler.set_paused(handle, self.is_held());
            self.auto_advance = Some(handle);
            debug!(interval_ms = self.interval.as_millis() as u64, "auto-advance started");
        }
        true
    }

    /// Cancels the auto-advance timer. Dropping the stack releases it too.
    pub fn stop_auto_advance(&mut self) {
        if let Some(handle) = self.auto_advance.take() {
            self.scheduler.cancel(handle);
            debug!("auto-advance stopped");
        }
    }

    /// Advances timers by `dt` seconds. Returns true when the current card
    /// changed.
    pub fn update(&mut self, dt: f32) -> bool {
        let fired = self.scheduler.advance(dt);
        let auto_advance = self.auto_advance;
        match auto_advance {
            Some(handle) if fired.contains(&handle) && !self.is_held() => {
                trace!("auto-advance tick");
                self.step(Carousel::next)
            }
            _ => false,
        }
    }

    /// Progress of the current auto-advance interval in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.auto_advance
            .map_or(0.0, |h| self.scheduler.elapsed_fraction(h))
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.sync_timer();
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.sync_timer();
    }

    pub fn go_to(&mut self, index: isize) -> bool {
        self.navigate(|c| c.go_to(index))
    }

    pub fn next(&mut self) -> bool {
        self.navigate(Carousel::next)
    }

    pub fn prev(&mut self) -> bool {
        self.navigate(Carousel::prev)
    }

    /// Swipe from `start_x` to `end_x`. Travel shorter than the threshold is
    /// ignored; dragging left shows the next card.
    pub fn swipe(&mut self, start_x: f32, end_x: f32) -> bool {
        let travel = start_x - end_x;
        if travel.abs() <= SWIPE_THRESHOLD {
            return false;
        }
        if travel > 0.0 { self.next() } else { self.prev() }
    }

    /// Click on card `index`. The center card opens the lightbox; side cards
    /// navigate according to the click mode; hidden cards are inert.
    pub fn click(&mut self, index: usize) -> bool {
        if self.state == StackState::Lightbox {
            return false;
        }
        let Some(position) = self.carousel.position_of(index) else {
            return false;
        };

        match (position, self.click_mode) {
            (Position::Center, _) => {
                self.open_lightbox();
                false
            }
            (Position::Hidden, ClickMode::Step) => false,
            (_, ClickMode::Jump) => self.go_to(index as isize),
            (p, ClickMode::Step) if p.is_left() => self.prev(),
            (_, ClickMode::Step) => self.next(),
        }
    }

    pub fn open_lightbox(&mut self) {
        if self.state == StackState::Lightbox {
            return;
        }
        debug!(index = self.current_index(), "lightbox opened");
        self.state = StackState::Lightbox;
        self.pause();
    }

    pub fn close_lightbox(&mut self) {
        if self.state != StackState::Lightbox {
            return;
        }
        debug!("lightbox closed");
        self.state = StackState::Browsing;
        self.resume();
    }

    /// Applies one decoded input. Returns true when the current card changed.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Prev => self.prev(),
            Command::Next => self.next(),
            Command::GoTo(index) => self.go_to(index),
            Command::Click(index) => self.click(index),
            Command::Swipe { start_x, end_x } => self.swipe(start_x, end_x),
            Command::PointerEnter => {
                if !self.touch_device && self.state == StackState::Browsing {
                    self.pause();
                }
                false
            }
            Command::PointerLeave => {
                if !self.touch_device && self.state == StackState::Browsing {
                    self.resume();
                }
                false
            }
            Command::CloseLightbox => {
                self.close_lightbox();
                false
            }
        }
    }

    fn navigate(&mut self, f: impl FnOnce(&mut Carousel) -> bool) -> bool {
        if self.state == StackState::Lightbox {
            return false;
        }
        self.step(f)
    }

    fn step(&mut self, f: impl FnOnce(&mut Carousel) -> bool) -> bool {
        let changed = f(&mut self.carousel);
        if changed {
            debug!(index = self.current_index(), total = self.carousel.total(), "position changed");
            if let Some(handle) = self.auto_advance {
                self.scheduler.reset(handle);
            }
        }
        changed
    }

    fn is_held(&self) -> bool {
        self.paused || self.state == StackState::Lightbox
    }

    fn sync_timer(&mut self) {
        if let Some(handle) = self.auto_advance {
            self.scheduler.set_paused(handle, self.is_held());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(total: usize, mode: ClickMode) -> CardStack {
        CardStack::new(total, Duration::from_secs(5), mode).unwrap()
    }

    #[test]
    fn go_to_wraps_one_past_either_end() {
        let mut carousel = Carousel::new(5).unwrap();
        assert!(carousel.go_to(-1));
        assert_eq!(carousel.current_index(), 4);

        let mut carousel = Carousel::new(5).unwrap();
        assert!(!carousel.go_to(5));
        assert_eq!(carousel.current_index(), 0);

        carousel.go_to(3);
        assert!(carousel.go_to(5));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn go_to_current_is_a_no_op() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.go_to(2);
        let before = carousel.clone();
        assert!(!carousel.go_to(2));
        assert_eq!(carousel, before);
    }

    #[test]
    fn next_and_prev_cycle() {
        let mut carousel = Carousel::new(3).unwrap();
        assert!(carousel.prev());
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.next());
        assert!(carousel.next());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn single_card_never_moves() {
        let mut carousel = Carousel::new(1).unwrap();
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert_eq!(carousel.positions(), vec![Position::Center]);
    }

    #[test]
    fn empty_deck_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::EmptyDeck));
        assert!(CardStack::new(3, Duration::ZERO, ClickMode::Jump).is_err());
    }

    #[test]
    fn auto_advance_after_interval() {
        let mut stack = stack(4, ClickMode::Jump);
        assert!(stack.start_auto_advance(1920));

        assert!(!stack.update(4.0));
        assert!(stack.update(1.0));
        assert_eq!(stack.current_index(), 1);
    }

    #[test]
    fn narrow_viewport_has_no_auto_advance() {
        let mut stack = stack(4, ClickMode::Jump);
        assert!(!stack.start_auto_advance(MOBILE_BREAKPOINT));
        assert!(!stack.update(60.0));
        assert_eq!(stack.progress(), 0.0);
    }

    #[test]
    fn paused_stack_holds_position() {
        let mut stack = stack(4, ClickMode::Jump);
        stack.start_auto_advance(1920);
        stack.pause();
        assert!(!stack.update(10.0));
        stack.resume();
        assert!(stack.update(5.0));
    }

    #[test]
    fn navigation_resets_progress() {
        let mut stack = stack(4, ClickMode::Jump);
        stack.start_auto_advance(1920);
        stack.update(4.0);
        assert!(stack.progress() > 0.7);

        assert!(stack.next());
        assert_eq!(stack.progress(), 0.0);
        assert!(!stack.update(4.0));
    }

    #[test]
    fn swipe_threshold() {
        let mut stack = stack(4, ClickMode::Jump);
        assert!(!stack.swipe(100.0, 60.0));
        assert!(stack.swipe(200.0, 100.0));
        assert_eq!(stack.current_index(), 1);
        assert!(stack.swipe(100.0, 200.0));
        assert_eq!(stack.current_index(), 0);
    }

    #[test]
    fn jump_click_goes_to_card() {
        let mut stack = stack(6, ClickMode::Jump);
        assert!(stack.click(4));
        assert_eq!(stack.current_index(), 4);
        // hidden cards are reachable too in jump mode
        assert!(stack.click(1));
        assert_eq!(stack.current_index(), 1);
    }

    #[test]
    fn step_click_moves_one_card() {
        let mut stack = stack(6, ClickMode::Step);
        assert!(stack.click(2));
        assert_eq!(stack.current_index(), 1);
        assert!(stack.click(5));
        assert_eq!(stack.current_index(), 0);
        assert!(!stack.click(3));
        assert_eq!(stack.current_index(), 0);
    }

    #[test]
    fn lightbox_holds_navigation_and_timer() {
        let mut stack = stack(4, ClickMode::Jump);
        stack.start_auto_advance(1920);

        assert!(!stack.click(0));
        assert_eq!(stack.state(), StackState::Lightbox);
        assert!(!stack.next());
        assert!(!stack.update(30.0));

        assert!(!stack.handle(Command::CloseLightbox));
        assert_eq!(stack.state(), StackState::Browsing);
        assert!(stack.update(5.0));
    }

    #[test]
    fn hover_pauses_unless_touch() {
        let mut stack = stack(4, ClickMode::Jump);
        stack.handle(Command::PointerEnter);
        assert!(stack.is_paused());
        stack.handle(Command::PointerLeave);
        assert!(!stack.is_paused());

        stack.set_touch_device(true);
        stack.handle(Command::PointerEnter);
        assert!(!stack.is_paused());
    }

    #[test]
    fn stop_cancels_timer() {
        let mut stack = stack(4, ClickMode::Jump);
        stack.start_auto_advance(1920);
        assert!(stack.is_auto_advancing());
        stack.stop_auto_advance();
        assert!(!stack.is_auto_advancing());
        assert!(!stack.update(10.0));
    }
}
