//! Circular 3-card carousel navigator.
//!
//! A cursor over a fixed item list with a sliding window of three entries
//! at relative offsets -1 / 0 / +1. Index arithmetic is modular, so the
//! cursor can never leave `[0, len)`.
//!
//! ```text
//!   Browsing ──click(0)──▶ DetailOpen
//!      ▲                       │
//!      └─────close_detail──────┘
//! ```
//!
//! Navigation (next / previous / jump / drag) only acts while `Browsing`.

pub mod layout;

/// Horizontal drag distance (px) that commits a slide
pub const DRAG_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Browsing,
    DetailOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    IndexOutOfRange { index: usize, len: usize },
    /// Navigation attempted while the detail view is open
    DetailOpen,
    Empty,
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for {} items", index, len)
            }
            CarouselError::DetailOpen => write!(f, "detail view is open"),
            CarouselError::Empty => write!(f, "carousel has no items"),
        }
    }
}

impl std::error::Error for CarouselError {}

pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    selected: Option<usize>,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            current: 0,
            selected: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn state(&self) -> NavState {
        if self.selected.is_some() {
            NavState::DetailOpen
        } else {
            NavState::Browsing
        }
    }

    fn can_navigate(&self) -> bool {
        !self.items.is_empty() && self.state() == NavState::Browsing
    }

    /// Advance one item, wrapping at the end.
    pub fn next(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.current = (self.current + 1) % self.items.len();
        log::debug!("carousel next -> {}", self.current);
        true
    }

    /// Step back one item, wrapping at the start.
    pub fn previous(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        let len = self.items.len();
        self.current = (self.current + len - 1) % len;
        log::debug!("carousel previous -> {}", self.current);
        true
    }

    /// Jump straight to `index` (indicator dots).
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if self.items.is_empty() {
            return Err(CarouselError::Empty);
        }
        if self.state() == NavState::DetailOpen {
            return Err(CarouselError::DetailOpen);
        }
        if index >= self.items.len() {
            let err = CarouselError::IndexOutOfRange {
                index,
                len: self.items.len(),
            };
            log::warn!("carousel jump rejected: {}", err);
            return Err(err);
        }
        self.current = index;
        log::debug!("carousel jump -> {}", index);
        Ok(())
    }

    /// The three visible items, offsets -1, 0, +1 in that order.
    pub fn visible_window(&self) -> Window<'_, T> {
        Window {
            items: &self.items,
            current: self.current,
            offset: -1,
        }
    }

    /// Item index shown at `offset` from the current one.
    pub fn index_at(&self, offset: i32) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len() as i64;
        Some((self.current as i64 + offset as i64).rem_euclid(len) as usize)
    }

    /// Commit a finished horizontal drag. Dragging right shows the previous
    /// item, dragging left the next one; within ±threshold nothing happens.
    pub fn on_drag_end(&mut self, offset_x: f32) -> bool {
        if offset_x > DRAG_THRESHOLD {
            self.previous()
        } else if offset_x < -DRAG_THRESHOLD {
            self.next()
        } else {
            false
        }
    }

    /// Click on the card at `offset`: the center opens its detail view,
    /// the side cards slide toward the center.
    pub fn on_item_click(&mut self, offset: i32) -> bool {
        match offset {
            0 => self.open_detail(),
            -1 => self.previous(),
            1 => self.next(),
            _ => false,
        }
    }

    fn open_detail(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.selected = Some(self.current);
        log::debug!("carousel detail opened: {}", self.current);
        true
    }

    /// Close the detail view (close button or backdrop click).
    pub fn close_detail(&mut self) -> bool {
        let was_open = self.selected.take().is_some();
        if was_open {
            log::debug!("carousel detail closed");
        }
        was_open
    }
}

/// Lazy 3-entry window over a carousel.
pub struct Window<'a, T> {
    items: &'a [T],
    current: usize,
    offset: i32,
}

impl<'a, T> Iterator for Window<'a, T> {
    type Item = (&'a T, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.items.is_empty() || self.offset > 1 {
            return None;
        }
        let len = self.items.len() as i64;
        let index = (self.current as i64 + self.offset as i64).rem_euclid(len) as usize;
        let offset = self.offset;
        self.offset += 1;
        Some((&self.items[index], offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.items.is_empty() {
            0
        } else {
            (2 - self.offset).max(0) as usize
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Window<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn six() -> Carousel<usize> {
        Carousel::new((0..6).collect())
    }

    fn window(c: &Carousel<usize>) -> Vec<(usize, i32)> {
        c.visible_window().map(|(item, off)| (*item, off)).collect()
    }

    #[test]
    fn next_cycles_back_to_start() {
        let mut c = six();
        for _ in 0..6 {
            assert!(c.next());
            assert!(c.current_index() < 6);
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn mixed_navigation_stays_in_range() {
        let mut c = six();
        let pattern = [true, false, false, false, true, false, false, true, true, true, true];
        for _ in 0..50 {
            for &fwd in &pattern {
                if fwd {
                    c.next();
                } else {
                    c.previous();
                }
                assert!(c.current_index() < 6);
            }
        }
        c.previous();
        assert!(c.current_index() < 6);
    }

    #[test]
    fn previous_wraps_from_zero() {
        let mut c = six();
        assert!(c.previous());
        assert_eq!(c.current_index(), 5);
    }

    #[test]
    fn window_has_three_offsets_centered_on_current() {
        let mut c = six();
        for _ in 0..6 {
            let w = window(&c);
            assert_eq!(w.len(), 3);
            assert_eq!(w.iter().map(|e| e.1).collect::<Vec<_>>(), vec![-1, 0, 1]);
            assert_eq!(w[1].0, c.items()[c.current_index()]);
            c.next();
        }
        assert_eq!(c.visible_window().len(), 3);
    }

    #[test]
    fn three_nexts_on_six_items() {
        let mut c = six();
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current_index(), 3);
        assert_eq!(window(&c), vec![(2, -1), (3, 0), (4, 1)]);
    }

    #[test]
    fn window_wraps_at_edges() {
        let c = six();
        assert_eq!(window(&c), vec![(5, -1), (0, 0), (1, 1)]);
        assert_eq!(c.index_at(-1), Some(5));
        assert_eq!(c.index_at(1), Some(1));
        assert_eq!(Carousel::<u8>::new(Vec::new()).index_at(0), None);
    }

    #[test]
    fn small_carousels_repeat_items() {
        let one = Carousel::new(vec!['a']);
        let w: Vec<_> = one.visible_window().map(|(i, o)| (*i, o)).collect();
        assert_eq!(w, vec![('a', -1), ('a', 0), ('a', 1)]);

        let empty: Carousel<u8> = Carousel::new(Vec::new());
        assert_eq!(empty.visible_window().count(), 0);
        let mut empty = empty;
        assert!(!empty.next());
        assert!(!empty.on_item_click(0));
        assert_eq!(empty.jump_to(0), Err(CarouselError::Empty));
    }

    #[test]
    fn drag_threshold_boundaries() {
        let mut c = six();
        assert!(c.on_drag_end(60.0));
        assert_eq!(c.current_index(), 5);

        let mut c = six();
        assert!(c.on_drag_end(-60.0));
        assert_eq!(c.current_index(), 1);

        let mut c = six();
        for off in [10.0, 49.0, -49.0, 50.0, -50.0, 0.0] {
            assert!(!c.on_drag_end(off));
            assert_eq!(c.current_index(), 0);
        }

        assert!(c.on_drag_end(51.0));
        assert_eq!(c.current_index(), 5);
        assert!(c.on_drag_end(-51.0));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn jump_to_validates_index() {
        let mut c = six();
        assert_eq!(c.jump_to(4), Ok(()));
        assert_eq!(c.current_index(), 4);
        assert_eq!(
            c.jump_to(6),
            Err(CarouselError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn clicks_open_detail_and_slide() {
        let mut c = six();
        assert!(c.on_item_click(1));
        assert_eq!(c.current_index(), 1);
        assert!(c.on_item_click(-1));
        assert_eq!(c.current_index(), 0);
        assert!(!c.on_item_click(2));

        c.next();
        c.next();
        assert!(c.on_item_click(0));
        assert_eq!(c.state(), NavState::DetailOpen);
        assert_eq!(c.selected(), Some(&2));

        assert!(c.close_detail());
        assert_eq!(c.state(), NavState::Browsing);
        assert_eq!(c.selected(), None);
        assert!(!c.close_detail());
    }

    #[test]
    fn navigation_is_frozen_while_detail_open() {
        let mut c = six();
        c.on_item_click(0);

        assert!(!c.next());
        assert!(!c.previous());
        assert!(!c.on_drag_end(-100.0));
        assert!(!c.on_item_click(1));
        assert_eq!(c.jump_to(3), Err(CarouselError::DetailOpen));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.selected_index(), Some(0));
    }
}
