//! egui input → environment signals.
//!
//! Raw input is read once per frame and republished on the `SignalHub`;
//! the ambient field and the page listener each drain their own copy.

use eframe::egui;

use lumen_folio::carousel::Carousel;
use lumen_folio::signals::{PointerSource, Signal};

use super::ShowcaseApp;

impl ShowcaseApp {
    /// Publish viewport and pointer changes seen this frame.
    pub fn publish_input(&mut self, ctx: &egui::Context) {
        let (screen, hover, touch) = ctx.input(|i| {
            let touch = i.events.iter().rev().find_map(|event| match event {
                egui::Event::Touch { pos, phase, .. }
                    if matches!(phase, egui::TouchPhase::Start | egui::TouchPhase::Move) =>
                {
                    Some(*pos)
                }
                _ => None,
            });
            (i.screen_rect(), i.pointer.hover_pos(), touch)
        });

        let size = screen.size();
        if size != self.viewport {
            self.viewport = size;
            self.hub.publish(Signal::ViewportResized {
                width: size.x,
                height: size.y,
            });
        }

        let sample = match (touch, hover) {
            (Some(pos), _) => Some((pos, PointerSource::Touch)),
            (None, Some(pos)) if Some(pos) != self.last_pointer => {
                Some((pos, PointerSource::Mouse))
            }
            _ => None,
        };
        if let Some((pos, source)) = sample {
            self.last_pointer = Some(pos);
            self.hub.publish(Signal::PointerMoved {
                x: pos.x,
                y: pos.y,
                source,
            });
        }
    }

    /// Left/right arrows step the carousel unless a text field has focus.
    pub fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (left, right) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });
        step_carousel(&mut self.carousel, left, right);
    }

    /// Drain the page listener into the cursor and the scroll offset.
    pub fn apply_page_signals(&mut self) {
        for signal in self.page_signals.drain() {
            match signal {
                Signal::PointerMoved { x, y, source } => self.cursor.on_pointer_move(x, y, source),
                Signal::Scrolled { offset } => self.scroll_offset = offset,
                Signal::ViewportResized { .. } => {}
            }
        }
    }
}

/// Apply one frame of arrow presses. Opposite presses cancel out.
fn step_carousel<T>(carousel: &mut Carousel<T>, left: bool, right: bool) -> bool {
    match (left, right) {
        (true, false) => carousel.previous(),
        (false, true) => carousel.next(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step_the_carousel() {
        let mut c = Carousel::new(vec!['a', 'b', 'c', 'd']);
        assert!(step_carousel(&mut c, true, false));
        assert_eq!(c.current_index(), 3);
        assert!(step_carousel(&mut c, false, true));
        assert_eq!(c.current_index(), 0);
        assert!(!step_carousel(&mut c, true, true));
        assert!(!step_carousel(&mut c, false, false));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn arrows_are_ignored_while_detail_is_open() {
        let mut c = Carousel::new(vec!['a', 'b', 'c']);
        assert!(c.on_item_click(0));
        assert!(!step_carousel(&mut c, false, true));
        assert_eq!(c.current_index(), 0);
    }
}
