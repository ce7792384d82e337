//! Mounted particle field: field + ticker + input subscription.
//!
//! `mount` acquires the ticker and the signal listener, `unmount` releases
//! both. `Drop` unmounts, so a torn-down view can never leave a running
//! ticker or a dangling listener behind.

use std::time::{Duration, Instant};

use rand::Rng;

use super::ticker::Ticker;
use super::ParticleField;
use crate::signals::{Signal, SignalHub, Subscription};

/// Upper bound on ticks replayed by a single `update`.
pub const MAX_CATCH_UP_TICKS: u32 = 10;

pub struct AmbientField<R> {
    field: ParticleField<R>,
    ticker: Ticker,
    subscription: Option<Subscription>,
}

impl<R> AmbientField<R> {
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop ticking and drop the listener. Idempotent.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            self.ticker.stop();
            log::info!("ambient field unmounted");
        }
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }
}

impl<R: Rng> AmbientField<R> {
    pub fn new(field: ParticleField<R>, tick_period: Duration) -> Self {
        Self {
            field,
            ticker: Ticker::new(tick_period),
            subscription: None,
        }
    }

    /// Register for input signals and start the ticker. No-op if mounted.
    pub fn mount(&mut self, hub: &mut SignalHub, now: Instant) {
        if self.is_mounted() {
            return;
        }
        self.subscription = Some(hub.subscribe());
        self.ticker.start(now);
        log::info!(
            "ambient field mounted (tick {} ms)",
            self.ticker.period().as_millis()
        );
    }

    /// Apply pending signals, then run every tick due by `now`.
    ///
    /// Returns the number of ticks run.
    pub fn update(&mut self, now: Instant) -> u32 {
        let Some(sub) = &self.subscription else {
            return 0;
        };

        for signal in sub.drain() {
            match signal {
                Signal::PointerMoved { x, y, .. } => self.field.on_pointer_move(x, y),
                Signal::ViewportResized { width, height } => {
                    self.field.on_viewport_resize(width, height)
                }
                Signal::Scrolled { .. } => {}
            }
        }

        let ticks = self.ticker.due(now, MAX_CATCH_UP_TICKS);
        for _ in 0..ticks {
            self.field.tick();
        }
        ticks
    }
}

impl<R> Drop for AmbientField<R> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::PointerSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PERIOD: Duration = Duration::from_millis(50);

    fn ambient() -> AmbientField<StdRng> {
        AmbientField::new(ParticleField::new(30, 6, StdRng::seed_from_u64(11)), PERIOD)
    }

    #[test]
    fn unmounted_field_ignores_time_and_input() {
        let mut hub = SignalHub::new();
        let mut a = ambient();
        hub.publish(Signal::ViewportResized { width: 800.0, height: 600.0 });
        assert_eq!(a.update(Instant::now() + Duration::from_secs(1)), 0);
        assert!(!a.field().is_initialized());
    }

    #[test]
    fn mount_initializes_on_first_resize_and_ticks() {
        let mut hub = SignalHub::new();
        let mut a = ambient();
        let t0 = Instant::now();
        a.mount(&mut hub, t0);
        assert_eq!(hub.listener_count(), 1);

        hub.publish(Signal::ViewportResized { width: 800.0, height: 600.0 });
        hub.publish(Signal::PointerMoved { x: 10.0, y: 20.0, source: PointerSource::Mouse });

        let ticks = a.update(t0 + Duration::from_millis(120));
        assert_eq!(ticks, 2);
        assert_eq!(a.field().particles().len(), 30);
        assert_eq!(a.field().pointer(), Some([10.0, 20.0]));
    }

    #[test]
    fn unmount_releases_ticker_and_listener() {
        let mut hub = SignalHub::new();
        let mut a = ambient();
        let t0 = Instant::now();
        a.mount(&mut hub, t0);
        a.mount(&mut hub, t0);
        assert_eq!(hub.listener_count(), 1);

        a.unmount();
        assert!(!a.is_mounted());
        assert!(!a.ticker().is_running());
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(a.update(t0 + Duration::from_secs(1)), 0);
    }

    #[test]
    fn drop_releases_listener() {
        let mut hub = SignalHub::new();
        {
            let mut a = ambient();
            a.mount(&mut hub, Instant::now());
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn stalled_frame_is_capped() {
        let mut hub = SignalHub::new();
        let mut a = ambient();
        let t0 = Instant::now();
        a.mount(&mut hub, t0);
        assert_eq!(a.update(t0 + Duration::from_secs(60)), MAX_CATCH_UP_TICKS);
    }
}
