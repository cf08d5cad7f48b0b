// SPDX-License-Identifier: MPL-2.0
//! The full-width banner channel.
//!
//! Unlike card slots there is no queue and no preemption rule here: a new
//! submission unconditionally replaces whatever is showing. The banner is
//! meant for full-stop story moments, so by default it freezes and hides
//! while the game is paused; the countdown only starts once the reveal
//! animation has grown the strip to its full span.

use crate::assets::ImageHandle;
use crate::config::SchedulerConfig;
use crate::i18n::LocalizedText;

/// The single banner instance.
#[derive(Debug, Clone)]
pub struct BannerMessage {
    content: LocalizedText,
    icon: Option<ImageHandle>,
    ticks_remaining: u32,
    reveal_span: f32,
    visible: bool,
}

impl BannerMessage {
    #[must_use]
    pub fn content(&self) -> &LocalizedText {
        &self.content
    }

    #[must_use]
    pub fn icon(&self) -> Option<&ImageHandle> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }

    /// Current visible height of the strip, 0..=`max_span`.
    #[must_use]
    pub fn reveal_span(&self) -> f32 {
        self.reveal_span
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Single-slot channel with its own reveal/hold/countdown regime.
#[derive(Debug)]
pub struct BannerChannel {
    message: Option<BannerMessage>,
    max_span: f32,
    reveal_step: f32,
    default_ticks: u32,
    freezes_on_pause: bool,
}

impl BannerChannel {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            message: None,
            max_span: config.banner_max_span,
            reveal_step: config.banner_reveal_step,
            default_ticks: config.banner_ticks,
            freezes_on_pause: config.banner_freezes_on_pause,
        }
    }

    /// Replaces any current banner. Last writer wins; there is no queue.
    pub fn submit(&mut self, content: LocalizedText, duration: Option<u32>, icon: Option<ImageHandle>) {
        if self.message.is_some() {
            log::trace!("banner replaced before expiry");
        }
        self.message = Some(BannerMessage {
            content,
            icon,
            ticks_remaining: duration.unwrap_or(self.default_ticks),
            reveal_span: 0.0,
            visible: false,
        });
    }

    /// Advances the banner by one tick.
    ///
    /// While paused (and pause-freezing is configured) the banner is hidden
    /// and nothing moves. Otherwise the strip grows until `max_span`, then
    /// the countdown runs; the instance is destroyed the tick it reaches 0.
    pub fn tick(&mut self, paused: bool) {
        let Some(message) = self.message.as_mut() else {
            return;
        };

        if paused && self.freezes_on_pause {
            message.visible = false;
            return;
        }

        message.visible = true;
        message.reveal_span = (message.reveal_span + self.reveal_step).min(self.max_span);
        if message.reveal_span >= self.max_span {
            message.ticks_remaining = message.ticks_remaining.saturating_sub(1);
            if message.ticks_remaining == 0 {
                self.message = None;
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&BannerMessage> {
        self.message.as_ref()
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> BannerChannel {
        // max_span 60.0, reveal_step 2.0: 30 ticks to full reveal.
        BannerChannel::new(&SchedulerConfig::default())
    }

    fn submit(channel: &mut BannerChannel, duration: u32) {
        channel.submit(
            LocalizedText::new("Chapter One", "第一章"),
            Some(duration),
            None,
        );
    }

    #[test]
    fn reveal_grows_by_fixed_step_until_max() {
        let mut banner = channel();
        submit(&mut banner, 100);

        banner.tick(false);
        assert_eq!(banner.current().unwrap().reveal_span(), 2.0);
        banner.tick(false);
        assert_eq!(banner.current().unwrap().reveal_span(), 4.0);

        for _ in 0..50 {
            banner.tick(false);
        }
        assert_eq!(banner.current().unwrap().reveal_span(), 60.0);
    }

    #[test]
    fn countdown_starts_only_at_full_span() {
        let mut banner = channel();
        submit(&mut banner, 100);

        for _ in 0..29 {
            banner.tick(false);
        }
        assert_eq!(banner.current().unwrap().ticks_remaining(), 100);

        // The tick that clamps the span also counts down.
        banner.tick(false);
        assert_eq!(banner.current().unwrap().ticks_remaining(), 99);
    }

    #[test]
    fn banner_is_destroyed_when_countdown_ends() {
        let mut banner = channel();
        submit(&mut banner, 5);

        for _ in 0..34 {
            banner.tick(false);
        }
        assert!(banner.current().is_some());
        banner.tick(false);
        assert!(banner.current().is_none());
    }

    #[test]
    fn pause_freezes_and_hides() {
        let mut banner = channel();
        submit(&mut banner, 100);
        for _ in 0..10 {
            banner.tick(false);
        }
        let span = banner.current().unwrap().reveal_span();
        assert!(banner.current().unwrap().visible());

        banner.tick(true);
        let frozen = banner.current().unwrap();
        assert_eq!(frozen.reveal_span(), span);
        assert_eq!(frozen.ticks_remaining(), 100);
        assert!(!frozen.visible());

        // Unpausing resumes where it left off.
        banner.tick(false);
        assert_eq!(banner.current().unwrap().reveal_span(), span + 2.0);
        assert!(banner.current().unwrap().visible());
    }

    #[test]
    fn pause_is_ignored_when_configured_off() {
        let config = SchedulerConfig {
            banner_freezes_on_pause: false,
            ..SchedulerConfig::default()
        };
        let mut banner = BannerChannel::new(&config);
        banner.submit(LocalizedText::new("x", "x"), Some(100), None);

        banner.tick(true);
        assert_eq!(banner.current().unwrap().reveal_span(), 2.0);
        assert!(banner.current().unwrap().visible());
    }

    #[test]
    fn submit_replaces_unconditionally() {
        let mut banner = channel();
        submit(&mut banner, 100);
        for _ in 0..10 {
            banner.tick(false);
        }

        banner.submit(LocalizedText::new("Chapter Two", "第二章"), None, None);
        let fresh = banner.current().unwrap();
        assert_eq!(fresh.reveal_span(), 0.0);
        assert_eq!(fresh.ticks_remaining(), SchedulerConfig::default().banner_ticks);
    }

    #[test]
    fn tick_without_banner_is_a_no_op() {
        let mut banner = channel();
        banner.tick(false);
        assert!(banner.current().is_none());
    }
}
