// SPDX-License-Identifier: MPL-2.0
//! The notification scheduler façade.
//!
//! [`NotificationScheduler`] composes the card queue, the two presentation
//! slots, and the banner channel behind four entry points: `submit`, `tick`,
//! `render`, and `reset`. The host calls `tick` exactly once per simulation
//! frame; all mutation happens there (and in `submit`/`reset`), while
//! `render` is a pure read into the [`CardRenderer`] collaborator.
//!
//! # Components
//!
//! - [`message`] - the card value type, baked at submission
//! - [`queue`] - FIFO backlog with single-match urgent extraction
//! - [`slots`] - primary/secondary slots, promotion and preemption rules
//! - [`banner`] - the independent full-width banner channel

pub mod banner;
pub mod message;
pub mod queue;
pub mod slots;

use iced_core::{Point, Size};

use crate::alerts;
use crate::assets::{AssetProvider, ImageHandle, NOTICE_CUE};
use crate::config::defaults::SIDE_CARD_TOP;
use crate::config::{DisplayMode, SchedulerConfig};
use crate::error::{Error, Result};
use crate::i18n::{LocalizationProvider, LocalizedText};
use crate::render::{self, CardRenderer};

use self::banner::{BannerChannel, BannerMessage};
use self::message::{Message, MessageKind};
use self::queue::NotificationQueue;
use self::slots::{Slot, SlotController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Card(MessageKind),
    Banner,
}

/// One submission: what to show, where, and for how long.
///
/// Built with the kind constructors and refined with the builder methods:
///
/// ```
/// use herald::i18n::LocalizedText;
/// use herald::scheduler::Submission;
///
/// let submission = Submission::alert(LocalizedText::new("Boss incoming!", "Boss来袭！"))
///     .urgent()
///     .with_duration(240);
/// ```
#[derive(Debug, Clone)]
pub struct Submission {
    channel: Channel,
    content: LocalizedText,
    urgent: bool,
    duration: Option<u32>,
    icon: Option<ImageHandle>,
}

impl Submission {
    fn new(channel: Channel, content: LocalizedText) -> Self {
        Self {
            channel,
            content,
            urgent: false,
            duration: None,
            icon: None,
        }
    }

    /// A combat/system alert card.
    pub fn alert(content: LocalizedText) -> Self {
        Self::new(Channel::Card(MessageKind::Alert), content)
    }

    /// A dialogue-hint card.
    pub fn dialogue(content: LocalizedText) -> Self {
        Self::new(Channel::Card(MessageKind::Dialogue), content)
    }

    /// An item-pickup card; `name` is the bare item name, templated into the
    /// announcement at submission.
    pub fn item_pickup(name: LocalizedText) -> Self {
        Self::new(Channel::Card(MessageKind::ItemPickup), name)
    }

    /// A full-width banner. Banners have no urgency; submitting one replaces
    /// any banner currently showing.
    pub fn banner(content: LocalizedText) -> Self {
        Self::new(Channel::Banner, content)
    }

    /// Marks a card submission urgent, making it eligible for secondary-slot
    /// preemption. No effect on banners.
    #[must_use]
    pub fn urgent(mut self) -> Self {
        self.urgent = true;
        self
    }

    /// Overrides the kind-default countdown.
    #[must_use]
    pub fn with_duration(mut self, ticks: u32) -> Self {
        self.duration = Some(ticks);
        self
    }

    /// Attaches an icon, replacing the kind-default one.
    #[must_use]
    pub fn with_icon(mut self, icon: ImageHandle) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// The scheduler façade. See the [module docs](self) for the big picture.
pub struct NotificationScheduler {
    config: SchedulerConfig,
    queue: NotificationQueue,
    slots: SlotController,
    banner: BannerChannel,
    assets: Option<Box<dyn AssetProvider>>,
}

impl NotificationScheduler {
    #[must_use]
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            slots: SlotController::new(&config),
            banner: BannerChannel::new(&config),
            queue: NotificationQueue::new(),
            assets: None,
            config,
        }
    }

    /// Attaches the host's asset provider, enabling sound cues and
    /// kind-default icons. Without one the scheduler stays silent and cards
    /// without an explicit icon render none.
    #[must_use]
    pub fn with_assets(mut self, assets: Box<dyn AssetProvider>) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Enqueues a card or replaces the banner.
    pub fn submit(&mut self, submission: Submission) {
        match submission.channel {
            Channel::Card(kind) => {
                let mut message = Message::new(
                    kind,
                    submission.content,
                    submission.urgent,
                    submission.duration,
                    submission.icon,
                    &self.config,
                );
                if message.icon().is_none() {
                    if let Some(assets) = &self.assets {
                        if let Ok(icon) = assets.load_icon(kind.icon_name()) {
                            message.set_icon(icon);
                        }
                    }
                }
                self.queue.push(message);
            }
            Channel::Banner => {
                self.banner
                    .submit(submission.content, submission.duration, submission.icon);
            }
        }
    }

    /// Stringly-typed submission entry point for script/data-driven callers.
    ///
    /// Accepted kinds: `"alert"`, `"dialogue"`, `"item"`, `"banner"`.
    /// Anything else is rejected with no state change.
    pub fn submit_raw(
        &mut self,
        kind: &str,
        content: LocalizedText,
        urgent: bool,
        duration: Option<u32>,
        icon: Option<ImageHandle>,
    ) -> Result<()> {
        let mut submission = match kind {
            "alert" => Submission::alert(content),
            "dialogue" => Submission::dialogue(content),
            "item" => Submission::item_pickup(content),
            "banner" => Submission::banner(content),
            other => {
                log::debug!("rejected submission with unknown kind {:?}", other);
                return Err(Error::UnknownKind(other.to_string()));
            }
        };
        if urgent {
            submission = submission.urgent();
        }
        if let Some(ticks) = duration {
            submission = submission.with_duration(ticks);
        }
        if let Some(icon) = icon {
            submission = submission.with_icon(icon);
        }
        self.submit(submission);
        Ok(())
    }

    /// Submits an urgent alert from the fixed alert table.
    ///
    /// An unknown key is a content bug ([`Error::UnknownAlertKey`]); nothing
    /// is submitted in that case.
    pub fn submit_alert(&mut self, key: &str) -> Result<()> {
        let content = alerts::lookup(key).inspect_err(|err| {
            log::error!("alert lookup failed: {}", err);
        })?;
        self.submit(Submission::alert(content).urgent());
        Ok(())
    }

    /// Advances all timers, animations, and preemption by one tick.
    ///
    /// Card slots observe `paused` only when `cards_freeze_on_pause` is
    /// configured; the banner channel applies its own pause policy.
    pub fn tick(&mut self, paused: bool) {
        let frozen = paused && self.config.cards_freeze_on_pause;
        let admissions = self.slots.tick(&mut self.queue, frozen);
        if let Some(assets) = &self.assets {
            for _ in 0..admissions {
                assets.play_cue(NOTICE_CUE);
            }
        }
        self.banner.tick(paused);
    }

    /// Draws both occupied slots at their animated offsets, then the banner.
    /// Pure read: scheduler state is untouched.
    pub fn render(
        &self,
        renderer: &mut dyn CardRenderer,
        localization: &dyn LocalizationProvider,
    ) {
        let language = localization.active_language();
        let surface = renderer.surface_size();
        let size = self.config.card_size();

        for slot in [self.slots.primary(), self.slots.secondary()] {
            if let Some(message) = slot.occupant() {
                let origin =
                    self.card_origin(message.slide_offset(), slot.lane_offset(), surface);
                render::draw_card(
                    renderer,
                    message,
                    origin,
                    size,
                    self.config.display_mode,
                    language,
                );
            }
        }

        if let Some(banner) = self.banner.current() {
            render::draw_banner(renderer, banner, language);
        }
    }

    /// Clears queue, both slots, and the banner. Used on scene transitions;
    /// no partial clear is ever observable.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.slots.clear();
        self.banner.clear();
    }

    /// Top-left corner of a card `slide_offset` away from rest in the lane
    /// displaced by `lane_offset`.
    fn card_origin(&self, slide_offset: f32, lane_offset: f32, surface: Size) -> Point {
        let (card_w, _) = self.config.card_size();
        match self.config.display_mode {
            DisplayMode::Side => Point::new(-slide_offset, SIDE_CARD_TOP + lane_offset),
            DisplayMode::Top => Point::new(
                (surface.width - card_w) / 2.0,
                -slide_offset + lane_offset,
            ),
        }
    }

    #[must_use]
    pub fn primary(&self) -> &Slot {
        self.slots.primary()
    }

    #[must_use]
    pub fn secondary(&self) -> &Slot {
        self.slots.secondary()
    }

    #[must_use]
    pub fn banner(&self) -> Option<&BannerMessage> {
        self.banner.current()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::i18n::Language;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct CueLog {
        cues: RefCell<Vec<String>>,
        icons: RefCell<Vec<String>>,
    }

    struct FakeAssets {
        log: Rc<CueLog>,
    }

    impl AssetProvider for FakeAssets {
        fn load_icon(&self, name: &str) -> Result<ImageHandle> {
            self.log.icons.borrow_mut().push(name.to_string());
            Ok(ImageHandle::new(name))
        }

        fn play_cue(&self, name: &str) {
            self.log.cues.borrow_mut().push(name.to_string());
        }
    }

    fn scheduler_with_assets() -> (NotificationScheduler, Rc<CueLog>) {
        let log = Rc::new(CueLog::default());
        let scheduler = NotificationScheduler::new(SchedulerConfig::default())
            .with_assets(Box::new(FakeAssets { log: log.clone() }));
        (scheduler, log)
    }

    fn text(tag: &str) -> LocalizedText {
        LocalizedText::new(tag, tag)
    }

    #[test]
    fn card_submissions_are_queued_until_tick() {
        let mut scheduler = NotificationScheduler::new(SchedulerConfig::default());
        scheduler.submit(Submission::alert(text("a")));
        assert_eq!(scheduler.queued_count(), 1);
        assert!(scheduler.primary().is_empty());

        scheduler.tick(false);
        assert_eq!(scheduler.queued_count(), 0);
        assert!(!scheduler.primary().is_empty());
    }

    #[test]
    fn banner_submissions_bypass_the_queue() {
        let mut scheduler = NotificationScheduler::new(SchedulerConfig::default());
        scheduler.submit(Submission::banner(text("chapter")));
        assert_eq!(scheduler.queued_count(), 0);
        assert!(scheduler.banner().is_some());
    }

    #[test]
    fn notice_cue_plays_once_per_admission() {
        let (mut scheduler, log) = scheduler_with_assets();
        scheduler.submit(Submission::alert(text("a")));
        scheduler.submit(Submission::alert(text("u")).urgent());

        scheduler.tick(false);
        // One promotion into primary, one preemption into secondary.
        assert_eq!(*log.cues.borrow(), vec![NOTICE_CUE.to_string(); 2]);

        scheduler.tick(false);
        assert_eq!(log.cues.borrow().len(), 2);
    }

    #[test]
    fn kind_default_icon_is_resolved_through_assets() {
        let (mut scheduler, log) = scheduler_with_assets();
        scheduler.submit(Submission::dialogue(text("hm")));
        assert_eq!(*log.icons.borrow(), vec!["preFig".to_string()]);

        scheduler.tick(false);
        let icon = scheduler.primary().occupant().unwrap().icon().unwrap();
        assert_eq!(icon.name(), "preFig");
    }

    #[test]
    fn explicit_icon_is_kept_as_is() {
        let (mut scheduler, log) = scheduler_with_assets();
        scheduler
            .submit(Submission::alert(text("a")).with_icon(ImageHandle::new("custom")));
        assert!(log.icons.borrow().is_empty());
    }

    #[test]
    fn submit_raw_accepts_known_kinds() {
        let mut scheduler = NotificationScheduler::new(SchedulerConfig::default());
        scheduler
            .submit_raw("alert", text("a"), false, None, None)
            .unwrap();
        scheduler
            .submit_raw("banner", text("b"), false, Some(60), None)
            .unwrap();
        assert_eq!(scheduler.queued_count(), 1);
        assert_eq!(scheduler.banner().unwrap().ticks_remaining(), 60);
    }

    #[test]
    fn submit_raw_rejects_unknown_kind_without_state_change() {
        let mut scheduler = NotificationScheduler::new(SchedulerConfig::default());
        let err = scheduler
            .submit_raw("popup", text("x"), true, None, None)
            .unwrap_err();
        match err {
            Error::UnknownKind(kind) => assert_eq!(kind, "popup"),
            other => panic!("expected UnknownKind, got {:?}", other),
        }
        assert_eq!(scheduler.queued_count(), 0);
        assert!(scheduler.banner().is_none());
    }

    #[test]
    fn submit_alert_resolves_the_table_and_marks_urgent() {
        let mut scheduler = NotificationScheduler::new(SchedulerConfig::default());
        scheduler.submit_alert("lackGem").unwrap();

        scheduler.tick(false);
        // Urgent alerts preempt into secondary even with primary free for
        // FIFO promotion; here the queue head is the alert itself.
        let occupant = scheduler.primary().occupant().unwrap();
        assert_eq!(occupant.content().get(Language::English), "No enough gems!");
        assert!(occupant.urgent());
    }

    #[test]
    fn submit_alert_fails_on_unknown_key() {
        let mut scheduler = NotificationScheduler::new(SchedulerConfig::default());
        let err = scheduler.submit_alert("lackMana").unwrap_err();
        assert!(matches!(err, Error::UnknownAlertKey(_)));
        assert_eq!(scheduler.queued_count(), 0);
    }

    #[test]
    fn reset_clears_everything_at_once() {
        let mut scheduler = NotificationScheduler::new(SchedulerConfig::default());
        scheduler.submit(Submission::alert(text("a")));
        scheduler.submit(Submission::alert(text("u")).urgent());
        scheduler.submit(Submission::alert(text("behind")));
        scheduler.submit(Submission::banner(text("chapter")));
        scheduler.tick(false);

        scheduler.reset();
        assert_eq!(scheduler.queued_count(), 0);
        assert!(scheduler.primary().is_empty());
        assert!(scheduler.secondary().is_empty());
        assert!(scheduler.banner().is_none());
    }
}
