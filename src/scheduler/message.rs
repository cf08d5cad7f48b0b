// SPDX-License-Identifier: MPL-2.0
//! The card message value type.
//!
//! A [`Message`] is built once at submission time: kind-specific templating
//! and duration defaults are applied, and the text is wrapped into lines for
//! both languages so the card face never changes while it is on screen.
//! After construction only the countdown and the slide offset mutate.

use iced_core::Color;

use crate::assets::ImageHandle;
use crate::config::SchedulerConfig;
use crate::i18n::{Language, LocalizedText};
use crate::render::{self, design_tokens::palette};

/// Card category: selects styling, default duration, and the fallback icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Alert,
    Dialogue,
    ItemPickup,
}

impl MessageKind {
    /// Accent frame color for this kind.
    #[must_use]
    pub fn frame_color(self) -> Color {
        match self {
            MessageKind::Alert => palette::ALERT_FRAME,
            MessageKind::Dialogue => palette::DIALOGUE_FRAME,
            MessageKind::ItemPickup => palette::ITEM_FRAME,
        }
    }

    /// Countdown applied when the submission does not specify a duration.
    #[must_use]
    pub fn default_ticks(self, config: &SchedulerConfig) -> u32 {
        match self {
            MessageKind::Alert => config.alert_ticks,
            MessageKind::Dialogue => config.dialogue_ticks,
            MessageKind::ItemPickup => config.item_ticks,
        }
    }

    /// Name of the fallback icon asked of the `AssetProvider` when the
    /// submission carries none.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            MessageKind::Alert | MessageKind::ItemPickup => "tip",
            MessageKind::Dialogue => "preFig",
        }
    }
}

/// A card notification owned by the queue or by exactly one slot.
#[derive(Debug, Clone)]
pub struct Message {
    kind: MessageKind,
    content: LocalizedText,
    icon: Option<ImageHandle>,
    urgent: bool,
    ticks_remaining: u32,
    /// Displacement from the on-screen rest position; shrinks to 0.
    slide_offset: f32,
    /// Wrapped card lines per language, baked at construction.
    lines: [Vec<String>; 2],
}

impl Message {
    /// Builds a card message from submission parameters and the scheduler
    /// configuration. Item pickups are templated into the announcement text;
    /// everything else displays its content verbatim.
    pub fn new(
        kind: MessageKind,
        content: LocalizedText,
        urgent: bool,
        duration: Option<u32>,
        icon: Option<ImageHandle>,
        config: &SchedulerConfig,
    ) -> Self {
        let content = match kind {
            MessageKind::ItemPickup => content.map(|language, name| match language {
                Language::English => format!("Get rare item [{}]", name),
                Language::Chinese => format!("获得稀有物品【{}】。", name),
            }),
            _ => content,
        };
        let text_width = config.text_width();
        let lines = [
            wrap_text(
                content.get(Language::English),
                render::line_capacity(Language::English, text_width),
            ),
            wrap_text(
                content.get(Language::Chinese),
                render::line_capacity(Language::Chinese, text_width),
            ),
        ];
        Self {
            kind,
            content,
            icon,
            urgent,
            ticks_remaining: duration.unwrap_or_else(|| kind.default_ticks(config)),
            slide_offset: config.slide_start(),
            lines,
        }
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    #[must_use]
    pub fn content(&self) -> &LocalizedText {
        &self.content
    }

    #[must_use]
    pub fn icon(&self) -> Option<&ImageHandle> {
        self.icon.as_ref()
    }

    pub(crate) fn set_icon(&mut self, icon: ImageHandle) {
        self.icon = Some(icon);
    }

    #[must_use]
    pub fn urgent(&self) -> bool {
        self.urgent
    }

    #[must_use]
    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }

    #[must_use]
    pub fn slide_offset(&self) -> f32 {
        self.slide_offset
    }

    /// Whether the slide animation has reached the rest position.
    #[must_use]
    pub fn at_rest(&self) -> bool {
        self.slide_offset <= 0.0
    }

    /// The baked card lines for one language.
    #[must_use]
    pub fn lines(&self, language: Language) -> &[String] {
        &self.lines[language.index()]
    }

    /// Decrements the countdown by one tick; returns the remaining value.
    pub(crate) fn count_down(&mut self) -> u32 {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        self.ticks_remaining
    }

    /// Advances the slide toward rest by `step`, clamped so the card never
    /// overshoots.
    pub(crate) fn advance_slide(&mut self, step: f32) {
        self.slide_offset = (self.slide_offset - step).max(0.0);
    }
}

/// Chunks `text` into lines of at most `capacity` characters.
fn wrap_text(text: &str, capacity: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(capacity.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
