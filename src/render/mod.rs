// SPDX-License-Identifier: MPL-2.0
//! Rendering interface and draw routines for notifications.
//!
//! The scheduler does not draw anything itself: it describes panels, frames,
//! icons, and text runs to a host-implemented [`CardRenderer`]. Drawing is a
//! pure read of scheduler state; none of the routines here mutate anything.
//!
//! Text is never measured here (fonts belong to the host), so centering and
//! wrapping work off the fixed per-script advance estimates in
//! [`design_tokens::typography`].

pub mod design_tokens;

use iced_core::{Color, Point, Rectangle, Size};

use crate::assets::ImageHandle;
use crate::config::defaults::CARD_FRAME_GAP;
use crate::config::DisplayMode;
use crate::i18n::Language;
use crate::scheduler::banner::BannerMessage;
use crate::scheduler::message::Message;
use self::design_tokens::{palette, sizing, typography};

/// Host-implemented drawing surface.
///
/// `draw_text` anchors at the top-left of the run; `blit_image` anchors at
/// the image center (the renderer knows the image dimensions, the scheduler
/// does not).
pub trait CardRenderer {
    fn surface_size(&self) -> Size;
    fn draw_panel(&mut self, bounds: Rectangle, color: Color);
    fn stroke_frame(&mut self, bounds: Rectangle, color: Color);
    fn blit_image(&mut self, handle: &ImageHandle, center: Point);
    fn draw_text(&mut self, text: &str, position: Point, color: Color);
}

/// Approximate advance of one character for the given script.
#[must_use]
pub fn char_width(language: Language) -> f32 {
    match language {
        Language::English => typography::LATIN_CHAR_WIDTH,
        Language::Chinese => typography::CJK_CHAR_WIDTH,
    }
}

/// How many characters fit into `width` for the given script. At least 1,
/// so wrapping always makes progress.
#[must_use]
pub fn line_capacity(language: Language, width: f32) -> usize {
    ((width / char_width(language)) as usize).max(1)
}

/// Estimated rendered width of `text`, for banner centering.
#[must_use]
pub fn approx_text_width(language: Language, text: &str) -> f32 {
    text.chars().count() as f32 * char_width(language)
}

/// Draws one card at `origin` (its top-left corner, already offset by the
/// slide animation and lane position).
pub fn draw_card(
    renderer: &mut dyn CardRenderer,
    message: &Message,
    origin: Point,
    size: (f32, f32),
    mode: DisplayMode,
    language: Language,
) {
    let (w, h) = size;
    let bounds = Rectangle::new(origin, Size::new(w, h));
    renderer.draw_panel(bounds, palette::CARD_FILL);

    let frame = Rectangle::new(
        Point::new(origin.x + CARD_FRAME_GAP, origin.y + CARD_FRAME_GAP),
        Size::new(w - CARD_FRAME_GAP * 2.0, h - CARD_FRAME_GAP * 2.0),
    );
    renderer.stroke_frame(frame, message.kind().frame_color());

    if let Some(icon) = message.icon() {
        let center = match mode {
            // Side-mode icons sit on the leading edge, half outside the card.
            DisplayMode::Side => Point::new(origin.x, origin.y + sizing::ICON_EDGE_OFFSET),
            DisplayMode::Top => {
                Point::new(origin.x + sizing::ICON_EDGE_OFFSET, origin.y + h / 2.0)
            }
        };
        renderer.blit_image(icon, center);
    }

    let text_left = match mode {
        DisplayMode::Side => sizing::SIDE_TEXT_LEFT,
        DisplayMode::Top => sizing::TOP_TEXT_LEFT,
    };
    let mut y = origin.y + sizing::CARD_TEXT_TOP;
    for line in message.lines(language) {
        renderer.draw_text(line, Point::new(origin.x + text_left, y), palette::TEXT);
        y += typography::LINE_HEIGHT;
    }
}

/// Draws the banner strip across the full surface width, anchored at one
/// third of the surface height, `reveal_span` tall.
pub fn draw_banner(renderer: &mut dyn CardRenderer, banner: &BannerMessage, language: Language) {
    let span = banner.reveal_span();
    if !banner.visible() || span <= 0.0 {
        return;
    }

    let surface = renderer.surface_size();
    let top = surface.height / 3.0;
    let bounds = Rectangle::new(Point::new(0.0, top), Size::new(surface.width, span));
    renderer.draw_panel(bounds, palette::BANNER_FILL);

    let text = banner.content().get(language);
    let text_x = surface.width / 2.0 - approx_text_width(language, text) / 2.0;
    let text_y = top + span / 2.0 - typography::LINE_HEIGHT / 2.0;
    renderer.draw_text(text, Point::new(text_x, text_y), palette::TEXT);

    if let Some(icon) = banner.icon() {
        renderer.blit_image(
            icon,
            Point::new(text_x - sizing::BANNER_ICON_GAP, top + span / 2.0),
        );
    }
}
