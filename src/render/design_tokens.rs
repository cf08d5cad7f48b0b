// SPDX-License-Identifier: MPL-2.0
//! Design tokens for notification rendering.
//!
//! All colors and text metrics used by the draw routines live here as
//! immutable constants, so there is no mutable styling table shared between
//! channels. Hosts that want a different look override at the renderer level.

use iced_core::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Card background (translucent black).
    pub const CARD_FILL: Color = Color::from_rgba8(0, 0, 0, 0.706);
    /// Banner background, slightly lifted from pure black.
    pub const BANNER_FILL: Color = Color::from_rgba8(20, 20, 20, 0.824);
    /// Body text on both cards and banner.
    pub const TEXT: Color = Color::WHITE;

    // Accent frame per card kind.
    pub const ALERT_FRAME: Color = Color::from_rgb8(180, 160, 160);
    pub const DIALOGUE_FRAME: Color = Color::from_rgb8(250, 200, 160);
    pub const ITEM_FRAME: Color = Color::from_rgb8(130, 255, 130);
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Vertical advance between wrapped card lines.
    pub const LINE_HEIGHT: f32 = 20.0;

    /// Approximate advance of one Latin character at body size.
    ///
    /// The scheduler has no font access (text measurement belongs to the
    /// renderer), so line wrapping works off these fixed estimates.
    pub const LATIN_CHAR_WIDTH: f32 = 8.0;

    /// Approximate advance of one CJK character at body size.
    pub const CJK_CHAR_WIDTH: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Top inset of the first text line inside a card.
    pub const CARD_TEXT_TOP: f32 = 10.0;

    /// Left inset of card text in side mode.
    pub const SIDE_TEXT_LEFT: f32 = 10.0;

    /// Left inset of card text in top mode (clears the inlined icon).
    pub const TOP_TEXT_LEFT: f32 = 70.0;

    /// Icon center offset from the card's leading edge.
    pub const ICON_EDGE_OFFSET: f32 = 30.0;

    /// Horizontal gap between the banner icon center and its text.
    pub const BANNER_ICON_GAP: f32 = 40.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_colors_are_distinct() {
        assert_ne!(palette::ALERT_FRAME, palette::DIALOGUE_FRAME);
        assert_ne!(palette::ALERT_FRAME, palette::ITEM_FRAME);
        assert_ne!(palette::DIALOGUE_FRAME, palette::ITEM_FRAME);
    }

    #[test]
    fn cjk_advance_is_wider_than_latin() {
        assert!(typography::CJK_CHAR_WIDTH > typography::LATIN_CHAR_WIDTH);
    }
}
