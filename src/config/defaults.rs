// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for scheduler timing and geometry.
//!
//! This module is the single source of truth for the constants the
//! configuration layer falls back to. All durations and steps are in
//! simulation ticks and logical pixels.
//!
//! # Categories
//!
//! - **Durations**: per-kind countdown defaults
//! - **Cards**: card geometry and slide animation per display mode
//! - **Banner**: reveal animation and placement

// ==========================================================================
// Duration Defaults (ticks)
// ==========================================================================

/// Default countdown for plain alert cards.
pub const DEFAULT_ALERT_TICKS: u32 = 180;

/// Default countdown for dialogue-hint cards.
pub const DEFAULT_DIALOGUE_TICKS: u32 = 210;

/// Default countdown for item-pickup cards.
pub const DEFAULT_ITEM_TICKS: u32 = 150;

/// Default countdown for the full-width banner.
pub const DEFAULT_BANNER_TICKS: u32 = 180;

// ==========================================================================
// Card Defaults
// ==========================================================================

/// Card size in side mode (slides in from the left edge).
pub const SIDE_CARD_SIZE: (f32, f32) = (200.0, 90.0);

/// Card size in top mode (drops from the top edge).
pub const TOP_CARD_SIZE: (f32, f32) = (560.0, 60.0);

/// Slide advancement per tick in side mode.
pub const SIDE_SLIDE_STEP: f32 = 8.0;

/// Slide advancement per tick in top mode.
pub const TOP_SLIDE_STEP: f32 = 6.0;

/// Width available for wrapped card text in side mode.
pub const SIDE_TEXT_WIDTH: f32 = 170.0;

/// Width available for wrapped card text in top mode.
pub const TOP_TEXT_WIDTH: f32 = 480.0;

/// Gap between the card edge and its accent frame.
pub const CARD_FRAME_GAP: f32 = 4.0;

/// Vertical gap between the primary and secondary lanes.
pub const LANE_GAP: f32 = 10.0;

/// Distance from the screen top to the primary card in side mode.
pub const SIDE_CARD_TOP: f32 = 160.0;

// ==========================================================================
// Banner Defaults
// ==========================================================================

/// Maximum visible height of the banner strip.
pub const BANNER_MAX_SPAN: f32 = 60.0;

/// Banner height growth per unpaused tick.
pub const BANNER_REVEAL_STEP: f32 = 2.0;
