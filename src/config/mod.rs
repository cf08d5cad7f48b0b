// SPDX-License-Identifier: MPL-2.0
//! Scheduler configuration: display mode, timing, and pause policy.
//!
//! The configuration is an immutable value constructed before the scheduler
//! and passed into it by ownership; nothing in the scheduler mutates it at
//! runtime. It can be persisted to a `notifications.toml` file and loaded
//! back, falling back to defaults for anything missing or malformed.
//!
//! # Examples
//!
//! ```
//! use herald::config::{DisplayMode, SchedulerConfig};
//!
//! let mut config = SchedulerConfig::default();
//! config.display_mode = DisplayMode::Top;
//! assert_eq!(config.card_size(), herald::config::defaults::TOP_CARD_SIZE);
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "notifications.toml";
const APP_NAME: &str = "Herald";

/// Where card-style notifications appear and which axis they slide along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Cards slide in horizontally from the left edge.
    #[default]
    Side,
    /// Cards drop down vertically from the top edge.
    Top,
}

/// Immutable scheduler configuration.
///
/// Pause sensitivity is configured per channel rather than hardcoded: the
/// reference behavior (cards keep running while paused, the banner freezes)
/// is the default, but hosts that pause for cutscenes can freeze both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Whether card slots freeze countdown and slide while paused.
    #[serde(default)]
    pub cards_freeze_on_pause: bool,
    /// Whether the banner freezes (and hides) while paused.
    #[serde(default = "default_true")]
    pub banner_freezes_on_pause: bool,
    #[serde(default = "default_alert_ticks")]
    pub alert_ticks: u32,
    #[serde(default = "default_dialogue_ticks")]
    pub dialogue_ticks: u32,
    #[serde(default = "default_item_ticks")]
    pub item_ticks: u32,
    #[serde(default = "default_banner_ticks")]
    pub banner_ticks: u32,
    #[serde(default = "default_banner_max_span")]
    pub banner_max_span: f32,
    #[serde(default = "default_banner_reveal_step")]
    pub banner_reveal_step: f32,
}

fn default_true() -> bool {
    true
}
fn default_alert_ticks() -> u32 {
    defaults::DEFAULT_ALERT_TICKS
}
fn default_dialogue_ticks() -> u32 {
    defaults::DEFAULT_DIALOGUE_TICKS
}
fn default_item_ticks() -> u32 {
    defaults::DEFAULT_ITEM_TICKS
}
fn default_banner_ticks() -> u32 {
    defaults::DEFAULT_BANNER_TICKS
}
fn default_banner_max_span() -> f32 {
    defaults::BANNER_MAX_SPAN
}
fn default_banner_reveal_step() -> f32 {
    defaults::BANNER_REVEAL_STEP
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Side,
            cards_freeze_on_pause: false,
            banner_freezes_on_pause: true,
            alert_ticks: defaults::DEFAULT_ALERT_TICKS,
            dialogue_ticks: defaults::DEFAULT_DIALOGUE_TICKS,
            item_ticks: defaults::DEFAULT_ITEM_TICKS,
            banner_ticks: defaults::DEFAULT_BANNER_TICKS,
            banner_max_span: defaults::BANNER_MAX_SPAN,
            banner_reveal_step: defaults::BANNER_REVEAL_STEP,
        }
    }
}

impl SchedulerConfig {
    /// Card dimensions for the configured display mode.
    #[must_use]
    pub fn card_size(&self) -> (f32, f32) {
        match self.display_mode {
            DisplayMode::Side => defaults::SIDE_CARD_SIZE,
            DisplayMode::Top => defaults::TOP_CARD_SIZE,
        }
    }

    /// Slide advancement per tick for the configured display mode.
    #[must_use]
    pub fn slide_step(&self) -> f32 {
        match self.display_mode {
            DisplayMode::Side => defaults::SIDE_SLIDE_STEP,
            DisplayMode::Top => defaults::TOP_SLIDE_STEP,
        }
    }

    /// Width available for wrapped card text.
    #[must_use]
    pub fn text_width(&self) -> f32 {
        match self.display_mode {
            DisplayMode::Side => defaults::SIDE_TEXT_WIDTH,
            DisplayMode::Top => defaults::TOP_TEXT_WIDTH,
        }
    }

    /// Off-screen starting distance of the slide animation: the full card
    /// extent along the slide axis.
    #[must_use]
    pub fn slide_start(&self) -> f32 {
        let (w, h) = self.card_size();
        match self.display_mode {
            DisplayMode::Side => w,
            DisplayMode::Top => h,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<SchedulerConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(SchedulerConfig::default())
}

pub fn save(config: &SchedulerConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<SchedulerConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &SchedulerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
