// SPDX-License-Identifier: MPL-2.0
//! `herald` is a transient-notification scheduler for tick-driven game UIs.
//!
//! It accepts short-lived, localized, priority-ordered messages (combat
//! alerts, dialogue hints, item pickups, full-screen banners) and decides
//! which message occupies which on-screen slot at any moment, for how long,
//! and in what animation state. Rendering, asset loading, and audio are
//! collaborator traits implemented by the host; the scheduler owns only
//! message lifecycle, slot assignment, priority preemption, timer decay,
//! and animation-state advancement.
//!
//! # Usage
//!
//! ```
//! use herald::config::SchedulerConfig;
//! use herald::i18n::LocalizedText;
//! use herald::scheduler::{NotificationScheduler, Submission};
//!
//! let mut scheduler = NotificationScheduler::new(SchedulerConfig::default());
//! scheduler.submit(Submission::alert(
//!     LocalizedText::new("The gate is closing!", "大门正在关闭！"),
//! ));
//! // Once per simulation frame:
//! scheduler.tick(false);
//! ```

#![doc(html_root_url = "https://docs.rs/herald/0.2.0")]

pub mod alerts;
pub mod assets;
pub mod config;
pub mod error;
pub mod i18n;
pub mod render;
pub mod scheduler;
