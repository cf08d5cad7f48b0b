// SPDX-License-Identifier: MPL-2.0
//! Fixed table of keyed alert texts.
//!
//! Game logic raises common refusals ("stage locked", "not enough gems")
//! by key instead of passing literal strings around. An unknown key is a
//! content bug, surfaced as [`Error::UnknownAlertKey`].

use crate::error::{Error, Result};
use crate::i18n::LocalizedText;

/// Keyed alert texts, English first, Chinese second.
const ALERT_TABLE: &[(&str, &str, &str)] = &[
    ("falseHero", "This Hero is locked.", "此英雄尚未解锁。"),
    (
        "notFound",
        "Kill one in adventure model to collect.",
        "在冒险模式中击杀一只此怪物来收集它。",
    ),
    ("falseStg", "This Stage is locked.", "此关卡尚未解锁。"),
    (
        "false2P",
        "You have only one hero accessible.",
        "你目前只有一个可用的英雄。",
    ),
    (
        "illegalKey",
        "RETURN Key should not be set freely.",
        "回车键不能被设置为玩家按键。",
    ),
    (
        "lackSP",
        "The hero doesn't have enough SP.",
        "该英雄没有足够的技能点。",
    ),
    ("attMax", "This attri is at MAX level.", "此项属性已经升至最高级。"),
    ("lackGem", "No enough gems!", "宝石数量不足！"),
    ("NULL", "An undefined error occurred.", "出现了一项未知错误。"),
];

/// Looks up the alert text for `key`.
pub fn lookup(key: &str) -> Result<LocalizedText> {
    ALERT_TABLE
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, zh)| LocalizedText::new(*en, *zh))
        .ok_or_else(|| Error::UnknownAlertKey(key.to_string()))
}
