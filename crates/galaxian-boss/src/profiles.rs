//! Trigger-level profile resolution.
//!
//! Profiles themselves are plain configuration (`BossProfile`); this module
//! answers "which boss, if any, does this level spawn".

use galaxian_core::config::{BossProfile, BossRules};
use galaxian_core::error::SimError;

/// Resolve the boss for `level`.
///
/// `Ok(None)` for a regular level. A trigger that names a missing profile is
/// a fatal configuration error rather than a malformed boss.
pub fn profile_for_level(rules: &BossRules, level: u32) -> Result<Option<&BossProfile>, SimError> {
    let Some(name) = rules.trigger_for(level) else {
        return Ok(None);
    };
    rules
        .profile(name)
        .map(Some)
        .ok_or_else(|| SimError::MissingBossProfile {
            level,
            profile: name.to_string(),
        })
}
