//! Classic myADS profile import
//!
//! Converts the notification blocks of a Classic profile export into
//! notification seeds: citations for the profile owner, a daily arXiv
//! digest, a merged favorite-authors setup, and one keyword setup per
//! keyword slot. Reconciliation against setups the user already has stays
//! with the caller.

use serde::Deserialize;

use ads_classic::compile_classic_keywords;

use crate::error::MyadsError;
use crate::name::default_template_name;
use crate::notification::{Frequency, NotificationSeed, TemplateKind};

/// A Classic myADS profile as exported by the legacy system.
///
/// The three weekly channels (physics, arXiv preprints, astronomy) each
/// carry two keyword slots and an author list; the daily arXiv digest has
/// its own keywords and class list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassicProfile {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    /// Daily arXiv keywords
    #[serde(default)]
    pub daily_t1: String,
    /// arXiv classes for the daily digest
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub phy_t1: String,
    #[serde(default)]
    pub phy_t2: String,
    #[serde(default)]
    pub phy_aut: String,
    #[serde(default)]
    pub pre_t1: String,
    #[serde(default)]
    pub pre_t2: String,
    #[serde(default)]
    pub pre_aut: String,
    #[serde(default)]
    pub ast_t1: String,
    #[serde(default)]
    pub ast_t2: String,
    #[serde(default)]
    pub ast_aut: String,
    /// Channels with email delivery switched off (ast, phy, pre, daily)
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl ClassicProfile {
    /// Weekly notifications stay active while any weekly channel is.
    fn weekly_active(&self) -> bool {
        let all_disabled = ["ast", "phy", "pre"]
            .iter()
            .all(|channel| self.disabled.iter().any(|d| d == channel));
        !all_disabled
    }

    fn daily_active(&self) -> bool {
        !self.disabled.iter().any(|d| d == "daily")
    }
}

/// Plan the notifications a Classic profile maps to.
///
/// Fails if a keyword block cannot be compiled; a profile is imported
/// whole or not at all.
pub fn plan_import(profile: &ClassicProfile) -> Result<Vec<NotificationSeed>, MyadsError> {
    let weekly_active = profile.weekly_active();
    let daily_active = profile.daily_active();
    let mut seeds = Vec::new();

    if !profile.lastname.is_empty() {
        seeds.push(NotificationSeed {
            template: TemplateKind::Citations,
            name: format!("{} {} - Citations", profile.firstname, profile.lastname),
            data: Some(format!(
                "author:\"{}, {}\"",
                profile.lastname, profile.firstname
            )),
            classes: None,
            frequency: Frequency::Weekly,
            stateful: true,
            active: weekly_active,
        });
    }

    // Classic required classes for the daily digest but not keywords
    if !profile.daily_t1.is_empty() || !profile.groups.is_empty() {
        let data = if profile.daily_t1.is_empty() {
            None
        } else {
            Some(compile_classic_keywords(&profile.daily_t1)?)
        };
        seeds.push(NotificationSeed {
            template: TemplateKind::Arxiv,
            name: default_template_name(TemplateKind::Arxiv, data.as_deref()),
            data,
            classes: if profile.groups.is_empty() {
                None
            } else {
                Some(profile.groups.clone())
            },
            frequency: Frequency::Daily,
            stateful: false,
            active: daily_active,
        });
    }

    if let Some(data) = join_author_blocks(&[&profile.phy_aut, &profile.pre_aut, &profile.ast_aut])
    {
        seeds.push(NotificationSeed {
            template: TemplateKind::Authors,
            name: default_template_name(TemplateKind::Authors, Some(&data)),
            data: Some(data),
            classes: None,
            frequency: Frequency::Weekly,
            stateful: true,
            active: weekly_active,
        });
    }

    let slot_1 = merge_keyword_blocks(&[&profile.phy_t1, &profile.pre_t1, &profile.ast_t1])?;
    let slot_2 = merge_keyword_blocks(&[&profile.phy_t2, &profile.pre_t2, &profile.ast_t2])?;
    for data in [slot_1, slot_2].into_iter().flatten() {
        seeds.push(NotificationSeed {
            template: TemplateKind::Keyword,
            name: default_template_name(TemplateKind::Keyword, Some(&data)),
            data: Some(data),
            classes: None,
            frequency: Frequency::Weekly,
            stateful: false,
            active: weekly_active,
        });
    }

    Ok(seeds)
}

/// Join author lines from all channels as author:"..." clauses, skipping
/// blocks whose query is already contained in the accumulated one.
fn join_author_blocks(blocks: &[&str]) -> Option<String> {
    let mut all = String::new();
    for block in blocks {
        if block.is_empty() {
            continue;
        }
        let joined = block
            .split("\r\n")
            .filter(|line| !line.is_empty())
            .map(|line| format!("author:\"{}\"", line))
            .collect::<Vec<_>>()
            .join(" OR ");
        if !all.contains(&joined) {
            if !all.is_empty() {
                all.push_str(" OR ");
            }
            all.push_str(&joined);
        }
    }
    if all.is_empty() {
        None
    } else {
        Some(all)
    }
}

/// Compile and merge the keyword blocks of one slot across channels,
/// skipping channels whose compiled query is already contained in the
/// accumulated one.
fn merge_keyword_blocks(blocks: &[&str]) -> Result<Option<String>, MyadsError> {
    let mut merged = String::new();
    for block in blocks {
        if block.is_empty() {
            continue;
        }
        let compiled = compile_classic_keywords(block)?;
        if !merged.contains(&compiled) {
            if !merged.is_empty() {
                merged.push_str(" OR ");
            }
            merged.push_str(&compiled);
        }
    }
    if merged.is_empty() {
        Ok(None)
    } else {
        Ok(Some(merged))
    }
}
