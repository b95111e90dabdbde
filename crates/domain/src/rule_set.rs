use crate::{DomainError, SiteCategory};

pub const DEFAULT_IRANIAN_SITES: &[&str] = &[
    ".ir",
    ".ایران",
    "irna.ir",
    "tasnim.ir",
    "mehr.ir",
    "isna.ir",
    "farsnews.ir",
    "khabaronline.ir",
    "yjc.ir",
    "shomanews.com",
    "digikala.com",
    "snapp.ir",
    "cafe-bazaar.ir",
    "aparat.com",
    "shaparak.ir",
    "sep.ir",
    "shetab.ir",
];

pub const DEFAULT_BLOCKED_SITES: &[&str] = &[
    // social
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "youtube.com",
    "telegram.org",
    "discord.com",
    "reddit.com",
    "tiktok.com",
    "snapchat.com",
    "whatsapp.com",
    "signal.org",
    "viber.com",
    // news
    "bbc.com",
    "cnn.com",
    "reuters.com",
    "dw.com",
    "voanews.com",
    "radiofarda.com",
    "iranintl.com",
    "manototv.com",
    // developer
    "github.com",
    "stackoverflow.com",
    "medium.com",
    "dev.to",
    "npmjs.com",
    "pypi.org",
    "docker.com",
    // entertainment
    "netflix.com",
    "spotify.com",
    "soundcloud.com",
    "twitch.tv",
    "wikipedia.org",
    "archive.org",
];

pub const DEFAULT_GAMING_DOMAINS: &[&str] = &[
    "steampowered.com",
    "steamcommunity.com",
    "steamstatic.com",
    "riotgames.com",
    "leagueoflegends.com",
    "valorant.com",
    "epicgames.com",
    "fortnite.com",
    "unrealengine.com",
    "battle.net",
    "blizzard.com",
    "ea.com",
    "origin.com",
    "ubisoft.com",
    "activision.com",
];

/// Static rule lists, normalized once at startup.
///
/// A rule is a bare domain suffix: `github.com` matches `github.com` and any
/// subdomain of it, never a name that merely contains the text. A leading dot
/// is accepted and dropped, so `.ir` is the TLD rule `ir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRuleSet {
    iranian: Vec<String>,
    blocked: Vec<String>,
    gaming: Vec<String>,
}

impl DomainRuleSet {
    pub fn new<S: AsRef<str>>(iranian: &[S], blocked: &[S], gaming: &[S]) -> Result<Self, DomainError> {
        Ok(Self {
            iranian: normalize_rules(iranian)?,
            blocked: normalize_rules(blocked)?,
            gaming: normalize_rules(gaming)?,
        })
    }

    pub fn rules(&self, category: SiteCategory) -> &[String] {
        match category {
            SiteCategory::Iranian => &self.iranian,
            SiteCategory::Blocked => &self.blocked,
            SiteCategory::Gaming => &self.gaming,
            SiteCategory::Normal => &[],
        }
    }

    pub fn total_rules(&self) -> usize {
        self.iranian.len() + self.blocked.len() + self.gaming.len()
    }
}

impl Default for DomainRuleSet {
    fn default() -> Self {
        let normalize = |rules: &[&str]| -> Vec<String> {
            rules
                .iter()
                .filter_map(|r| normalize_rule(r).ok())
                .collect()
        };
        Self {
            iranian: normalize(DEFAULT_IRANIAN_SITES),
            blocked: normalize(DEFAULT_BLOCKED_SITES),
            gaming: normalize(DEFAULT_GAMING_DOMAINS),
        }
    }
}

fn normalize_rules<S: AsRef<str>>(rules: &[S]) -> Result<Vec<String>, DomainError> {
    let mut out: Vec<String> = Vec::with_capacity(rules.len());
    for rule in rules {
        let rule = normalize_rule(rule.as_ref())?;
        if !out.contains(&rule) {
            out.push(rule);
        }
    }
    Ok(out)
}

pub fn normalize_rule(rule: &str) -> Result<String, DomainError> {
    let rule = rule.trim().trim_start_matches('.').to_lowercase();
    if rule.is_empty() || rule.split('.').any(str::is_empty) {
        return Err(DomainError::ConfigError(format!(
            "Invalid domain rule: {:?}",
            rule
        )));
    }
    Ok(rule)
}
