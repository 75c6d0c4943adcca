use crate::models::{Goal, Template};
use serde::{Deserialize, Serialize};

/// Industry label used when the domain root is unknown or missing
pub const DEFAULT_INDUSTRY: &str = "Professional";

/// Title templates; `{industry}` and `{name}` are interpolated
pub const TITLE_TEMPLATES: [&str; 8] = [
    "Free {industry} Strategy Guide",
    "Exclusive {industry} Insights",
    "{industry} Success Toolkit",
    "Ultimate {industry} Checklist",
    "{industry} Growth Blueprint",
    "Pro {industry} Templates",
    "{industry} Masterclass Access",
    "{name}'s {industry} Resources",
];

/// Share message templates; `{title}` and `{url}` are interpolated
pub const SHARE_MESSAGES: [&str; 4] = [
    "Check out my new lead page: {title} - {url}",
    "I just created a lead page for {title}. Take a look: {url}",
    "New lead page live: {title}. Perfect for capturing emails! {url}",
    "🚀 Just launched: {title}. Start capturing leads today! {url}",
];

/// One entry of the domain-root to industry table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryEntry {
    pub domain: String,
    pub industry: String,
}

/// Ordered mapping from exact domain roots to industry labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryTable {
    #[serde(default)]
    pub entries: Vec<IndustryEntry>,

    #[serde(default = "default_industry")]
    pub default: String,
}

fn default_industry() -> String {
    DEFAULT_INDUSTRY.to_string()
}

impl Default for IndustryTable {
    fn default() -> Self {
        let entries = [
            ("gmail", "Personal"),
            ("yahoo", "Personal"),
            ("outlook", "Professional"),
            ("hotmail", "Personal"),
            ("company", "Corporate"),
            ("business", "Business"),
            ("consulting", "Consulting"),
            ("agency", "Agency"),
            ("marketing", "Marketing"),
            ("tech", "Technology"),
            ("digital", "Digital"),
            ("creative", "Creative"),
        ]
        .iter()
        .map(|(domain, industry)| IndustryEntry {
            domain: domain.to_string(),
            industry: industry.to_string(),
        })
        .collect();

        Self {
            entries,
            default: default_industry(),
        }
    }
}

impl IndustryTable {
    /// Industry label for a domain root (exact, case-sensitive match)
    pub fn lookup(&self, domain_root: Option<&str>) -> &str {
        domain_root
            .and_then(|root| self.entries.iter().find(|entry| entry.domain == root))
            .map(|entry| entry.industry.as_str())
            .unwrap_or(self.default.as_str())
    }
}

/// A group of keywords selecting one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule<T> {
    pub keywords: Vec<String>,
    pub value: T,
}

impl<T> KeywordRule<T> {
    pub fn new(keywords: &[&str], value: T) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            value,
        }
    }

    /// True when any keyword occurs in the haystack (case-sensitive)
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword.as_str()))
    }
}

/// Priority-ordered keyword rules with a fallback value
///
/// The first rule with a matching keyword wins; later rules are not consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRules<T> {
    pub rules: Vec<KeywordRule<T>>,
    pub default: T,
}

impl<T: Copy> KeywordRules<T> {
    pub fn classify(&self, haystack: &str) -> T {
        for rule in &self.rules {
            if rule.matches(haystack) {
                ::log::trace!("Keyword rule matched: {:?}", rule.keywords);
                return rule.value;
            }
        }
        self.default
    }
}

/// Default template rules, in priority order
pub fn template_rules() -> KeywordRules<Template> {
    KeywordRules {
        rules: vec![
            KeywordRule::new(&["consult", "coach", "advisor"], Template::Consultation),
            KeywordRule::new(&["edu", "learn", "academy"], Template::Ebook),
            KeywordRule::new(&["event", "webinar", "meet"], Template::Webinar),
        ],
        default: Template::Basic,
    }
}

/// Default goal rules, in priority order
///
/// "meet" also appears in the template rules; a domain containing it gets
/// the webinar template together with the book-calls goal.
pub fn goal_rules() -> KeywordRules<Goal> {
    KeywordRules {
        rules: vec![
            KeywordRule::new(&["sales", "shop", "store"], Goal::Sales),
            KeywordRule::new(&["book", "schedule", "meet"], Goal::BookCalls),
            KeywordRule::new(&["content", "media", "publish"], Goal::Content),
        ],
        default: Goal::EmailList,
    }
}

/// All lookup tables the generator consults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTables {
    #[serde(default)]
    pub industries: IndustryTable,

    #[serde(default = "template_rules")]
    pub templates: KeywordRules<Template>,

    #[serde(default = "goal_rules")]
    pub goals: KeywordRules<Goal>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            industries: IndustryTable::default(),
            templates: template_rules(),
            goals: goal_rules(),
        }
    }
}

/// Interpolate `{key}` placeholders in a single pass
///
/// Substituted values are never re-scanned; unknown placeholders are kept.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match vars.iter().find(|(name, _)| *name == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
