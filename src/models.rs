use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Visual/content layout of a lead page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Simple email opt-in
    Basic,
    /// Webinar registration
    Webinar,
    /// E-book download
    Ebook,
    /// Free consultation booking
    Consultation,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Basic,
        Template::Webinar,
        Template::Ebook,
        Template::Consultation,
    ];

    /// Wire value stored in the `template` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Basic => "basic",
            Template::Webinar => "webinar",
            Template::Ebook => "ebook",
            Template::Consultation => "consultation",
        }
    }

    /// Name shown in the quick-start wizard
    pub fn display_name(&self) -> &'static str {
        match self {
            Template::Basic => "Basic Opt-in",
            Template::Webinar => "Webinar Registration",
            Template::Ebook => "E-book Download",
            Template::Consultation => "Free Consultation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Basic => "Simple email capture",
            Template::Webinar => "Promote your webinar",
            Template::Ebook => "Lead magnet delivery",
            Template::Consultation => "Book discovery calls",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown template: {s}"))
    }
}

/// Declared marketing objective of a lead page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    EmailList,
    Sales,
    BookCalls,
    Content,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::EmailList, Goal::Sales, Goal::BookCalls, Goal::Content];

    /// Wire value stored in the `goal` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::EmailList => "email-list",
            Goal::Sales => "sales",
            Goal::BookCalls => "book-calls",
            Goal::Content => "content",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::EmailList => "Build Email List",
            Goal::Sales => "Generate Sales",
            Goal::BookCalls => "Book Calls",
            Goal::Content => "Content Delivery",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::EmailList => "Grow your subscriber base",
            Goal::Sales => "Direct product/service sales",
            Goal::BookCalls => "Schedule consultations",
            Goal::Content => "Share lead magnets",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("unknown goal: {s}"))
    }
}

/// Field requested by a form block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Email,
    Name,
    Phone,
    Company,
}

/// A typed block of page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Headline section with call to action
    #[serde(rename_all = "camelCase")]
    Hero {
        title: String,
        subtitle: String,
        button_text: String,
        image_url: Option<String>,
    },
    Benefits {
        items: Vec<String>,
    },
    Features {
        items: Vec<String>,
    },
    Details {
        items: Vec<String>,
    },
    /// Lead capture form, always the last block
    #[serde(rename_all = "camelCase")]
    Form {
        fields: Vec<FormField>,
        submit_text: String,
    },
}

impl ContentBlock {
    /// The `type` tag of the block as stored
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Hero { .. } => "hero",
            ContentBlock::Benefits { .. } => "benefits",
            ContentBlock::Features { .. } => "features",
            ContentBlock::Details { .. } => "details",
            ContentBlock::Form { .. } => "form",
        }
    }
}

/// Page-wide visual settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub background_color: String,
    pub text_color: String,
    pub button_color: String,
    pub font_family: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#333333".to_string(),
            button_color: "#007bff".to_string(),
            font_family: "Inter, sans-serif".to_string(),
        }
    }
}

/// Structured page document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,

    #[serde(default)]
    pub settings: DisplaySettings,
}

impl PageContent {
    /// The form block, if the page has one
    pub fn form_fields(&self) -> Option<&[FormField]> {
        self.blocks.iter().find_map(|block| match block {
            ContentBlock::Form { fields, .. } => Some(fields.as_slice()),
            _ => None,
        })
    }
}

/// A fully formed page ready to be handed to a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDefinition {
    pub title: String,
    pub slug: String,
    pub template: Template,
    pub goal: Option<Goal>,
    pub content: PageContent,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Payload for the `lead_pages` insert
#[derive(Debug, Clone, Serialize)]
pub struct NewLeadPage<'a> {
    pub user_id: &'a str,

    #[serde(flatten)]
    pub page: &'a PageDefinition,
}

/// A lead page as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPage {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub slug: String,
    pub template: Template,

    #[serde(default)]
    pub goal: Option<Goal>,

    #[serde(default)]
    pub content: PageContent,

    #[serde(default)]
    pub published: bool,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub views: i64,

    #[serde(default)]
    pub conversions: i64,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LeadPage {
    /// Materialise a stored record from a definition
    pub fn from_definition(user_id: &str, page: PageDefinition, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            title: page.title,
            slug: page.slug,
            template: page.template,
            goal: page.goal,
            content: page.content,
            published: page.published,
            published_at: page.published_at,
            views: 0,
            conversions: 0,
            created_at: now,
            updated_at: None,
        }
    }
}

/// A captured visitor contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,

    #[serde(default)]
    pub page_id: Option<Uuid>,

    pub user_id: String,
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub metadata: serde_json::Value,

    pub created_at: DateTime<Utc>,
}

/// Payload for the `leads` insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLead {
    pub page_id: Option<Uuid>,
    pub email: String,
    pub name: Option<String>,

    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Subscription plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Starter,
    Pro,
    Agency,
}

/// Usage limits of a plan; `None` means unlimited
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanLimits {
    pub pages: Option<usize>,
    pub leads: Option<usize>,
    pub features: Vec<&'static str>,
}

impl Plan {
    /// Plan from its stored name; anything unknown counts as free
    pub fn from_name(name: &str) -> Self {
        match name {
            "starter" => Plan::Starter,
            "pro" => Plan::Pro,
            "agency" => Plan::Agency,
            _ => Plan::Free,
        }
    }

    pub fn limits(&self) -> PlanLimits {
        match self {
            Plan::Free => PlanLimits {
                pages: Some(1),
                leads: Some(100),
                features: vec!["Basic templates"],
            },
            Plan::Starter => PlanLimits {
                pages: Some(10),
                leads: Some(1000),
                features: vec!["All templates", "Email sequences", "Basic analytics"],
            },
            Plan::Pro => PlanLimits {
                pages: None,
                leads: None,
                features: vec![
                    "Unlimited pages",
                    "Advanced analytics",
                    "A/B testing",
                    "API access",
                ],
            },
            Plan::Agency => PlanLimits {
                pages: None,
                leads: None,
                features: vec![
                    "White label",
                    "Custom domains",
                    "Team members",
                    "Priority support",
                ],
            },
        }
    }
}

/// The signed-in user, as supplied by the auth boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            access_token: None,
        }
    }
}
