pub mod content;
pub mod rules;

#[cfg(test)]
mod tests;

pub use content::generate_content;
pub use crate::utils::generate_slug;

use crate::models::{Goal, PageContent, PageDefinition, Template};
use crate::utils;
use chrono::{DateTime, Utc};
use rules::{KeywordTables, SHARE_MESSAGES, TITLE_TEMPLATES, render};

/// Title used when the wizard is completed without one
pub const WIZARD_DEFAULT_TITLE: &str = "My First Lead Page";

/// Title of a page created from the dashboard's "new page" action
pub const BLANK_PAGE_TITLE: &str = "New Lead Page";

/// Source of uniform index choices
///
/// Every `rand` generator is a `Pick`; tests can pin choices with [`FixedPick`].
pub trait Pick {
    /// Returns an index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> Pick for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range)
#[derive(Debug, Clone, Copy)]
pub struct FixedPick(pub usize);

impl Pick for FixedPick {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// What the quick-start wizard collected
#[derive(Debug, Clone)]
pub struct WizardSelection {
    pub title: String,
    pub template: Template,
    pub goal: Goal,
}

impl Default for WizardSelection {
    fn default() -> Self {
        Self {
            title: String::new(),
            template: Template::Basic,
            goal: Goal::EmailList,
        }
    }
}

impl WizardSelection {
    /// Template and goal as the wizard catalogue names them
    pub fn describe(&self) -> String {
        format!(
            "{} ({}), goal: {} ({})",
            self.template.display_name(),
            self.template.description(),
            self.goal.display_name(),
            self.goal.description()
        )
    }
}

/// Turns an email address into a complete lead page
#[derive(Debug, Clone, Default)]
pub struct MagicPageGenerator {
    tables: KeywordTables,
}

impl MagicPageGenerator {
    /// Create a generator with the given lookup tables
    pub fn new(tables: KeywordTables) -> Self {
        Self { tables }
    }

    /// Pick a title interpolating the industry guessed from the domain root
    pub fn generate_title_from_email<P: Pick + ?Sized>(
        &self,
        email: &str,
        picker: &mut P,
    ) -> String {
        let name = utils::local_part(email);
        let industry = self.tables.industries.lookup(utils::domain_root(email));
        let template = TITLE_TEMPLATES[picker.pick(TITLE_TEMPLATES.len())];

        render(template, &[("industry", industry), ("name", name)])
    }

    /// Template chosen from keywords in the full domain
    pub fn determine_template(&self, email: &str) -> Template {
        self.tables
            .templates
            .classify(utils::domain(email).unwrap_or_default())
    }

    /// Goal chosen from keywords in the full domain
    pub fn determine_goal(&self, email: &str) -> Goal {
        self.tables.goals.classify(utils::domain(email).unwrap_or_default())
    }

    /// Generate a published page from an email, using the thread RNG and clock
    pub fn generate_magic_page(&self, email: &str) -> PageDefinition {
        self.generate_magic_page_with(email, &mut rand::thread_rng(), Utc::now())
    }

    /// Generate a published page with an explicit random source and time
    pub fn generate_magic_page_with<P: Pick + ?Sized>(
        &self,
        email: &str,
        picker: &mut P,
        now: DateTime<Utc>,
    ) -> PageDefinition {
        let title = self.generate_title_from_email(email, picker);
        let slug = utils::unique_slug(&title, now);
        let template = self.determine_template(email);
        let goal = self.determine_goal(email);
        let content = generate_content(template, &title);

        ::log::debug!(
            "Generated magic page '{}' (template: {}, goal: {})",
            title,
            template,
            goal
        );

        PageDefinition {
            title,
            slug,
            template,
            goal: Some(goal),
            content,
            published: true,
            published_at: Some(now),
        }
    }
}

/// Pick a share message for a page
pub fn generate_share_message<P: Pick + ?Sized>(
    title: &str,
    page_url: &str,
    picker: &mut P,
) -> String {
    let template = SHARE_MESSAGES[picker.pick(SHARE_MESSAGES.len())];
    render(template, &[("title", title), ("url", page_url)])
}

/// Draft page from the quick-start wizard
pub fn from_wizard(selection: &WizardSelection, now: DateTime<Utc>) -> PageDefinition {
    let title = if selection.title.is_empty() {
        WIZARD_DEFAULT_TITLE.to_string()
    } else {
        selection.title.clone()
    };

    PageDefinition {
        slug: utils::unique_slug(&title, now),
        template: selection.template,
        goal: Some(selection.goal),
        content: generate_content(selection.template, &title),
        title,
        published: false,
        published_at: None,
    }
}

/// Empty, unpublished page as created from the dashboard
pub fn blank_page(now: DateTime<Utc>) -> PageDefinition {
    PageDefinition {
        title: BLANK_PAGE_TITLE.to_string(),
        slug: format!("page-{}", now.timestamp_millis()),
        template: Template::Basic,
        goal: None,
        content: PageContent::default(),
        published: false,
        published_at: None,
    }
}
