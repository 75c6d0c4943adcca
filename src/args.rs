use clap::{Parser, ValueEnum};
use magic_page::generator::WizardSelection;
use magic_page::models::{Goal, Template};
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "magic-page")]
#[command(about = "Create a lead page from an email address")]
#[command(version)]
pub struct Args {
    /// Email of the signed-in user
    pub email: String,

    /// How the page is built
    #[arg(short, long, value_enum, default_value_t = Mode::Magic)]
    pub mode: Mode,

    /// Page title (wizard mode)
    #[arg(long)]
    pub title: Option<String>,

    /// Template: basic, webinar, ebook or consultation (wizard mode)
    #[arg(long)]
    pub template: Option<Template>,

    /// Goal: email-list, sales, book-calls or content (wizard mode)
    #[arg(long)]
    pub goal: Option<Goal>,

    /// User id supplied by the auth provider
    #[arg(short, long)]
    pub user_id: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Public site URL (overrides the configuration)
    #[arg(long)]
    pub site_url: Option<Url>,

    /// Seed for title and share message choice
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the dashboard summary afterwards
    #[arg(long)]
    pub dashboard: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Everything derived from the email
    Magic,
    /// Title, template and goal given on the command line
    Wizard,
    /// Empty draft
    Blank,
}

impl Args {
    /// Wizard answers from the command line, defaults filling the gaps
    pub fn wizard_selection(&self) -> WizardSelection {
        let defaults = WizardSelection::default();
        WizardSelection {
            title: self.title.clone().unwrap_or(defaults.title),
            template: self.template.unwrap_or(defaults.template),
            goal: self.goal.unwrap_or(defaults.goal),
        }
    }
}
