use clap::Parser;
use magic_page::config::{AppConfig, BackendConfig};
use magic_page::error::Result;
use magic_page::generator::MagicPageGenerator;
use magic_page::models::Session;
use magic_page::pages::LeadPages;
use magic_page::store::{MemoryStore, PageStore, RestStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

mod args;
use args::{Args, Mode};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let session = Session::new(
        args.user_id
            .clone()
            .unwrap_or_else(|| format!("demo_{}", Uuid::new_v4().simple())),
        args.email.clone(),
    );

    ::log::info!(
        "Starting for {} (backend: {})",
        session.email,
        if config.is_demo() { "demo" } else { "rest" }
    );

    let result = match &config.backend {
        BackendConfig::Demo => run(MemoryStore::new(), &config, &session, &args).await,
        BackendConfig::Rest(rest) => match RestStore::new(rest) {
            Ok(store) => run(store, &config, &session, &args).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        ::log::error!("Page creation failed: {}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from file: {}", path.display());
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };

    config.apply_env_overrides();
    if let Some(site_url) = &args.site_url {
        config.site_url = site_url.clone();
    }
    config.validate()?;

    Ok(config)
}

async fn run<S: PageStore>(
    store: S,
    config: &AppConfig,
    session: &Session,
    args: &Args,
) -> Result<()> {
    let pages = LeadPages::new(store)
        .with_generator(MagicPageGenerator::new(config.tables.clone()))
        .with_site_url(config.site_url.clone());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let page = match args.mode {
        Mode::Magic => {
            let page = pages.generator().generate_magic_page_with(
                &session.email,
                &mut rng,
                chrono::Utc::now(),
            );
            pages.store_page(session, page).await?
        }
        Mode::Wizard => pages.create_from_wizard(session, &args.wizard_selection()).await?,
        Mode::Blank => pages.create_blank_page(session).await?,
    };

    println!("{}", serde_json::to_string_pretty(&page)?);
    println!("Page URL: {}", pages.page_url(&page)?);
    println!("Share: {}", pages.share_message(&page, &mut rng)?);

    if args.dashboard {
        let summary = pages.dashboard(session).await?;
        ::log::info!(
            "{} pages ({} published), {} recent leads, plan {:?}",
            summary.pages.len(),
            summary.published_count(),
            summary.recent_leads.len(),
            summary.plan
        );
        if !summary.can_create_page() {
            ::log::warn!("Page limit of the {:?} plan reached", summary.plan);
        }
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
