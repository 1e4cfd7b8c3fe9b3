//! studio-site - headless interaction core for a photography studio website
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc::UnboundedSender;

use studio_site::config::{ConfigStore, SiteConfig};
use studio_site::gallery::{Catalog, CatalogError};
use studio_site::logging::init_tracing;
use studio_site::ui::filter::FilterCategory;
use studio_site::ui::form::validate::format_phone_number;
use studio_site::ui::form::{validate_form, ContactFields, FieldId, SimulatedSink};
use studio_site::ui::lightbox::PassthroughResolver;
use studio_site::ui::scroll::{ElementId, ElementRect, ObservedKind};
use studio_site::ui::{Direction, Page, PageEvent, PageLayout, PageRuntime, TracingPresenter};

/// Questions in the studio's FAQ section.
const FAQ_ITEMS: usize = 6;

/// Interaction core of the studio website, driven from the command line
#[derive(Parser, Debug)]
#[command(name = "studio-site")]
#[command(about = "Headless interaction core for a photography studio website", long_about = None)]
struct Args {
    /// Config file (default: the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a contact form submission
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// List the portfolio, optionally filtered by category
    Gallery {
        /// all, family, newborn, birthday, baby-shower or maternity
        #[arg(long, default_value = "all")]
        category: FilterCategory,
    },
    /// Run the page with a scripted visitor
    Demo {
        /// Stop after this many seconds (Ctrl-C stops earlier)
        #[arg(long, default_value_t = 20)]
        seconds: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(args.config);

    match args.command {
        Command::Validate {
            name,
            email,
            phone,
            message,
        } => {
            let fields = ContactFields {
                name,
                email,
                phone,
                message,
            };
            if !validate(&fields) {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Gallery { category } => {
            let catalog = load_catalog(&config)?;
            print_gallery(&catalog, category);
            Ok(())
        }
        Command::Demo { seconds } => demo(config, Duration::from_secs(seconds)).await,
    }
}

/// A broken config file is reported and the defaults are used.
fn load_config(path: Option<PathBuf>) -> SiteConfig {
    let path = path.unwrap_or_else(SiteConfig::config_path);
    match ConfigStore::open(path) {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "Config loaded");
            store.get()
        }
        Err(err) => {
            tracing::warn!("{}; using defaults", err);
            SiteConfig::default()
        }
    }
}

fn load_catalog(config: &SiteConfig) -> Result<Catalog, CatalogError> {
    match &config.gallery.catalog_path {
        Some(path) => Catalog::load_from(path),
        None => Ok(Catalog::builtin()),
    }
}

fn validate(fields: &ContactFields) -> bool {
    let report = validate_form(fields);
    for result in report.results() {
        match result.message {
            Some(message) if !result.valid => println!("✗ {}: {}", result.field.name(), message),
            _ => println!("✓ {}", result.field.name()),
        }
    }
    if report.is_valid() && !fields.phone.trim().is_empty() {
        println!("  phone: {}", format_phone_number(fields.phone.trim()));
    }
    if let Some(field) = report.first_invalid() {
        eprintln!("Form invalid, first field to fix: {}", field.name());
    }
    report.is_valid()
}

fn print_gallery(catalog: &Catalog, category: FilterCategory) {
    let items: Vec<_> = catalog
        .items()
        .iter()
        .filter(|item| category.matches(item.category))
        .collect();
    if items.is_empty() {
        println!("No sessions in '{}'", category);
        return;
    }
    for item in items {
        println!(
            "{:<24} {:<18} {:<14} {}",
            item.name,
            item.category.label(),
            item.date.display(),
            item.description
        );
    }
}

async fn demo(config: SiteConfig, duration: Duration) -> Result<()> {
    let catalog = load_catalog(&config);
    let layout = match &catalog {
        Ok(catalog) => PageLayout::studio(catalog, FAQ_ITEMS),
        Err(_) => PageLayout::studio(&Catalog::builtin(), FAQ_ITEMS),
    };

    let sink = Arc::new(SimulatedSink::new(config.form.submit_latency()));
    let resolver = Arc::new(PassthroughResolver::new(config.lightbox.resolve_delay()));
    let mut page = Page::new(config, layout, catalog);
    let tiles = page.visible_items().len() as u64;
    for tile in 0..tiles {
        page.observe(ElementId(tile), ObservedKind::Reveal);
    }
    let first_item = page.visible_items().first().map(|item| item.id.clone());

    let mut runtime = PageRuntime::new(page, sink, resolver);
    let mut presenter = TracingPresenter::new();
    runtime.start(&mut presenter);

    let visitor = tokio::spawn(scripted_visitor(runtime.sender(), tiles, first_item));

    let shutdown = async {
        tokio::select! {
            _ = tokio::time::sleep(duration) => {}
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    tracing::warn!("Failed to listen for Ctrl-C: {}", err);
                }
            }
        }
    };
    runtime.run_until(&mut presenter, shutdown).await;
    visitor.abort();

    let page = runtime.page();
    tracing::info!(
        presented = presenter.presented(),
        errors = page.errors().len(),
        "Demo finished"
    );
    for entry in page.errors().entries() {
        eprintln!("{}: {}", entry.component, entry.message);
    }
    Ok(())
}

async fn scripted_visitor(
    events: UnboundedSender<PageEvent>,
    tiles: u64,
    first_item: Option<studio_site::gallery::ItemId>,
) -> Result<()> {
    let pause = || tokio::time::sleep(Duration::from_millis(400));
    let send = |event: PageEvent| events.send(event).context("page runtime stopped");

    send(PageEvent::Resize {
        width: 1280.0,
        height: 800.0,
    })?;
    send(PageEvent::DocumentHeight(4200.0))?;
    for y in [40.0, 180.0, 620.0, 1400.0] {
        send(PageEvent::Scroll { y })?;
        pause().await;
    }
    send(PageEvent::SectionVisible("portfolio".into()))?;
    for tile in 0..tiles {
        send(PageEvent::ElementIntersected {
            element: ElementId(tile),
            rect: ElementRect::new(120.0 + 90.0 * tile as f64, 300.0),
        })?;
    }
    pause().await;

    send(PageEvent::FilterSelected("family".parse()?))?;
    pause().await;
    send(PageEvent::FilterSelected(FilterCategory::All))?;
    pause().await;

    if let Some(item) = first_item {
        send(PageEvent::OpenGallery(item))?;
        pause().await;
        send(PageEvent::LightboxNavigate(Direction::Next))?;
        pause().await;
        send(PageEvent::LightboxClose)?;
    }

    send(PageEvent::CarouselPointer { inside: true })?;
    pause().await;
    send(PageEvent::CarouselIndicator { index: 2 })?;
    send(PageEvent::CarouselPointer { inside: false })?;

    send(PageEvent::FaqQuestionActivated { index: 0 })?;
    pause().await;

    for (field, value) in [
        (FieldId::Name, "Jane Doe"),
        (FieldId::Email, "jane@example"),
        (FieldId::Message, "Hello!"),
    ] {
        send(PageEvent::FieldInput {
            field,
            value: value.to_string(),
        })?;
        send(PageEvent::FieldBlur(field))?;
    }
    send(PageEvent::FormSubmitted)?;
    pause().await;
    send(PageEvent::FieldInput {
        field: FieldId::Message,
        value: "We'd love a family session this spring.".into(),
    })?;
    send(PageEvent::FormSubmitted)?;

    send(PageEvent::LinkClicked {
        href: "#contact".into(),
    })?;
    send(PageEvent::ScrollToTopClicked)?;
    Ok(())
}
