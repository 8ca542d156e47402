use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};

use ad_app::form::{ArticleForm, FormField};
use ad_app::notice::{Notice, Severity};
use ad_app::pages::{Dashboard, DetailPage, EditorPage};
use ad_app::views::{self, Tab};
use ad_client::{ArticleClient, DEFAULT_BASE_URL};
use ad_core::{ArticleStore, Result};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dashboard for scraped and manual articles", long_about = None)]
struct Cli {
    /// Base URL of the remote article store
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the article dashboard
    List {
        /// Which tab to render
        #[arg(long, value_enum, default_value = "all")]
        tab: TabArg,
    },
    /// Show one article in full
    Show { id: String },
    /// Create a manual article
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        content: String,
        /// Published date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Edit an existing article
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Published date (YYYY-MM-DD); pass an empty string to clear it
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an article
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Trigger the external scraping process and show the refreshed dashboard
    Scrape,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TabArg {
    All,
    Scraped,
    Manual,
}

impl From<TabArg> for Tab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::All => Tab::All,
            TabArg::Scraped => Tab::Scraped,
            TabArg::Manual => Tab::Manual,
        }
    }
}

fn emit_notices(notices: Vec<Notice>) {
    for notice in notices {
        match notice.severity {
            Severity::Info => info!("✅ {}: {}", notice.title, notice.body),
            Severity::Error => error!("❌ {}: {}", notice.title, notice.body),
        }
    }
}

fn emit_field_errors(form: &ArticleForm) {
    for (field, message) in form.errors() {
        error!("{}: {}", field.label(), message);
    }
}

fn apply_fields(form: &mut ArticleForm, fields: Vec<(FormField, Option<String>)>) {
    for (field, value) in fields {
        if let Some(value) = value {
            form.set_field(field, value);
        }
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let client = ArticleClient::with_base_url(&cli.api_url)?;
    let store: Arc<dyn ArticleStore> = Arc::new(client);

    match cli.command {
        Commands::List { tab } => {
            let mut dashboard = Dashboard::new(store);
            dashboard.refresh().await;
            if let Some(message) = dashboard.error() {
                warn!("⚠️ {message}");
            }
            println!("{}", views::render_dashboard(dashboard.articles(), tab.into()));
        }
        Commands::Show { id } => {
            let mut page = DetailPage::new(store);
            page.load(&id).await;
            emit_notices(page.take_notices());
            match page.article() {
                Some(article) => println!("{}", views::render_detail(article)),
                None => std::process::exit(1),
            }
        }
        Commands::Create {
            title,
            url,
            content,
            date,
            source,
            status,
        } => {
            let mut dashboard = Dashboard::new(store);
            let mut form = ArticleForm::new();
            form.set_field(FormField::Title, title);
            form.set_field(FormField::Url, url);
            form.set_field(FormField::Content, content);
            apply_fields(
                &mut form,
                vec![
                    (FormField::PublishedDate, date),
                    (FormField::Source, source),
                    (FormField::Status, status),
                ],
            );
            info!("📰 Creating article");
            let created = dashboard.create(&mut form).await;
            emit_notices(dashboard.take_notices());
            if !created {
                emit_field_errors(&form);
                std::process::exit(1);
            }
            println!("{}", views::render_dashboard(dashboard.articles(), Tab::All));
        }
        Commands::Edit {
            id,
            title,
            url,
            content,
            date,
            source,
            status,
        } => {
            let mut editor = EditorPage::new(store);
            editor.load(&id).await;
            emit_notices(editor.take_notices());
            if editor.article().is_none() {
                std::process::exit(1);
            }
            apply_fields(
                editor.form_mut(),
                vec![
                    (FormField::Title, title),
                    (FormField::Url, url),
                    (FormField::Content, content),
                    (FormField::PublishedDate, date),
                    (FormField::Source, source),
                    (FormField::Status, status),
                ],
            );
            let saved = editor.save().await;
            emit_notices(editor.take_notices());
            match saved {
                Some(article) => println!("{}", views::render_detail(&article)),
                None => {
                    emit_field_errors(editor.form());
                    std::process::exit(1);
                }
            }
        }
        Commands::Delete { id, yes } => {
            if !yes
                && !confirm(
                    "Are you sure you want to delete this article? This action cannot be undone.",
                )?
            {
                info!("Delete cancelled");
                return Ok(());
            }
            let mut dashboard = Dashboard::new(store);
            info!("🗑️ Deleting article {id}");
            let deleted = dashboard.delete(&id).await;
            emit_notices(dashboard.take_notices());
            if !deleted {
                std::process::exit(1);
            }
        }
        Commands::Scrape => {
            let mut dashboard = Dashboard::new(store);
            info!("🦗 Fetching latest articles");
            dashboard.trigger_scrape().await;
            emit_notices(dashboard.take_notices());
            println!("{}", views::render_dashboard(dashboard.articles(), Tab::All));
        }
    }

    Ok(())
}
