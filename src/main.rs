//! Command line client running a single vault search.

use std::env;
use std::sync::Arc;

use clap::Parser;
use config::Config;
use dotenvy::dotenv;

use pushkind_vault::api::http::HttpVaultApi;
use pushkind_vault::domain::query::VaultQuery;
use pushkind_vault::dto::vault::{ResultsView, VaultPageData};
use pushkind_vault::models::config::ClientConfig;
use pushkind_vault::services::VaultSearch;

#[derive(Debug, Parser)]
#[command(name = "pushkind-vault", about = "Search published brews in the vault")]
struct Args {
    /// Query string, e.g. `title=dragon&author=alice&count=40&legacy=false`.
    query: String,

    /// Page to load instead of the one in the query string.
    #[arg(long)]
    page: Option<usize>,
}

fn load_config() -> Result<ClientConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<ClientConfig>()
}

fn print_page(data: &VaultPageData) {
    match &data.results {
        ResultsView::Searching => println!("Searching"),
        ResultsView::NotSearched => println!("No search yet"),
        ResultsView::NoBrews => println!("No brews found"),
        ResultsView::Failed(err) => println!("Error: {}", err.user_message()),
        ResultsView::Brews(result) => {
            match result.total {
                Some(total) => println!("Brews found: {total}"),
                None => println!("Brews found: ?"),
            }
            for brew in &result.brews {
                println!(
                    "- {} by {} [{}]",
                    brew.title,
                    brew.author_line(),
                    brew.share_id.as_deref().unwrap_or("-")
                );
            }
        }
    }

    let window = &data.window;
    if window.is_empty() {
        return;
    }

    let mut line = Vec::new();
    if window.show_first_jump {
        line.push("1 ...".to_string());
    }
    for page in &window.visible_pages {
        if *page == data.query.page {
            line.push(format!("[{page}]"));
        } else {
            line.push(page.to_string());
        }
    }
    if window.show_last_jump {
        line.push(format!("... {}", window.total_pages));
    }
    println!(
        "{} {} {}",
        if window.can_go_prev { "<" } else { " " },
        line.join(" "),
        if window.can_go_next { ">" } else { " " }
    );
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();

    let client_config = match load_config() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let mut query = match VaultQuery::from_query_string(&args.query, client_config.default_page_size)
    {
        Ok(query) => query,
        Err(err) => {
            log::error!("Error parsing query: {err}");
            std::process::exit(2);
        }
    };
    if let Some(page) = args.page {
        query = query.with_page(page);
    }

    let api = match HttpVaultApi::new(&client_config) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let search = VaultSearch::new(Arc::new(api), query.clone());
    match search.run(query).await {
        Ok(data) => {
            println!("?{}", data.query.to_query_string());
            print_page(&data);
        }
        Err(err) => {
            log::warn!("Search not sent: {err}");
            println!("{}", err.user_message());
            std::process::exit(2);
        }
    }
}
