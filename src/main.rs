//! Users Admin
//!
//! Loads the users collection from the configured REST server and prints it page by page.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use users_admin::{Config, HttpUserStore, UserListViewModel, ViewState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Users Admin");
    tracing::info!("API base URL: {}", config.api_base_url);
    tracing::info!("Request timeout: {:?}", config.request_timeout);

    let store = HttpUserStore::from_config(&config)?;
    let view_model = UserListViewModel::new(store);

    view_model.load().await?;

    let state = view_model.state().await;
    tracing::info!("Loaded {} users", state.collection.len());
    print_page(&state);

    let mut page = 1;
    while view_model.set_page(page + 1).await {
        page += 1;
        print_page(&view_model.state().await);
    }

    Ok(())
}

fn print_page(state: &ViewState) {
    let items = state.page_items();
    if items.is_empty() {
        println!("No users found");
        return;
    }

    if let Some(pagination) = state.pagination() {
        println!(
            "-- page {} of {} ({}) --",
            pagination.current_page,
            pagination.total_pages,
            pagination.summary()
        );
    }
    for user in items {
        println!(
            "{:>5}  {:<24} {:<32} {:<12} {:<8} {}",
            user.id,
            user.name,
            user.email,
            user.role,
            user.status.as_str(),
            user.created_at
        );
    }
}
