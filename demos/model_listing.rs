//! Model listing - resolve the selectable model set for the configured keys
//!
//! Works with zero keys (static defaults), one key, or several keys whose
//! results are merged; a failing key is skipped.
//!
//! Run with:
//! ```bash
//! OPENAI_API_KEY="key-one,key-two" cargo run --example model_listing
//! ```

use chatwire::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chatwire=debug")),
        )
        .init();

    let config = ChatClientConfig::from_env();
    let directory = ModelDirectory::new(&config.base_url, reqwest::Client::new());

    let mut models: Vec<String> = directory
        .list_models(&config.api_keys)
        .await
        .into_iter()
        .collect();
    models.sort();

    println!("{} selectable models:", models.len());
    for id in models {
        println!("  {id}");
    }
    Ok(())
}
