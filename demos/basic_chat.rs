//! Basic chat - one-shot send of a short conversation
//!
//! Before running, set your API key:
//! ```bash
//! export OPENAI_API_KEY="your-key"
//! ```
//!
//! Run with:
//! ```bash
//! cargo run --example basic_chat
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

    let client = ChatClient::with_config(ChatClientConfig::from_env());

    let history = vec![
        ChatMessage::system("You are a concise assistant.").build(),
        ChatMessage::user("Name three crates every Rust service ends up using.").build(),
    ];

    let result = client.send_chat(&history).await;
    if result.success {
        println!("assistant: {}", result.reply);
    } else {
        println!("failed: {}", result.reply);
    }
    Ok(())
}
