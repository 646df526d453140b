//! Streaming-shaped send - history plus trailing prompt with an attachment
//!
//! The reply arrives as a lazy chunk sequence (currently a single chunk,
//! since the transport is not incremental).
//!
//! Run with:
//! ```bash
//! OPENAI_API_KEY="your-key" cargo run --example streaming_reply -- photo.png
//! ```

use chatwire::prelude::*;
use futures_util::StreamExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chatwire=debug")),
        )
        .init();

    let client = ChatClient::with_config(ChatClientConfig::from_env());

    let mut prompt = UserPrompt::new("What is in this picture?");
    if let Some(path) = std::env::args().nth(1) {
        match Attachment::read(&path).await {
            Ok(attachment) => prompt = prompt.with_attachment(attachment),
            // Dropping the attachment and sending the text alone
            Err(err) => eprintln!("skipping attachment: {err}"),
        }
    }

    let options = ChatOptions::new().with_system_prompt("Answer in one sentence.");
    let mut stream = client.send_chat_stream(&[], &prompt, &options).await;
    while let Some(chunk) = stream.next().await {
        print!("{}", chunk.text());
    }
    println!();
    Ok(())
}
