use anyhow::anyhow;
use clap::Parser;
use image_labeler::{handler, InvocationContext, LabelerConfig};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pass an object-store image file (bucket_name/key) to the hosted
/// labeling service and print the list of labels it returns.
#[derive(Parser, Debug)]
#[command(name = "imgproc")]
struct Cli {
    /// Bucket/folder name
    folder: String,
    /// Key prefix/directory inside the bucket
    dir: String,
    /// Object file name
    fname: String,
    /// Credential profile from ~/.aws/credentials
    profile: String,
    /// Bucket region
    #[arg(long, default_value = aws_session::DEFAULT_REGION)]
    region: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = LabelerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;

    // Synthesize the trigger shape the handler expects; the event-source
    // marker tells it the invocation came from the command line.
    let mut event = json!({
        "eventSource": event_schema::CLI_EVENT_SOURCE,
        "name": cli.folder,
        "key": format!("{}/{}", cli.dir, cli.fname),
        "profile": cli.profile,
    });
    if cli.region != aws_session::DEFAULT_REGION {
        event["region"] = json!(cli.region);
    }

    handler(Some(&event), InvocationContext::Direct, &config).await?;
    Ok(())
}
