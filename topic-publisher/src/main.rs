use clap::Parser;
use topic_publisher::publisher::{build_request, PublishNotification, SnsPublisher};
use topic_publisher::PublisherConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Post a message to a pub/sub topic. Assumes your credentials are in
/// the usual place, ~/.aws/credentials.
#[derive(Parser, Debug)]
#[command(name = "snspost")]
struct Cli {
    /// Topic ARN
    arn: String,
    /// Message delivered on the email channel
    msg: String,
    /// Message subject
    sub: String,
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
    let config = PublisherConfig::from_env();

    let sdk_config = aws_session::load(&config.session()).await;
    let publisher = SnsPublisher::new(&sdk_config);

    let request = build_request(&cli.arn, &cli.msg, &cli.sub)?;
    let receipt = publisher.publish(&request).await?;

    info!(message_id = ?receipt.message_id, "notification published");
    Ok(())
}
