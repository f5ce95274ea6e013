use livenews_bot::{Config, Dispatcher, TelegramBot, XueqiuClient};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let client = XueqiuClient::builder().build()?;
    let bot = TelegramBot::builder(&config.bot_token).build()?;

    let commands = bot.clone();
    tokio::spawn(async move { commands.run_commands().await });

    info!(
        channel = %config.channel_id,
        interval_secs = config.poll_interval.as_secs(),
        "started bot"
    );

    Dispatcher::new(client, bot, config.channel_id, config.poll_interval)
        .run()
        .await;

    Ok(())
}
