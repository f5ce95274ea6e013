use livenews_bot::{BotError, Config};

// One test body: the env mutations below must not race another test.
#[test]
fn config_resolves_and_validates_the_environment() {
    unsafe {
        std::env::set_var("BOT_TOKEN", "123:abc");
        std::env::set_var("CHANNEL_ID", "market_news");
        std::env::remove_var("POLL_INTERVAL_SECS");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.bot_token, "123:abc");
    assert_eq!(config.channel_id, "@market_news");
    assert_eq!(config.poll_interval.as_secs(), 120);

    unsafe {
        std::env::set_var("CHANNEL_ID", "@already_prefixed");
        std::env::set_var("POLL_INTERVAL_SECS", "60");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.channel_id, "@already_prefixed");
    assert_eq!(config.poll_interval.as_secs(), 60);

    unsafe {
        std::env::set_var("POLL_INTERVAL_SECS", "not-a-number");
    }
    assert!(matches!(Config::from_env(), Err(BotError::Config(_))));

    unsafe {
        std::env::remove_var("POLL_INTERVAL_SECS");
        std::env::remove_var("BOT_TOKEN");
    }
    assert!(matches!(Config::from_env(), Err(BotError::Config(_))));
}
