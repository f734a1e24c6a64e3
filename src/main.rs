use clap::Parser;
use tarot_reader::config::cli::{MISSING_QUESTION_MESSAGE, USAGE_EXAMPLE};
use tarot_reader::utils::error::ErrorSeverity;
use tarot_reader::utils::{logger, validation::Validate};
use tarot_reader::{BedrockClient, CliConfig, Presenter, TarotEngine, TarotError};

fn exit_with(e: &TarotError) -> ! {
    tracing::error!(
        "❌ Tarot reading failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 遠端服務錯誤
        ErrorSeverity::High => 1,   // 設定或輸入錯誤
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    let Some(question) = cli.question() else {
        eprintln!("{}", MISSING_QUESTION_MESSAGE);
        eprintln!("{}", USAGE_EXAMPLE);
        std::process::exit(1);
    };

    tracing::info!("Starting tarot-reader");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let client = match BedrockClient::new(config.bedrock_options()) {
        Ok(client) => client,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Using Bedrock endpoint {}", client.options().endpoint);

    let engine = TarotEngine::new(client, config);
    let mut presenter = Presenter::new(std::io::stdout());

    if let Err(e) = engine.run(&question, &mut presenter).await {
        exit_with(&e);
    }

    Ok(())
}
