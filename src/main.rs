use anyhow::Context;
use clap::Parser;
use skill_intel::utils::error::ErrorSeverity;
use skill_intel::utils::{logger, validation::Validate};
use skill_intel::{
    gateway_from_config, AnalysisRequest, CliConfig, EngineConfig, LocalStorage, SkillEngine,
    SkillError, SkillTaxonomy, Storage,
};

fn exit_code(error: &SkillError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2, // 請求問題
        ErrorSeverity::High => 1,                        // 設定問題
        ErrorSeverity::Critical => 3,                    // 內部錯誤
    }
}

fn fail(context: &str, error: &SkillError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        error,
        error.category(),
        error.severity()
    );
    tracing::error!("💡 Suggestion: {}", error.recovery_suggestion());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 建議: {}", error.recovery_suggestion());
    std::process::exit(exit_code(error));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting skill-intel");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => fail(&format!("Failed to load config file '{}'", path), &e),
        },
        None => EngineConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail("Configuration validation failed", &e);
    }

    // 技能分類表必須在處理任何請求之前載入並通過驗證
    let taxonomy_path = match config.taxonomy_path() {
        Some(path) => path.to_string(),
        None => fail(
            "No taxonomy configured",
            &SkillError::MissingConfigError {
                field: "taxonomy.path (or --taxonomy)".to_string(),
            },
        ),
    };
    let taxonomy = match SkillTaxonomy::from_file(&taxonomy_path) {
        Ok(taxonomy) => taxonomy,
        Err(e) => fail(&format!("Invalid taxonomy '{}'", taxonomy_path), &e),
    };
    tracing::info!("✅ Taxonomy loaded: {} skills", taxonomy.len());

    if cli.check_only {
        println!("✅ Taxonomy '{}' is valid ({} skills)", taxonomy_path, taxonomy.len());
        return Ok(());
    }

    let request_path = match &cli.request {
        Some(path) => path.clone(),
        None => fail(
            "No analysis request given",
            &SkillError::MissingConfigError {
                field: "--request".to_string(),
            },
        ),
    };

    let storage = LocalStorage::new(".".to_string());
    let raw_request = storage
        .read_file(&request_path)
        .await
        .with_context(|| format!("reading request file '{}'", request_path))?;
    let request: AnalysisRequest = match serde_json::from_slice(&raw_request) {
        Ok(request) => request,
        Err(e) => fail("Malformed analysis request", &SkillError::SerializationError(e)),
    };

    let gateway = match gateway_from_config(&config.resources) {
        Ok(gateway) => gateway,
        Err(e) => fail("Could not set up resource lookups", &e),
    };
    let engine = SkillEngine::from_taxonomy(taxonomy, gateway, config);

    let report = match engine.analyze(&request).await {
        Ok(report) => report,
        Err(e) => fail("Analysis failed", &e),
    };

    let json = serde_json::to_string_pretty(&report).context("serializing report")?;
    match &cli.output {
        Some(path) => {
            storage
                .write_file(path, json.as_bytes())
                .await
                .with_context(|| format!("writing report to '{}'", path))?;
            tracing::info!("📁 Report saved to: {}", path);
            println!("✅ Match: {:.1}%", report.result.match_percentage);
            println!("📁 Report saved to: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
