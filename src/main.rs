use clap::Parser;
use repack::utils::error::{ErrorSeverity, ReorgError};
use repack::utils::{logger, report, validation::Validate};
use repack::{CliConfig, DomainMapping, ReorgEngine};

fn fail(e: &ReorgError) -> ! {
    tracing::error!("❌ Reorganization failed: {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting repack");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let mapping = match &config.mapping {
        Some(path) => DomainMapping::from_file(path),
        None => DomainMapping::embedded(),
    };
    let mapping = match mapping {
        Ok(mapping) => mapping,
        Err(e) => {
            tracing::error!("Failed to load domain mapping: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let json_output = config.json;
    let engine = ReorgEngine::new(config, mapping);

    match engine.run() {
        Ok(outcome) => {
            // The summary always prints, including after a mid-run failure
            if json_output {
                if let Err(e) = report::print_summary_json(&outcome.summary) {
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            } else {
                report::print_summary(&outcome.summary);
            }

            if let Some(e) = &outcome.failure {
                fail(e);
            }

            // Unresolved classes leave the plan incomplete
            if outcome.summary.is_clean() {
                tracing::info!("✅ Reorganization completed successfully");
            } else {
                tracing::warn!(
                    "⚠️ Completed with {} unresolved classes",
                    outcome.summary.unresolved.len()
                );
                std::process::exit(1);
            }
        }
        Err(e) => fail(&e),
    }
}
