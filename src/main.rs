use certlot::core::export;
use certlot::domain::ports::{ConfigProvider, Storage};
use certlot::utils::{input, logger, validation::Validate};
use certlot::{BatchRunner, CatalogExtractor, CliConfig, LocalStorage};
use clap::Parser;
use std::path::Path;

const REPORT_FILE: &str = "certificados.csv";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting certlot");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Erro de configuração: {}", e);
        std::process::exit(1);
    }

    let codes = input::collect_codes(&config.codes, config.codes_file.as_deref())?;
    if codes.is_empty() {
        eprintln!("Nenhum código informado; use --codes ou --codes-file");
        std::process::exit(1);
    }
    tracing::info!("Consulting {} product code(s)", codes.len());

    let output_path = config.output_path().to_string();
    let storage = LocalStorage::new(output_path.clone());
    let extractor = CatalogExtractor::new(config);
    let runner = BatchRunner::new(extractor);

    let report = runner.run(&codes).await;

    println!(
        "Consulta concluída: {} registro(s), {} falha(s)",
        report.records.len(),
        report.failures.len()
    );

    if !report.records.is_empty() {
        let table = export::render_csv(&report.records)?;
        storage.write_file(REPORT_FILE, &table).await?;
        println!(
            "Tabela salva em: {}",
            Path::new(&output_path).join(REPORT_FILE).display()
        );
    }

    for failure in &report.failures {
        eprintln!("Falha ao consultar {}: {}", failure.code, failure.error);
    }

    if report.records.is_empty() && !report.failures.is_empty() {
        std::process::exit(2);
    }

    Ok(())
}
