use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::PDF_FILE_PREFIX;
use crate::enums::commands::Commands;
use crate::errors::{LeakDetectorError, LeakDetectorResult};
use crate::logger::report_printer::ReportPrinter;
use crate::logger::terminal_progress::TerminalProgress;
use crate::services::analysis_controller::AnalysisController;
use crate::services::api_client::ApiClient;
use crate::services::token_providers;
use crate::structs::config::config::Config;
use crate::structs::handoff::Handoff;
use crate::traits::analysis_backend::AnalysisBackend;

pub struct CommandRunner {
    token: Option<String>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(token: Option<String>) -> Self {
        Self {
            token,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> LeakDetectorResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => Self::init_command(),
            Commands::Validate => Self::validate_command(),
            Commands::Analyze { url, open, no_report } => self.analyze_command(&url, open, no_report).await,
            Commands::Status { analysis_id } => self.status_command(&analysis_id).await,
            Commands::Report { id, by_analysis } => self.report_command(&id, by_analysis).await,
            Commands::Reports { limit, offset } => self.reports_command(limit, offset).await,
            Commands::Analyses { limit, offset } => self.analyses_command(limit, offset).await,
            Commands::Usage => self.usage_command().await,
            Commands::Pdf { report_id, output } => self.pdf_command(&report_id, output).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command() -> LeakDetectorResult<()> {
        log::info!("🚀 Initializing leak-detector configuration...");
        let path = ConfigManager::create_sample_config()?;
        println!("✅ Configuration written to {}", path.display());
        println!("🔧 Run 'leak-detector validate' to check it.");
        Ok(())
    }

    fn validate_command() -> LeakDetectorResult<()> {
        let config = ConfigManager::load()?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                println!("✅ Configuration is valid");
                println!("   API:     {}", config.api.base_url);
                println!("   Polling: every {} ms, up to {} attempts", config.polling.interval_ms, config.polling.max_attempts);
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    println!("❌ {}", error);
                }
                Err(LeakDetectorError::config_error(
                    &format!("{} problem(s) found", errors.len()),
                    None,
                    Some("Fix the fields above and run 'leak-detector validate' again"),
                ))
            }
        }
    }

    fn load_config() -> LeakDetectorResult<Config> {
        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config).map_err(|errors| {
            LeakDetectorError::config_error(&errors.join("; "), None, Some("Run 'leak-detector validate' for details"))
        })?;
        Ok(config)
    }

    fn client(&self, config: &Config) -> LeakDetectorResult<ApiClient> {
        let token_provider = token_providers::from_config(&config.auth, self.token.clone());
        ApiClient::from_config(&config.api, token_provider)
    }

    async fn analyze_command(&self, url: &str, open: bool, no_report: bool) -> LeakDetectorResult<()> {
        let config = Self::load_config()?;
        let client = Arc::new(self.client(&config)?);
        let progress = Arc::new(TerminalProgress::new());

        let cancel = CancellationToken::new();
        let ctrl_c = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    log::info!("🛑 Interrupted, stopping analysis");
                    cancel.cancel();
                }
            }
        });

        let backend: Arc<dyn AnalysisBackend> = client.clone();
        let mut controller = AnalysisController::new(backend, progress.clone(), config.polling.clone());

        progress.start();
        let result = controller.run(url, &cancel).await;
        ctrl_c.abort();

        let handoff = match result {
            Ok(handoff) => {
                progress.finish(&format!("Analysis complete! Report {}", handoff.report_id)).await;
                handoff
            }
            Err(e) => {
                progress.abandon().await;
                return Err(e);
            }
        };

        tokio::time::sleep(config.polling.navigation_grace()).await;
        Self::show_handoff(&client, &config, &handoff, open, no_report).await
    }

    async fn show_handoff(client: &ApiClient, config: &Config, handoff: &Handoff, open: bool, no_report: bool) -> LeakDetectorResult<()> {
        if open || config.output.open_browser {
            let link = format!("{}{}", config.api.app_url.trim_end_matches('/'), handoff.report_path());
            if let Err(e) = webbrowser::open(&link) {
                log::warn!("⚠️ Could not open browser for {}: {}", link, e);
            }
        }

        if no_report {
            println!("{}", handoff.report_id);
            return Ok(());
        }

        let report = client.get_report(&handoff.report_id).await?;
        ReportPrinter::print_report(&report, config.output.show_issues);
        Ok(())
    }

    async fn status_command(&self, analysis_id: &str) -> LeakDetectorResult<()> {
        let config = Self::load_config()?;
        let analysis = self.client(&config)?.get_analysis(analysis_id).await?;
        ReportPrinter::print_analysis(&analysis);
        Ok(())
    }

    async fn report_command(&self, id: &str, by_analysis: bool) -> LeakDetectorResult<()> {
        let config = Self::load_config()?;
        let client = self.client(&config)?;
        let report = if by_analysis {
            client.get_full_report_by_analysis(id).await?
        } else {
            client.get_report(id).await?
        };
        ReportPrinter::print_report(&report, config.output.show_issues);
        Ok(())
    }

    async fn reports_command(&self, limit: u32, offset: u32) -> LeakDetectorResult<()> {
        let config = Self::load_config()?;
        let page = self.client(&config)?.list_reports(limit, offset).await?;
        ReportPrinter::print_report_list(&page);
        Ok(())
    }

    async fn analyses_command(&self, limit: u32, offset: u32) -> LeakDetectorResult<()> {
        let config = Self::load_config()?;
        let page = self.client(&config)?.list_analyses(limit, offset).await?;
        ReportPrinter::print_analysis_list(&page);
        Ok(())
    }

    async fn usage_command(&self) -> LeakDetectorResult<()> {
        let config = Self::load_config()?;
        let status = self.client(&config)?.billing_status().await?;
        ReportPrinter::print_billing_status(&status);
        Ok(())
    }

    async fn pdf_command(&self, report_id: &str, output: Option<PathBuf>) -> LeakDetectorResult<()> {
        let config = Self::load_config()?;
        let bytes = self.client(&config)?.download_report_pdf(report_id).await?;
        let path = output.unwrap_or_else(|| PathBuf::from(Self::pdf_file_name(report_id)));
        tokio::fs::write(&path, &bytes).await?;
        println!("📄 Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    pub fn pdf_file_name(report_id: &str) -> String {
        let short: String = report_id.chars().take(8).collect();
        format!("{}{}.pdf", PDF_FILE_PREFIX, short)
    }
}
