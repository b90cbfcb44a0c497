use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_LIST_LIMIT;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Submit a landing page and wait for its report
    Analyze {
        url: String,
        /// Open the finished report in the web app
        #[clap(long)]
        open: bool,
        /// Stop after printing the report id
        #[clap(long)]
        no_report: bool,
    },
    /// Show the current state of an analysis
    Status {
        analysis_id: String,
    },
    /// Print a report
    Report {
        id: String,
        /// Treat the id as an analysis id
        #[clap(long)]
        by_analysis: bool,
    },
    /// List reports
    Reports {
        #[clap(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
        #[clap(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// List analyses
    Analyses {
        #[clap(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
        #[clap(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// Show plan and monthly usage
    Usage,
    /// Download a report as PDF (paid plans)
    Pdf {
        report_id: String,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}
