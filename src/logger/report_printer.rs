use std::fmt::Write;
use chrono::{DateTime, Utc};
use terminal_size::{terminal_size, Width};
use crate::enums::analysis_status::AnalysisStatus;
use crate::enums::issue_severity::IssueSeverity;
use crate::structs::analysis::Analysis;
use crate::structs::api_response::Page;
use crate::structs::billing_status::BillingStatus;
use crate::structs::report::{Report, ReportListItem};

const DEFAULT_WIDTH: usize = 60;
const MAX_WIDTH: usize = 100;
const SUMMARY_PREVIEW_CHARS: usize = 70;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Quality band of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Good
        } else if score >= 60 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Good => GREEN,
            Self::Fair => YELLOW,
            Self::Poor => RED,
        }
    }
}

pub struct ReportPrinter;

impl ReportPrinter {
    fn width() -> usize {
        terminal_size().map_or(DEFAULT_WIDTH, |(Width(w), _)| usize::from(w).min(MAX_WIDTH))
    }

    fn colored_score(score: u8) -> String {
        format!("{}{:>3}{}", ScoreBand::from_score(score).color(), score, RESET)
    }

    fn date(value: Option<&DateTime<Utc>>) -> String {
        value.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d %H:%M").to_string())
    }

    fn preview(text: &str) -> String {
        if text.chars().count() <= SUMMARY_PREVIEW_CHARS {
            return text.to_string();
        }
        let cut: String = text.chars().take(SUMMARY_PREVIEW_CHARS - 1).collect();
        format!("{}…", cut)
    }

    pub fn render_report(report: &Report, show_issues: bool, width: usize) -> String {
        let mut out = String::new();
        let rule = "━".repeat(width);

        let _ = writeln!(out, "📊 LANDING PAGE REPORT");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "URL:      {}", report.url);
        let _ = writeln!(out, "Analyzed: {}", Self::date(report.created_at.as_ref()));
        let _ = writeln!(out, "Score:    {}/100", Self::colored_score(report.score));
        let _ = writeln!(out, "\n{}\n", report.summary);
        let _ = writeln!(
            out,
            "🔴 {} critical issues   🟡 {} warnings",
            report.issues_with_severity(IssueSeverity::Critical),
            report.issues_with_severity(IssueSeverity::Warning)
        );

        if let Some(metadata) = &report.page_metadata {
            let mut facts = Vec::new();
            if let Some(title) = &metadata.title {
                facts.push(format!("title \"{}\"", title));
            }
            if let Some(ms) = metadata.load_time_ms {
                facts.push(format!("{} ms load", ms));
            }
            if let Some(words) = metadata.word_count {
                facts.push(format!("{} words", words));
            }
            if let Some(images) = metadata.image_count {
                facts.push(format!("{} images", images));
            }
            if !facts.is_empty() {
                let _ = writeln!(out, "Page:     {}", facts.join(", "));
            }
        }

        if let Some(screenshot) = &report.screenshot_url {
            let _ = writeln!(out, "Screenshot: {}", screenshot);
        }

        let _ = writeln!(out, "\n📈 CATEGORY SCORES");
        let _ = writeln!(out, "{}", rule);
        for category in &report.categories {
            let _ = writeln!(out, "{}  {}", Self::colored_score(category.score), category.display_label());
        }

        if show_issues {
            for category in report.categories.iter().filter(|c| !c.issues.is_empty()) {
                let _ = writeln!(out, "\n🔧 {} ({} issues)", category.display_label(), category.issues.len());
                let mut issues: Vec<_> = category.issues.iter().collect();
                issues.sort_by_key(|i| i.severity);
                for issue in issues {
                    let _ = writeln!(out, "  {} [{}] {}", issue.severity.emoji(), issue.severity.name(), issue.title);
                    if !issue.description.is_empty() {
                        let _ = writeln!(out, "     {}", issue.description);
                    }
                    if !issue.recommendation.is_empty() {
                        let _ = writeln!(out, "     💡 {}", issue.recommendation);
                    }
                }
            }
        }

        out
    }

    pub fn render_report_list(page: &Page<ReportListItem>) -> String {
        let mut out = String::new();
        if page.items.is_empty() {
            let _ = writeln!(out, "No reports yet. Run 'leak-detector analyze <url>' to create one.");
            return out;
        }

        for item in &page.items {
            let _ = writeln!(
                out,
                "{}  {}  {}  {}",
                item.id,
                Self::colored_score(item.score),
                Self::date(item.created_at.as_ref()),
                item.url
            );
            if !item.summary.is_empty() {
                let _ = writeln!(out, "      {}", Self::preview(&item.summary));
            }
        }
        Self::render_pagination(&mut out, page);
        out
    }

    pub fn render_analysis(analysis: &Analysis) -> String {
        let mut out = String::new();
        let icon = match analysis.status {
            AnalysisStatus::Completed => "✅",
            AnalysisStatus::Failed => "❌",
            AnalysisStatus::Canceled => "🚫",
            AnalysisStatus::Pending | AnalysisStatus::Processing => "⏳",
        };
        let _ = writeln!(out, "{} {}  {}  {}", icon, analysis.id, analysis.status, analysis.url);
        let _ = writeln!(
            out,
            "   created {}  started {}  completed {}",
            Self::date(analysis.created_at.as_ref()),
            Self::date(analysis.started_at.as_ref()),
            Self::date(analysis.completed_at.as_ref())
        );
        if let Some(message) = &analysis.error_message {
            let code = analysis.error_code.as_deref().unwrap_or("ERROR");
            let _ = writeln!(out, "   {}: {}", code, message);
        }
        out
    }

    pub fn render_analysis_list(page: &Page<Analysis>) -> String {
        let mut out = String::new();
        if page.items.is_empty() {
            let _ = writeln!(out, "No analyses yet.");
            return out;
        }
        for analysis in &page.items {
            out.push_str(&Self::render_analysis(analysis));
        }
        Self::render_pagination(&mut out, page);
        out
    }

    pub fn render_billing_status(status: &BillingStatus) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "💳 Plan: {}", status.plan);
        let _ = writeln!(
            out,
            "   Analyses: {}/{} used ({} remaining)",
            status.analyses_used,
            status.analyses_limit,
            status.remaining()
        );
        if let Some(reset) = &status.analyses_reset_at {
            let _ = writeln!(out, "   Resets:   {}", reset.format("%Y-%m-%d"));
        }
        if let Some(subscription) = &status.subscription {
            let _ = writeln!(
                out,
                "   Subscription: {} (period ends {})",
                subscription.status,
                Self::date(subscription.current_period_end.as_ref())
            );
        }
        if !status.plan.allows_pdf_export() {
            let _ = writeln!(out, "💡 Upgrade to Pro to export PDF reports");
        }
        out
    }

    fn render_pagination<T>(out: &mut String, page: &Page<T>) {
        if let Some(meta) = page.meta {
            let _ = writeln!(
                out,
                "\nShowing {}-{} of {}",
                meta.offset + 1,
                meta.offset + u32::try_from(page.items.len()).unwrap_or(u32::MAX),
                meta.total
            );
            if meta.has_more() {
                let _ = writeln!(out, "Use --offset {} for more", meta.offset + meta.limit);
            }
        }
    }

    pub fn print_report(report: &Report, show_issues: bool) {
        print!("{}", Self::render_report(report, show_issues, Self::width()));
    }

    pub fn print_report_list(page: &Page<ReportListItem>) {
        print!("{}", Self::render_report_list(page));
    }

    pub fn print_analysis(analysis: &Analysis) {
        print!("{}", Self::render_analysis(analysis));
    }

    pub fn print_analysis_list(page: &Page<Analysis>) {
        print!("{}", Self::render_analysis_list(page));
    }

    pub fn print_billing_status(status: &BillingStatus) {
        print!("{}", Self::render_billing_status(status));
    }
}
