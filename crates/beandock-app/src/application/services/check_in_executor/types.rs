use beandock_domain::check_in::{OutcomeKind, SignInOutcome};

/// Progress header opening each account's section of the run log
pub fn progress_header(index: usize, total: usize) -> String {
    format!("────── 正在处理第 {}/{} 个账号 ──────", index, total)
}

/// Check-in result for a single account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    /// 1-based position in the batch
    pub index: usize,
    pub outcome: SignInOutcome,
    /// Run log lines, header first
    pub lines: Vec<String>,
}

/// Batch check-in result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    pub success_count: usize,
    pub failed_count: usize,
    pub unconfirmed_count: usize,
    pub reports: Vec<AccountReport>,
}

impl BatchReport {
    pub fn from_reports(reports: Vec<AccountReport>) -> Self {
        let count = |kind: OutcomeKind| {
            reports
                .iter()
                .filter(|report| report.outcome.kind() == kind)
                .count()
        };

        Self {
            total: reports.len(),
            success_count: count(OutcomeKind::Succeeded),
            failed_count: count(OutcomeKind::Failed),
            unconfirmed_count: count(OutcomeKind::Unconfirmed),
            reports,
        }
    }

    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "📊 成功 {} 个，失败 {} 个",
            self.success_count, self.failed_count
        );
        if self.unconfirmed_count > 0 {
            line.push_str(&format!("，待确认 {} 个", self.unconfirmed_count));
        }
        line
    }

    /// Notification body: every account section, blank-line separated, then the summary
    pub fn body(&self) -> String {
        let mut sections: Vec<String> = self
            .reports
            .iter()
            .map(|report| report.lines.join("\n"))
            .collect();
        sections.push(self.summary_line());
        sections.join("\n\n")
    }
}
