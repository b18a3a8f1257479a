//! Markdown summary renderer.

use quizlens_core::report::AnalyticsReport;

/// Format a report as a compact Markdown summary.
pub fn to_markdown(report: &AnalyticsReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# quizlens report — {}\n\n", report.dataset.label));
    md.push_str(&format!(
        "**Summary:** {} rows, {} users, {} questions | computed {}\n\n",
        report.dataset.row_count,
        report.dataset.user_count,
        report.dataset.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("## Overall Performance\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!(
        "| Mean Score | {:.2} |\n",
        report.overall.mean_score
    ));
    md.push_str(&format!(
        "| Accuracy Rate | {:.2}% |\n",
        report.overall.accuracy_rate
    ));
    md.push_str(&format!(
        "| Users Got All Correct | {} |\n",
        report.overall.users_all_correct
    ));
    md.push_str(&format!(
        "| Highest Scoring Question | {} |\n",
        report.overall.best_question.question_no
    ));
    md.push_str(&format!(
        "| Lowest Scoring Question | {} |\n",
        report.overall.worst_question.question_no
    ));
    md.push_str(&format!(
        "| Users Completed All | {} |\n",
        report.attempts.users_completed_all
    ));
    md.push_str(&format!(
        "| Correct On First Attempt | {} |\n",
        report.attempts.first_attempt_correct_users
    ));
    md.push_str(&format!(
        "| Users With >1 Attempt | {} |\n",
        report.attempts.retry_users
    ));
    md.push_str(&format!(
        "| All Wrong Users | {} |\n",
        report.attempts.all_wrong_users
    ));
    md.push_str(&format!(
        "| Repeated Wrong Answers | {} |\n\n",
        report.mistakes.repeated_wrong_patterns
    ));

    if !report.questions.most_attempted.is_empty() {
        md.push_str("## Most Attempted Questions\n\n");
        md.push_str("| Question | Rows |\n");
        md.push_str("|----------|------|\n");
        for q in &report.questions.most_attempted {
            md.push_str(&format!("| {} | {} |\n", q.question_no, q.count));
        }
        md.push('\n');
    }

    if !report.mistakes.top_wrong_options.is_empty() {
        md.push_str("## Top Wrong Options\n\n");
        md.push_str("| Option | Count |\n");
        md.push_str("|--------|-------|\n");
        for option in &report.mistakes.top_wrong_options {
            md.push_str(&format!(
                "| {} | {} |\n",
                option.selected_option, option.count
            ));
        }
        md.push('\n');
    }

    md.push_str("## Score Ranges\n\n");
    md.push_str("| Range | Count |\n");
    md.push_str("|-------|-------|\n");
    for range in &report.trends.score_ranges {
        md.push_str(&format!("| {} | {} |\n", range.label, range.count));
    }
    md.push('\n');

    if !report.warnings.is_empty() {
        md.push_str(&format!(
            "## Data Quality Warnings ({})\n\n",
            report.warnings.len()
        ));
        for warning in &report.warnings {
            match warning.row {
                Some(row) => md.push_str(&format!("- row {row}: {}\n", warning.message)),
                None => md.push_str(&format!("- {}\n", warning.message)),
            }
        }
    }

    md
}
