use crate::structs::analysis_result::AnalysisResult;

pub struct AnalysisLogger;

impl AnalysisLogger {
    pub fn print_analysis_report(result: &AnalysisResult) {
        println!("🔍 ISSUE ANALYSIS REPORT");
        println!("========================");

        if let Some(summary) = result.summary() {
            println!("{}\n", summary);
        }

        if let Some(issue_type) = result.issue_type() {
            println!("  {} Type: {}", issue_type.emoji(), issue_type.as_str());
        }
        if let Some(priority) = result.priority_score() {
            println!("  🎯 Priority: {}", priority);
        }

        let labels = result.suggested_labels();
        if !labels.is_empty() {
            println!("  🏷️ Labels: {}", labels.join(", "));
        }

        if let Some(impact) = result.potential_impact() {
            println!("  📈 Impact: {}", impact);
        }

        println!("\n{}", Self::render_json(result));
    }

    pub fn render_json(result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| result.as_value().to_string())
    }
}
