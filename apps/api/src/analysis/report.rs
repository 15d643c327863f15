//! Plain-text report offered for download after an analysis.

use crate::analysis::models::AnalysisResult;

pub const REPORT_FILE_NAME: &str = "resume_analysis_report.txt";
pub const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const BULLET: &str = "• ";

/// Renders the report. Pure: the same result always yields the same bytes.
pub fn format_report(result: &AnalysisResult) -> String {
    format!(
        "AI RESUME OPTIMIZER - ANALYSIS REPORT
=================================

COMPATIBILITY SCORE
------------------
Overall Match: {score}%

MISSING KEYWORDS
--------------
{keywords}

SKILL MISMATCHES
---------------
{mismatches}

TONE IMPROVEMENTS
---------------
{tone}

SUGGESTIONS FOR IMPROVEMENT
------------------------
{suggestions}
",
        score = result.compatibility_score,
        keywords = bullets(&result.missing_keywords),
        mismatches = bullets(&result.skill_mismatches),
        tone = bullets(&result.tone_improvements),
        suggestions = bullets(&result.suggestions),
    )
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{BULLET}{item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Content-Disposition` value that makes browsers save the report.
pub fn attachment_disposition() -> String {
    format!("attachment; filename=\"{REPORT_FILE_NAME}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::coercion::coerce_response;

    fn sample() -> AnalysisResult {
        coerce_response(
            r#"{"missing_keywords":["Python"],"skill_mismatches":[],"tone_improvements":[],"suggestions":["Add metrics"],"compatibility_score":72}"#,
        )
        .unwrap()
    }

    /// Lines between a section heading's underline and the next blank line.
    fn section<'a>(report: &'a str, heading: &str) -> Vec<&'a str> {
        report
            .lines()
            .skip_while(|l| *l != heading)
            .skip(2)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_scenario_report_contents() {
        let report = format_report(&sample());
        assert!(report.contains("Overall Match: 72%"));
        assert_eq!(section(&report, "MISSING KEYWORDS"), vec!["• Python"]);
        assert!(section(&report, "SKILL MISMATCHES").is_empty());
        assert!(section(&report, "TONE IMPROVEMENTS").is_empty());
        assert_eq!(section(&report, "SUGGESTIONS FOR IMPROVEMENT"), vec!["• Add metrics"]);
    }

    #[test]
    fn test_report_is_deterministic() {
        let result = sample();
        assert_eq!(format_report(&result), format_report(&result));
    }

    #[test]
    fn test_report_exact_layout() {
        let result = AnalysisResult {
            missing_keywords: vec!["Go".into(), "gRPC".into()],
            skill_mismatches: vec!["No cloud experience".into()],
            tone_improvements: vec!["Too passive".into()],
            suggestions: vec![],
            compatibility_score: 41,
        };
        let expected = "AI RESUME OPTIMIZER - ANALYSIS REPORT
=================================

COMPATIBILITY SCORE
------------------
Overall Match: 41%

MISSING KEYWORDS
--------------
• Go
• gRPC

SKILL MISMATCHES
---------------
• No cloud experience

TONE IMPROVEMENTS
---------------
• Too passive

SUGGESTIONS FOR IMPROVEMENT
------------------------

";
        assert_eq!(format_report(&result), expected);
    }

    #[test]
    fn test_sections_appear_in_order() {
        let report = format_report(&sample());
        let positions: Vec<usize> = [
            "COMPATIBILITY SCORE",
            "MISSING KEYWORDS",
            "SKILL MISMATCHES",
            "TONE IMPROVEMENTS",
            "SUGGESTIONS FOR IMPROVEMENT",
        ]
        .iter()
        .map(|h| report.find(h).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_attachment_disposition_names_file() {
        assert_eq!(
            attachment_disposition(),
            "attachment; filename=\"resume_analysis_report.txt\""
        );
    }
}
