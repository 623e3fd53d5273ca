//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::{ModelVerdict, VlambdaResult};

/// Format a result for human-readable terminal output.
///
/// Lists the population estimate, the tolerance band and one line per
/// exposure model, marking models that leave the band.
pub fn format_result(result: &VlambdaResult) -> String {
    let mut output = String::new();
    let verdicts = result.verdicts();
    let n_fair = verdicts.iter().filter(|v| v.within_tolerance).count();

    // Header with pass/fail indicator
    let header = if n_fair == verdicts.len() {
        format!("{} {}", "\u{2713}".green().bold(), "WITHIN TOLERANCE".green().bold())
    } else {
        format!(
            "{} {}",
            "\u{26A0}".yellow().bold(),
            "EXPOSURE OUTSIDE TOLERANCE".red().bold()
        )
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let p_hat = format!("Population estimate: {}", format_vector(result.p_hat.iter()));
    output.push_str(&format_box_line(&p_hat));

    let bounds = result.delta_max.to_vector(result.n_classes());
    let delta = format!("Tolerance (delta_max): {}", format_vector(bounds.iter()));
    output.push_str(&format_box_line(&delta));

    let models = format!(
        "Models within tolerance: {}/{}",
        n_fair,
        verdicts.len()
    );
    output.push_str(&format_box_line(&models));

    output.push_str(&format_box_separator());

    for verdict in &verdicts {
        output.push_str(&format_box_line(&format_verdict(verdict)));
    }

    output.push_str(&format_box_bottom());
    output
}

/// Format a single model verdict for display.
fn format_verdict(verdict: &ModelVerdict) -> String {
    let label = match verdict.lambda {
        Some(lambda) => format!("lambda={:.2}", lambda),
        None => format!("model {}", verdict.model),
    };
    let excess = match verdict.worst_class {
        Some(class) => format!("max excess {:+.4} (class {})", verdict.max_excess, class),
        None => "no classes".to_string(),
    };
    let mark = if verdict.within_tolerance {
        "\u{2713}".green().to_string()
    } else {
        "\u{2717}".red().to_string()
    };
    format!("{} {:<12} {}", mark, label, excess)
}

fn format_vector<'a>(values: impl Iterator<Item = &'a f64>) -> String {
    let parts: Vec<String> = values.map(|v| format!("{:.4}", v)).collect();
    format!("[{}]", parts.join(", "))
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = (BOX_WIDTH - 2).saturating_sub(visible_len);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Tolerance;
    use crate::types::{DistanceMatrix, Exposure, Proportions};

    fn make_result(first_rank_bias: f64) -> VlambdaResult {
        VlambdaResult {
            lambda_values: Some(vec![0.02, 0.04]),
            distance: DistanceMatrix::from_row_slice(
                2,
                2,
                &[0.01, -0.01, first_rank_bias, -first_rank_bias],
            ),
            delta_max: Tolerance::from(vec![0.25, 0.25]),
            p_hat: Proportions::from_vec(vec![0.5, 0.5]),
            exposure: Exposure::from_row_slice(
                2,
                2,
                &[0.51, 0.49, 0.5 + first_rank_bias, 0.5 - first_rank_bias],
            ),
        }
    }

    #[test]
    fn test_format_fair_result() {
        let output = format_result(&make_result(0.1));
        assert!(output.contains("WITHIN TOLERANCE"));
        assert!(output.contains("Models within tolerance: 2/2"));
        assert!(output.contains("lambda=0.04"));
    }

    #[test]
    fn test_format_unfair_result() {
        let output = format_result(&make_result(0.4));
        assert!(output.contains("EXPOSURE OUTSIDE TOLERANCE"));
        assert!(output.contains("Models within tolerance: 1/2"));
        assert!(output.contains("+0.1500 (class 0)"));
    }

    #[test]
    fn test_supplied_weights_are_labelled_by_index() {
        let mut result = make_result(0.1);
        result.lambda_values = None;
        let output = format_result(&result);
        assert!(output.contains("model 1"));
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
