use crate::cli::ClassifyArgs;
use crate::error::Result;
use ewcl::engine::config::RiskThresholds;
use std::fmt::Write;

pub fn run(args: ClassifyArgs, risk: &RiskThresholds) -> Result<()> {
    print!("{}", format_levels(&args.scores, risk));
    Ok(())
}

fn format_levels(scores: &[f64], risk: &RiskThresholds) -> String {
    let mut out = String::new();
    for &score in scores {
        let _ = writeln!(out, "{}\t{}", score, risk.classify(score));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_score_gets_a_level() {
        let text = format_levels(&[0.1, 0.5, 0.9], &RiskThresholds::default());
        assert_eq!(text, "0.1\tLow\n0.5\tMedium\n0.9\tHigh\n");
    }

    #[test]
    fn configured_cut_points_are_used() {
        let risk = RiskThresholds {
            low: 0.6,
            medium: 0.8,
        };
        assert_eq!(format_levels(&[0.5], &risk), "0.5\tLow\n");
    }
}
