// Colored terminal output for moderation results.
//
// main.rs delegates all formatting here: the verdict table for `check`
// and the single-score detail for `score`.

use colored::Colorize;

use crate::fragment::Fragment;
use crate::moderation::rate::ModerationRate;
use crate::moderation::verdict::Verdict;

/// Display fragments next to their verdicts.
pub fn display_verdicts(fragments: &[Fragment], verdicts: &[Verdict], rate: f64) {
    if fragments.is_empty() {
        println!("No texts to moderate.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Moderation ({} texts, rate {:.2}) ===",
            fragments.len(),
            rate
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:<10}  {}",
        "#".dimmed(),
        "Verdict".dimmed(),
        "Text".dimmed(),
    );
    println!("  {}", "-".repeat(60).dimmed());

    for (fragment, verdict) in fragments.iter().zip(verdicts) {
        println!(
            "  {:>4}  {:<10}  {}",
            fragment.index(),
            verdict_label(verdict.acceptable),
            super::truncate_chars(&verdict.text, 80),
        );
    }

    println!();

    let rejected = verdicts.iter().filter(|v| !v.acceptable).count();
    if rejected > 0 {
        println!("  {} {} rejected texts", "!".red().bold(), rejected);
    } else {
        println!("  {} all texts acceptable", "ok".green());
    }
}

/// Display one text's raw score and the resulting decision.
pub fn display_score(text: &str, score: f64, rate: &ModerationRate) {
    println!("\n{}", "=== Score ===".bold());
    println!("  Text: {}", super::truncate_chars(text, 120).dimmed());
    println!("  Score: {:.4}  (rate {:.2})", score, rate.get());
    println!("  Verdict: {}", verdict_label(rate.accepts(score)));
}

fn verdict_label(acceptable: bool) -> colored::ColoredString {
    if acceptable {
        "accepted".green()
    } else {
        "rejected".red().bold()
    }
}
