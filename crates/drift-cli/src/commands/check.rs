//! Check commands: detect drift in known config files and optionally update them

use std::path::Path;

use colored::Colorize;

use drift_core::{CONFIG_DIR, Confirm, Decline, LineConfirm, ReconcileOutcome, Reconciler};
use drift_fs::NormalizedPath;

use crate::cli::ApplyArgs;
use crate::commands::defaults::unknown_file;
use crate::defaults::{builtin_entries, builtin_entry};
use crate::error::Result;

/// Run the check command over every known file in `<home>/config`.
pub fn run_check(home: &Path, apply: &ApplyArgs) -> Result<()> {
    println!(
        "{} Checking config files in {}...",
        "=>".blue().bold(),
        home.join(CONFIG_DIR).display().to_string().cyan()
    );

    let entries = builtin_entries();
    let mut reconciler = Reconciler::new(confirmer(apply), std::io::stdout());
    let outcomes = reconciler.check_config_files(&NormalizedPath::new(home), &entries, apply.yes)?;

    print_summary(&outcomes, apply);
    Ok(())
}

/// Run the check command for one known file in `dir`.
pub fn run_check_file(file_name: &str, dir: &Path, apply: &ApplyArgs) -> Result<()> {
    let entry = builtin_entry(file_name).ok_or_else(|| unknown_file(file_name))?;

    let mut reconciler = Reconciler::new(confirmer(apply), std::io::stdout());
    let outcome = reconciler.reconcile_entry(&NormalizedPath::new(dir), &entry, apply.yes)?;

    print_summary(std::slice::from_ref(&outcome), apply);
    Ok(())
}

fn confirmer(apply: &ApplyArgs) -> Box<dyn Confirm> {
    if apply.dry_run {
        Box::new(Decline)
    } else {
        Box::new(LineConfirm::stdio())
    }
}

fn print_summary(outcomes: &[ReconcileOutcome], apply: &ApplyArgs) {
    for outcome in outcomes.iter().filter(|o| !o.drift) {
        println!("{} {} is up to date.", "OK".green().bold(), outcome.file_name);
    }

    let pending = outcomes.iter().filter(|o| o.drift && !o.rewritten).count();
    if pending > 0 && apply.dry_run {
        println!();
        println!("Run {} to update.", "cfgdrift check --yes".cyan());
    }
}
