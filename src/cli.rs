use clap::Parser;
use std::path::PathBuf;

use cloudvm::automation::vm::providers::OsFlagMode;
use cloudvm::pipeline::{PlanFormat, RunOptions};
use cloudvm::utils::DocumentationPolicy;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "cloudvm")]
#[command(override_usage = "cloudvm [OPTIONS] Azure.conf GCP.conf")]
pub struct Cli {
    /// Azure VM definitions; must be given as `Azure.conf`
    pub azure_config: PathBuf,

    /// GCP VM definitions; must be given as `GCP.conf`
    pub gcp_config: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    /// Validate and print the commands without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(long, value_enum, default_value_t = PlanFormat::Text)]
    pub format: PlanFormat,

    /// Directory for the VM documentation files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Treat Azure records without `os` as non-Windows instead of inheriting
    /// the previous record's value
    #[arg(long)]
    pub reset_os_flag: bool,

    /// Write the actual command outcome into the documentation instead of
    /// "VM Running"
    #[arg(long)]
    pub report_outcomes: bool,

    /// Run every command without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        let mut options = RunOptions::new(self.azure_config, self.gcp_config);
        options.dry_run = self.dry_run;
        options.plan_format = self.format;
        options.output_dir = self.output_dir;
        options.auto_confirm = self.yes;
        if self.reset_os_flag {
            options.os_flag = OsFlagMode::PerRecord;
        }
        if self.report_outcomes {
            options.documentation = DocumentationPolicy::FromOutcome;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_configs() {
        let cli = Cli::try_parse_from(["cloudvm", "Azure.conf", "GCP.conf"]).unwrap();
        let options = cli.into_options();

        assert_eq!(options.azure_config, PathBuf::from("Azure.conf"));
        assert_eq!(options.gcp_config, PathBuf::from("GCP.conf"));
        assert!(!options.dry_run);
        assert_eq!(options.os_flag, OsFlagMode::CarryOver);
        assert_eq!(options.documentation, DocumentationPolicy::StaticRunning);
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert!(Cli::try_parse_from(["cloudvm", "Azure.conf"]).is_err());
        assert!(Cli::try_parse_from(["cloudvm", "Azure.conf", "GCP.conf", "extra.conf"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "cloudvm",
            "--dry-run",
            "--format",
            "json",
            "--reset-os-flag",
            "--report-outcomes",
            "-y",
            "Azure.conf",
            "GCP.conf",
        ])
        .unwrap();
        let options = cli.into_options();

        assert!(options.dry_run);
        assert!(options.auto_confirm);
        assert_eq!(options.plan_format, PlanFormat::Json);
        assert_eq!(options.os_flag, OsFlagMode::PerRecord);
        assert_eq!(options.documentation, DocumentationPolicy::FromOutcome);
    }
}
