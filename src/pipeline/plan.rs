use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::automation::vm::{ProviderCommand, ProviderKind};

/// Output format of a dry run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
}

/// Render the commands a run would execute, grouped by provider.
pub fn render_plan(commands: &[ProviderCommand], format: PlanFormat) -> Result<String> {
    match format {
        PlanFormat::Json => {
            serde_json::to_string_pretty(commands).context("Failed to serialize command plan")
        }
        PlanFormat::Text => {
            let mut out = String::new();
            for provider in [ProviderKind::Azure, ProviderKind::Gcp] {
                let group: Vec<_> = commands.iter().filter(|c| c.provider == provider).collect();
                out.push_str(&format!("# {} ({} command(s))\n", provider.banner(), group.len()));
                for command in group {
                    out.push_str(&command.command);
                    if command.is_windows() {
                        out.push_str("  # windows");
                    }
                    out.push('\n');
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands() -> Vec<ProviderCommand> {
        vec![
            ProviderCommand::azure("az vm create --name a".to_string(), true),
            ProviderCommand::gcp("gcloud compute instances create b".to_string()),
        ]
    }

    #[test]
    fn test_text_plan() {
        let plan = render_plan(&commands(), PlanFormat::Text).unwrap();
        assert_eq!(
            plan,
            "# MICROSOFT AZURE VM CREATION (1 command(s))\n\
             az vm create --name a  # windows\n\
             # GOOGLE CLOUD PLATFORM (GCP) VM CREATION (1 command(s))\n\
             gcloud compute instances create b\n"
        );
    }

    #[test]
    fn test_json_plan() {
        let plan = render_plan(&commands(), PlanFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&plan).unwrap();

        assert_eq!(value[0]["command"], "az vm create --name a");
        assert_eq!(value[0]["windows_os"], true);
        assert_eq!(value[1]["provider"], "gcp");
    }
}
