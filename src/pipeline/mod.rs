//! End-to-end run: gate file names, parse and validate both configs, then
//! create, document and archive each provider in turn.

use anyhow::Result;
use console::style;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub mod error;
pub mod plan;

pub use error::RunError;
pub use plan::{render_plan, PlanFormat};

use crate::automation::exec::{resolve_operator, CommandRunner, ShellRunner};
use crate::automation::prompt::{AutoConfirm, Confirmer, LineConfirmer};
use crate::automation::vm::providers::{create_provider, CloudProvider, OsFlagMode};
use crate::automation::vm::{CommandOutcome, ProviderCommand, ProviderKind, VmCreationManager};
use crate::config::{load_document, ConfigDocument};
use crate::utils::docfile::documentation_file_name;
use crate::utils::fs::archive_config;
use crate::utils::{run_timestamp, Clock, DocumentationPolicy, VmDocumentation};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub azure_config: PathBuf,
    pub gcp_config: PathBuf,
    pub dry_run: bool,
    pub plan_format: PlanFormat,
    pub output_dir: PathBuf,
    pub os_flag: OsFlagMode,
    pub documentation: DocumentationPolicy,
    pub auto_confirm: bool,
}

impl RunOptions {
    pub fn new(azure_config: impl Into<PathBuf>, gcp_config: impl Into<PathBuf>) -> Self {
        Self {
            azure_config: azure_config.into(),
            gcp_config: gcp_config.into(),
            dry_run: false,
            plan_format: PlanFormat::default(),
            output_dir: PathBuf::from("."),
            os_flag: OsFlagMode::default(),
            documentation: DocumentationPolicy::default(),
            auto_confirm: false,
        }
    }
}

#[derive(Debug)]
pub struct ProviderReport {
    pub provider: ProviderKind,
    pub outcomes: Vec<CommandOutcome>,
    /// `None` when the documentation file could not be written.
    pub documentation: Option<PathBuf>,
    /// `None` when the config file could not be renamed.
    pub archived_config: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    /// Commands printed by a dry run.
    pub planned: Vec<ProviderCommand>,
    pub reports: Vec<ProviderReport>,
}

/// The tool only runs against `Azure.conf` and `GCP.conf`, given exactly so.
pub fn check_file_identity(azure: &Path, gcp: &Path) -> Result<(), RunError> {
    let azure_ok = azure.as_os_str() == ProviderKind::Azure.config_file_name();
    let gcp_ok = gcp.as_os_str() == ProviderKind::Gcp.config_file_name();

    if azure_ok && gcp_ok {
        Ok(())
    } else {
        Err(RunError::FileIdentity {
            azure: azure.display().to_string(),
            gcp: gcp.display().to_string(),
        })
    }
}

fn validate(provider: &dyn CloudProvider, document: &ConfigDocument) -> Result<(), RunError> {
    provider
        .validate(document)
        .map_err(|source| RunError::Validation {
            provider: provider.kind(),
            source,
        })?;
    info!(
        "{} configuration is valid ({} instance(s))",
        provider.name(),
        document.len()
    );
    Ok(())
}

pub struct Pipeline {
    options: RunOptions,
    runner: Box<dyn CommandRunner>,
    confirmer: Box<dyn Confirmer>,
    clock: Clock,
}

impl Pipeline {
    pub fn new(options: RunOptions) -> Self {
        let confirmer: Box<dyn Confirmer> = if options.auto_confirm {
            Box::new(AutoConfirm)
        } else {
            Box::new(LineConfirmer::stdio())
        };

        Self {
            options,
            runner: Box::new(ShellRunner::new()),
            confirmer,
            clock: run_timestamp,
        }
    }

    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_confirmer(mut self, confirmer: Box<dyn Confirmer>) -> Self {
        self.confirmer = confirmer;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Full run, starting with the config file name gate.
    pub async fn run(&mut self) -> Result<RunSummary> {
        check_file_identity(&self.options.azure_config, &self.options.gcp_config)?;
        self.execute().await
    }

    /// Everything after the file name gate.
    pub async fn execute(&mut self) -> Result<RunSummary> {
        let azure_path = self.options.azure_config.clone();
        let gcp_path = self.options.gcp_config.clone();

        let azure = create_provider(ProviderKind::Azure, self.options.os_flag);
        let gcp = create_provider(ProviderKind::Gcp, self.options.os_flag);

        let azure_doc = load_document(&azure_path)?;
        let gcp_doc = load_document(&gcp_path)?;

        validate(azure.as_ref(), &azure_doc)?;
        validate(gcp.as_ref(), &gcp_doc)?;

        if self.options.dry_run {
            let mut planned = azure.build_commands(&azure_doc);
            planned.extend(gcp.build_commands(&gcp_doc));
            print!("{}", render_plan(&planned, self.options.plan_format)?);
            return Ok(RunSummary {
                planned,
                reports: Vec::new(),
            });
        }

        let mut summary = RunSummary::default();
        for (provider, document, path) in [
            (azure.as_ref(), &azure_doc, &azure_path),
            (gcp.as_ref(), &gcp_doc, &gcp_path),
        ] {
            let report = self.process_provider(provider, document, path).await;
            summary.reports.push(report);
        }

        Ok(summary)
    }

    async fn process_provider(
        &mut self,
        provider: &dyn CloudProvider,
        document: &ConfigDocument,
        config_path: &Path,
    ) -> ProviderReport {
        let commands = provider.build_commands(document);
        println!("\n{}\n", style(provider.kind().banner()).bold());

        let mut manager = VmCreationManager::new(self.runner.as_ref(), self.confirmer.as_mut());
        let outcomes = manager.create_all(&commands).await;

        let timestamp = (self.clock)();
        let operator = resolve_operator(self.runner.as_ref(), provider.identity_command()).await;

        let documentation = VmDocumentation {
            timestamp: &timestamp,
            operator: &operator,
            policy: self.options.documentation,
        };
        let contents = documentation.render(provider, document, &outcomes);
        let doc_path = self
            .options
            .output_dir
            .join(documentation_file_name(provider.kind(), &timestamp));

        let documentation = match documentation.write(&doc_path, &contents) {
            Ok(()) => Some(doc_path),
            Err(e) => {
                error!("{}", e);
                None
            }
        };

        let archived_config = match archive_config(config_path, provider.kind(), &timestamp) {
            Ok(path) => Some(path),
            Err(e) => {
                error!("{:#}", e);
                None
            }
        };

        ProviderReport {
            provider: provider.kind(),
            outcomes,
            documentation,
            archived_config,
        }
    }
}
