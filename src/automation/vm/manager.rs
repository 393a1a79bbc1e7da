use console::style;
use tracing::{error, info, warn};

use super::{CommandOutcome, ProviderCommand, WINDOWS_CREDENTIAL_NOTICE};
use crate::automation::exec::CommandRunner;
use crate::automation::prompt::Confirmer;

/// Walks a provider's commands one at a time: confirm, run, record.
pub struct VmCreationManager<'a> {
    runner: &'a dyn CommandRunner,
    confirmer: &'a mut dyn Confirmer,
}

impl<'a> VmCreationManager<'a> {
    pub fn new(runner: &'a dyn CommandRunner, confirmer: &'a mut dyn Confirmer) -> Self {
        Self { runner, confirmer }
    }

    /// Returns one outcome per command, in the same order.
    pub async fn create_all(&mut self, commands: &[ProviderCommand]) -> Vec<CommandOutcome> {
        let mut outcomes = Vec::with_capacity(commands.len());
        for command in commands {
            outcomes.push(self.create_vm(command).await);
        }

        let created = outcomes
            .iter()
            .filter(|o| matches!(o, CommandOutcome::Created { .. }))
            .count();
        info!(
            "{} of {} command(s) completed successfully",
            created,
            commands.len()
        );
        outcomes
    }

    async fn create_vm(&mut self, command: &ProviderCommand) -> CommandOutcome {
        println!("Executing command: {}", style(&command.command).cyan());

        let confirmed = match self.confirmer.confirm() {
            Ok(answer) => answer,
            Err(e) => {
                warn!("No confirmation received, treating as declined: {:#}", e);
                false
            }
        };

        if !confirmed {
            println!("Skipping command...\n");
            return CommandOutcome::Declined;
        }

        println!("Running the command to create VM...");
        match self.runner.run(&command.command).await {
            Ok(output) => {
                println!("{output}");
                let credential_notice = command.is_windows();
                if credential_notice {
                    println!("{}", style(WINDOWS_CREDENTIAL_NOTICE).yellow());
                }
                CommandOutcome::Created {
                    output,
                    credential_notice,
                }
            }
            Err(e) => {
                error!("Error in executing command: {}", e);
                CommandOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::exec::{ExecutionError, MockCommandRunner};
    use crate::automation::prompt::{AutoConfirm, LineConfirmer};
    use std::io::Cursor;

    fn commands() -> Vec<ProviderCommand> {
        vec![
            ProviderCommand::azure("az vm create --name a --verbose".to_string(), false),
            ProviderCommand::azure("az vm create --name b --verbose".to_string(), true),
            ProviderCommand::azure("az vm create --name c --verbose".to_string(), false),
        ]
    }

    #[tokio::test]
    async fn test_declined_commands_are_not_run() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd| cmd == "az vm create --name b --verbose")
            .times(1)
            .returning(|_| Ok("{\"powerState\": \"VM running\"}".to_string()));

        let mut confirmer = LineConfirmer::new(Cursor::new("n\ny\nno\n".as_bytes()), Vec::new());
        let mut manager = VmCreationManager::new(&runner, &mut confirmer);

        let outcomes = manager.create_all(&commands()).await;
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0], CommandOutcome::Declined);
        assert!(matches!(outcomes[1], CommandOutcome::Created { .. }));
        assert_eq!(outcomes[2], CommandOutcome::Declined);
    }

    #[tokio::test]
    async fn test_credential_notice_only_after_windows_vm_is_created() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(3).returning(|cmd| {
            if cmd.contains("--name d ") {
                Err(ExecutionError::NonZeroExit {
                    command: cmd.to_string(),
                    status: "exit status: 1".to_string(),
                    stderr: "ImageNotFound".to_string(),
                })
            } else {
                Ok(String::new())
            }
        });

        let mut list = commands();
        list.push(ProviderCommand::azure("az vm create --name d --verbose".to_string(), true));
        list.push(ProviderCommand::azure("az vm create --name e --verbose".to_string(), true));

        // a: linux, b: windows, c: linux, d: windows but fails, e: windows but declined
        let mut confirmer = LineConfirmer::new(Cursor::new("y\ny\ny\ny\nn\n".as_bytes()), Vec::new());
        let mut manager = VmCreationManager::new(&runner, &mut confirmer);

        let notices: Vec<bool> = manager
            .create_all(&list)
            .await
            .iter()
            .map(|outcome| {
                matches!(
                    outcome,
                    CommandOutcome::Created {
                        credential_notice: true,
                        ..
                    }
                )
            })
            .collect();
        assert_eq!(notices, [false, true, false, false, false]);
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_remaining_commands() {
        let mut runner = MockCommandRunner::new();
        let mut call = 0;
        runner.expect_run().times(3).returning(move |cmd| {
            call += 1;
            if call == 2 {
                Err(ExecutionError::NonZeroExit {
                    command: cmd.to_string(),
                    status: "exit status: 1".to_string(),
                    stderr: "QuotaExceeded".to_string(),
                })
            } else {
                Ok(String::new())
            }
        });

        let mut confirmer = AutoConfirm;
        let mut manager = VmCreationManager::new(&runner, &mut confirmer);

        let outcomes = manager.create_all(&commands()).await;
        assert!(matches!(outcomes[0], CommandOutcome::Created { .. }));
        assert!(matches!(&outcomes[1], CommandOutcome::Failed(msg) if msg.contains("QuotaExceeded")));
        assert!(matches!(outcomes[2], CommandOutcome::Created { .. }));
    }
}
