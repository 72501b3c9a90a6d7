//! Command chain runner
//!
//! Runs commands in order, handing each command's output to the next one
//! as its input. The first command receives no input.

use janitor_client::RegistryClient;
use std::sync::Arc;
use tracing::{Instrument, info, info_span};

use crate::command::{Command, CommandError, StageOutput};

/// Runs a chain of commands against a single registry client
pub struct ChainRunner {
    client: Arc<dyn RegistryClient>,
}

impl ChainRunner {
    /// Creates a new chain runner
    pub fn new(client: Arc<dyn RegistryClient>) -> Self {
        Self { client }
    }

    /// Runs `commands` in order, threading outputs into inputs
    ///
    /// Stops at the first failing command; later commands never run and
    /// whatever the failing command already did is left in place.
    pub async fn run(&self, commands: &[Box<dyn Command>]) -> Result<(), CommandError> {
        let mut previous: Option<StageOutput> = None;

        for (idx, command) in commands.iter().enumerate() {
            let input = previous.take();
            let span = info_span!("command", name = command.name(), step = idx + 1);

            previous = async {
                info!("Executing: {}", command.name());
                command.execute(self.client.as_ref(), input).await
            }
            .instrument(span)
            .await?;
        }

        Ok(())
    }
}
