//! WP-CLI client for executing provisioning commands

pub mod command;
pub mod error;
pub mod subprocess;

use async_trait::async_trait;
pub use command::WpCommand;
pub use error::CommandError;
pub use subprocess::SystemRunner;

use crate::core::config::ProvisioningConfig;

/// Trait for running external commands - allows substituting a recording
/// mock for the real subprocess runner in tests.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, returning captured stdout on success.
    async fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError>;
}

/// Typed WP-CLI client. Every provisioning action goes through here.
#[derive(Debug, Clone)]
pub struct WpCli<R> {
    runner: R,
    binary: String,
}

impl<R: CommandRunner> WpCli<R> {
    /// Client running `wp` from the PATH.
    pub fn new(runner: R) -> Self {
        Self::with_binary(runner, "wp")
    }

    /// Client running an explicit binary (containers, tests).
    pub fn with_binary(runner: R, binary: impl Into<String>) -> Self {
        Self {
            runner,
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    async fn invoke(&self, command: WpCommand) -> Result<String, CommandError> {
        self.runner.run(&self.binary, &command.args).await
    }

    /// Preflight probe: `wp cli version`. Returns the version line.
    pub async fn ensure_available(&self) -> Result<String, CommandError> {
        self.invoke(WpCommand::cli_version()).await
    }

    pub async fn core_download(&self, locale: &str) -> Result<(), CommandError> {
        self.invoke(WpCommand::core_download(locale)).await.map(drop)
    }

    pub async fn config_create(&self, config: &ProvisioningConfig) -> Result<(), CommandError> {
        self.invoke(WpCommand::config_create(config)).await.map(drop)
    }

    pub async fn config_set_debug(&self) -> Result<(), CommandError> {
        self.invoke(WpCommand::config_set_debug()).await.map(drop)
    }

    pub async fn db_create(&self) -> Result<(), CommandError> {
        self.invoke(WpCommand::db_create()).await.map(drop)
    }

    pub async fn core_install(&self, config: &ProvisioningConfig) -> Result<(), CommandError> {
        self.invoke(WpCommand::core_install(config)).await.map(drop)
    }

    pub async fn option_set(&self, name: &str, value: &str) -> Result<(), CommandError> {
        self.invoke(WpCommand::option_set(name, value)).await.map(drop)
    }

    pub async fn theme_install(&self, themes: &[String]) -> Result<(), CommandError> {
        self.invoke(WpCommand::theme_install(themes)).await.map(drop)
    }

    pub async fn plugin_install(&self, plugins: &[String]) -> Result<(), CommandError> {
        self.invoke(WpCommand::plugin_install(plugins)).await.map(drop)
    }
}
