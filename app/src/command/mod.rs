//! Static strategy pattern for CLI commands.
//!
//! Each command is its own strategy type with a typed input, dispatched
//! statically from `main`. Adding a command means implementing
//! [`CommandStrategy`] and wiring one match arm.

mod chat;
mod init;
mod serve;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
