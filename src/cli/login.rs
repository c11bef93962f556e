//! Login rate limiter subcommands

use clap::Subcommand;

/// Login subcommands
#[derive(Subcommand, Debug)]
pub enum LoginCommands {
    /// Record a login attempt for a client; exits 4 when throttled
    Attempt {
        /// Client identifier (IP address, username, ...)
        identifier: String,
    },

    /// Clear the attempt window for a client
    Reset {
        /// Client identifier
        identifier: String,
    },

    /// Remove expired attempt windows
    Sweep,
}
