//! PlayMoodify CLI Library
//!
//! This library provides a terminal client for the PlayMoodify playlist mood
//! analysis service. A Spotify playlist link is sent to the remote service and
//! the returned mood distribution, per-track audio features and mood-based
//! recommendations are rendered in the terminal.
//!
//! # Modules
//!
//! - `api` - HTTP client for the analysis service
//! - `app` - Root controller owning the form/loading/results view model
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `form` - Playlist link input form and clipboard access
//! - `gauge` - Animated percentage gauges for the mood distribution
//! - `loading` - Loading indicator shown while a request is pending
//! - `mood` - Mood and audio feature lookup tables
//! - `results` - Rendering of analysis results
//! - `types` - Data structures received from the service
//!
//! # Example
//!
//! ```
//! use playmoodify::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> playmoodify::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod form;
pub mod gauge;
pub mod loading;
pub mod mood;
pub mod results;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use playmoodify::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Connecting to {}", base_url);
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Analysis completed");
/// success!("Analyzed {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Invalid API base URL");
/// error!("Cannot parse timeout: {}", value);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program termination.
/// Used for recoverable issues or important information that users should notice.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Clipboard unavailable, type the link instead");
/// warning!("Recommendation for {} unavailable", mood);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error banner with a red exclamation mark without exiting.
///
/// Used for errors that end a single request but leave the application
/// running, such as a failed analysis in interactive mode.
///
/// # Example
///
/// ```
/// banner!("API error: {}", 500);
/// ```
#[macro_export]
macro_rules! banner {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*).to_string().red());
  })
}
