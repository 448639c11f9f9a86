// Debug logging for the menu button
// File-based tracing output, enabled via --debug so it never draws over the TUI

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use tracing::Level;

pub const DEFAULT_LOG_FILE: &str = "/tmp/menu-button-debug.log";

/// Initialize debug logging to file
///
/// # Arguments
/// * `enabled` - Whether debug logging should be enabled (controlled by --debug flag)
/// * `path` - Log file to create/truncate
///
/// # Behavior
/// - If enabled=false: Returns immediately, no subscriber and no file
/// - If enabled=true: Truncates the log file, writes a header and installs
///   a global `tracing` subscriber writing to it
pub fn init(enabled: bool, path: &Path) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    writeln!(file, "=== Menu Button Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(Level::TRACE)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {}", e))?;

    Ok(())
}
