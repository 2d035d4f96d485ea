use std::path::PathBuf;
use std::process::Command;

use crate::receipt::ACCEPTED_EXTENSIONS;

#[derive(Debug, PartialEq, Eq)]
pub enum PickResult {
    Picked(PathBuf),
    Cancelled,
    /// No graphical picker on this machine; ask for a path in the terminal.
    Unavailable,
}

pub fn pick_receipt() -> PickResult {
    let patterns: Vec<String> = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!("*.{}", ext))
        .collect();
    let filter = format!("Receipt images | {}", patterns.join(" "));

    match Command::new("zenity")
        .args(["--file-selection", "--title=Upload payment receipt"])
        .arg(format!("--file-filter={}", filter))
        .output()
    {
        Ok(output) => {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path.is_empty() {
                    return PickResult::Picked(PathBuf::from(path));
                }
            }
            PickResult::Cancelled
        }
        Err(_) => PickResult::Unavailable,
    }
}

/// Interprets what the user typed at the path prompt.
pub fn parse_typed_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'');
    if trimmed.is_empty() {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = directories::BaseDirs::new() {
            return Some(home.home_dir().join(rest));
        }
    }
    Some(PathBuf::from(trimmed))
}
