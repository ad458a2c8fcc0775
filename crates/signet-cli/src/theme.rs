//! CLI theme and styling.

use colored::Colorize;
use signet_core::SignatureDevice;

/// CLI theme configuration.
pub(crate) struct Theme;

impl Theme {
    /// Format a header.
    pub(crate) fn header(text: &str) -> String {
        format!("{}", text.bold().cyan())
    }

    /// Format a success message.
    pub(crate) fn success(text: &str) -> String {
        format!("{} {}", "✓".green(), text)
    }

    /// Format an error message.
    pub(crate) fn error(text: &str) -> String {
        format!("{} {}", "✗".red(), text.red())
    }

    /// Format a dimmed message.
    pub(crate) fn dimmed(text: &str) -> String {
        format!("{}", text.dimmed())
    }

    /// Format a labelled field.
    pub(crate) fn field(name: &str, value: &str) -> String {
        format!("  {:<16} {}", format!("{name}:").bold(), value)
    }

    /// Format a separator line.
    pub(crate) fn separator() -> String {
        "━".repeat(50).dimmed().to_string()
    }

    /// Render a device as labelled fields.
    pub(crate) fn device(device: &SignatureDevice) -> String {
        let last = if device.last_signature.is_empty() {
            Self::dimmed("(none)")
        } else {
            device.last_signature.clone()
        };
        let label = if device.label.is_empty() {
            Self::dimmed("(none)")
        } else {
            device.label.clone()
        };

        [
            Self::header(&device.id),
            Self::field("algorithm", device.algorithm.as_str()),
            Self::field("label", &label),
            Self::field("counter", &device.signature_counter.to_string()),
            Self::field("last signature", &last),
            Self::field("public key", ""),
            Self::dimmed(device.public_key.trim_end()),
        ]
        .join("\n")
    }
}
