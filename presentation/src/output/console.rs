//! Console output formatter for muse-ai results

use colored::Colorize;
use muse_domain::{ConversationTurn, ImageAsset, TheoryKind, Visualization};
use std::path::Path;

/// Formats domain results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a theory visualization as an aligned note table
    pub fn format_visualization(visualization: &Visualization) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", visualization.title.cyan().bold()));
        output.push_str(&format!("{}\n", visualization.description));

        let mut summary = format!(
            "{} rooted at {}",
            Self::kind_label(visualization.kind),
            visualization.root
        );
        if let Some(instrument) = visualization.instrument_preference {
            summary.push_str(&format!(" ({instrument})"));
        }
        output.push_str(&format!("{}\n", summary.dimmed()));

        output.push_str(&format!("{}\n", "-".repeat(40)));
        let width = visualization
            .notes
            .iter()
            .map(|note| note.len())
            .max()
            .unwrap_or(0);
        for (note, interval) in visualization.labeled_notes() {
            let padded = format!("{note:<width$}");
            output.push_str(&format!("  {}  {}\n", padded.bold(), interval.yellow()));
        }

        output
    }

    /// Format a theory visualization as JSON
    pub fn format_visualization_json(visualization: &Visualization) -> String {
        serde_json::to_string_pretty(visualization).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a tutor reply for the chat REPL
    pub fn format_tutor_reply(reply: &str) -> String {
        format!(
            "{}\n{}",
            "Tutor:".green().bold(),
            Self::indent(reply.trim(), "  ")
        )
    }

    /// Format the running transcript for the /history command
    pub fn format_transcript(turns: &[ConversationTurn]) -> String {
        if turns.is_empty() {
            return "No conversation yet.".dimmed().to_string();
        }

        let mut output = String::new();
        for turn in turns {
            let speaker = if turn.is_user() {
                "You:".cyan().bold()
            } else {
                "Tutor:".green().bold()
            };
            output.push_str(&format!("{}\n{}\n", speaker, Self::indent(&turn.text, "  ")));
        }
        output
    }

    /// Format the confirmation line after artwork is written to disk
    pub fn format_image_saved(path: &Path, asset: &ImageAsset) -> String {
        format!(
            "{} {} ({}, {})",
            "Saved".green().bold(),
            path.display(),
            asset.mime_type(),
            Self::human_size(asset.bytes().len())
        )
    }

    fn kind_label(kind: TheoryKind) -> &'static str {
        match kind {
            TheoryKind::Scale => "Scale",
            TheoryKind::Chord => "Chord",
            TheoryKind::Interval => "Interval",
        }
    }

    fn human_size(bytes: usize) -> String {
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KiB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
