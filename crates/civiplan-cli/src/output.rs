//! CLI output formatting
//!
//! Every command renders through a formatter so `--json` swaps the whole
//! surface at once: human mode prints checkmarked lines and aligned
//! tables, JSON mode prints one document per command and stays quiet
//! otherwise.

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Trait for formatting CLI output
pub trait OutputFormatter {
    /// A completed action or positive finding
    fn success(&self, message: &str);
    /// A failure, printed to stderr
    fn error(&self, message: &str);
    /// A non-fatal caveat, printed to stderr
    fn warn(&self, message: &str);
    /// An indented detail line
    fn info(&self, message: &str);
    /// The command's JSON document (JSON mode only)
    fn print_json(&self, value: &serde_json::Value);
}

/// Human-readable formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn success(&self, message: &str) {
        println!("\u{2713} {}", message);
    }
    fn error(&self, message: &str) {
        eprintln!("\u{2717} Error: {}", message);
    }
    fn warn(&self, message: &str) {
        eprintln!("\u{26a0} {}", message);
    }
    fn info(&self, message: &str) {
        println!("  {}", message);
    }
    fn print_json(&self, _value: &serde_json::Value) {
        // Human mode never prints JSON
    }
}

/// JSON formatter; human-oriented lines are suppressed
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn success(&self, _message: &str) {}
    fn error(&self, message: &str) {
        eprintln!("{}", serde_json::json!({ "error": message }));
    }
    fn warn(&self, message: &str) {
        eprintln!("{}", serde_json::json!({ "warning": message }));
    }
    fn info(&self, _message: &str) {}
    fn print_json(&self, value: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_default()
        );
    }
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Human => Box::new(HumanFormatter),
    }
}
