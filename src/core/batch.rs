use crate::core::greeter::Greeter;
use crate::domain::model::NameInput;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// 輸入行的解讀方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    /// 每行一個 JSON 值 (JSON Lines)
    Json,
}

impl InputMode {
    pub fn parse_line(self, line: &str) -> NameInput {
        match self {
            InputMode::Text => NameInput::Text(line.to_string()),
            InputMode::Json => NameInput::from_json_str(line),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct GreetingRecord<'a> {
    line: usize,
    greeting: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub greeted: usize,
    pub fallbacks: usize,
}

/// Greets every line of `reader`, writing one output line per input line.
pub fn greet_lines<R: BufRead, W: Write>(
    greeter: &Greeter,
    reader: R,
    mut writer: W,
    input_mode: InputMode,
    output_format: OutputFormat,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let input = input_mode.parse_line(line);

        summary.total += 1;
        if input.has_usable_name() {
            summary.greeted += 1;
        } else {
            summary.fallbacks += 1;
        }
        let greeting = greeter.greet(input);

        match output_format {
            OutputFormat::Text => writeln!(writer, "{}", greeting)?,
            OutputFormat::Json => {
                let record = GreetingRecord {
                    line: index + 1,
                    greeting: &greeting,
                };
                serde_json::to_writer(&mut writer, &record)?;
                writeln!(writer)?;
            }
        }
    }

    writer.flush()?;
    tracing::debug!("Batch summary: {:?}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, mode: InputMode, format: OutputFormat) -> (String, BatchSummary) {
        let mut out = Vec::new();
        let summary =
            greet_lines(&Greeter::default(), Cursor::new(input), &mut out, mode, format).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_text_lines() {
        let (out, summary) = run("alice\n\n  bob \r\n", InputMode::Text, OutputFormat::Text);
        assert_eq!(out, "Hello, Alice!\nHello, Stranger!\nHello, Bob!\n");
        assert_eq!(
            summary,
            BatchSummary {
                total: 3,
                greeted: 2,
                fallbacks: 1
            }
        );
    }

    #[test]
    fn test_json_lines_input() {
        let (out, summary) = run(
            "\"o'neill\"\n123\nnull\n[]\n{}\nnot json\n",
            InputMode::Json,
            OutputFormat::Text,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Hello, O'neill!");
        assert!(lines[1..].iter().all(|l| *l == "Hello, Stranger!"));
        assert_eq!(summary.total, 6);
        assert_eq!(summary.fallbacks, 5);
    }

    #[test]
    fn test_json_output() {
        let (out, _) = run("eve\n", InputMode::Text, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["line"], 1);
        assert_eq!(value["greeting"], "Hello, Eve!");
    }

    #[test]
    fn test_name_stranger_counts_as_greeted() {
        let (out, summary) = run("stranger\n", InputMode::Text, OutputFormat::Text);
        assert_eq!(out, "Hello, Stranger!\n");
        assert_eq!(summary.greeted, 1);
        assert_eq!(summary.fallbacks, 0);
    }

    #[test]
    fn test_empty_input() {
        let (out, summary) = run("", InputMode::Text, OutputFormat::Text);
        assert!(out.is_empty());
        assert_eq!(summary.total, 0);
    }
}
