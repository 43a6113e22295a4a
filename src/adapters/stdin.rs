use crate::core::batch::InputMode;
use crate::domain::model::NameInput;
use crate::domain::ports::NameSource;
use crate::utils::error::{GreeterError, Result};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

pub const PROMPT: &str = "Enter your name: ";

/// 先寫出提示，再讀一行
pub struct PromptSource<R, W> {
    reader: R,
    writer: W,
    mode: InputMode,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(reader: R, writer: W, mode: InputMode) -> Self {
        Self {
            reader,
            writer,
            mode,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl PromptSource<BufReader<Stdin>, Stdout> {
    pub fn stdio(mode: InputMode) -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout(), mode)
    }
}

impl<R: BufRead, W: Write> NameSource for PromptSource<R, W> {
    fn read_name(&mut self) -> Result<NameInput> {
        write!(self.writer, "{}", PROMPT)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(GreeterError::InputClosed);
        }

        let line = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line);

        Ok(self.mode.parse_line(line))
    }
}

/// 由 `--name` 提供的固定值，只能讀一次
pub struct FixedSource {
    value: Option<NameInput>,
}

impl FixedSource {
    pub fn new(value: impl Into<NameInput>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn parsed(raw: &str, mode: InputMode) -> Self {
        Self {
            value: Some(mode.parse_line(raw)),
        }
    }
}

impl NameSource for FixedSource {
    fn read_name(&mut self) -> Result<NameInput> {
        self.value.take().ok_or(GreeterError::InputClosed)
    }
}
