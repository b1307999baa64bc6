//! Line-based input prompts

use super::TextBlock;
use crate::display::DisplaySink;
use crate::error::{Error, Result};
use crate::geometry::Size;
use crate::render::{Renderer, RenderingOptions};
use crate::style::{Color, Theme};
use crate::widget::{Control, ControlStyle, Styled};
use std::fmt;
use std::io::BufRead;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::{debug, warn};

/// Asks for a value and converts the answer with [`FromStr`]
///
/// Answers that fail to convert are reported in the error color and the
/// question is asked again. As a control it renders its label.
#[derive(Debug, Clone)]
pub struct Prompt<T> {
    label: TextBlock,
    error_color: Color,
    _value: PhantomData<fn() -> T>,
}

impl<T> Prompt<T> {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        Self::themed(label, &Theme::default())
    }

    /// Create a prompt using the emphasized and error colors of `theme`
    pub fn themed(label: impl Into<String>, theme: &Theme) -> Result<Self> {
        Ok(Self {
            label: label_block(label.into(), theme)?,
            error_color: theme.error,
            _value: PhantomData,
        })
    }
}

impl<T> Prompt<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Show the label and read answers from `input` until one converts
    ///
    /// Fails with [`Error::InputClosed`] when `input` ends first.
    pub fn read<R: BufRead + ?Sized>(&self, input: &mut R, out: &mut dyn DisplaySink) -> Result<T> {
        ask(self, self.error_color, input, out, |answer| {
            answer
                .parse::<T>()
                .map_err(|err| format!("Invalid value: {err}"))
        })
    }
}

impl<T> Styled for Prompt<T> {
    fn style_mut(&mut self) -> &mut ControlStyle {
        self.label.style_mut()
    }
}

impl<T> Control for Prompt<T> {
    fn style(&self) -> &ControlStyle {
        self.label.style()
    }

    fn natural_content_size(&self) -> Size {
        self.label.natural_content_size()
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        self.label.create_renderer(options)
    }
}

/// Yes/no question answered with `y`, `yes`, `n` or `no`
#[derive(Debug, Clone)]
pub struct YesNoQuestion {
    question: String,
    label: TextBlock,
    default_answer: Option<bool>,
    error_color: Color,
}

impl YesNoQuestion {
    pub fn new(question: impl Into<String>) -> Result<Self> {
        Self::themed(question, &Theme::default())
    }

    /// Create a question using the emphasized and error colors of `theme`
    pub fn themed(question: impl Into<String>, theme: &Theme) -> Result<Self> {
        let question = question.into();
        let label = label_block(with_choices(&question, None), theme)?;
        Ok(Self {
            question,
            label,
            default_answer: None,
            error_color: theme.error,
        })
    }

    /// Answer used when the user just presses Enter
    pub fn default_answer(mut self, answer: bool) -> Self {
        let style = self.label.style().clone();
        self.label = TextBlock::new(with_choices(&self.question, Some(answer)));
        *self.label.style_mut() = style;
        self.default_answer = Some(answer);
        self
    }

    /// Ask until the answer is yes or no
    pub fn read<R: BufRead + ?Sized>(&self, input: &mut R, out: &mut dyn DisplaySink) -> Result<bool> {
        ask(self, self.error_color, input, out, |answer| {
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                "" => self
                    .default_answer
                    .ok_or_else(|| "Please answer y or n".to_string()),
                _ => Err(format!("Please answer y or n, not `{answer}`")),
            }
        })
    }
}

impl Styled for YesNoQuestion {
    fn style_mut(&mut self) -> &mut ControlStyle {
        self.label.style_mut()
    }
}

impl Control for YesNoQuestion {
    fn style(&self) -> &ControlStyle {
        self.label.style()
    }

    fn natural_content_size(&self) -> Size {
        self.label.natural_content_size()
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        self.label.create_renderer(options)
    }
}

fn label_block(label: String, theme: &Theme) -> Result<TextBlock> {
    if label.trim().is_empty() {
        return Err(Error::invalid_argument("label", "must not be empty"));
    }
    Ok(TextBlock::new(label).foreground(theme.emphasized))
}

fn with_choices(question: &str, default_answer: Option<bool>) -> String {
    let choices = match default_answer {
        Some(true) => "[Y/n]",
        Some(false) => "[y/N]",
        None => "[y/n]",
    };
    format!("{question} {choices}")
}

/// Prompt loop shared by every question type
///
/// The label is rendered in child mode so the answer is typed on the same
/// line, after a single space.
fn ask<T, R, F>(
    label: &dyn Control,
    error_color: Color,
    input: &mut R,
    out: &mut dyn DisplaySink,
    parse: F,
) -> Result<T>
where
    R: BufRead + ?Sized,
    F: Fn(&str) -> std::result::Result<T, String>,
{
    loop {
        write_label(label, out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("prompt input closed");
            return Err(Error::InputClosed);
        }
        out.input_line_ended()?;

        let answer = line.trim();
        match parse(answer) {
            Ok(value) => return Ok(value),
            Err(message) => {
                warn!(%message, "rejected prompt answer");
                out.write_str(&message, Some(error_color), None)?;
                out.end_line()?;
            }
        }
    }
}

fn write_label(label: &dyn Control, out: &mut dyn DisplaySink) -> Result<()> {
    if !out.is_new_line() {
        out.end_line()?;
    }

    let width = out.max_width().unwrap_or_else(|| label.natural_size().width);
    let mut renderer = label.create_renderer(RenderingOptions::child(width, None));
    let mut first = true;
    while renderer.has_more_lines() {
        if !first {
            out.end_line()?;
        }
        renderer.render_next_line(out)?;
        first = false;
    }
    out.write_str(" ", None, None)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::StringDisplay;
    use std::io::Cursor;

    #[test]
    fn test_reads_converted_value() {
        let prompt = Prompt::<u32>::new("Age:").unwrap();
        let mut out = StringDisplay::new();
        let value = prompt.read(&mut Cursor::new("42\n"), &mut out).unwrap();
        assert_eq!(value, 42);
        assert_eq!(out.contents(), "Age: \n");
    }

    #[test]
    fn test_reasks_after_conversion_failure() {
        let prompt = Prompt::<i32>::new("Age:").unwrap();
        let mut out = StringDisplay::new();
        let value = prompt
            .read(&mut Cursor::new("abc\n 7 \n"), &mut out)
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(
            out.lines(),
            ["Age: ", "Invalid value: invalid digit found in string", "Age: "]
        );
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let prompt = Prompt::<String>::new("Name:").unwrap();
        let mut out = StringDisplay::new();
        let result = prompt.read(&mut Cursor::new(""), &mut out);
        assert!(matches!(result, Err(Error::InputClosed)));
        assert_eq!(out.contents(), "Name: ");
    }

    #[test]
    fn test_empty_label_rejected() {
        assert!(matches!(
            Prompt::<i32>::new("  "),
            Err(Error::InvalidArgument { name: "label", .. })
        ));
        assert!(YesNoQuestion::new("").is_err());
    }

    #[test]
    fn test_multiline_label_ends_inner_lines() {
        let prompt = Prompt::<String>::new("Welcome\nName:").unwrap();
        let mut out = StringDisplay::new();
        let name = prompt.read(&mut Cursor::new("Ada\n"), &mut out).unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(out.contents(), "Welcome\nName:   \n");
    }

    #[test]
    fn test_label_starts_on_fresh_line() {
        let prompt = Prompt::<u8>::new("n?").unwrap();
        let mut out = StringDisplay::new();
        out.write_str("partial", None, None).unwrap();
        prompt.read(&mut Cursor::new("1\n"), &mut out).unwrap();
        assert_eq!(out.contents(), "partial\nn? \n");
    }

    #[test]
    fn test_yes_no_answers() {
        let question = YesNoQuestion::new("Continue?").unwrap();
        let mut out = StringDisplay::new();
        assert!(question.read(&mut Cursor::new("YES\n"), &mut out).unwrap());
        assert!(!question.read(&mut Cursor::new("n\n"), &mut out).unwrap());
        assert_eq!(out.lines(), ["Continue? [y/n] ", "Continue? [y/n] "]);
    }

    #[test]
    fn test_yes_no_reasks_without_default() {
        let question = YesNoQuestion::new("Sure?").unwrap();
        let mut out = StringDisplay::new();
        let answer = question
            .read(&mut Cursor::new("\nmaybe\ny\n"), &mut out)
            .unwrap();
        assert!(answer);
        assert_eq!(
            out.lines(),
            [
                "Sure? [y/n] ",
                "Please answer y or n",
                "Sure? [y/n] ",
                "Please answer y or n, not `maybe`",
                "Sure? [y/n] ",
            ]
        );
    }

    #[test]
    fn test_yes_no_default_answer() {
        let question = YesNoQuestion::new("Delete?").unwrap().default_answer(false);
        let mut out = StringDisplay::new();
        assert!(!question.read(&mut Cursor::new("\n"), &mut out).unwrap());
        assert_eq!(out.contents(), "Delete? [y/N] \n");
    }
}
