//! Framed grid of word-wrapped cells

use super::frame::{BorderType, FrameChars};
use crate::display::DisplaySink;
use crate::error::Result;
use crate::geometry::Size;
use crate::render::{BlockContent, BlockRenderer, Renderer, RenderingContext, RenderingOptions};
use crate::style::{Color, Theme};
use crate::text::{truncate, MultilineText, TextOverflow};
use crate::widget::{Control, ControlStyle, Styled};
use tracing::debug;

/// A grid column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    header: MultilineText,
    max_width: Option<usize>,
}

impl Column {
    pub fn new(header: impl Into<MultilineText>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
        }
    }

    /// Wrap cells of this column at `max_width`
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn header(&self) -> &MultilineText {
        &self.header
    }
}

/// Rows of text under column headers, drawn inside a frame
///
/// Cells are word-wrapped to their column width. When the grid does not fit
/// the allocated width, the widest columns give up cells first.
#[derive(Debug, Clone, Default)]
pub struct DataGrid {
    style: ControlStyle,
    columns: Vec<Column>,
    rows: Vec<Vec<MultilineText>>,
    border_type: BorderType,
    border_color: Option<Color>,
    header_color: Option<Color>,
}

impl DataGrid {
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create a grid with frame and header colors from `theme`
    pub fn themed(columns: impl IntoIterator<Item = Column>, theme: &Theme) -> Self {
        Self {
            border_color: Some(theme.border),
            header_color: Some(theme.emphasized),
            ..Self::new(columns)
        }
    }

    /// Append a row, builder style
    pub fn row<I, T>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MultilineText>,
    {
        self.add_row(cells);
        self
    }

    /// Append a row; missing cells render blank, extra cells are ignored
    pub fn add_row<I, T>(&mut self, cells: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<MultilineText>,
    {
        let mut row: Vec<MultilineText> = cells
            .into_iter()
            .take(self.columns.len())
            .map(Into::into)
            .collect();
        row.resize_with(self.columns.len(), MultilineText::none);
        self.rows.push(row);
    }

    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest content of each column, capped by its max width
    fn natural_column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let widest = self
                    .rows
                    .iter()
                    .map(|row| row[index].max_line_width())
                    .fold(column.header.max_line_width(), usize::max);
                column.max_width.map_or(widest, |max| widest.min(max))
            })
            .collect()
    }

    /// Column widths fitting `content_width`, frame included
    fn column_widths(&self, content_width: usize) -> Vec<usize> {
        let mut widths = self.natural_column_widths();
        let frame = widths.len() + 1;
        let available = content_width.saturating_sub(frame);
        let mut total: usize = widths.iter().sum();

        while total > available {
            let Some(widest) = widths.iter_mut().max_by_key(|width| **width) else {
                break;
            };
            *widest -= 1;
            total -= 1;
        }
        widths
    }

    fn row_height(cells: &[MultilineText], widths: &[usize]) -> usize {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| cell.calculate_size(*width, TextOverflow::WrapWord).height)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    fn header_cells(&self) -> Vec<MultilineText> {
        self.columns.iter().map(|column| column.header.clone()).collect()
    }
}

impl Styled for DataGrid {
    fn style_mut(&mut self) -> &mut ControlStyle {
        &mut self.style
    }
}

impl Control for DataGrid {
    fn style(&self) -> &ControlStyle {
        &self.style
    }

    fn natural_content_size(&self) -> Size {
        if self.columns.is_empty() {
            return Size::EMPTY;
        }

        let widths = self.natural_column_widths();
        let width = widths.iter().sum::<usize>() + widths.len() + 1;
        let header = Self::row_height(&self.header_cells(), &widths);
        let body: usize = self
            .rows
            .iter()
            .map(|row| Self::row_height(row, &widths))
            .sum();
        let separator = usize::from(!self.rows.is_empty());
        Size::new(width, 2 + header + separator + body)
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        let content = GridContent {
            grid: self,
            widths: Vec::new(),
            step: Step::Done,
            current: None,
        };
        Box::new(BlockRenderer::for_control(self, options, Box::new(content)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Top,
    /// Lines of the header (`0`) or of data row `n - 1`
    Cells(usize),
    Separator,
    Bottom,
    Done,
}

/// Wrapped lines of the row being drawn
struct PreparedRow {
    cells: Vec<Vec<String>>,
    height: usize,
    line: usize,
}

struct GridContent<'a> {
    grid: &'a DataGrid,
    widths: Vec<usize>,
    step: Step,
    current: Option<PreparedRow>,
}

impl GridContent<'_> {
    fn prepare(&self, index: usize) -> PreparedRow {
        let header;
        let cells: &[MultilineText] = if index == 0 {
            header = self.grid.header_cells();
            &header
        } else {
            &self.grid.rows[index - 1]
        };

        let cells: Vec<Vec<String>> = cells
            .iter()
            .zip(&self.widths)
            .map(|(cell, width)| cell.wrapped_lines(*width, TextOverflow::WrapWord).collect())
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
        PreparedRow {
            cells,
            height,
            line: 0,
        }
    }

    fn write_rule(
        &self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
        (left, join, right): (char, char, char),
        color: Option<Color>,
    ) -> Result<()> {
        let chars = self.grid.border_type.chars();
        let bg = ctx.content_background();
        ctx.write_char(out, left, color, bg)?;
        for (index, width) in self.widths.iter().enumerate() {
            if index > 0 {
                ctx.write_char(out, join, color, bg)?;
            }
            let fill = chars.horizontal.to_string().repeat(*width);
            ctx.write_colored(out, &fill, color, bg)?;
        }
        ctx.write_char(out, right, color, bg)
    }

    fn write_cells(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
        chars: &FrameChars,
        frame_color: Option<Color>,
        text_color: Option<Color>,
    ) -> Result<()> {
        let Some(row) = self.current.as_mut() else {
            return Ok(());
        };

        let bg = ctx.content_background();
        let mut column = 0;
        ctx.write_char(out, chars.vertical, frame_color, bg)?;
        column += 1;
        for (cell, width) in row.cells.iter().zip(&self.widths) {
            if let Some(text) = cell.get(row.line) {
                let (visible, _) = truncate(text, *width);
                ctx.write_colored(out, visible, text_color, bg)?;
            }
            column += width;
            ctx.fill_to(out, column)?;
            ctx.write_char(out, chars.vertical, frame_color, bg)?;
            column += 1;
        }
        row.line += 1;
        Ok(())
    }

    /// Step following the row that just finished
    fn after_row(&self, index: usize) -> Step {
        match index {
            0 if !self.grid.rows.is_empty() => Step::Separator,
            i if i < self.grid.rows.len() => Step::Cells(i + 1),
            _ => Step::Bottom,
        }
    }
}

impl BlockContent for GridContent<'_> {
    fn initialize(&mut self, ctx: &RenderingContext) {
        self.widths = self.grid.column_widths(ctx.content_width());
        self.current = None;
        self.step = if self.grid.columns.is_empty() {
            Step::Done
        } else {
            Step::Top
        };
        debug!(columns = ?self.widths, rows = self.grid.rows.len(), "data grid laid out");
    }

    fn has_more_lines(&mut self) -> bool {
        self.step != Step::Done
    }

    fn render_next_line(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
    ) -> Result<()> {
        let chars = self.grid.border_type.chars();
        let frame_color = self.grid.border_color.or(ctx.foreground());

        match self.step {
            Step::Top => {
                let corners = (chars.top_left, chars.top_tee, chars.top_right);
                self.write_rule(ctx, out, corners, frame_color)?;
                self.step = Step::Cells(0);
            }
            Step::Cells(index) => {
                if self.current.is_none() {
                    self.current = Some(self.prepare(index));
                }
                let text_color = if index == 0 {
                    self.grid.header_color.or(ctx.foreground())
                } else {
                    ctx.foreground()
                };
                self.write_cells(ctx, out, &chars, frame_color, text_color)?;

                if self.current.as_ref().is_some_and(|row| row.line >= row.height) {
                    self.current = None;
                    self.step = self.after_row(index);
                }
            }
            Step::Separator => {
                let joints = (chars.left_tee, chars.cross, chars.right_tee);
                self.write_rule(ctx, out, joints, frame_color)?;
                self.step = Step::Cells(1);
            }
            Step::Bottom => {
                let corners = (chars.bottom_left, chars.bottom_tee, chars.bottom_right);
                self.write_rule(ctx, out, corners, frame_color)?;
                self.step = Step::Done;
            }
            Step::Done => {}
        }
        Ok(())
    }
}
