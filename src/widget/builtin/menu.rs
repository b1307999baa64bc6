//! Selectable list of items

use crate::display::DisplaySink;
use crate::error::{Error, Result};
use crate::geometry::Size;
use crate::render::{BlockContent, BlockRenderer, Renderer, RenderingContext, RenderingOptions};
use crate::style::{Color, Theme};
use crate::text::str_width;
use crate::widget::{Control, ControlStyle, Styled};
use tracing::debug;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

/// A menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub text: String,
    /// Disabled items are shown but never selected
    pub enabled: bool,
}

impl MenuItem {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            enabled: true,
        }
    }

    /// Create an item that cannot be selected
    pub fn disabled<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            enabled: false,
        }
    }
}

/// One item per line, the selected one marked and highlighted
#[derive(Debug, Clone)]
pub struct Menu {
    style: ControlStyle,
    items: Vec<MenuItem>,
    selected: Option<usize>,
    selection_foreground: Color,
    selection_background: Color,
    disabled_color: Color,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    pub fn new() -> Self {
        Self::themed(&Theme::default())
    }

    /// Create a menu highlighting the selection with `theme` colors
    pub fn themed(theme: &Theme) -> Self {
        Self {
            style: ControlStyle::default(),
            items: Vec::new(),
            selected: None,
            selection_foreground: theme.selection_foreground,
            selection_background: theme.selection_background,
            disabled_color: Color::DarkGrey,
        }
    }

    /// Append an item, builder style
    pub fn item(mut self, item: MenuItem) -> Self {
        self.push(item);
        self
    }

    /// Append an item; the first enabled item becomes the selection
    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
        if self.selected.is_none() {
            self.selected = self.items.iter().position(|item| item.enabled);
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Select the item at `index`
    pub fn select(&mut self, index: usize) -> Result<()> {
        match self.items.get(index) {
            Some(item) if item.enabled => {
                self.selected = Some(index);
                Ok(())
            }
            Some(_) => Err(Error::invalid_argument("index", format!("item {index} is disabled"))),
            None => Err(Error::invalid_argument(
                "index",
                format!("{index} is out of range for {} items", self.items.len()),
            )),
        }
    }

    /// Move the selection to the next enabled item, wrapping around
    pub fn select_next(&mut self) -> Option<usize> {
        self.step(1)
    }

    /// Move the selection to the previous enabled item, wrapping around
    pub fn select_previous(&mut self) -> Option<usize> {
        self.step(self.items.len().saturating_sub(1))
    }

    fn step(&mut self, offset: usize) -> Option<usize> {
        let count = self.items.len();
        if count == 0 {
            return None;
        }

        let start = self
            .selected
            .unwrap_or(if offset == 1 { count - 1 } else { 0 });
        let found = (1..=count)
            .map(|n| (start + n * offset) % count)
            .find(|index| self.items[*index].enabled);
        if found.is_some() {
            self.selected = found;
        }
        debug!(selected = ?self.selected, "menu selection moved");
        self.selected
    }
}

impl Styled for Menu {
    fn style_mut(&mut self) -> &mut ControlStyle {
        &mut self.style
    }
}

impl Control for Menu {
    fn style(&self) -> &ControlStyle {
        &self.style
    }

    fn natural_content_size(&self) -> Size {
        let widest = self
            .items
            .iter()
            .map(|item| str_width(&item.text))
            .max()
            .unwrap_or(0);
        let marker = if self.items.is_empty() { 0 } else { str_width(SELECTED_MARKER) };
        Size::new(widest + marker, self.items.len())
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        let content = MenuContent {
            menu: self,
            next: 0,
        };
        Box::new(BlockRenderer::for_control(self, options, Box::new(content)))
    }
}

struct MenuContent<'a> {
    menu: &'a Menu,
    next: usize,
}

impl BlockContent for MenuContent<'_> {
    fn initialize(&mut self, _ctx: &RenderingContext) {
        self.next = 0;
    }

    fn has_more_lines(&mut self) -> bool {
        self.next < self.menu.items.len()
    }

    fn render_next_line(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
    ) -> Result<()> {
        let index = self.next;
        let Some(item) = self.menu.items.get(index) else {
            return Ok(());
        };
        self.next += 1;

        let bg = ctx.content_background();
        if self.menu.selected == Some(index) {
            let (fg, bg) = (
                Some(self.menu.selection_foreground),
                Some(self.menu.selection_background),
            );
            ctx.write_colored(out, SELECTED_MARKER, fg, bg)?;
            ctx.write_colored(out, &item.text, fg, bg)?;
            // highlight spans the whole row
            let fill = " ".repeat(ctx.remaining_width());
            ctx.write_colored(out, &fill, fg, bg)?;
        } else if item.enabled {
            ctx.write_colored(out, UNSELECTED_MARKER, ctx.foreground(), bg)?;
            ctx.write_colored(out, &item.text, ctx.foreground(), bg)?;
        } else {
            ctx.write_colored(out, UNSELECTED_MARKER, ctx.foreground(), bg)?;
            ctx.write_colored(out, &item.text, Some(self.menu.disabled_color), bg)?;
        }
        Ok(())
    }
}
