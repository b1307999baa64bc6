use consolekit::widget::builtin::{
    Border, BorderType, Column, ContentControl, DataGrid, Menu, MenuItem, Prompt, Repeater,
    StackPanel, TextBlock, YesNoQuestion,
};
use consolekit::{
    render_to_string, CloseSignal, Control, Error, HorizontalAlignment, RenderingOptions,
    StringDisplay, Styled, TextOverflow, Theme, Thickness,
};
use std::io::Cursor;

#[test]
fn test_grid_inside_border() {
    let columns = [Column::new("Key"), Column::new("Value").max_width(8)];
    let grid = DataGrid::themed(columns, &Theme::dark())
        .row(["path", "/usr/local/bin"])
        .row(["shell", "zsh"]);
    let border = Border::new()
        .border_type(BorderType::Heavy)
        .content(grid.margin(Thickness::symmetric(0, 1)));

    assert_eq!(
        render_to_string(&border, None).unwrap(),
        "┏━━━━━━━━━━━━━━━━━━┓\n\
         ┃ ┌─────┬────────┐ ┃\n\
         ┃ │Key  │Value   │ ┃\n\
         ┃ ├─────┼────────┤ ┃\n\
         ┃ │path │/usr/loc│ ┃\n\
         ┃ │     │al/bin  │ ┃\n\
         ┃ │shell│zsh     │ ┃\n\
         ┃ └─────┴────────┘ ┃\n\
         ┗━━━━━━━━━━━━━━━━━━┛\n"
    );
}

#[test]
fn test_menu_navigation_through_render() {
    let mut menu = Menu::themed(&Theme::light())
        .item(MenuItem::new("New"))
        .item(MenuItem::new("Open"))
        .item(MenuItem::disabled("Recent"))
        .item(MenuItem::new("Exit"));

    menu.select_previous();
    assert_eq!(menu.selected_item().map(|item| item.text.as_str()), Some("Exit"));
    menu.select_previous();
    assert_eq!(menu.selected_index(), Some(1));

    let framed = ContentControl::new(menu).margin(Thickness::new(2, 0, 0, 0));
    assert_eq!(
        render_to_string(&framed, None).unwrap(),
        "    New   \n  > Open  \n    Recent\n    Exit  \n"
    );
}

#[test]
fn test_repeater_with_shared_close_signal() {
    let close = CloseSignal::new();
    let repeater = Repeater::new(TextBlock::new("tick")).close_signal(close.clone());
    let mut renderer = repeater.create_renderer(RenderingOptions::root(None));
    let mut out = StringDisplay::new();

    let mut lines = 0;
    while renderer.has_more_lines() {
        renderer.render_next_line(&mut out).unwrap();
        lines += 1;
        if lines == 5 {
            close.request_close();
        }
    }

    assert_eq!(lines, 5);
    assert!(out.lines().iter().all(|line| *line == "tick"));
}

#[test]
fn test_prompt_retries_then_accepts() {
    let prompt = Prompt::<f64>::new("Ratio:").unwrap();
    let mut out = StringDisplay::with_width(40);
    let mut input = Cursor::new("half\n0.5\n");

    let value = prompt.read(&mut input, &mut out).unwrap();

    assert_eq!(value, 0.5);
    assert_eq!(
        out.lines(),
        ["Ratio: ", "Invalid value: invalid float literal", "Ratio: "]
    );
}

#[test]
fn test_prompt_label_respects_style() {
    let prompt = Prompt::<String>::new("Name?")
        .unwrap()
        .margin(Thickness::new(2, 0, 0, 0));
    let mut out = StringDisplay::new();
    prompt.read(&mut Cursor::new("Lin\n"), &mut out).unwrap();
    assert_eq!(out.contents(), "  Name? \n");
}

#[test]
fn test_yes_no_input_closed() {
    let question = YesNoQuestion::new("Proceed?").unwrap().default_answer(true);
    let mut out = StringDisplay::new();
    assert!(question.read(&mut Cursor::new("\n"), &mut out).unwrap());
    assert!(matches!(
        question.read(&mut Cursor::new(""), &mut out),
        Err(Error::InputClosed)
    ));
    assert_eq!(out.contents(), "Proceed? [Y/n] \nProceed? [Y/n] ");
}

#[test]
fn test_stack_of_mixed_widgets() {
    let panel = StackPanel::new()
        .alignment(HorizontalAlignment::Stretch)
        .child(
            TextBlock::new("abcdefghij")
                .overflow(TextOverflow::CutChar)
                .alignment(HorizontalAlignment::Center),
        )
        .child(Border::new().border_type(BorderType::Rounded).content(TextBlock::new("ok")));

    assert_eq!(
        render_to_string(&panel, Some(6)).unwrap(),
        "abcdef\nghij  \n╭──╮  \n│ok│  \n╰──╯  \n"
    );
}
