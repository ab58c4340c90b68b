use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use smartlearn_core::render::{Screen, SettingRowView, SettingValue, ViewerContentView};

const FOOTER_HINTS: &str = "arrows move  enter select  esc back  q quit";

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb {
        r: color[0],
        g: color[1],
        b: color[2],
    }
}

fn marker(selected: bool) -> &'static str {
    if selected { "> " } else { "  " }
}

fn setting_value_text(value: &SettingValue<'_>) -> String {
    match value {
        SettingValue::Label(label) => (*label).to_owned(),
        SettingValue::Toggle(on) => if *on { "[x]" } else { "[ ]" }.to_owned(),
        SettingValue::Number(number) => number.to_string(),
        SettingValue::Action(action) => format!("<{action}>"),
    }
}

fn header(out: &mut impl Write, title: &str, subtitle: &str) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
    )?;
    if !subtitle.is_empty() {
        queue!(out, Print("  -  "), Print(subtitle))?;
    }
    Ok(())
}

fn footer(out: &mut impl Write, row: u16, hints: &str) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, row),
        SetAttribute(Attribute::Dim),
        Print(hints),
        SetAttribute(Attribute::Reset),
    )
}

fn setting_rows(
    out: &mut impl Write,
    rows: &[SettingRowView<'_>],
    cursor: usize,
    editing: bool,
    first_row: u16,
) -> io::Result<()> {
    for (index, row) in rows.iter().enumerate() {
        let edit_mark = if editing && index == cursor { " *" } else { "" };
        queue!(
            out,
            MoveTo(2, first_row + index as u16),
            Print(format!(
                "{}{:<28}{}{}",
                marker(index == cursor),
                row.key,
                setting_value_text(&row.value),
                edit_mark
            )),
        )?;
    }
    Ok(())
}

pub(super) fn draw(out: &mut impl Write, screen: &Screen<'_>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    match screen {
        Screen::Home {
            title,
            subtitle,
            cards,
            menu,
            cursor,
            ..
        } => {
            header(out, title, subtitle)?;
            for (index, card) in cards.iter().enumerate() {
                queue!(
                    out,
                    MoveTo(2, 2 + index as u16),
                    Print(marker(*cursor == index)),
                    SetForegroundColor(rgb(card.color)),
                    Print(format!("{:<28}", card.title)),
                    ResetColor,
                    Print(format!("{} e-books", card.ebook_count)),
                )?;
            }
            for (offset, item) in menu.iter().enumerate() {
                let index = cards.len() + offset;
                queue!(
                    out,
                    MoveTo(2, 3 + index as u16),
                    Print(marker(*cursor == index)),
                    Print(item.label),
                )?;
            }
            footer(out, 5 + (cards.len() + menu.len()) as u16, FOOTER_HINTS)?;
        }
        Screen::CategoryDetail {
            title,
            color,
            items,
            cursor,
            ..
        } => {
            queue!(
                out,
                MoveTo(0, 0),
                SetForegroundColor(rgb(*color)),
                SetAttribute(Attribute::Bold),
                Print(title),
                SetAttribute(Attribute::Reset),
                ResetColor,
            )?;
            if items.is_empty() {
                queue!(out, MoveTo(2, 2), Print("No e-books in this category yet."))?;
            }
            for (index, item) in items.iter().enumerate() {
                queue!(
                    out,
                    MoveTo(2, 2 + index as u16),
                    Print(format!(
                        "{}{:<48} ages {}-{}  {}  {} pages",
                        marker(*cursor == index),
                        item.title,
                        item.age_min,
                        item.age_max,
                        item.duration_label,
                        item.page_total,
                    )),
                )?;
            }
            footer(out, 4 + items.len() as u16, FOOTER_HINTS)?;
        }
        Screen::Explore {
            title,
            rows,
            cursor,
            editing,
            ..
        } => {
            header(out, title, "Filter the library")?;
            setting_rows(out, rows, *cursor, *editing, 2)?;
            footer(
                out,
                4 + rows.len() as u16,
                "arrows move/adjust  enter toggle/edit  esc back",
            )?;
        }
        Screen::SearchResults {
            title,
            items,
            truncated,
            cursor,
            ..
        } => {
            header(out, title, "")?;
            queue!(
                out,
                Print(format!(
                    "  {} match{}{}",
                    items.len(),
                    if items.len() == 1 { "" } else { "es" },
                    if *truncated { " (list truncated)" } else { "" },
                )),
            )?;
            if items.is_empty() {
                queue!(out, MoveTo(2, 2), Print("Nothing matches these filters."))?;
            }
            for (index, item) in items.iter().enumerate() {
                queue!(
                    out,
                    MoveTo(2, 2 + index as u16),
                    Print(marker(*cursor == index)),
                    SetForegroundColor(rgb(item.color)),
                    Print(format!("{:<24}", item.category_title)),
                    ResetColor,
                    Print(format!(
                        "{:<48} ages {}-{}  {}",
                        item.title, item.age_min, item.age_max, item.duration_label,
                    )),
                )?;
            }
            footer(out, 4 + items.len() as u16, FOOTER_HINTS)?;
        }
        Screen::Viewer {
            title,
            content,
            page_number,
            page_total,
            full_screen,
            ..
        } => {
            let content_row = if *full_screen {
                0
            } else {
                header(out, title, "")?;
                queue!(
                    out,
                    Print(format!("  -  page {page_number}/{page_total}")),
                )?;
                2
            };
            match content {
                ViewerContentView::Page { image } => {
                    queue!(
                        out,
                        MoveTo(2, content_row),
                        Print(format!("[page image: {}]", image.path())),
                    )?;
                }
                ViewerContentView::Document { url } => {
                    queue!(
                        out,
                        MoveTo(2, content_row),
                        Print(format!("[full document: {url}]")),
                    )?;
                }
            }
            if !*full_screen {
                footer(
                    out,
                    content_row + 2,
                    "arrows page  1-9 jump  enter fullscreen  esc back",
                )?;
            }
        }
        Screen::Settings {
            title,
            rows,
            cursor,
            editing,
            ..
        } => {
            header(out, title, "")?;
            setting_rows(out, rows, *cursor, *editing, 2)?;
            footer(out, 4 + rows.len() as u16, FOOTER_HINTS)?;
        }
        Screen::About {
            app_name,
            version,
            lines,
            ..
        } => {
            header(out, app_name, version)?;
            for (index, line) in lines.iter().enumerate() {
                queue!(out, MoveTo(2, 2 + index as u16), Print(*line))?;
            }
            footer(out, 4 + lines.len() as u16, "enter/esc home  q quit")?;
        }
        Screen::Status {
            title,
            line1,
            line2,
            ..
        } => {
            header(out, title, "")?;
            queue!(
                out,
                MoveTo(2, 2),
                SetAttribute(Attribute::Bold),
                Print(*line1),
                SetAttribute(Attribute::Reset),
                MoveTo(2, 3),
                Print(*line2),
            )?;
            footer(out, 5, "enter/esc home  q quit")?;
        }
    }

    Ok(())
}
