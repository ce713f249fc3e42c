use super::styles::{HEADER, ID, LABEL, TIME};
use chrono::Utc;
use colored::Colorize;
use shelfwise::api::{CmdMessage, MessageLevel};
use shelfwise::config::ShelfwiseConfig;
use shelfwise::view::{format_timestamp, DetailView, Listing};
use std::time::Duration;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const TIME_WIDTH: usize = 14;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_listing(listing: &Listing, name_width: usize) {
    if listing.is_empty() {
        println!("No {} records found.", listing.kind);
        return;
    }

    let mut header = format!("{}{}", pad("ID", ID_WIDTH), pad("Name", name_width + 1));
    for column in listing.columns {
        header.push_str(&pad(column.header, column.width + 1));
    }
    header.push_str("Updated");
    println!("{}", HEADER.apply_to(header));

    for row in &listing.rows {
        let mut line = String::new();
        for (column, cell) in listing.columns.iter().zip(&row.cells) {
            line.push_str(&pad(&truncate_to_width(cell, column.width), column.width + 1));
        }
        println!(
            "{}{}{}{}",
            ID.apply_to(pad(&row.id.to_string(), ID_WIDTH)),
            pad(&truncate_to_width(&row.name, name_width), name_width + 1),
            line,
            TIME.apply_to(format_time_ago(row.updated))
        );
    }
}

pub fn print_details(details: &[DetailView]) {
    for (i, view) in details.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {} {}",
            view.kind.label().bold(),
            ID.apply_to(view.id),
            view.name.bold()
        );
        let mut rows: Vec<(&str, String)> = view.fields.clone();
        rows.push(("Tags", view.tags.clone()));
        rows.push(("Created", format_timestamp(view.created)));
        rows.push(("Updated", format_timestamp(view.updated)));
        for (label, value) in rows {
            println!("  {} {}", LABEL.apply_to(pad(&format!("{}:", label), 11)), value);
        }
        if !view.description.is_empty() {
            println!();
            for line in view.description.lines() {
                println!("  {}", line);
            }
        }
    }
}

pub fn print_config(config: &ShelfwiseConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key.bold(), value);
    }
}

/// Left-aligns `s` in a field of `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: i64) -> String {
    let elapsed = (Utc::now().timestamp() - timestamp).max(0);
    let formatter = Formatter::new();
    let time_str = formatter.convert(Duration::from_secs(elapsed as u64));
    pad(&time_str, TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept() {
        assert_eq!(truncate_to_width("Hammer", 6), "Hammer");
        assert_eq!(truncate_to_width("", 3), "");
    }

    #[test]
    fn long_text_ends_with_ellipsis() {
        let cut = truncate_to_width("Winter clothes", 8);
        assert_eq!(cut, "Winter …");
        assert_eq!(cut.width(), 8);
    }

    #[test]
    fn wide_characters_count_double() {
        let cut = truncate_to_width("倉庫の棚です", 5);
        assert_eq!(cut, "倉庫…");
        assert!(cut.width() <= 5);
    }

    #[test]
    fn pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }

    #[test]
    fn recent_times_read_as_now() {
        let shown = format_time_ago(Utc::now().timestamp());
        assert!(shown.starts_with("now") || shown.contains("second"));
        assert_eq!(shown.width(), TIME_WIDTH);
    }
}
