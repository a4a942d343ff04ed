use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right aligned money cell.
pub fn amount_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right)
}

/// Right aligned percentage cell.
pub fn percentage_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.1}%")).set_alignment(CellAlignment::Right)
}

/// Allocation total cell, red once it passes 100%.
pub fn total_allocation_cell(total: f64) -> Cell {
    let cell = percentage_cell(total).add_attribute(Attribute::Bold);
    if total > 100.0 {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::Green)
    }
}

/// Creates a cell for displaying percentage change with color coding.
pub fn change_cell(change: f64) -> Cell {
    let text = if change > 0.0 {
        format!("+{change}%")
    } else {
        format!("{change}%")
    };
    if change > 0.0 {
        Cell::new(text)
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right)
    } else {
        Cell::new(text)
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right)
    }
}

/// Parses a `#RRGGBB` display colour.
pub fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Cell tinted with a configured display colour, plain when the colour is unusable.
pub fn colored_cell(text: &str, hex: &str) -> Cell {
    let cell = Cell::new(text);
    match hex_color(hex) {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

/// Text tinted with a `#RRGGBB` display colour, unstyled when the colour is unusable.
pub fn tint_text(text: &str, hex: &str) -> String {
    match hex_color(hex) {
        Some(Color::Rgb { r, g, b }) => style(text).color256(ansi256(r, g, b)).bold().to_string(),
        _ => text.to_string(),
    }
}

/// Nearest colour in the 6x6x6 cube of the 256 colour palette.
fn ansi256(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| (u16::from(c) * 5 + 127) / 255;
    (16 + 36 * level(r) + 6 * level(g) + level(b)) as u8
}

/// Text bar of `width` characters filled to `fraction`.
pub fn bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(
            hex_color("#10B981"),
            Some(Color::Rgb {
                r: 0x10,
                g: 0xB9,
                b: 0x81
            })
        );
        assert_eq!(hex_color("green"), None);
        assert_eq!(hex_color("#12345"), None);
        assert_eq!(hex_color("#GG0000"), None);
    }

    #[test]
    fn test_tint_text() {
        assert_eq!(ansi256(0, 0, 0), 16);
        assert_eq!(ansi256(255, 255, 255), 231);
        assert_eq!(ansi256(0xEF, 0x44, 0x44), 203);
        assert!(tint_text("High Risk", "#EF4444").contains("High Risk"));
        assert_eq!(tint_text("Calm", "green"), "Calm");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(2.0, 3), "███");
        assert_eq!(bar(-1.0, 2), "░░");
    }
}
