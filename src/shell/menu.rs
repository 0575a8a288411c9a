//! Menu choices and input parsing for the interactive shell

use crate::types::Quantity;
use rust_decimal::Decimal;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// The menu printed before every choice
pub const MENU: &str = "\n--- Inventory Management ---\n\
1. Add Item\n\
2. Remove Item\n\
3. View Quantity\n\
4. View All Items\n\
5. Check Low Stock\n\
6. Save & Exit";

/// An entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    RemoveItem,
    ViewQuantity,
    ViewAll,
    CheckLowStock,
    SaveAndExit,
}

/// Input that did not name a menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddItem),
            "2" => Ok(MenuChoice::RemoveItem),
            "3" => Ok(MenuChoice::ViewQuantity),
            "4" => Ok(MenuChoice::ViewAll),
            "5" => Ok(MenuChoice::CheckLowStock),
            "6" => Ok(MenuChoice::SaveAndExit),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

/// A numeric field that failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumber(pub String);

impl fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid number: '{}'", self.0)
    }
}

/// Parse a whole, non-negative quantity
pub fn parse_quantity(input: &str) -> Result<Quantity, InvalidNumber> {
    input
        .trim()
        .parse()
        .map_err(|_| InvalidNumber(input.trim().to_string()))
}

/// Parse a decimal price such as `2.5` or `10`
pub fn parse_price(input: &str) -> Result<Decimal, InvalidNumber> {
    Decimal::from_str(input.trim()).map_err(|_| InvalidNumber(input.trim().to_string()))
}

/// Print `prompt` and read one line of input
///
/// Returns `None` at end of input. The trailing line terminator is removed;
/// other whitespace is kept so item names are taken verbatim.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case::add("1", MenuChoice::AddItem)]
    #[case::remove("2", MenuChoice::RemoveItem)]
    #[case::view_quantity("3", MenuChoice::ViewQuantity)]
    #[case::view_all("4", MenuChoice::ViewAll)]
    #[case::low_stock("5", MenuChoice::CheckLowStock)]
    #[case::save_and_exit("6", MenuChoice::SaveAndExit)]
    #[case::surrounding_whitespace(" 4 ", MenuChoice::ViewAll)]
    fn test_menu_choice_parsing(#[case] input: &str, #[case] expected: MenuChoice) {
        assert_eq!(input.parse::<MenuChoice>(), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::zero("0")]
    #[case::seven("7")]
    #[case::word("add")]
    fn test_unknown_menu_choice(#[case] input: &str) {
        assert!(input.parse::<MenuChoice>().is_err());
    }

    #[rstest]
    #[case::plain("10", Ok(10))]
    #[case::padded(" 3 ", Ok(3))]
    #[case::negative("-1", Err(InvalidNumber("-1".to_string())))]
    #[case::fraction("1.5", Err(InvalidNumber("1.5".to_string())))]
    #[case::word("ten", Err(InvalidNumber("ten".to_string())))]
    fn test_parse_quantity(#[case] input: &str, #[case] expected: Result<Quantity, InvalidNumber>) {
        assert_eq!(parse_quantity(input), expected);
    }

    #[rstest]
    #[case::decimal("2.5", Decimal::new(25, 1))]
    #[case::integer("10", Decimal::new(10, 0))]
    #[case::cents(" 9.99", Decimal::new(999, 2))]
    fn test_parse_price(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_price(input), Ok(expected));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(
            parse_price("cheap"),
            Err(InvalidNumber("cheap".to_string()))
        );
    }

    #[test]
    fn test_prompt_reads_line_and_strips_terminator() {
        let mut input = Cursor::new("Blue Widget \r\nnext\n");
        let mut output = Vec::new();

        let line = prompt(&mut input, &mut output, "Enter item name: ").unwrap();

        assert_eq!(line.as_deref(), Some("Blue Widget "));
        assert_eq!(String::from_utf8(output).unwrap(), "Enter item name: ");
    }

    #[test]
    fn test_prompt_returns_none_at_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert_eq!(prompt(&mut input, &mut output, "> ").unwrap(), None);
    }
}
