//! Simple TOML parser for display configuration
//!
//! This is a minimal parser that handles only the subset needed for
//! `display.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - `[display]` and `[font]` section headers
//! - Key = value pairs (integer, hex integer, boolean, string)
//! - Comments (# ...)
//!
//! NOT supported:
//! - Nested or dotted sections
//! - Arrays and inline tables
//! - Multi-line strings

use super::types::{BusKind, Config};
use crate::font::{ConfigError, FontDescriptor};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section, or a line without `=`
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// The resulting configuration is not usable
    Config(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Font,
}

/// Parse `display.toml` contents
///
/// Missing keys keep their [`Config::default`] values. The result is
/// validated, so a font that does not fit the display is an error.
pub fn parse_config(input: &str) -> Result<Config, ParseError> {
    let mut config = Config::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::UnknownKey)?;
        let key = key.trim();
        let value = value.trim();

        match section {
            Section::Root => return Err(ParseError::UnknownKey),
            Section::Display => apply_display_key(&mut config, key, value)?,
            Section::Font => apply_font_key(&mut config, key, value)?,
        }
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "font" => Ok(Section::Font),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_display_key(config: &mut Config, key: &str, value: &str) -> Result<(), ParseError> {
    let display = &mut config.display;
    match key {
        "columns" => display.columns = parse_range(value, 1, 40)?,
        "rows" => display.rows = parse_range(value, 1, 4)?,
        "bus" => {
            display.bus = match parse_string(value)? {
                "i2c" => BusKind::I2c,
                "parallel" => BusKind::Parallel,
                _ => return Err(ParseError::InvalidValue),
            }
        }
        "i2c_address" => display.i2c_address = parse_range(value, 0x08, 0x77)?,
        "backlight" => display.backlight = parse_bool(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_font_key(config: &mut Config, key: &str, value: &str) -> Result<(), ParseError> {
    let font = &mut config.font;
    match key {
        "columns" => font.descriptor.columns = parse_range(value, 1, 3)?,
        "rows" => font.descriptor.rows = parse_range(value, 2, 4)?,
        "variant" => font.descriptor.variant = parse_range(value, 1, 3)?,
        "id" => font.descriptor = FontDescriptor::from_id(parse_range(value, 0, 0xFF)?)?,
        "gap" => font.gap = Some(parse_bool(value)?),
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Remove a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse a decimal or `0x` hex integer within `min..=max`
fn parse_range(value: &str, min: u8, max: u8) -> Result<u8, ParseError> {
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"));
    let parsed = match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => value.parse::<u32>(),
    }
    .map_err(|_| ParseError::InvalidValue)?;

    if parsed < u32::from(min) || parsed > u32::from(max) {
        return Err(ParseError::InvalidValue);
    }
    Ok(parsed as u8)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Front panel clock
[display]
columns = 16
rows = 2
bus = "parallel"   # wired straight to GPIO
i2c_address = 0x3F
backlight = false

[font]
columns = 3
rows = 2
variant = 2
gap = true
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.display.columns, 16);
        assert_eq!(config.display.rows, 2);
        assert_eq!(config.display.bus, BusKind::Parallel);
        assert_eq!(config.display.i2c_address, 0x3F);
        assert!(!config.display.backlight);
        assert_eq!(config.font.descriptor, FontDescriptor::FONT_3X2_V2);
        assert_eq!(config.font.gap, Some(true));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_font_id() {
        let config = parse_config("[font]\nid = 0x1B\n").unwrap();
        assert_eq!(config.font.descriptor, FontDescriptor::FONT_3X4_V2);
        assert_eq!(config.display, DisplayConfig::LCD_2004);

        assert_eq!(
            parse_config("[font]\nid = 0x0F\n"),
            Err(ParseError::Config(ConfigError::UnsupportedFont))
        );
    }

    #[test]
    fn test_parse_rejects_tall_font() {
        let config_str = "[display]\nrows = 2\n\n[font]\ncolumns = 3\nrows = 4\n";
        assert_eq!(
            parse_config(config_str),
            Err(ParseError::Config(ConfigError::FontTooTall))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_config("[lcd]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("columns = 20"), Err(ParseError::UnknownKey));
        assert_eq!(
            parse_config("[display]\ncontrast = 3"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("[display]\ncolumns = many"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nrows = 5"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nbus = \"spi\""),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[font]\ngap = yes"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("rows = 4 # four"), "rows = 4 ");
        assert_eq!(strip_comment("bus = \"i#c\""), "bus = \"i#c\"");
        assert_eq!(strip_comment("# only a comment"), "");
    }
}
