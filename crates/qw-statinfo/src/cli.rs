// Command-line arguments for qw-statinfo.

use clap::{Parser, Subcommand, ValueEnum};
use qw_stats::ActiveWeaponEncoding;

#[derive(Parser, Debug)]
#[command(name = "qw-statinfo")]
#[command(about = "Decode QuakeWorld stat indices, item masks and weapon values", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Decode an STAT_ITEMS mask (decimal, negative, or 0x hex)
    Items {
        #[arg(value_parser = parse_mask, allow_hyphen_values = true)]
        mask: u32,
    },
    /// Classify a stat index
    Stat { index: usize },
    /// Resolve a STAT_ACTIVEWEAPON value
    Weapon {
        #[arg(allow_hyphen_values = true)]
        value: i32,
        /// Overrides QW_ACTIVE_WEAPON
        #[arg(long, value_enum)]
        encoding: Option<EncodingArg>,
    },
    /// List every stat slot
    Table,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EncodingArg {
    Item,
    Number,
}

impl From<EncodingArg> for ActiveWeaponEncoding {
    fn from(value: EncodingArg) -> Self {
        match value {
            EncodingArg::Item => ActiveWeaponEncoding::ItemBit,
            EncodingArg::Number => ActiveWeaponEncoding::Number,
        }
    }
}

/// Accepts the raw mask as a stat value would print it, including the
/// negative form produced when sigil 4 is held.
pub fn parse_mask(input: &str) -> Result<u32, String> {
    let text = input.trim();
    let parsed = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if text.starts_with('-') {
        text.parse::<i32>().ok().map(|value| value as u32)
    } else {
        text.parse::<u32>().ok()
    };
    parsed.ok_or_else(|| format!("invalid item mask: {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mask_forms() {
        assert_eq!(parse_mask("3840"), Ok(3840));
        assert_eq!(parse_mask("0xF00"), Ok(3840));
        assert_eq!(parse_mask("-2147483648"), Ok(1 << 31));
        assert!(parse_mask("shells").is_err());
    }

    #[test]
    fn parses_items_command() {
        let cli = Cli::try_parse_from(["qw-statinfo", "items", "0x1001"]).unwrap();
        assert_eq!(cli.command, Command::Items { mask: 0x1001 });
    }

    #[test]
    fn parses_weapon_encoding_flag() {
        let cli =
            Cli::try_parse_from(["qw-statinfo", "weapon", "7", "--encoding", "number"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Weapon {
                value: 7,
                encoding: Some(EncodingArg::Number)
            }
        );
    }

    #[test]
    fn rejects_bad_stat_index() {
        assert!(Cli::try_parse_from(["qw-statinfo", "stat", "health"]).is_err());
    }
}
