//! mensura - convert values between declared units of measure
//!
//! The library never logs and surfaces exactly one hard error, the strict
//! parser's `InvalidUnit`; this layer translates that into user-facing
//! messages.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use mensura_units::families::momentum::Momentum;
use mensura_units::families::temperature::Temperature;
use mensura_units::families::torque::Torque;
use mensura_units::{Unit, UnitFamily};

#[derive(Parser)]
#[command(name = "mensura", version, about = "Convert values between units of measure")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a value from one unit to another in the same family
    Convert {
        value: f64,
        /// Symbol of the source unit, e.g. "N⋅s"
        from: String,
        /// Symbol of the target unit, e.g. "lbf⋅s"
        to: String,
    },
    /// List declared unit symbols
    Symbols {
        /// Restrict to one family (momentum, torque, temperature)
        #[arg(long)]
        family: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Command::Convert { value, from, to } => {
            println!("{}", convert(value, &from, &to)?);
        }
        Command::Symbols { family } => {
            for line in symbol_listing(family.as_deref())? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Convert across whichever family declares the source symbol. Families are
/// tried in a fixed order; the source unit picks the family and the target
/// must then parse in the same one.
fn convert(value: f64, from: &str, to: &str) -> Result<String> {
    if let Some(result) = convert_in::<Momentum>(value, from, to)? {
        return Ok(result);
    }
    if let Some(result) = convert_in::<Torque>(value, from, to)? {
        return Ok(result);
    }
    if let Some(result) = convert_in::<Temperature>(value, from, to)? {
        return Ok(result);
    }
    bail!("no unit family declares the symbol {from:?}");
}

/// `Ok(None)` when `from` is not a symbol of `F`; an error when `from`
/// resolves in `F` but `to` does not.
fn convert_in<F: UnitFamily>(value: f64, from: &str, to: &str) -> Result<Option<String>> {
    let Some(from_unit) = Unit::<F>::try_parse(from) else {
        return Ok(None);
    };
    let to_unit = Unit::<F>::parse(to)
        .with_context(|| format!("{from:?} is a {} unit; the target must be too", F::NAME))?;

    let quantity = value * from_unit;
    let converted = to_unit.scalar_value(&quantity);
    tracing::debug!(
        family = F::NAME,
        canonical = quantity.si_value(),
        "converted through the canonical unit"
    );
    Ok(Some(format!("{converted} {to_unit}")))
}

fn symbols_of<F: UnitFamily>() -> String {
    let symbols: Vec<&str> = F::VARIANTS.iter().filter_map(|unit| unit.symbol()).collect();
    format!("{}: {}", F::NAME, symbols.join(", "))
}

fn symbol_listing(family: Option<&str>) -> Result<Vec<String>> {
    let listing = match family {
        None => vec![
            symbols_of::<Momentum>(),
            symbols_of::<Torque>(),
            symbols_of::<Temperature>(),
        ],
        Some("momentum") => vec![symbols_of::<Momentum>()],
        Some("torque") => vec![symbols_of::<Torque>()],
        Some("temperature") => vec![symbols_of::<Temperature>()],
        Some(other) => bail!("unknown family {other:?}"),
    };
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_within_momentum() {
        let out = convert(1.0, "kN⋅s", "N⋅s").unwrap();
        assert_eq!(out, "1000 N⋅s");
    }

    #[test]
    fn test_convert_temperature() {
        let out = convert(100.0, "°C", "°F").unwrap();
        assert!(out.ends_with("°F"));
        let value: f64 = out.split_whitespace().next().unwrap().parse().unwrap();
        assert!((value - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_unknown_source() {
        let err = convert(1.0, "bogus", "N⋅s").unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_convert_cross_family_target() {
        // Source resolves in momentum, target is a torque symbol.
        let err = convert(1.0, "N⋅s", "N⋅m").unwrap_err();
        assert!(err.to_string().contains("momentum"));
    }

    #[test]
    fn test_symbol_listing_all() {
        let lines = symbol_listing(None).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("momentum: "));
        assert!(lines[0].contains("N⋅s"));
    }

    #[test]
    fn test_symbol_listing_unknown_family() {
        assert!(symbol_listing(Some("length")).is_err());
    }
}
