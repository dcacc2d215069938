//! Main CLI application structure

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use crate::domain::{calculate_area, Shape};

/// Shape used when no subcommand is given
pub const EXAMPLE_SHAPE: Shape = Shape::Rectangle {
    width: 4.0,
    height: 6.0,
};

#[derive(Parser)]
#[command(name = "shape-area")]
#[command(author, version, about = "Compute the area of a circle or rectangle")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Defaults to the example rectangle (4 x 6) when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Area of a circle
    Circle {
        /// Circle radius
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },

    /// Area of a rectangle
    Rectangle {
        /// Rectangle width
        #[arg(allow_negative_numbers = true)]
        width: f64,

        /// Rectangle height
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },

    /// Area of a shape given as tagged JSON
    Eval {
        /// e.g. '{"shape":"circle","radius":2}'
        json: String,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("shape-area starting");

    let shape = match cli.command {
        None => {
            output.verbose("No command given, using example rectangle");
            EXAMPLE_SHAPE
        }
        Some(Commands::Circle { radius }) => Shape::circle(radius),
        Some(Commands::Rectangle { width, height }) => Shape::rectangle(width, height),
        Some(Commands::Eval { json }) => {
            output.verbose_ctx("eval", &format!("Parsing: {}", json));
            Shape::from_json(&json).context("Failed to read shape")?
        }
    };

    output.verbose_ctx(shape.kind().as_str(), &format!("{:?}", shape));
    let area = calculate_area(&shape);
    output.verbose_ctx(shape.kind().as_str(), &format!("area = {}", area));
    output.area(&shape, area);

    output.verbose("Command completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn example_shape_area() {
        assert_eq!(calculate_area(&EXAMPLE_SHAPE), 24.0);
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["shape-area"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn negative_dimensions_parse() {
        let cli = Cli::try_parse_from(["shape-area", "rectangle", "-2", "3"]).unwrap();
        match cli.command {
            Some(Commands::Rectangle { width, height }) => {
                assert_eq!(width, -2.0);
                assert_eq!(height, 3.0);
            }
            _ => panic!("expected rectangle command"),
        }
    }

    #[test]
    fn global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["shape-area", "circle", "2", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
