use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{CalcError, Result};
use crate::models::Order;
use crate::planner::constants::{DEFAULT_CATALOG_PATH, DEFAULT_ORDER_QUANTITY, DEFAULT_SETTINGS_PATH};

/// Idle Planet Calculator: expands crafting orders into the ores, alloys and value they need.
#[derive(Parser, Debug)]
#[command(name = "idle_planet_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Path to the bonus settings JSON file.
    #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate the bill of materials for a set of orders.
    Calc {
        /// An order as NAME=QTY (repeatable). QTY defaults to 1.
        #[arg(short, long = "order", value_name = "NAME=QTY")]
        orders: Vec<String>,

        /// Read orders from a JSON file instead.
        #[arg(long, conflicts_with = "orders")]
        orders_file: Option<PathBuf>,

        /// Also write the bill to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the items that can be ordered.
    Items,

    /// Show or change the production bonuses.
    Bonus {
        #[arg(long, value_name = "MULT")]
        final_amount: Option<String>,

        #[arg(long, value_name = "MULT")]
        final_room: Option<String>,

        #[arg(long, value_name = "MULT")]
        final_value: Option<String>,

        #[arg(long, value_name = "MULT")]
        intermediate_amount: Option<String>,

        #[arg(long, value_name = "MULT")]
        intermediate_room: Option<String>,

        #[arg(long, value_name = "MULT")]
        intermediate_value: Option<String>,

        /// Enable or disable the item efficiency bonuses.
        #[arg(long)]
        final_efficiency: Option<bool>,

        /// Enable or disable the alloy efficiency bonuses.
        #[arg(long)]
        intermediate_efficiency: Option<bool>,

        /// Reset every bonus to its default.
        #[arg(long)]
        reset: bool,

        /// Edit the bonuses through prompts.
        #[arg(short, long)]
        interactive: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc {
            orders: Vec::new(),
            orders_file: None,
            csv: None,
        }
    }
}

/// Parse an order given as `NAME=QTY` or just `NAME`.
pub fn parse_order_arg(arg: &str) -> Result<Order> {
    let (name, quantity) = match arg.rsplit_once('=') {
        Some((name, qty)) => {
            let quantity = qty
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|q| *q > 0)
                .ok_or_else(|| CalcError::InvalidInput(format!("invalid quantity in '{}'", arg)))?;
            (name, quantity)
        }
        None => (arg, DEFAULT_ORDER_QUANTITY),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(CalcError::InvalidInput(format!("missing item name in '{}'", arg)));
    }

    Ok(Order::new(name, quantity))
}
