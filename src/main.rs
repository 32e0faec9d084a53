use std::path::Path;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use idle_planet_calc_rs::catalog::{Catalog, load_catalog};
use idle_planet_calc_rs::cli::{Cli, Command, parse_order_arg};
use idle_planet_calc_rs::error::{CalcError, Result};
use idle_planet_calc_rs::interface::{
    collect_orders, display_bill, display_items, display_summary, prompt_bonus_settings,
    write_bill_csv,
};
use idle_planet_calc_rs::models::Order;
use idle_planet_calc_rs::planner::{bill, breakdown};
use idle_planet_calc_rs::state::{
    BonusSettings, OrderBook, load_orders, load_settings, parse_multiplier, save_settings,
};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc {
            orders,
            orders_file,
            csv,
        } => cmd_calc(
            &cli.catalog,
            &cli.settings,
            &orders,
            orders_file.as_deref(),
            csv.as_deref(),
        ),
        Command::Items => cmd_items(&cli.catalog),
        Command::Bonus {
            final_amount,
            final_room,
            final_value,
            intermediate_amount,
            intermediate_room,
            intermediate_value,
            final_efficiency,
            intermediate_efficiency,
            reset,
            interactive,
        } => {
            let edits = BonusEdits {
                final_amount,
                final_room,
                final_value,
                intermediate_amount,
                intermediate_room,
                intermediate_value,
                final_efficiency,
                intermediate_efficiency,
            };
            cmd_bonus(&cli.settings, edits, reset, interactive)
        }
    }
}

fn open_catalog(path: &Path) -> Result<Option<Catalog>> {
    if !path.exists() {
        eprintln!("Catalog file not found: {}", path.display());
        eprintln!("Please ensure inventory.json exists in the current directory.");
        return Ok(None);
    }

    let catalog = load_catalog(path)?;
    println!("Loaded {} items", catalog.len());
    Ok(Some(catalog))
}

/// Match typed order names against the catalog and merge repeats.
fn resolve_orders(catalog: &Catalog, orders: Vec<Order>) -> Result<OrderBook> {
    let mut book = OrderBook::new();
    for order in orders {
        let item = catalog
            .find(&order.item)
            .ok_or_else(|| CalcError::ItemNotFound(order.item.clone()))?;
        book.add(&item.name, order.quantity)?;
    }
    Ok(book)
}

/// Expand the orders and print the bill and per-order summary.
fn cmd_calc(
    catalog_path: &Path,
    settings_path: &Path,
    order_args: &[String],
    orders_file: Option<&Path>,
    csv_path: Option<&Path>,
) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    let settings = load_settings(settings_path)?;
    let config = settings.resolve();
    debug!(?config, "bonus snapshot");

    let book = if !order_args.is_empty() {
        let orders = order_args
            .iter()
            .map(|arg| parse_order_arg(arg))
            .collect::<Result<Vec<_>>>()?;
        resolve_orders(&catalog, orders)?
    } else if let Some(path) = orders_file {
        resolve_orders(&catalog, load_orders(path)?)?
    } else {
        println!();
        collect_orders(&catalog)?
    };

    if book.is_empty() {
        return Err(CalcError::NoOrders);
    }

    let orders = book.into_orders();
    let entries = bill(&catalog, &config, &orders)?;
    let summary = breakdown(&catalog, &config, &orders)?;

    display_bill(&entries);
    display_summary(&summary);

    if let Some(path) = csv_path {
        write_bill_csv(&entries, path)?;
        println!("Wrote bill to {}", path.display());
    }

    Ok(())
}

/// List orderable items.
fn cmd_items(catalog_path: &Path) -> Result<()> {
    if let Some(catalog) = open_catalog(catalog_path)? {
        display_items(&catalog);
    }
    Ok(())
}

/// Bonus values given on the command line, as typed.
struct BonusEdits {
    final_amount: Option<String>,
    final_room: Option<String>,
    final_value: Option<String>,
    intermediate_amount: Option<String>,
    intermediate_room: Option<String>,
    intermediate_value: Option<String>,
    final_efficiency: Option<bool>,
    intermediate_efficiency: Option<bool>,
}

impl BonusEdits {
    fn is_empty(&self) -> bool {
        self.final_amount.is_none()
            && self.final_room.is_none()
            && self.final_value.is_none()
            && self.intermediate_amount.is_none()
            && self.intermediate_room.is_none()
            && self.intermediate_value.is_none()
            && self.final_efficiency.is_none()
            && self.intermediate_efficiency.is_none()
    }

    fn apply(self, settings: &mut BonusSettings) {
        let set = |slot: &mut f64, text: Option<String>| {
            if let Some(text) = text {
                *slot = parse_multiplier(&text);
            }
        };

        set(&mut settings.final_amount, self.final_amount);
        set(&mut settings.final_room, self.final_room);
        set(&mut settings.final_value, self.final_value);
        set(&mut settings.intermediate_amount, self.intermediate_amount);
        set(&mut settings.intermediate_room, self.intermediate_room);
        set(&mut settings.intermediate_value, self.intermediate_value);

        if let Some(enabled) = self.final_efficiency {
            settings.final_efficiency = enabled;
        }
        if let Some(enabled) = self.intermediate_efficiency {
            settings.intermediate_efficiency = enabled;
        }
    }
}

/// Show or update the persisted bonus settings.
fn cmd_bonus(settings_path: &Path, edits: BonusEdits, reset: bool, interactive: bool) -> Result<()> {
    let mut settings = if reset {
        BonusSettings::default()
    } else {
        load_settings(settings_path)?
    };

    if !reset && !interactive && edits.is_empty() {
        println!("{}", settings.display());
        return Ok(());
    }

    edits.apply(&mut settings);
    if interactive {
        settings = prompt_bonus_settings(&settings)?;
    }

    save_settings(settings_path, &settings)?;
    println!("{}", settings.display());
    println!("Bonus settings saved.");
    Ok(())
}
