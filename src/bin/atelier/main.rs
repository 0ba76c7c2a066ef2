//! Atelier command-line front end
//!
//! `atelier compendium` lists the essences; `atelier vial` replays a shopping
//! session against a cart store with the header badge and vial drawer
//! subscribed, then prints both.

use std::{cell::RefCell, io, rc::Rc};

use anyhow::Result;
use tracing::{info, warn};

use atelier::prelude::*;

use crate::config::{Command, Config, VialArgs};

mod config;
mod logging;

/// Atelier entry point
///
/// # Errors
///
/// Returns an error if logging cannot be initialised, the compendium cannot
/// be loaded, or output cannot be written.
pub fn main() -> Result<()> {
    let config = Config::load();

    logging::init_subscriber(&config.logging)?;

    let catalogue = match &config.catalogue {
        Some(path) => Catalogue::from_path(path)?,
        None => Catalogue::compendium()?,
    };

    let stdout = io::stdout();
    let handle = stdout.lock();

    match config.command {
        Command::Compendium { featured } => catalogue.write_listing(handle, featured)?,
        Command::Vial(args) => replay_session(&Rc::new(catalogue), &args, handle)?,
    }

    Ok(())
}

fn replay_session(
    catalogue: &Rc<Catalogue>,
    args: &VialArgs,
    mut out: impl io::Write,
) -> Result<()> {
    let mut store = CartStore::new(catalogue.currency());

    let badge = Rc::new(RefCell::new(HeaderBadge::default()));
    let drawer = Rc::new(RefCell::new(VialDrawer::new(Rc::clone(catalogue))));

    store.subscribe(Rc::clone(&badge));
    store.subscribe(Rc::clone(&drawer));

    for line in &args.add {
        let Some(product) = catalogue.get(&line.product_id) else {
            warn!(product_id = %line.product_id, "not in the compendium, skipping");
            continue;
        };

        store.add_product(product, line.quantity);
    }

    for product_id in &args.remove {
        store.remove_item(product_id);
    }

    if args.checkout {
        store.complete_checkout();
    }

    info!(
        lines = store.len(),
        total = %store.total(),
        "session replayed"
    );

    let badge_label = badge.borrow().label();
    writeln!(out, "Vial badge: {}", badge_label.as_deref().unwrap_or("hidden"))?;
    writeln!(out)?;

    let mut view = drawer.borrow_mut();
    view.open();
    view.write_to(&mut out)?;

    Ok(())
}
