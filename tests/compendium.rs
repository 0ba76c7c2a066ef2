//! Integration tests for loading the compendium.

use std::io::Write;

use rusty_money::{Money, iso::SGD};
use testresult::TestResult;

use atelier::prelude::*;

#[test]
fn bundled_compendium_is_ordered_by_folio() -> TestResult {
    let catalogue = Catalogue::compendium()?;

    let folios: Vec<u32> = catalogue.iter().map(|product| product.folio).collect();
    let mut sorted = folios.clone();
    sorted.sort_unstable();

    assert_eq!(folios, sorted);
    assert!(catalogue.featured().count() > 0, "no featured essences");

    Ok(())
}

#[test]
fn bundled_compendium_prices_scenario_products() -> TestResult {
    let catalogue = Catalogue::compendium()?;

    let lavender = catalogue.get("lavender-5ml").ok_or("lavender missing")?;
    let bergamot = catalogue.get("bergamot-5ml").ok_or("bergamot missing")?;

    assert_eq!(lavender.price, Money::from_minor(4200, SGD));
    assert_eq!(bergamot.price, Money::from_minor(4800, SGD));
    assert_eq!(lavender.folio_label(), "Folio I");

    Ok(())
}

#[test]
fn compendium_loads_from_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;

    writeln!(
        file,
        "products:\n  - {{ id: cedar-5ml, latin_name: Cedrus atlantica, common_name: Cedarwood, price: 30.50 SGD, folio: 9 }}"
    )?;

    let catalogue = Catalogue::from_path(file.path())?;
    let cedar = catalogue.get("cedar-5ml").ok_or("cedar missing")?;

    assert_eq!(catalogue.len(), 1);
    assert_eq!(cedar.price, Money::from_minor(3050, SGD));
    assert!(!cedar.featured);

    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let result = Catalogue::from_path("does/not/exist.yml");

    assert!(matches!(result, Err(CatalogueError::Io(_))));
}
