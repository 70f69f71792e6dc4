use katalog_core::assembly::Catalog;
use katalog_core::model::{columns, Row};
use katalog_core::pricing::format_price_display;

pub fn print_rows(rows: &[Row]) {
    if rows.is_empty() {
        println!("No product rows (header only).");
        return;
    }

    let max_kod = rows.iter().map(|r| r.kod().chars().count()).max().unwrap_or(3).max(3);

    println!("  {:<width$}  Nazwa", "Kod", width = max_kod);
    println!("  {}", "-".repeat(max_kod + 40));
    for row in rows {
        println!("  {:<width$}  {}", row.kod(), row.nazwa(), width = max_kod);
        for (column, value) in row.iter() {
            if column == columns::KOD || column == columns::NAZWA || value.is_empty() {
                continue;
            }
            println!("  {:<width$}    {}: {}", "", column, value, width = max_kod);
        }
    }
    println!("\n{} row(s)", rows.len());
}

pub fn print_catalog(catalog: &Catalog) {
    if catalog.sections.is_empty() {
        println!("The catalog is empty.\n");
        return;
    }

    for section in &catalog.sections {
        match section.parent {
            Some(ref parent) => println!("=== {} [{} < {}] ===\n", section.label, section.slug, parent),
            None => println!("=== {} [{}] ===\n", section.label, section.slug),
        }

        if section.items.is_empty() {
            println!("  (no products)\n");
            continue;
        }

        let max_name = section
            .items
            .iter()
            .map(|i| i.row.nazwa().chars().count())
            .max()
            .unwrap_or(10);

        for item in &section.items {
            let unit = item.row.get_or_empty(columns::JEDNOSTKA_MIARY);
            let per_unit = if unit.is_empty() {
                String::new()
            } else {
                format!(" / {unit}")
            };
            println!(
                "  {:<12} {:<width$}  {:>10}{}",
                item.row.kod(),
                item.row.nazwa(),
                format_price_display(&item.gross_price),
                per_unit,
                width = max_name
            );
        }
        println!();
    }
}

pub fn print_unmatched(rows: &[Row]) {
    if rows.is_empty() {
        return;
    }

    println!("Rows without a category (add a catch-all rule to keep them):");
    for row in rows {
        println!("    {} {}", row.kod(), row.nazwa());
    }
    println!();
}
