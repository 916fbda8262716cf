use anyhow::{Context, Result};
use comfy_table::Table;

use inv_cli::pipeline::{CleanOptions, run_clean};
use inv_cli::types::CleanResult;
use inv_tables::Tables;

use crate::cli::{CleanArgs, TablesArgs};
use crate::summary::apply_table_style;

pub fn run_clean_command(args: &CleanArgs) -> Result<CleanResult> {
    let options = CleanOptions {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        tables: args.tables.clone(),
        dry_run: args.dry_run,
    };
    run_clean(&options)
}

pub fn run_tables(args: &TablesArgs) -> Result<()> {
    let tables = Tables::load_or_default(args.tables.as_deref()).context("load lookup tables")?;

    let mut aliases = Table::new();
    aliases.set_header(vec!["Alias", "Device type"]);
    apply_table_style(&mut aliases);
    for (alias, device_type) in &tables.device.aliases {
        aliases.add_row(vec![alias.as_str(), device_type.as_str()]);
    }
    println!("Device aliases:");
    println!("{aliases}");

    let mut keywords = Table::new();
    keywords.set_header(vec!["Priority", "Device type", "Keywords"]);
    apply_table_style(&mut keywords);
    for (index, rule) in tables.device.keywords.iter().enumerate() {
        keywords.add_row(vec![
            (index + 1).to_string(),
            rule.device_type.clone(),
            rule.keywords.join(", "),
        ]);
    }
    println!("Device keywords (first match wins):");
    println!("{keywords}");

    println!("Team keywords: {}", tables.team.keywords.join(", "));

    let mut sites = Table::new();
    sites.set_header(vec!["Site token", "Canonical"]);
    apply_table_style(&mut sites);
    for (token, canonical) in &tables.site.abbreviations {
        sites.add_row(vec![token.as_str(), canonical.as_str()]);
    }
    println!("Site abbreviations:");
    println!("{sites}");
    println!("Site null markers: {}", tables.site.null_markers.join(", "));
    Ok(())
}
