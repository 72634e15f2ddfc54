use carbonprint_core::error::CarbonError;
use carbonprint_core::product::builtin_catalog;

pub fn list() -> Result<(), CarbonError> {
    let catalog = builtin_catalog()?;

    println!("{} (v{})\n", catalog.name, catalog.version);
    for entry in &catalog.categories {
        println!("  {}", entry.keyword);
        if let Some(ref impact) = entry.impact {
            println!("    water:  {}", impact.water_usage);
            println!("    energy: {}", impact.energy_consumption);
        }
        for alt in &entry.alternatives {
            println!("    -> {:<36} {} kg CO2e", alt.name, alt.carbon_score);
        }
        println!();
    }
    Ok(())
}
