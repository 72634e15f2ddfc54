use carbonprint_core::model::{Grade, ProductSustainability, ScanRecord};
use carbonprint_core::scoring::{multiplier, CarbonScore, UserStats};
use rust_decimal::Decimal;

pub fn print_score(quantity: Decimal, grade: Option<Grade>, score: &CarbonScore, points: i64) {
    let grade_info = match grade {
        Some(g) => format!("{} (x{})", g, multiplier(grade)),
        None => format!("unknown (x{})", multiplier(None)),
    };

    println!("  Quantity:      {} g", quantity);
    println!("  Grade:         {}", grade_info);
    print_carbon_score(score);
    println!("  Eco-points:    {}", signed(points));
}

fn print_carbon_score(score: &CarbonScore) {
    println!(
        "  Carbon score:  {} kg CO2e ({})",
        score.value, score.rating
    );
    println!("    production      {}", score.details.production);
    println!("    transportation  {}", score.details.transportation);
    println!("    disposal        {}", score.details.disposal);
}

pub fn print_product(product: &ProductSustainability) {
    println!("=== {} ===\n", product.name);

    if let Some(ref brand) = product.brand {
        println!("  Brand:         {}", brand);
    }
    println!("  Barcode:       {}", product.id);
    println!("  Quantity:      {}", product.quantity);
    print_carbon_score(&product.carbon_score);
    println!();

    if !product.certifications.is_empty() {
        println!("  Certifications: {}", product.certifications.join(", "));
    }
    if !product.sustainability_badges.is_empty() {
        println!("  Badges:         {}", product.sustainability_badges.join(", "));
    }
    println!(
        "  Recyclable:     {}",
        if product.recyclable { "yes" } else { "no" }
    );
    if let Some(ref warning) = product.packaging_warning {
        println!("  Warning:        {}", warning);
    }

    let impact = &product.impact_details;
    println!("  Water usage:    {}", impact.water_usage);
    println!("  Energy:         {}", impact.energy_consumption);
    println!("  Material:       {}", impact.material_type);
    println!();

    if !product.alternatives.is_empty() {
        println!("  Greener alternatives:");
        let max_name = product
            .alternatives
            .iter()
            .map(|a| a.name.len())
            .max()
            .unwrap_or(10);
        for alt in &product.alternatives {
            println!(
                "    {:<width$}  {} kg CO2e  (saves {})",
                alt.name,
                alt.carbon_score,
                alt.savings,
                width = max_name
            );
        }
        println!();
    }
}

pub fn print_points_delta(delta: i64) {
    let label = if delta >= 0 {
        "Eco points gained"
    } else {
        "Eco points lost"
    };
    println!("  {}: {}\n", label, delta.abs());
}

pub fn print_stats(user: &str, stats: &UserStats) {
    println!("=== Stats for {} ===\n", user);
    println!("  Total scans:    {}", stats.total_scans);
    println!("  Eco choices:    {}", stats.total_eco_choices);
    println!("  Eco points:     {}", stats.eco_points);
    println!("  Carbon saved:   {} kg", stats.carbon_saved.round_dp(1));
}

pub fn print_history(user: &str, records: &[ScanRecord]) {
    if records.is_empty() {
        println!("No scans recorded for {}", user);
        return;
    }

    println!("=== Scan history for {} ({} scans) ===\n", user, records.len());

    let max_name = records
        .iter()
        .map(|r| r.product_name.len())
        .max()
        .unwrap_or(10);

    for r in records {
        println!(
            "  {}  {:<width$}  {:>14}  {} ({})",
            r.timestamp.format("%Y-%m-%d %H:%M"),
            r.product_name,
            r.barcode,
            r.carbon_score,
            r.rating(),
            width = max_name
        );
    }
}

fn signed(points: i64) -> String {
    if points > 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}
