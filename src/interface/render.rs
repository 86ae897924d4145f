use crate::models::Dish;

/// Format dishes as a numbered table with a price column and a summary.
pub fn dishes_table(dishes: &[Dish]) -> String {
    if dishes.is_empty() {
        return "No dishes can be built from these codes.\n".to_string();
    }

    // Align the price column on the longest description
    let descriptions: Vec<String> = dishes.iter().map(Dish::describe).collect();
    let width = descriptions.iter().map(String::len).max().unwrap_or(10);

    let mut lines = vec!["=== Dishes ===".to_string(), String::new()];

    for (i, (dish, description)) in dishes.iter().zip(&descriptions).enumerate() {
        lines.push(format!(
            "{:>4}. {:<width$} | {:>8.2}",
            i + 1,
            description,
            dish.price,
            width = width
        ));
    }

    let cheapest = dishes.iter().map(|d| d.price).fold(f64::INFINITY, f64::min);
    let priciest = dishes
        .iter()
        .map(|d| d.price)
        .fold(f64::NEG_INFINITY, f64::max);

    lines.push(String::new());
    lines.push("--- Summary ---".to_string());
    lines.push(format!("Total dishes: {}", dishes.len()));
    lines.push(format!("Price range: {:.2} - {:.2}", cheapest, priciest));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Print dishes to stdout.
pub fn display_dishes(dishes: &[Dish]) {
    println!();
    print!("{}", dishes_table(dishes));
    println!();
}
