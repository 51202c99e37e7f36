//! Output formatting for the CLI.

use console::style;
use storefront_commerce::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Column widths for product tables.
pub const PRODUCT_COLUMNS: [usize; 7] = [5, 32, 16, 10, 14, 6, 6];

/// Table header for product rows.
pub const PRODUCT_HEADER: [&str; 7] = ["ID", "TITLE", "BRAND", "PRICE", "DISCOUNT", "RATING", "STOCK"];

/// Format a product as table cells.
pub fn product_cells(product: &Product) -> Vec<String> {
    vec![
        product.id.to_string(),
        truncate(&product.title, PRODUCT_COLUMNS[1]),
        truncate(&product.brand, PRODUCT_COLUMNS[2]),
        format_price(product.price),
        format_discount(product),
        format!("{:.2}", product.rating),
        product.stock.to_string(),
    ]
}

/// Format a price with the storefront currency sign.
pub fn format_price(price: f64) -> String {
    format!("₹{}", price)
}

/// Format the discount as `12% OFF`, with the list price when known.
pub fn format_discount(product: &Product) -> String {
    match product.original_price() {
        Some(original) if product.discount_percentage > 0.0 => format!(
            "{:.0}% OFF (₹{:.0})",
            product.discount_percentage, original
        ),
        _ => format!("{:.0}% OFF", product.discount_percentage),
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
