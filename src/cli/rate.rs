use crate::cli::ui::{self, StyleType};
use crate::core::rate::ExchangeRate;
use crate::resolver::RateResolver;
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{Cell, Table};

pub fn render_rate_table(rate: &ExchangeRate) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Rate"),
        ui::header_cell("Date"),
    ]);
    table.add_row(vec![
        Cell::new(rate.from()),
        Cell::new(rate.to()),
        ui::number_cell(rate.rate()),
        Cell::new(rate.date()),
    ]);
    table
}

pub fn format_conversion(rate: &ExchangeRate, amount: f64, converted: f64) -> String {
    format!(
        "{} {} {}\n{}",
        ui::style_text(&format!("{amount:.2} {} =", rate.from()), StyleType::TotalLabel),
        ui::style_text(&format!("{converted:.2}"), StyleType::TotalValue),
        ui::style_text(rate.to(), StyleType::TotalLabel),
        ui::style_text(&rate.to_string(), StyleType::Subtle),
    )
}

pub async fn run_rate(
    resolver: &RateResolver,
    api_key: &str,
    from: &str,
    to: &str,
    date: Option<NaiveDate>,
) -> Result<()> {
    let rate = resolver.rate_async(api_key, from, to, date).await?;
    println!("{}", ui::style_text("Exchange Rate", StyleType::Title));
    println!("{}", render_rate_table(&rate));
    Ok(())
}

pub async fn run_convert(
    resolver: &RateResolver,
    api_key: &str,
    from: &str,
    to: &str,
    amount: f64,
    date: Option<NaiveDate>,
) -> Result<()> {
    let rate = resolver.rate_async(api_key, from, to, date).await?;
    let converted = rate.convert(amount);
    println!("{}", format_conversion(&rate, amount, converted));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rate() -> ExchangeRate {
        ExchangeRate::new(
            "EUR",
            "GBP",
            0.9,
            NaiveDate::from_ymd_opt(2016, 10, 19).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_render_rate_table() {
        let rendered = render_rate_table(&sample_rate()).to_string();
        assert!(rendered.contains("From"));
        assert!(rendered.contains("EUR"));
        assert!(rendered.contains("GBP"));
        assert!(rendered.contains("0.900000"));
        assert!(rendered.contains("2016-10-19"));
    }

    #[test]
    fn test_format_conversion() {
        console::set_colors_enabled(false);
        let rate = sample_rate();
        let text = format_conversion(&rate, 100.0, rate.convert(100.0));
        assert_eq!(text, "100.00 EUR = 90.00 GBP\n1 EUR = 0.9000 GBP (2016-10-19)");
    }
}
