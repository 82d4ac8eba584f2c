use super::ui;
use crate::core::{Currency, RateTable};
use anyhow::Result;
use comfy_table::Cell;

impl RateTable {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell(&format!("Rate ({})", Currency::Ron)),
        ]);

        for (code, rate) in self.iter() {
            let text = format!("{rate:.4}");
            let is_quoted = Currency::QUOTED.iter().any(|c| c.code() == code);
            let rate_cell = if is_quoted {
                ui::source_cell(&text)
            } else {
                ui::amount_cell(&text)
            };
            table.add_row(vec![Cell::new(code), rate_cell]);
        }

        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text("BNR exchange rates", ui::StyleType::Title),
            ui::style_text(
                &format!(
                    "Fetched {}",
                    self.fetched_at().format("%Y-%m-%d %H:%M:%S UTC")
                ),
                ui::StyleType::Subtle
            )
        );
        output.push_str(&table.to_string());
        output
    }
}

pub fn run(rates: &RateTable, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rates)?);
    } else {
        println!("{}", rates.display_as_table());
    }
    Ok(())
}
