use super::ui;
use crate::core::{ConversionForm, Currency};
use anyhow::{Context, Result};
use comfy_table::Cell;

impl ConversionForm {
    /// Renders every field as a table row, marking the source amount.
    pub fn display_as_table(&self, source: Currency) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Amount")]);

        for (currency, field) in self.fields() {
            let amount = if currency == source {
                ui::source_cell(field.text())
            } else {
                ui::amount_cell(field.text())
            };
            table.add_row(vec![Cell::new(currency.code()), amount]);
        }
        table.to_string()
    }
}

/// Converts a single amount and prints all four currencies.
pub fn run(mut form: ConversionForm, amount: &str, source: Currency) -> Result<()> {
    form.set_text(source, amount)?;
    form.convert(source)
        .with_context(|| format!("Failed to convert {amount} {source}"))?;
    println!("{}", form.display_as_table(source));
    Ok(())
}
