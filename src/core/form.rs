//! Four-field conversion form state, independent of any terminal

use crate::core::conversion::convert_all;
use crate::core::currency::Currency;
use crate::core::error::FormError;
use crate::core::rates::RateTable;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Editable,
    /// Filled in by a conversion; rejects input until the form is cleared.
    Locked,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    text: String,
    state: FieldState,
}

impl Field {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == FieldState::Locked
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub struct ConversionForm {
    rates: RateTable,
    fields: [Field; 4],
    precision: Option<u8>,
}

impl ConversionForm {
    pub fn new(rates: RateTable) -> Self {
        ConversionForm {
            rates,
            fields: Default::default(),
            precision: None,
        }
    }

    /// Number of decimals written into derived fields. `None` keeps the
    /// shortest representation that round-trips.
    pub fn with_precision(mut self, precision: Option<u8>) -> Self {
        self.precision = precision;
        self
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn field(&self, currency: Currency) -> &Field {
        &self.fields[currency.index()]
    }

    pub fn fields(&self) -> impl Iterator<Item = (Currency, &Field)> {
        Currency::ALL.into_iter().zip(self.fields.iter())
    }

    /// Appends a typed character to an editable field.
    pub fn input(&mut self, currency: Currency, ch: char) -> Result<(), FormError> {
        let field = self.editable_mut(currency)?;
        field.text.push(ch);
        Ok(())
    }

    /// Replaces the text of an editable field.
    pub fn set_text(&mut self, currency: Currency, text: &str) -> Result<(), FormError> {
        let field = self.editable_mut(currency)?;
        field.text.clear();
        field.text.push_str(text);
        Ok(())
    }

    /// Recomputes the other three fields from `source` and locks them.
    ///
    /// On error no field is modified.
    pub fn convert(&mut self, source: Currency) -> Result<(), FormError> {
        let field = self.field(source);
        if field.is_locked() {
            return Err(FormError::Locked(source));
        }
        let text = field.text();
        let amount = parse_amount(source, text)?;
        debug!(%source, amount, "Converting");

        let derived = convert_all(amount, source, &self.rates);
        // A finite amount can still overflow once multiplied by a rate
        if derived.iter().any(|(_, value)| !value.is_finite()) {
            return Err(FormError::Format {
                currency: source,
                text: text.to_string(),
                source: None,
            });
        }

        for (target, value) in derived {
            let field = &mut self.fields[target.index()];
            field.text = format_amount(value, self.precision);
            field.state = FieldState::Locked;
        }
        Ok(())
    }

    /// Unlocks and empties every field.
    pub fn clear(&mut self) {
        debug!("Clearing form");
        for field in &mut self.fields {
            *field = Field::default();
        }
    }

    fn editable_mut(&mut self, currency: Currency) -> Result<&mut Field, FormError> {
        let field = &mut self.fields[currency.index()];
        if field.is_locked() {
            return Err(FormError::Locked(currency));
        }
        Ok(field)
    }
}

fn parse_amount(currency: Currency, text: &str) -> Result<f64, FormError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptySource(currency));
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        Ok(_) => Err(FormError::Format {
            currency,
            text: text.to_string(),
            source: None,
        }),
        Err(e) => Err(FormError::Format {
            currency,
            text: text.to_string(),
            source: Some(e),
        }),
    }
}

pub fn format_amount(value: f64, precision: Option<u8>) -> String {
    match precision.map(usize::from) {
        Some(p) => format!("{value:.p$}"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ConversionForm {
        let rates = RateTable::from_rows([("EUR", 5.0), ("USD", 4.5), ("GBP", 5.8)]).unwrap();
        ConversionForm::new(rates)
    }

    fn value(form: &ConversionForm, currency: Currency) -> f64 {
        form.field(currency).text().parse().unwrap()
    }

    #[test]
    fn test_initial_state_is_empty_and_editable() {
        let form = form();
        for (_, field) in form.fields() {
            assert!(field.is_empty());
            assert_eq!(field.state(), FieldState::Editable);
        }
    }

    #[test]
    fn test_convert_from_ron_fills_and_locks_others() {
        let mut form = form();
        form.set_text(Currency::Ron, "100").unwrap();
        form.convert(Currency::Ron).unwrap();

        assert_eq!(value(&form, Currency::Eur), 20.0);
        assert!((value(&form, Currency::Usd) - 22.222).abs() < 0.001);
        assert!((value(&form, Currency::Gbp) - 17.241).abs() < 0.001);

        assert!(!form.field(Currency::Ron).is_locked());
        assert!(form.field(Currency::Eur).is_locked());
        assert!(form.field(Currency::Usd).is_locked());
        assert!(form.field(Currency::Gbp).is_locked());
        assert_eq!(form.field(Currency::Ron).text(), "100");
    }

    #[test]
    fn test_convert_from_eur() {
        let mut form = form();
        for ch in "10".chars() {
            form.input(Currency::Eur, ch).unwrap();
        }
        form.convert(Currency::Eur).unwrap();

        assert_eq!(value(&form, Currency::Ron), 50.0);
        assert!((value(&form, Currency::Usd) - 11.111).abs() < 0.001);
        assert!((value(&form, Currency::Gbp) - 8.621).abs() < 0.001);
    }

    #[test]
    fn test_locked_field_rejects_input() {
        let mut form = form();
        form.set_text(Currency::Ron, "100").unwrap();
        form.convert(Currency::Ron).unwrap();

        assert_eq!(
            form.input(Currency::Eur, '1'),
            Err(FormError::Locked(Currency::Eur))
        );
        assert_eq!(
            form.convert(Currency::Usd),
            Err(FormError::Locked(Currency::Usd))
        );
        assert_eq!(value(&form, Currency::Eur), 20.0);
    }

    #[test]
    fn test_reconvert_overwrites_derived_fields() {
        let mut form = form();
        form.set_text(Currency::Ron, "100").unwrap();
        form.convert(Currency::Ron).unwrap();
        form.input(Currency::Ron, '0').unwrap();
        form.convert(Currency::Ron).unwrap();

        assert_eq!(form.field(Currency::Eur).text(), "200");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = form();
        form.set_text(Currency::Gbp, "3").unwrap();
        form.convert(Currency::Gbp).unwrap();
        form.clear();

        for (_, field) in form.fields() {
            assert!(field.is_empty());
            assert_eq!(field.state(), FieldState::Editable);
        }
        form.input(Currency::Eur, '7').unwrap();
        assert_eq!(form.field(Currency::Eur).text(), "7");
    }

    #[test]
    fn test_non_numeric_source_leaves_fields_unchanged() {
        let mut form = form();
        form.set_text(Currency::Usd, "12abc").unwrap();
        let err = form.convert(Currency::Usd).unwrap_err();

        assert!(matches!(err, FormError::Format { currency: Currency::Usd, .. }));
        assert_eq!(err.to_string(), "Invalid amount '12abc' in USD");
        for currency in [Currency::Ron, Currency::Eur, Currency::Gbp] {
            assert!(form.field(currency).is_empty());
            assert!(!form.field(currency).is_locked());
        }
    }

    #[test]
    fn test_empty_and_non_finite_sources() {
        let mut form = form();
        assert_eq!(
            form.convert(Currency::Eur),
            Err(FormError::EmptySource(Currency::Eur))
        );

        form.set_text(Currency::Eur, "inf").unwrap();
        assert!(matches!(
            form.convert(Currency::Eur),
            Err(FormError::Format { source: None, .. })
        ));
    }

    #[test]
    fn test_overflowing_result_is_rejected() {
        let mut form = form();
        form.set_text(Currency::Gbp, "1e308").unwrap();
        let err = form.convert(Currency::Gbp).unwrap_err();

        assert_eq!(err.to_string(), "Invalid amount '1e308' in GBP");
        for currency in [Currency::Ron, Currency::Eur, Currency::Usd] {
            assert!(form.field(currency).is_empty());
            assert!(!form.field(currency).is_locked());
        }
    }

    #[test]
    fn test_largest_precision_formats() {
        assert_eq!(format_amount(0.5, Some(u8::MAX)).len(), 2 + u8::MAX as usize);
        assert_eq!(format_amount(0.5, None), "0.5");
    }

    #[test]
    fn test_precision_formats_derived_fields() {
        let mut form = form().with_precision(Some(3));
        form.set_text(Currency::Ron, "100").unwrap();
        form.convert(Currency::Ron).unwrap();

        assert_eq!(form.field(Currency::Eur).text(), "20.000");
        assert_eq!(form.field(Currency::Usd).text(), "22.222");
        assert_eq!(form.field(Currency::Gbp).text(), "17.241");
    }
}
