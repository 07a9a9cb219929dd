// src/common/validation.rs

use rust_decimal::Decimal;
use validator::ValidationError;

// Validadores customizados para campos monetários e percentuais.
// O `validator` não sabe validar `Decimal` nativamente, então fazemos na mão.

/// Percentuais (comissão, imposto, divisão do corretor) vivem entre 0 e 100.
pub fn percent_range(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::from(100) {
        let mut err = ValidationError::new("percent_out_of_range");
        err.message = Some("O percentual deve estar entre 0 e 100.".into());
        return Err(err);
    }
    Ok(())
}

/// Valores monetários nunca são negativos na entrada.
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("negative_amount");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn percentual_dentro_da_faixa_passa() {
        assert!(percent_range(&dec("0")).is_ok());
        assert!(percent_range(&dec("5.5")).is_ok());
        assert!(percent_range(&dec("100")).is_ok());
    }

    #[test]
    fn percentual_fora_da_faixa_falha() {
        assert!(percent_range(&dec("-0.01")).is_err());
        assert!(percent_range(&dec("100.01")).is_err());
    }

    #[test]
    fn valor_negativo_falha() {
        assert!(non_negative(&dec("0")).is_ok());
        assert!(non_negative(&dec("1500.75")).is_ok());
        assert!(non_negative(&dec("-1")).is_err());
    }
}
