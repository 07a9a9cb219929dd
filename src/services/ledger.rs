// src/services/ledger.rs
//
// Regras puras do ledger de comissão do corretor. A parte com banco
// (ler o corretor, gravar o novo total) fica no FinanceService; aqui
// vive só a aritmética das transições, para poder ser testada a seco.

use rust_decimal::Decimal;

use crate::models::finance::RecordStatus;

/// Delta a aplicar em `total_commission_paid` para uma transição de
/// status de um registro de comissão.
///
/// Máquina de estados (registro marcado como comissão):
/// - pending -> paid : +valor novo (já refletindo o update, se houver)
/// - paid -> pending : -valor antigo
/// - pending -> pending, paid -> paid : nenhum efeito
///   (mudança de valor com status parado não mexe no ledger)
pub fn commission_delta(
    previous_status: RecordStatus,
    previous_amount: Decimal,
    new_status: RecordStatus,
    new_amount: Decimal,
) -> Option<Decimal> {
    match (previous_status, new_status) {
        (RecordStatus::Pending, RecordStatus::Paid) => Some(new_amount),
        (RecordStatus::Paid, RecordStatus::Pending) => Some(-previous_amount),
        _ => None,
    }
}

/// Aplica o delta com piso em zero: estornar mais do que o acumulado
/// nunca deixa o total negativo.
pub fn apply_delta(current_total: Decimal, delta: Decimal) -> Decimal {
    let updated = current_total + delta;
    if updated < Decimal::ZERO {
        Decimal::ZERO
    } else {
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn pendente_para_pago_soma_o_valor() {
        let delta = commission_delta(
            RecordStatus::Pending,
            dec("500"),
            RecordStatus::Paid,
            dec("500"),
        );
        assert_eq!(delta, Some(dec("500")));
        assert_eq!(apply_delta(dec("100"), delta.unwrap()), dec("600"));
    }

    #[test]
    fn pendente_para_pago_usa_o_valor_novo_se_o_update_mudou() {
        let delta = commission_delta(
            RecordStatus::Pending,
            dec("500"),
            RecordStatus::Paid,
            dec("750"),
        );
        assert_eq!(delta, Some(dec("750")));
    }

    #[test]
    fn pago_para_pendente_subtrai_o_valor_antigo() {
        let delta = commission_delta(
            RecordStatus::Paid,
            dec("500"),
            RecordStatus::Pending,
            dec("500"),
        );
        assert_eq!(delta, Some(dec("-500")));
        assert_eq!(apply_delta(dec("800"), delta.unwrap()), dec("300"));
    }

    #[test]
    fn estorno_maior_que_o_acumulado_trava_em_zero() {
        // P = 100, A = 150 -> resultado 0, nunca -50
        let delta = commission_delta(
            RecordStatus::Paid,
            dec("150"),
            RecordStatus::Pending,
            dec("150"),
        )
        .unwrap();
        assert_eq!(apply_delta(dec("100"), delta), Decimal::ZERO);
    }

    #[test]
    fn transicoes_paradas_nao_geram_delta() {
        assert_eq!(
            commission_delta(RecordStatus::Pending, dec("500"), RecordStatus::Pending, dec("500")),
            None
        );
        // paid -> paid com mudança de valor também é no-op para o ledger
        assert_eq!(
            commission_delta(RecordStatus::Paid, dec("500"), RecordStatus::Paid, dec("900")),
            None
        );
    }
}
