//! Sequential identifier generation.
//!
//! Both generators are pure functions of the collection they are given:
//! they scan for the highest existing value and return the next one. Nothing
//! is reserved, so two callers racing before either saves can compute the
//! same value. Fine for the single-process, single-writer design envelope.

use crate::model::Quote;

const ID_PREFIX: &str = "O";
const NUMBER_PREFIX: &str = "ORC";

/// Next internal id, `O<n>`.
///
/// Ids not matching `O<digits>` exactly (and absent ids) count as 0.
pub fn next_internal_id(quotes: &[Quote]) -> String {
    let max = quotes
        .iter()
        .map(|q| id_suffix(q.id.as_deref()))
        .max()
        .unwrap_or(0);
    format!("{}{}", ID_PREFIX, max + 1)
}

/// Next display number, `ORC<n>`.
///
/// Every existing `number` is reduced to its digits; records whose number
/// is absent or digit-free do not participate in the maximum.
pub fn next_display_number(quotes: &[Quote]) -> String {
    let max = quotes
        .iter()
        .filter_map(|q| digit_value(q.number.as_deref()))
        .max()
        .unwrap_or(0);
    format!("{}{}", NUMBER_PREFIX, max + 1)
}

fn id_suffix(id: Option<&str>) -> u64 {
    id.and_then(|s| s.strip_prefix(ID_PREFIX))
        .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|rest| rest.parse().ok())
        .unwrap_or(0)
}

fn digit_value(number: Option<&str>) -> Option<u64> {
    let digits: String = number?.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::saved_quote;

    #[test]
    fn first_id_is_o1() {
        assert_eq!(next_internal_id(&[]), "O1");
    }

    #[test]
    fn id_follows_the_highest_suffix() {
        let quotes = vec![
            saved_quote("O2", "ORC2", 1),
            saved_quote("O7", "ORC7", 2),
            saved_quote("O3", "ORC3", 3),
        ];
        assert_eq!(next_internal_id(&quotes), "O8");
    }

    #[test]
    fn malformed_ids_count_as_zero() {
        let odd = saved_quote("O5x", "ORC1", 1);
        let mut unsaved = saved_quote("O1", "ORC2", 2);
        unsaved.id = None;
        assert_eq!(next_internal_id(&[odd, unsaved]), "O1");
    }

    #[test]
    fn first_number_is_orc1() {
        assert_eq!(next_display_number(&[]), "ORC1");
    }

    #[test]
    fn number_strips_non_digits_before_comparing() {
        let a = saved_quote("O1", "ORC-00-12", 1);
        let b = saved_quote("O2", "9", 2);
        assert_eq!(next_display_number(&[a, b]), "ORC13");
    }

    #[test]
    fn digit_free_numbers_do_not_participate() {
        let a = saved_quote("O1", "draft", 1);
        let mut b = saved_quote("O2", "ORC4", 2);
        b.number = None;
        assert_eq!(next_display_number(&[a, b]), "ORC1");
    }
}
