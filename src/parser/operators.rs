//! Набор операторов SQL для поиска по принципу maximal munch

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Допустимые операторы MySQL
pub const VALID_OPERATORS: &[&str] = &[
    ">", ">=", "<", "<=", "<>", "<=>", "=", "!", "!=", // сравнения
    "&", "|", "^", "~", ">>", "<<", // битовые
    "&&", "||", // логические
    "%", "+", "-", "*", "/", // арифметика
    "->", "->>", // JSON
    ":=",
];

lazy_static! {
    static ref OPERATORS: HashSet<&'static [u8]> =
        VALID_OPERATORS.iter().map(|op| op.as_bytes()).collect();

    /// Все непустые префиксы допустимых операторов
    static ref OPERATOR_PREFIXES: HashSet<&'static [u8]> = VALID_OPERATORS
        .iter()
        .flat_map(|op| {
            let bytes = op.as_bytes();
            (1..=bytes.len()).map(move |n| &bytes[..n])
        })
        .collect();
}

/// Последовательность является допустимым оператором
pub fn is_operator(span: &[u8]) -> bool {
    OPERATORS.contains(span)
}

/// Последовательность может быть продолжена до допустимого оператора
pub fn is_operator_prefix(span: &[u8]) -> bool {
    OPERATOR_PREFIXES.contains(span)
}
