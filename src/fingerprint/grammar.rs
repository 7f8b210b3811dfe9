//! Грамматический фингерпринт на основе sqlparser
//!
//! Запрос разбирается полным MySQL парсером, все литералы в дереве
//! заменяются на `?`, после чего операторы печатаются обратно в
//! каноническом виде.

use std::ops::ControlFlow;

use sqlparser::ast::{visit_expressions_mut, Expr, Statement, UnaryOperator, Value};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

use crate::common::error::{Error, Result};
use crate::fingerprint::Fingerprint;

const PLACEHOLDER: &str = "?";

/// Фингерпринт через разбор полной грамматики.
///
/// В отличие от лексического варианта отклоняет синтаксически неверный SQL.
#[derive(Debug)]
pub struct GrammarFingerprinter {
    dialect: MySqlDialect,
}

impl GrammarFingerprinter {
    pub fn new() -> Self {
        Self {
            dialect: MySqlDialect {},
        }
    }

    /// Разбирает `sql` и заменяет литералы на плейсхолдеры
    pub fn parse(&self, sql: &str) -> Result<Vec<Statement>> {
        let mut statements = Parser::parse_sql(&self.dialect, sql).map_err(|e| {
            log::debug!("grammar fingerprint parse failed: {}", e);
            Error::sql_parsing(e.to_string())
        })?;

        let _ = visit_expressions_mut(&mut statements, |expr| {
            replace_literal(expr);
            ControlFlow::<()>::Continue(())
        });

        Ok(statements)
    }
}

impl Default for GrammarFingerprinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Fingerprint for GrammarFingerprinter {
    fn fingerprint(&mut self, sql: &str) -> Result<String> {
        let statements = self.parse(sql)?;
        Ok(statements
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("; "))
    }

    fn name(&self) -> &'static str {
        "grammar"
    }
}

/// Заменяет литерал на плейсхолдер. Выражения обходятся снизу вверх,
/// поэтому знак перед уже замененным числом сворачивается в один `?`.
fn replace_literal(expr: &mut Expr) {
    let signed_placeholder = matches!(
        &*expr,
        Expr::UnaryOp {
            op: UnaryOperator::Minus | UnaryOperator::Plus,
            expr: inner,
        } if is_placeholder(inner)
    );

    if signed_placeholder {
        *expr = Expr::Value(placeholder());
        return;
    }

    if let Expr::Value(value) = expr {
        // NULL не является значением, которое стоит прятать
        if *value != Value::Null {
            *value = placeholder();
        }
    }
}

fn is_placeholder(expr: &Expr) -> bool {
    matches!(expr, Expr::Value(Value::Placeholder(p)) if p == PLACEHOLDER)
}

fn placeholder() -> Value {
    Value::Placeholder(PLACEHOLDER.to_string())
}
