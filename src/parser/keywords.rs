//! Таблица зарезервированных слов MySQL
//!
//! Поиск идет по лексеме, уже приведенной к верхнему регистру в арене лексера.

use crate::parser::token::TokenAttrs;
use lazy_static::lazy_static;
use std::collections::HashMap;

const KEYWORD: TokenAttrs = TokenAttrs::BUILTIN_KEYWORD;
const FUNCTION: TokenAttrs = TokenAttrs::BUILTIN_KEYWORD.union(TokenAttrs::BUILTIN_FUNCTION);

/// Зарезервированные слова MySQL 8.0 и их атрибуты
const BUILTIN_KEYWORDS: &[(&str, TokenAttrs)] = &[
    ("ACCESSIBLE", KEYWORD),
    ("ADD", KEYWORD),
    ("ALL", KEYWORD),
    ("ALTER", KEYWORD),
    ("ANALYZE", KEYWORD),
    ("AND", KEYWORD),
    ("AS", KEYWORD),
    ("ASC", KEYWORD),
    ("ASENSITIVE", KEYWORD),
    ("BEFORE", KEYWORD),
    ("BETWEEN", KEYWORD),
    ("BIGINT", KEYWORD),
    ("BINARY", KEYWORD),
    ("BLOB", KEYWORD),
    ("BOTH", KEYWORD),
    ("BY", KEYWORD),
    ("CALL", KEYWORD),
    ("CASCADE", KEYWORD),
    ("CASE", KEYWORD),
    ("CHANGE", KEYWORD),
    ("CHAR", FUNCTION),
    ("CHARACTER", KEYWORD),
    ("CHECK", KEYWORD),
    ("COLLATE", KEYWORD),
    ("COLUMN", KEYWORD),
    ("CONDITION", KEYWORD),
    ("CONSTRAINT", KEYWORD),
    ("CONTINUE", KEYWORD),
    ("CONVERT", FUNCTION),
    ("CREATE", KEYWORD),
    ("CROSS", KEYWORD),
    ("CUBE", KEYWORD),
    ("CUME_DIST", FUNCTION),
    ("CURRENT_DATE", FUNCTION),
    ("CURRENT_TIME", FUNCTION),
    ("CURRENT_TIMESTAMP", FUNCTION),
    ("CURRENT_USER", FUNCTION),
    ("CURSOR", KEYWORD),
    ("DATABASE", FUNCTION),
    ("DATABASES", KEYWORD),
    ("DAY_HOUR", KEYWORD),
    ("DAY_MICROSECOND", KEYWORD),
    ("DAY_MINUTE", KEYWORD),
    ("DAY_SECOND", KEYWORD),
    ("DEC", KEYWORD),
    ("DECIMAL", KEYWORD),
    ("DECLARE", KEYWORD),
    ("DEFAULT", KEYWORD),
    ("DELAYED", KEYWORD),
    ("DELETE", KEYWORD),
    ("DENSE_RANK", FUNCTION),
    ("DESC", KEYWORD),
    ("DESCRIBE", KEYWORD),
    ("DETERMINISTIC", KEYWORD),
    ("DISTINCT", KEYWORD),
    ("DISTINCTROW", KEYWORD),
    ("DIV", KEYWORD),
    ("DOUBLE", KEYWORD),
    ("DROP", KEYWORD),
    ("DUAL", KEYWORD),
    ("EACH", KEYWORD),
    ("ELSE", KEYWORD),
    ("ELSEIF", KEYWORD),
    ("EMPTY", KEYWORD),
    ("ENCLOSED", KEYWORD),
    ("ESCAPED", KEYWORD),
    ("EXCEPT", KEYWORD),
    ("EXISTS", KEYWORD),
    ("EXIT", KEYWORD),
    ("EXPLAIN", KEYWORD),
    ("FALSE", KEYWORD),
    ("FETCH", KEYWORD),
    ("FIRST_VALUE", FUNCTION),
    ("FLOAT", KEYWORD),
    ("FLOAT4", KEYWORD),
    ("FLOAT8", KEYWORD),
    ("FOR", KEYWORD),
    ("FORCE", KEYWORD),
    ("FOREIGN", KEYWORD),
    ("FROM", KEYWORD),
    ("FULLTEXT", KEYWORD),
    ("FUNCTION", KEYWORD),
    ("GENERATED", KEYWORD),
    ("GET", KEYWORD),
    ("GRANT", KEYWORD),
    ("GROUP", KEYWORD),
    ("GROUPING", FUNCTION),
    ("GROUPS", KEYWORD),
    ("HAVING", KEYWORD),
    ("HIGH_PRIORITY", KEYWORD),
    ("HOUR_MICROSECOND", KEYWORD),
    ("HOUR_MINUTE", KEYWORD),
    ("HOUR_SECOND", KEYWORD),
    ("IF", FUNCTION),
    ("IGNORE", KEYWORD),
    ("IN", KEYWORD),
    ("INDEX", KEYWORD),
    ("INFILE", KEYWORD),
    ("INNER", KEYWORD),
    ("INOUT", KEYWORD),
    ("INSENSITIVE", KEYWORD),
    ("INSERT", FUNCTION),
    ("INT", KEYWORD),
    ("INT1", KEYWORD),
    ("INT2", KEYWORD),
    ("INT3", KEYWORD),
    ("INT4", KEYWORD),
    ("INT8", KEYWORD),
    ("INTEGER", KEYWORD),
    ("INTERSECT", KEYWORD),
    ("INTERVAL", FUNCTION),
    ("INTO", KEYWORD),
    ("IO_AFTER_GTIDS", KEYWORD),
    ("IO_BEFORE_GTIDS", KEYWORD),
    ("IS", KEYWORD),
    ("ITERATE", KEYWORD),
    ("JOIN", KEYWORD),
    ("JSON_TABLE", FUNCTION),
    ("KEY", KEYWORD),
    ("KEYS", KEYWORD),
    ("KILL", KEYWORD),
    ("LAG", FUNCTION),
    ("LAST_VALUE", FUNCTION),
    ("LATERAL", KEYWORD),
    ("LEAD", FUNCTION),
    ("LEADING", KEYWORD),
    ("LEAVE", KEYWORD),
    ("LEFT", FUNCTION),
    ("LIKE", KEYWORD),
    ("LIMIT", KEYWORD),
    ("LINEAR", KEYWORD),
    ("LINES", KEYWORD),
    ("LOAD", KEYWORD),
    ("LOCALTIME", FUNCTION),
    ("LOCALTIMESTAMP", FUNCTION),
    ("LOCK", KEYWORD),
    ("LONG", KEYWORD),
    ("LONGBLOB", KEYWORD),
    ("LONGTEXT", KEYWORD),
    ("LOOP", KEYWORD),
    ("LOW_PRIORITY", KEYWORD),
    ("MASTER_BIND", KEYWORD),
    ("MASTER_SSL_VERIFY_SERVER_CERT", KEYWORD),
    ("MATCH", FUNCTION),
    ("MAXVALUE", KEYWORD),
    ("MEDIUMBLOB", KEYWORD),
    ("MEDIUMINT", KEYWORD),
    ("MEDIUMTEXT", KEYWORD),
    ("MIDDLEINT", KEYWORD),
    ("MINUTE_MICROSECOND", KEYWORD),
    ("MINUTE_SECOND", KEYWORD),
    ("MOD", FUNCTION),
    ("MODIFIES", KEYWORD),
    ("NATURAL", KEYWORD),
    ("NOT", KEYWORD),
    ("NO_WRITE_TO_BINLOG", KEYWORD),
    ("NTH_VALUE", FUNCTION),
    ("NTILE", FUNCTION),
    ("NULL", KEYWORD),
    ("NUMERIC", KEYWORD),
    ("OF", KEYWORD),
    ("ON", KEYWORD),
    ("OPTIMIZE", KEYWORD),
    ("OPTIMIZER_COSTS", KEYWORD),
    ("OPTION", KEYWORD),
    ("OPTIONALLY", KEYWORD),
    ("OR", KEYWORD),
    ("ORDER", KEYWORD),
    ("OUT", KEYWORD),
    ("OUTER", KEYWORD),
    ("OUTFILE", KEYWORD),
    ("OVER", KEYWORD),
    ("PARTITION", KEYWORD),
    ("PERCENT_RANK", FUNCTION),
    ("PRECISION", KEYWORD),
    ("PRIMARY", KEYWORD),
    ("PROCEDURE", KEYWORD),
    ("PURGE", KEYWORD),
    ("RANGE", KEYWORD),
    ("RANK", FUNCTION),
    ("READ", KEYWORD),
    ("READS", KEYWORD),
    ("READ_WRITE", KEYWORD),
    ("REAL", KEYWORD),
    ("RECURSIVE", KEYWORD),
    ("REFERENCES", KEYWORD),
    ("REGEXP", KEYWORD),
    ("RELEASE", KEYWORD),
    ("RENAME", KEYWORD),
    ("REPEAT", FUNCTION),
    ("REPLACE", FUNCTION),
    ("REQUIRE", KEYWORD),
    ("RESIGNAL", KEYWORD),
    ("RESTRICT", KEYWORD),
    ("RETURN", KEYWORD),
    ("REVOKE", KEYWORD),
    ("RIGHT", FUNCTION),
    ("RLIKE", KEYWORD),
    ("ROW", KEYWORD),
    ("ROWS", KEYWORD),
    ("ROW_NUMBER", FUNCTION),
    ("SCHEMA", FUNCTION),
    ("SCHEMAS", KEYWORD),
    ("SECOND_MICROSECOND", KEYWORD),
    ("SELECT", KEYWORD),
    ("SENSITIVE", KEYWORD),
    ("SEPARATOR", KEYWORD),
    ("SET", KEYWORD),
    ("SHOW", KEYWORD),
    ("SIGNAL", KEYWORD),
    ("SMALLINT", KEYWORD),
    ("SPATIAL", KEYWORD),
    ("SPECIFIC", KEYWORD),
    ("SQL", KEYWORD),
    ("SQLEXCEPTION", KEYWORD),
    ("SQLSTATE", KEYWORD),
    ("SQLWARNING", KEYWORD),
    ("SQL_BIG_RESULT", KEYWORD),
    ("SQL_CALC_FOUND_ROWS", KEYWORD),
    ("SQL_SMALL_RESULT", KEYWORD),
    ("SSL", KEYWORD),
    ("STARTING", KEYWORD),
    ("STORED", KEYWORD),
    ("STRAIGHT_JOIN", KEYWORD),
    ("SYSTEM", KEYWORD),
    ("TABLE", KEYWORD),
    ("TERMINATED", KEYWORD),
    ("THEN", KEYWORD),
    ("TINYBLOB", KEYWORD),
    ("TINYINT", KEYWORD),
    ("TINYTEXT", KEYWORD),
    ("TO", KEYWORD),
    ("TRAILING", KEYWORD),
    ("TRIGGER", KEYWORD),
    ("TRUE", KEYWORD),
    ("UNDO", KEYWORD),
    ("UNION", KEYWORD),
    ("UNIQUE", KEYWORD),
    ("UNLOCK", KEYWORD),
    ("UNSIGNED", KEYWORD),
    ("UPDATE", KEYWORD),
    ("USAGE", KEYWORD),
    ("USE", KEYWORD),
    ("USING", KEYWORD),
    ("UTC_DATE", FUNCTION),
    ("UTC_TIME", FUNCTION),
    ("UTC_TIMESTAMP", FUNCTION),
    ("VALUES", FUNCTION),
    ("VARBINARY", KEYWORD),
    ("VARCHAR", KEYWORD),
    ("VARCHARACTER", KEYWORD),
    ("VARYING", KEYWORD),
    ("VIRTUAL", KEYWORD),
    ("WHEN", KEYWORD),
    ("WHERE", KEYWORD),
    ("WHILE", KEYWORD),
    ("WINDOW", KEYWORD),
    ("WITH", KEYWORD),
    ("WRITE", KEYWORD),
    ("XOR", KEYWORD),
    ("YEAR_MONTH", KEYWORD),
    ("ZEROFILL", KEYWORD),
];

lazy_static! {
    static ref KEYWORD_MAP: HashMap<&'static [u8], TokenAttrs> =
        BUILTIN_KEYWORDS
            .iter()
            .map(|(word, attrs)| (word.as_bytes(), *attrs))
            .collect();
}

/// Ищет слово в таблице. `upper` должен быть в верхнем регистре.
pub fn lookup_builtin(upper: &[u8]) -> Option<TokenAttrs> {
    KEYWORD_MAP.get(upper).copied()
}

/// Количество зарезервированных слов
pub fn builtin_count() -> usize {
    BUILTIN_KEYWORDS.len()
}
