//! Тесты для нормализатора SQL

use crate::common::config::{KeywordCase, NormalizerConfig};
use crate::common::error::Error;
use crate::normalizer::{normalize, normalize_to_string};
use crate::parser::Lexer;

fn upper_without_literals() -> NormalizerConfig {
    NormalizerConfig::new()
        .with_keyword_case(KeywordCase::Upper)
        .with_remove_literals(true)
}

fn lower(remove_literals: bool) -> NormalizerConfig {
    NormalizerConfig::new()
        .with_keyword_case(KeywordCase::Lower)
        .with_remove_literals(remove_literals)
}

/// Нормализует с запасом места и требует успешного результата
fn run(config: &NormalizerConfig, input: &str) -> String {
    let mut lexer = Lexer::default();
    let mut output = vec![0u8; input.len() * 3];
    let out = normalize(config, &mut lexer, input.as_bytes(), &mut output);
    assert!(out.is_ok(), "normalize failed for {:?}: {:?}", input, out.result);
    assert_eq!(out.written, out.output.len());
    String::from_utf8(out.output.to_vec()).unwrap()
}

#[test]
fn test_basic_select_with_literals_removed() {
    assert_eq!(
        run(&upper_without_literals(), "SELECT id, name FROM users WHERE age = 25"),
        "SELECT ID, NAME FROM USERS WHERE AGE = ?"
    );
}

#[test]
fn test_lowercase_keywords() {
    assert_eq!(
        run(&lower(false), "SELECT * FROM users WHERE id = 1"),
        "select * from users where id = 1"
    );
}

#[test]
fn test_uppercase_keeps_literal_case() {
    let config = NormalizerConfig::new().with_keyword_case(KeywordCase::Upper);
    assert_eq!(
        run(&config, "select * from users where name = 'john'"),
        "SELECT * FROM USERS WHERE NAME = 'john'"
    );
}

#[test]
fn test_joins_and_qualified_names() {
    assert_eq!(
        run(
            &upper_without_literals(),
            "SELECT u.id, u.name, p.title FROM users u JOIN posts p ON u.id = p.user_id WHERE u.age > 18"
        ),
        "SELECT U.ID, U.NAME, P.TITLE FROM USERS U JOIN POSTS P ON U.ID = P.USER_ID WHERE U.AGE > ?"
    );
}

#[test]
fn test_dml_statements() {
    assert_eq!(
        run(
            &lower(true),
            "INSERT INTO users (name, email, age) VALUES ('John Doe', 'john@example.com', 30)"
        ),
        "insert into users(name, email, age) values(?, ?, ?)"
    );
    assert_eq!(
        run(
            &upper_without_literals(),
            "UPDATE users SET name = 'Jane Doe', age = 25 WHERE id = 1"
        ),
        "UPDATE USERS SET NAME = ?, AGE = ? WHERE ID = ?"
    );
    assert_eq!(
        run(
            &lower(true),
            "DELETE FROM users WHERE age < 18 AND status = 'inactive'"
        ),
        "delete from users where age < ? and status = ?"
    );
}

#[test]
fn test_subquery_has_no_space_after_keyword() {
    assert_eq!(
        run(
            &upper_without_literals(),
            "SELECT * FROM users WHERE id IN (SELECT user_id FROM orders WHERE total > 100)"
        ),
        "SELECT * FROM USERS WHERE ID IN(SELECT USER_ID FROM ORDERS WHERE TOTAL > ?)"
    );
}

#[test]
fn test_function_calls_with_backticks_and_spacing() {
    let config = lower(true)
        .with_put_backtick_on_keywords(true)
        .with_put_space_before_open_paren(true);

    assert_eq!(
        run(
            &config,
            "SELECT COUNT(*), MAX(age), MIN(created_at) FROM users WHERE name LIKE '%john%'"
        ),
        "select `count` (`*`), `max` (`age`), `min` (`created_at`) from `users` where `name` like ?"
    );
}

#[test]
fn test_window_functions() {
    let config = NormalizerConfig::new()
        .with_keyword_case(KeywordCase::Upper)
        .with_put_backtick_on_keywords(true)
        .with_put_space_before_open_paren(true);

    assert_eq!(
        run(
            &config,
            "SELECT name, ROW_NUMBER () OVER (ORDER BY age DESC) as `rank` FROM users"
        ),
        "SELECT `NAME`, ROW_NUMBER () OVER (ORDER BY `AGE` DESC) AS `RANK` FROM `USERS`"
    );
}

#[test]
fn test_empty_and_whitespace_input() {
    assert_eq!(run(&upper_without_literals(), ""), "");
    assert_eq!(run(&upper_without_literals(), "   \t\n\r  "), "");
}

#[test]
fn test_literal_kinds_are_replaced() {
    assert_eq!(
        run(
            &lower(true),
            "SELECT * FROM products WHERE price = 99.99 AND quantity >= 10"
        ),
        "select * from products where price = ? and quantity >= ?"
    );
    assert_eq!(
        run(
            &upper_without_literals(),
            r#"SELECT * FROM users WHERE name = "John's User" AND description = 'He said "Hello"'"#
        ),
        "SELECT * FROM USERS WHERE NAME = ? AND DESCRIPTION = ?"
    );
    assert_eq!(
        run(&upper_without_literals(), "SELECT 0x1F, b'101', X'AB', -42, 1e10"),
        "SELECT ?, ?, ?, ?, ?"
    );
}

#[test]
fn test_literal_boundaries() {
    // Удвоенная кавычка не закрывает строку, 0x-литерал не съедает запятую
    assert_eq!(
        run(
            &upper_without_literals(),
            "SELECT 'it''s' , 0x1F, 1-2, a.`b`.c, x'41', b'01' FROM t"
        ),
        "SELECT ?, ?, ?, A.`B`.C, ?, ? FROM T"
    );
    assert_eq!(
        run(&lower(false), r#"SELECT "say ""hi""", 0b01 FROM t"#),
        r#"select "say ""hi""", 0b01 from t"#
    );
    assert_eq!(
        run(&lower(true), "SELECT * FROM t WHERE a IN (0x1F,0x2F)"),
        "select * from t where a in(?, ?)"
    );
}

#[test]
fn test_case_and_union() {
    assert_eq!(
        run(
            &upper_without_literals(),
            "SELECT name, CASE WHEN age < 18 THEN 'minor' ELSE 'adult' END as category FROM users"
        ),
        "SELECT NAME, CASE WHEN AGE < ? THEN ? ELSE ? END AS CATEGORY FROM USERS"
    );
    assert_eq!(
        run(
            &lower(false),
            "SELECT name FROM users WHERE active = 1 UNION SELECT name FROM admins WHERE active = 1"
        ),
        "select name from users where active = 1 union select name from admins where active = 1"
    );
}

#[test]
fn test_default_case_keeps_text() {
    assert_eq!(
        run(&NormalizerConfig::default(), "SeLeCt  Foo ,bar FROM\tt"),
        "SeLeCt Foo, bar FROM t"
    );
}

/// Конфигурация по ключу вида `upper_true_false_false_false`
fn config_from_key(key: &str) -> NormalizerConfig {
    let parts: Vec<&str> = key.split('_').collect();
    let case = match parts[0] {
        "lower" => KeywordCase::Lower,
        "upper" => KeywordCase::Upper,
        _ => KeywordCase::Default,
    };
    let flag = |i: usize| parts[i] == "true";

    NormalizerConfig::new()
        .with_keyword_case(case)
        .with_remove_literals(flag(1))
        .with_put_backtick_on_keywords(flag(2))
        .with_remove_backtick_on_keywords(flag(3))
        .with_put_space_before_open_paren(flag(4))
}

#[test]
fn test_config_combinations() {
    let cases: &[(&str, &[(&str, &str)])] = &[
        (
            "SELECT `user_id`, `full_name` FROM `user_table` WHERE `age` = 25",
            &[
                ("default_false_false_false_false", "SELECT `user_id`, `full_name` FROM `user_table` WHERE `age` = 25"),
                ("lower_false_false_false_false", "select `user_id`, `full_name` from `user_table` where `age` = 25"),
                ("upper_false_false_false_false", "SELECT `USER_ID`, `FULL_NAME` FROM `USER_TABLE` WHERE `AGE` = 25"),
                ("upper_true_false_false_false", "SELECT `USER_ID`, `FULL_NAME` FROM `USER_TABLE` WHERE `AGE` = ?"),
                ("upper_false_true_false_false", "SELECT `USER_ID`, `FULL_NAME` FROM `USER_TABLE` WHERE `AGE` = 25"),
                ("upper_false_false_true_false", "SELECT USER_ID, FULL_NAME FROM USER_TABLE WHERE AGE = 25"),
                ("upper_false_true_false_true", "SELECT `USER_ID`, `FULL_NAME` FROM `USER_TABLE` WHERE `AGE` = 25"),
            ],
        ),
        (
            "SELECT COUNT(*), MAX(age) FROM users WHERE name LIKE 'John%'",
            &[
                ("default_false_false_false_false", "SELECT COUNT(*), MAX(age) FROM users WHERE name LIKE 'John%'"),
                ("lower_true_true_false_true", "select `count` (`*`), `max` (`age`) from `users` where `name` like ?"),
                ("upper_true_true_false_true", "SELECT `COUNT` (`*`), `MAX` (`AGE`) FROM `USERS` WHERE `NAME` LIKE ?"),
            ],
        ),
        (
            "SELECT user_id, full_name FROM user_table WHERE `status` = 'active'",
            &[
                ("default_false_false_false_false", "SELECT user_id, full_name FROM user_table WHERE `status` = 'active'"),
                ("upper_false_true_false_false", "SELECT `USER_ID`, `FULL_NAME` FROM `USER_TABLE` WHERE `STATUS` = 'active'"),
                ("lower_true_true_false_false", "select `user_id`, `full_name` from `user_table` where `status` = ?"),
            ],
        ),
        (
            r#"SELECT * FROM users WHERE name = "John's Data" AND age = 25 AND score = 99.5"#,
            &[
                ("upper_true_true_false_false", "SELECT `*` FROM `USERS` WHERE `NAME` = ? AND `AGE` = ? AND `SCORE` = ?"),
                ("lower_false_false_false_false", r#"select * from users where name = "John's Data" and age = 25 and score = 99.5"#),
            ],
        ),
    ];

    for (input, expectations) in cases {
        for (key, expected) in expectations.iter() {
            let config = config_from_key(key);
            assert_eq!(run(&config, input), *expected, "config {}", key);
        }
    }
}

#[test]
fn test_all_valid_configs_keep_basic_invariants() {
    let inputs = [
        "SELECT `user_id`, `full_name` FROM `user_table` WHERE `age` = 25",
        "SELECT COUNT(*), MAX(age) FROM users WHERE name LIKE 'John%'",
        r#"SELECT * FROM users WHERE name = "John's Data" AND age = 25"#,
    ];
    let cases = [KeywordCase::Default, KeywordCase::Lower, KeywordCase::Upper];

    for case in cases {
        for bits in 0..16u8 {
            let config = NormalizerConfig::new()
                .with_keyword_case(case)
                .with_remove_literals(bits & 1 != 0)
                .with_put_backtick_on_keywords(bits & 2 != 0)
                .with_remove_backtick_on_keywords(bits & 4 != 0)
                .with_put_space_before_open_paren(bits & 8 != 0);
            if config.validate().is_err() {
                continue;
            }

            for input in inputs {
                let output = run(&config, input);
                assert!(output.len() <= input.len() * 3);
                assert!(!output.contains("  "), "double space in {:?}", output);
                if config.remove_literals {
                    assert!(!output.contains('\''), "literal left in {:?}", output);
                }
            }
        }
    }
}

#[test]
fn test_invalid_configurations() {
    let input = b"SELECT COUNT(*) FROM users";
    let mut lexer = Lexer::new();
    let mut output = vec![0u8; input.len() * 3];

    let cases = [
        (
            NormalizerConfig::new()
                .with_put_backtick_on_keywords(true)
                .with_remove_backtick_on_keywords(true),
            "put_backtick_on_keywords and remove_backtick_on_keywords cannot be both true",
        ),
        (
            NormalizerConfig::new().with_put_space_before_open_paren(true),
            "put_space_before_open_paren requires put_backtick_on_keywords to be true",
        ),
    ];

    for (config, message) in cases {
        let out = normalize(&config, &mut lexer, input, &mut output);
        assert_eq!(out.written, 0);
        assert!(out.output.is_empty());
        match out.result {
            Err(Error::Configuration { message: actual }) => assert_eq!(actual, message),
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }
}

#[test]
fn test_invalid_configuration_touches_nothing() {
    let config = NormalizerConfig::new().with_put_space_before_open_paren(true);
    let mut lexer = Lexer::new();
    let mut output = [b'#'; 16];

    let out = normalize(&config, &mut lexer, b"SELECT 1", &mut output);
    assert!(!out.is_ok());
    assert!(output.iter().all(|b| *b == b'#'));
}

#[test]
fn test_edge_cases() {
    let config = upper_without_literals();
    let long = "very_long_column_name_".repeat(20);

    let cases = [
        ("SELECT".to_string(), "SELECT".to_string()),
        ("SELECT FROM WHERE".to_string(), "SELECT FROM WHERE".to_string()),
        (
            "SELECT * FROM users WHERE name = 'unterminated".to_string(),
            "SELECT * FROM USERS WHERE NAME = ?".to_string(),
        ),
        ("SELECT COUNT() FROM users".to_string(), "SELECT COUNT() FROM USERS".to_string()),
        ("SELECT ((1 + 2) * 3) FROM dual".to_string(), "SELECT((? + ?) * ?) FROM DUAL".to_string()),
        (
            "SELECT * FROM `table-name` WHERE `col@name` = 'val#ue'".to_string(),
            "SELECT * FROM `TABLE-NAME` WHERE `COL@NAME` = ?".to_string(),
        ),
        (
            format!("SELECT {} FROM users", long),
            format!("SELECT {} FROM USERS", long.to_uppercase()),
        ),
        (
            "SELECT * FROM files WHERE content = 'binary\x00\x01\x02'".to_string(),
            "SELECT * FROM FILES WHERE CONTENT = ?".to_string(),
        ),
        (
            "SELECT * FROM users WHERE id = 1; DROP TABLE users".to_string(),
            "SELECT * FROM USERS WHERE ID = ? DROP TABLE USERS".to_string(),
        ),
    ];

    for (input, expected) in cases.iter() {
        assert_eq!(&run(&config, input), expected, "input {:?}", input);
    }
}

#[test]
fn test_comments_are_dropped() {
    let config = upper_without_literals();

    assert_eq!(run(&config, "-- this is a comment\n/* block comment */"), "");
    assert_eq!(run(&config, "/* hint */ SELECT 1 -- trailing"), "SELECT ?");
    assert_eq!(run(&config, "SELECT /* c */ a # note\n, b"), "SELECT A, B");
    assert_eq!(run(&config, "SELECT a FROM t /* open"), "SELECT A FROM T");
}

#[test]
fn test_backticks_on_qualified_segments() {
    let put = lower(false).with_put_backtick_on_keywords(true);
    assert_eq!(
        run(&put, "SELECT t.status, db.order.id FROM db.order"),
        "select `t`.`status`, `db`.`order`.`id` from `db`.`order`"
    );

    let remove = lower(false).with_remove_backtick_on_keywords(true);
    assert_eq!(
        run(&remove, "SELECT `a`.`select` FROM `t`"),
        "select a.select from t"
    );
}

#[test]
fn test_already_quoted_identifier_is_not_requoted() {
    let config = NormalizerConfig::new().with_put_backtick_on_keywords(true);
    assert_eq!(run(&config, "SELECT `a``b` FROM c"), "SELECT `a``b` FROM `c`");
}

#[test]
fn test_small_buffer() {
    let mut lexer = Lexer::new();
    let mut output = [0u8; 5];

    let out = normalize(
        &upper_without_literals(),
        &mut lexer,
        b"SELECT * FROM users WHERE name = 'test'",
        &mut output,
    );

    assert_eq!(out.output, b"SELEC");
    assert_eq!(out.written, 5);
    assert!(out.is_truncated());
    assert!(matches!(
        out.result,
        Err(Error::BufferTooSmall {
            written: 5,
            capacity: 5
        })
    ));
}

#[test]
fn test_buffer_sizes() {
    let config = NormalizerConfig::new().with_keyword_case(KeywordCase::Upper);
    let input = "SELECT id FROM users WHERE name = 'test'";
    let expected = "SELECT ID FROM USERS WHERE NAME = 'test'";
    let mut lexer = Lexer::new();

    let cases = [
        (input.len(), true),
        (input.len() / 2, false),
        (input.len() * 2, true),
        (1, false),
        (0, false),
    ];

    for (size, should_fit) in cases {
        let mut output = vec![0u8; size];
        let out = normalize(&config, &mut lexer, input.as_bytes(), &mut output);
        assert_eq!(out.is_ok(), should_fit, "buffer size {}", size);

        let n = size.min(expected.len());
        assert_eq!(out.output, &expected.as_bytes()[..n], "buffer size {}", size);
    }
}

#[test]
fn test_truncated_output_is_prefix() {
    let config = lower(true)
        .with_put_backtick_on_keywords(true)
        .with_put_space_before_open_paren(true);
    let input = b"SELECT COUNT(*), MAX(age) FROM users WHERE name LIKE 'John%'";
    let mut lexer = Lexer::new();

    let mut full = vec![0u8; input.len() * 3];
    let expected = normalize(&config, &mut lexer, input, &mut full)
        .into_result()
        .unwrap()
        .to_vec();

    for capacity in 0..=expected.len() + 2 {
        let mut output = vec![0u8; capacity];
        let out = normalize(&config, &mut lexer, input, &mut output);
        let n = capacity.min(expected.len());
        assert_eq!(out.output, &expected[..n], "capacity {}", capacity);
        assert_eq!(out.is_ok(), capacity >= expected.len(), "capacity {}", capacity);
    }
}

#[test]
fn test_remove_literals_never_grows_output() {
    let inputs = [
        "SELECT * FROM users WHERE id = 123 AND name = 'test'",
        "INSERT INTO users VALUES(1, 'john', 25, 'active')",
        "UPDATE users SET age = 30, score = 95.5 WHERE id = 1",
    ];

    for input in inputs {
        let kept = run(&NormalizerConfig::default(), input);
        let removed = run(&NormalizerConfig::new().with_remove_literals(true), input);
        assert!(removed.len() <= kept.len(), "{}", input);
    }
}

#[test]
fn test_lexer_reuse_across_calls() {
    let config = upper_without_literals();
    let mut lexer = Lexer::new();
    let mut output = vec![0u8; 128];

    let first = normalize(&config, &mut lexer, b"select a from t", &mut output)
        .into_result()
        .unwrap()
        .to_vec();
    let second = normalize(&config, &mut lexer, b"select b from u where x = 1", &mut output)
        .into_result()
        .unwrap()
        .to_vec();

    assert_eq!(first, b"SELECT A FROM T");
    assert_eq!(second, b"SELECT B FROM U WHERE X = ?");
}

#[test]
fn test_normalize_to_string_grows_buffer() {
    let config = upper_without_literals();
    let mut lexer = Lexer::default();
    let sql = "select `a`, b from t where c = 'x'";

    let result = normalize_to_string(&config, &mut lexer, sql.as_bytes(), 1).unwrap();
    assert_eq!(result, "SELECT `A`, B FROM T WHERE C = ?");

    let put = lower(false).with_put_backtick_on_keywords(true);
    let result = normalize_to_string(&put, &mut lexer, b"a,b,c", 1).unwrap();
    assert_eq!(result, "`a`, `b`, `c`");
}

#[test]
fn test_normalize_to_string_rejects_bad_config() {
    let config = NormalizerConfig::new()
        .with_put_backtick_on_keywords(true)
        .with_remove_backtick_on_keywords(true);
    let mut lexer = Lexer::new();

    let err = normalize_to_string(&config, &mut lexer, b"SELECT 1", 64).unwrap_err();
    assert!(err.is_configuration());
}
