//! CLI интерфейс для sqlnorm
//!
//! Нормализация, фингерпринты и просмотр токенов из командной строки.
//! SQL берется из аргумента или построчно из stdin.

use crate::common::{AppConfig, KeywordCase, NormalizerConfig};
use crate::fingerprint::{Fingerprint, GrammarFingerprinter, LexicalFingerprinter};
use crate::normalizer::normalize;
use crate::parser::keywords::builtin_count;
use crate::parser::operators::VALID_OPERATORS;
use crate::parser::{Lexer, Token};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// sqlnorm - нормализатор и фингерпринтер SQL запросов
#[derive(Parser, Debug)]
#[command(name = "sqlnorm")]
#[command(about = "sqlnorm - SQL tokenizer, normalizer and fingerprinter")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Нормализовать SQL
    Normalize {
        /// SQL запрос (по умолчанию читается построчно из stdin)
        sql: Option<String>,

        #[command(flatten)]
        rules: RuleArgs,

        /// Размер выходного буфера в байтах
        #[arg(long, value_name = "BYTES")]
        buffer_size: Option<usize>,

        /// Считать обрезанный результат ошибкой
        #[arg(long)]
        strict: bool,
    },

    /// Вычислить фингерпринт запроса
    Fingerprint {
        /// SQL запрос (по умолчанию читается построчно из stdin)
        sql: Option<String>,

        /// Использовать полный SQL парсер вместо лексера
        #[arg(long)]
        grammar: bool,
    },

    /// Показать поток токенов в виде JSON строк
    Tokens {
        /// SQL запрос (по умолчанию читается построчно из stdin)
        sql: Option<String>,
    },

    /// Показать версию и действующую конфигурацию
    Info,
}

/// Правила нормализации из командной строки. Поверх значений из конфигурации.
#[derive(Args, Debug, Default, Clone)]
pub struct RuleArgs {
    /// Регистр ключевых слов (default, lower, upper)
    #[arg(long, value_name = "CASE")]
    pub case: Option<KeywordCase>,

    /// Заменять литералы на `?`
    #[arg(long)]
    pub remove_literals: bool,

    /// Обрамлять идентификаторы обратными кавычками
    #[arg(long)]
    pub put_backticks: bool,

    /// Снимать обратные кавычки с идентификаторов
    #[arg(long)]
    pub remove_backticks: bool,

    /// Ставить пробел перед открывающей скобкой
    #[arg(long)]
    pub space_before_paren: bool,
}

impl RuleArgs {
    /// Накладывает флаги на набор правил
    pub fn apply(&self, mut config: NormalizerConfig) -> NormalizerConfig {
        if let Some(case) = self.case {
            config.keyword_case = case;
        }
        config.remove_literals |= self.remove_literals;
        config.put_backtick_on_keywords |= self.put_backticks;
        config.remove_backtick_on_keywords |= self.remove_backticks;
        config.put_space_before_open_paren |= self.space_before_paren;
        config
    }
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }

    /// Загружает конфигурацию: файл, затем переменные окружения, затем флаги
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => AppConfig::default(),
        };

        config = config.apply_env()?;

        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        Ok(config)
    }

    /// Инициализирует env_logger: флаг `--log-level`, затем `RUST_LOG`,
    /// затем уровень из конфигурации
    pub fn init_logging(&self, config: &AppConfig) {
        let mut builder = env_logger::Builder::new();

        if let Some(level) = &self.log_level {
            builder.parse_filters(level);
        } else if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        } else {
            builder.parse_filters(&config.log_level);
        }

        let _ = builder.try_init();
    }

    /// Выполняет команду
    pub fn execute(&self) -> Result<()> {
        let config = self.load_config()?;
        self.init_logging(&config);
        config.validate()?;

        match &self.command {
            Some(Commands::Normalize {
                sql,
                rules,
                buffer_size,
                strict,
            }) => self.run_normalize(&config, sql.as_deref(), rules, *buffer_size, *strict),
            Some(Commands::Fingerprint { sql, grammar }) => {
                self.run_fingerprint(&config, sql.as_deref(), *grammar)
            }
            Some(Commands::Tokens { sql }) => self.run_tokens(sql.as_deref()),
            Some(Commands::Info) | None => self.show_info(&config),
        }
    }

    /// Нормализует каждый запрос в буфер фиксированного размера
    fn run_normalize(
        &self,
        config: &AppConfig,
        sql: Option<&str>,
        rules: &RuleArgs,
        buffer_size: Option<usize>,
        strict: bool,
    ) -> Result<()> {
        let rules = rules.apply(config.normalizer);
        rules.validate()?;

        let size = buffer_size.unwrap_or(config.initial_buffer_size);
        if size == 0 {
            bail!("buffer size must be greater than 0");
        }

        let mut buffer = vec![0u8; size];
        let mut lexer = Lexer::new();
        let mut stdout = io::stdout().lock();

        for_each_input(sql, |line| {
            let output = normalize_line(&rules, &mut lexer, line, &mut buffer, strict)?;
            stdout.write_all(output)?;
            writeln!(stdout)?;
            Ok(())
        })
    }

    fn run_fingerprint(&self, config: &AppConfig, sql: Option<&str>, grammar: bool) -> Result<()> {
        let mut fingerprinter: Box<dyn Fingerprint> = if grammar {
            Box::new(GrammarFingerprinter::new())
        } else {
            Box::new(LexicalFingerprinter::new().with_buffer_size(config.initial_buffer_size))
        };
        log::debug!("using {} fingerprint", fingerprinter.name());

        for_each_input(sql, |line| {
            let fingerprint = fingerprinter
                .fingerprint(line)
                .with_context(|| format!("failed to fingerprint: {}", line))?;
            println!("{}", fingerprint);
            Ok(())
        })
    }

    fn run_tokens(&self, sql: Option<&str>) -> Result<()> {
        let mut lexer = Lexer::new();

        for_each_input(sql, |line| {
            let mut bound = std::mem::take(&mut lexer).recycle();
            bound.parse(line.as_bytes());

            let tokens: Vec<Token> = bound.tokens().collect();
            for token in &tokens {
                println!("{}", token_json(&bound, token));
            }

            lexer = bound.recycle();
            Ok(())
        })
    }

    /// Показывает информацию о системе
    fn show_info(&self, config: &AppConfig) -> Result<()> {
        println!("sqlnorm {}", crate::VERSION);
        println!("builtin keywords: {}", builtin_count());
        println!("operators: {}", VALID_OPERATORS.len());
        println!();
        print!("{}", toml::to_string_pretty(config)?);
        Ok(())
    }
}

/// Нормализует одну строку. Лексер возвращается на место при любом исходе,
/// обрезка без `strict` только логируется.
fn normalize_line<'b>(
    rules: &NormalizerConfig,
    lexer: &mut Lexer<'static>,
    line: &str,
    buffer: &'b mut [u8],
    strict: bool,
) -> Result<&'b [u8]> {
    let mut bound = std::mem::take(lexer).recycle();
    let out = normalize(rules, &mut bound, line.as_bytes(), buffer);
    *lexer = bound.recycle();

    match out.result {
        Ok(()) => {}
        Err(e) if e.is_buffer_too_small() && !strict => {
            log::warn!("output truncated at {} bytes: {}", out.written, e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(out.output)
}

/// Вызывает `f` для аргумента или для каждой непустой строки stdin
fn for_each_input(sql: Option<&str>, mut f: impl FnMut(&str) -> Result<()>) -> Result<()> {
    if let Some(sql) = sql {
        return f(sql);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        f(&line)?;
    }

    Ok(())
}

/// JSON представление токена
pub fn token_json(lexer: &Lexer<'_>, token: &Token) -> serde_json::Value {
    json!({
        "type": token.token_type.as_str(),
        "start": token.position.start,
        "end": token.position.end,
        "lexeme": String::from_utf8_lossy(lexer.lexeme_ref(token)),
        "builtin": token.is_builtin_keyword(),
        "function": token.is_builtin_function(),
    })
}
