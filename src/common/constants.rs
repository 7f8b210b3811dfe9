//! Константы для sqlnorm

/// Минимальная емкость рабочего буфера (арены) лексера
pub const MIN_ARENA_CAPACITY: usize = 1024;

/// Размер выходного буфера по умолчанию
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Максимальный размер выходного буфера при автоматическом росте
pub const MAX_BUFFER_SIZE: usize = 64 * 1024 * 1024; // 64MB

/// Заменитель литералов при нормализации
pub const LITERAL_PLACEHOLDER: &[u8] = b"?";

/// Обратная кавычка для идентификаторов MySQL
pub const BACKTICK: u8 = b'`';

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "warn";
