//! Утилиты для работы с байтовыми буферами
//!
//! Все функции работают только с ASCII и никогда не выделяют память.

/// Переводит ASCII буквы в нижний регистр на месте
pub fn to_lower_in_place(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        if b.is_ascii_uppercase() {
            *b |= 0x20;
        }
    }
}

/// Переводит ASCII буквы в верхний регистр на месте
pub fn to_upper_in_place(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        if b.is_ascii_lowercase() {
            *b &= !0x20;
        }
    }
}

/// Копирует части `parts` подряд в `dst`, пока хватает места.
///
/// Возвращает количество записанных байт. Если `dst` меньше суммарной длины,
/// записывается максимально возможный префикс, за пределы `dst` запись не идет.
pub fn put_bytes(dst: &mut [u8], parts: &[&[u8]]) -> usize {
    let mut off = 0;
    for part in parts {
        let room = dst.len() - off;
        let n = part.len().min(room);
        dst[off..off + n].copy_from_slice(&part[..n]);
        off += n;
        if n < part.len() {
            break;
        }
    }
    off
}

/// Суммарная длина частей
pub fn total_len(parts: &[&[u8]]) -> usize {
    parts.iter().map(|p| p.len()).sum()
}
