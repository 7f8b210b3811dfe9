//! Тесты для лексического анализа
