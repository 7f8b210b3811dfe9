//! Тесты для нормализатора

mod normalizer_tests;
