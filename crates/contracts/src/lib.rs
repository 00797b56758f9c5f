//! Общие типы витрины TUI Grid: записи-образцы, справочник отделов
//! и описание конфигурации грида (колонки, редакторы, опции).

pub mod domain;
pub mod enums;
pub mod shared;
