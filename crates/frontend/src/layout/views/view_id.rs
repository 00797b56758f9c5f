/// Вид, показанный в центральной области
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    #[default]
    Basic,
    Complex,
    Editable,
    MasterDetail,
    CheckboxAndRow,
    Draggable,
}

impl ViewId {
    /// Ключ вида (он же значение параметра `?view=`)
    pub fn key(&self) -> &'static str {
        match self {
            ViewId::Basic => "basic",
            ViewId::Complex => "complex",
            ViewId::Editable => "editable",
            ViewId::MasterDetail => "masterDetail",
            ViewId::CheckboxAndRow => "checkboxAndRow",
            ViewId::Draggable => "draggable",
        }
    }

    /// Заголовок пункта меню
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Basic => "Базовый грид (выбор строки)",
            ViewId::Complex => "Составные заголовки",
            ViewId::Editable => "Редактирование ячеек",
            ViewId::MasterDetail => "Master-Detail",
            ViewId::CheckboxAndRow => "Добавление и удаление строк",
            ViewId::Draggable => "Перетаскивание колонок",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ViewId::Basic => "table",
            ViewId::Complex => "layers",
            ViewId::Editable => "edit",
            ViewId::MasterDetail => "master-detail",
            ViewId::CheckboxAndRow => "check-square",
            ViewId::Draggable => "move",
        }
    }

    pub fn all() -> [ViewId; 6] {
        [
            ViewId::Basic,
            ViewId::Complex,
            ViewId::Editable,
            ViewId::MasterDetail,
            ViewId::CheckboxAndRow,
            ViewId::Draggable,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|view| view.key() == key)
    }

    /// Неизвестный или пустой ключ сводится к `fallback`
    pub fn resolve(key: Option<&str>, fallback: ViewId) -> ViewId {
        key.and_then(Self::from_key).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for view in ViewId::all() {
            assert_eq!(ViewId::from_key(view.key()), Some(view));
        }
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(ViewId::resolve(Some("pivot"), ViewId::Basic), ViewId::Basic);
        assert_eq!(ViewId::resolve(None, ViewId::Draggable), ViewId::Draggable);
        assert_eq!(
            ViewId::resolve(Some("masterDetail"), ViewId::Basic),
            ViewId::MasterDetail
        );
        // ключи чувствительны к регистру
        assert_eq!(ViewId::resolve(Some("Basic"), ViewId::Complex), ViewId::Complex);
    }
}
