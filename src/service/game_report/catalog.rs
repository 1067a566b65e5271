//! Fixed map catalog.
//!
//! The category → map table is static in-process data, not configuration.
//! Order matters: map positions shown to the user are 1-based indexes into
//! these lists. Names must never contain `:`, which the flow tags use as a
//! separator.

/// All selectable categories with their maps, in display order.
pub const MAP_CATEGORIES: &[(&str, &[&str])] = &[(
    "Main",
    &[
        "Квадрики",
        "ЛНС",
        "Самолеты",
        "Свалка",
        "Бладсы",
        "Большие конты",
        "Грейпсид",
        "Динозаврик",
        "Зерно",
        "Кай-Перико",
        "Малые Конты",
        "Мексы",
        "Мирор",
        "Нефть",
        "Сдача мяса",
        "Старая поставка",
        "Стеб",
        "Стройка 1",
        "Стройка 2",
        "ТШКА",
        "Ферма не мексы",
    ],
)];

/// The map list of a category, if the category exists.
pub fn maps_for(category: &str) -> Option<&'static [&'static str]> {
    MAP_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, maps)| *maps)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests category lookup.
    ///
    /// Expected: Some for "Main", None for unknown categories
    #[test]
    fn looks_up_categories() {
        assert_eq!(maps_for("Main").map(<[_]>::len), Some(21));
        assert!(maps_for("Side").is_none());
    }

    /// Tests the separator invariant the flow tags rely on.
    ///
    /// Expected: no category or map name contains ':'
    #[test]
    fn names_contain_no_separator() {
        for (category, maps) in MAP_CATEGORIES {
            assert!(!category.contains(':'));
            for map in *maps {
                assert!(!map.contains(':'), "map {map} contains separator");
            }
        }
    }
}
