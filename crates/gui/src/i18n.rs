use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Lang {
    #[default]
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    translate(key, lang())
}

/// Translate a key to the given language.
pub fn translate(key: &str, l: Lang) -> &'static str {
    let ru = l == Lang::Ru;
    match key {
        // ── Panel ───────────────────────────────────────────
        "area.title" => if ru { "Измерение площади" } else { "Area measurement" },
        "area.points" => if ru { "Точки" } else { "Points" },
        "area.no_points" => if ru { "Точек нет" } else { "No points yet" },
        "area.edges" => if ru { "Рёбра" } else { "Edges" },
        "area.area" => if ru { "Площадь" } else { "Area" },
        "area.non_planarity" => if ru { "Неплоскостность" } else { "Non-planarity" },
        "area.max" => if ru { "макс" } else { "max" },
        "area.rms" => if ru { "СКО" } else { "rms" },
        "area.ridges" => if ru { "Коньки" } else { "Ridges" },
        "area.surfaces" => if ru { "Поверхности" } else { "Surfaces" },
        "area.surfaces_total" => if ru { "Итого" } else { "Total" },
        "area.selection" => if ru { "Выбор" } else { "Selection" },
        "area.split_result" => if ru { "Разбиение" } else { "Split result" },
        "area.part1" => if ru { "Часть 1" } else { "Part 1" },
        "area.part2" => if ru { "Часть 2" } else { "Part 2" },
        "area.sum" => if ru { "Сумма" } else { "Sum" },

        // ── Buttons ─────────────────────────────────────────
        "area.clear" => if ru { "Очистить" } else { "Clear" },
        "area.close_polygon" => if ru { "Замкнуть контур" } else { "Close polygon" },
        "area.exit" => if ru { "Выход" } else { "Exit" },
        "area.split_start" => if ru { "Разбить" } else { "Split" },
        "area.split_stop" => if ru { "Готово" } else { "Done" },
        "area.split_cancel" => if ru { "Отменить выбор" } else { "Cancel selection" },
        "area.split_undo" => if ru { "Отменить конёк" } else { "Undo ridge" },
        "area.split_clear_all" => if ru { "Удалить коньки" } else { "Clear ridges" },
        "area.redo" => if ru { "Переставить" } else { "Redo" },
        "area.pick" => if ru { "Выбрать" } else { "Pick" },
        "area.copy" => if ru { "Копировать результаты" } else { "Copy results" },

        "tip.redo" => if ru { "Поставить эту точку заново" } else { "Place this point again" },
        "tip.pick" => if ru { "Выбрать точку для конька" } else { "Select this point for a ridge" },
        "tip.close_polygon" => if ru { "Нужно минимум 3 точки" } else { "Needs at least 3 points" },

        // ── Status hints ────────────────────────────────────
        "hint.collecting" => if ru { "Кликайте в сцене, чтобы ставить точки" } else { "Click in the scene to place points" },
        "hint.closed" => if ru { "Контур замкнут. Нажмите «Разбить», чтобы задать коньки" } else { "Polygon closed. Press Split to add ridges" },
        "hint.splitting" => if ru { "Выберите две точки, чтобы провести конёк" } else { "Pick two points to draw a ridge" },
        "hint.split_result" => if ru { "Разбиение готово" } else { "Split complete" },

        // ── Menus ───────────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.open_snapshot" => if ru { "Открыть снимок..." } else { "Open snapshot..." },
        "menu.open_title" => if ru { "Открыть JSON снимка" } else { "Open snapshot JSON" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },
        "menu.tool" => if ru { "Инструмент" } else { "Tool" },
        "menu.show_panel" => if ru { "Показать панель измерения" } else { "Show measurement panel" },
        "menu.hide_panel" => if ru { "Скрыть панель измерения" } else { "Hide measurement panel" },
        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        // ── Settings ────────────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.units" => if ru { "Единицы:" } else { "Units:" },
        "settings.precision" => if ru { "Знаков после запятой:" } else { "Decimal places:" },
        "settings.planarity" => if ru { "Пороги неплоскостности" } else { "Non-planarity thresholds" },
        "settings.warn" => if ru { "Предупреждение от:" } else { "Warn from:" },
        "settings.bad" => if ru { "Плохо от:" } else { "Bad from:" },
        "settings.font_size" => if ru { "Размер шрифта:" } else { "Font size:" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },

        // ── Viewport placeholder ────────────────────────────
        "viewport.placeholder" => if ru { "Сцена" } else { "Scene" },
        "viewport.events" => if ru { "Последние события шины" } else { "Recent bus events" },

        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_both_languages() {
        assert_eq!(translate("area.clear", Lang::En), "Clear");
        assert_eq!(translate("area.clear", Lang::Ru), "Очистить");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(translate("area.nope", Lang::En), "???");
    }
}
