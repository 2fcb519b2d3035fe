//! Plain-text summary of the panel contents, for the clipboard.

use std::fmt::Write;

use crate::i18n::{translate, Lang};
use crate::view::PanelView;

pub fn summary_text(view: &PanelView, lang: Lang) -> String {
    let t = |key: &str| translate(key, lang);
    let mut out = String::new();

    let _ = writeln!(out, "{}", t("area.title"));

    if !view.points.is_empty() {
        let _ = writeln!(out, "{}:", t("area.points"));
        for p in &view.points {
            let _ = writeln!(out, "  {} {}", p.label, p.coords);
        }
    }

    if !view.edges.is_empty() {
        let _ = writeln!(out, "{}:", t("area.edges"));
        for e in &view.edges {
            let _ = writeln!(out, "  {}: {}", e.label, e.value);
        }
    }

    let _ = writeln!(out, "{}: {}", t("area.area"), view.area);

    if let Some(p) = &view.planarity {
        let _ = writeln!(
            out,
            "{}: {} {} / {} {}",
            t("area.non_planarity"),
            t("area.max"),
            p.max,
            t("area.rms"),
            p.rms
        );
    }

    if !view.ridges.is_empty() {
        let _ = writeln!(out, "{}:", t("area.ridges"));
        for r in &view.ridges {
            let _ = writeln!(out, "  {r}");
        }
    }

    if !view.surfaces.is_empty() {
        let _ = writeln!(out, "{}:", t("area.surfaces"));
        for s in &view.surfaces {
            let _ = writeln!(out, "  {}: {}", s.label, s.value);
        }
        if let Some(total) = &view.surfaces_total {
            let _ = writeln!(out, "  {}: {total}", t("area.surfaces_total"));
        }
    }

    if let Some(r) = &view.split_result {
        let _ = writeln!(out, "{}:", t("area.split_result"));
        let _ = writeln!(out, "  {}: {}", t("area.part1"), r.area1);
        let _ = writeln!(out, "  {}: {}", t("area.part2"), r.area2);
        let _ = writeln!(out, "  {}: {}", t("area.sum"), r.total);
    }

    out
}
