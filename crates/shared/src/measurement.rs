use serde::{Deserialize, Serialize};

/// Точка в пространстве сцены (метры)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Ребро контура. Ребро i соединяет точку i с точкой i+1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub length: f64,
}

/// Отклонение точек от плоскости
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonPlanarity {
    pub max: f64,
    pub rms: f64,
}

/// Конёк: неупорядоченная пара индексов точек. В JSON: `[a, b]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ridge(pub usize, pub usize);

impl Ridge {
    pub fn contains(&self, index: usize) -> bool {
        self.0 == index || self.1 == index
    }

    /// Пара с меньшим индексом первым
    pub fn normalized(&self) -> (usize, usize) {
        if self.0 <= self.1 {
            (self.0, self.1)
        } else {
            (self.1, self.0)
        }
    }
}

impl PartialEq for Ridge {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Ridge {}

/// Подповерхность, полученная разбиением контура коньками
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub area: f64,
    #[serde(default)]
    pub points: Vec<usize>,
}

/// Результат разбиения на две части
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub area1: f64,
    pub area2: f64,
    pub total: f64,
}

/// Снимок состояния инструмента измерения площади.
///
/// Производится внешним инструментом; панель только отображает последний снимок.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AreaMeasurementData {
    #[serde(default)]
    pub points: Vec<Point3>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_planarity: Option<NonPlanarity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ridges: Option<Vec<Ridge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surfaces: Option<Vec<Surface>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surfaces_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_selection: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_result: Option<SplitResult>,
}

/// Максимум точек в выборе для разбиения
pub const MAX_SPLIT_SELECTION: usize = 2;

impl AreaMeasurementData {
    /// Контур замкнут, если инструмент посчитал площадь
    pub fn is_closed(&self) -> bool {
        self.area.is_some()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn ridge_count(&self) -> usize {
        self.ridges.as_ref().map_or(0, Vec::len)
    }

    /// Индексы концов ребра. Последнее ребро замкнутого контура ведёт в точку 0
    pub fn edge_endpoints(&self, edge_index: usize) -> Option<(usize, usize)> {
        let n = self.points.len();
        if edge_index >= self.edges.len() || n < 2 {
            return None;
        }
        let from = edge_index % n;
        Some((from, (edge_index + 1) % n))
    }

    /// Текущий выбор для разбиения (не более двух индексов)
    pub fn selection(&self) -> &[usize] {
        match &self.split_selection {
            Some(sel) => &sel[..sel.len().min(MAX_SPLIT_SELECTION)],
            None => &[],
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection().contains(&index)
    }
}
