//! Типы, общие для панели измерения площади и внешнего инструмента:
//! снимок данных измерения и события общей шины.

pub mod events;
pub mod measurement;

pub use events::{AreaEvent, BusMessage, Direction, EventError};
pub use measurement::{
    AreaMeasurementData, Edge, NonPlanarity, Point3, Ridge, SplitResult, Surface,
    MAX_SPLIT_SELECTION,
};
