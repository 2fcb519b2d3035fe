use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measurement::AreaMeasurementData;

/// Событие на общей шине в сыром виде: имя и необязательная нагрузка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    pub name: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub payload: serde_json::Value,
}

impl BusMessage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_payload(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// Ошибки разбора событий шины
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Event {0} requires a payload")]
    MissingPayload(String),

    #[error("Invalid payload for {name}: {source}")]
    InvalidPayload {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Направление события относительно панели
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Инструмент → панель
    Inbound,
    /// Панель → инструмент
    Outbound,
    /// В обе стороны
    Both,
}

pub const UPDATED: &str = "area.measure.updated";
pub const SHOW: &str = "area.measure.show";
pub const HIDE: &str = "area.measure.hide";
pub const DISABLE_TEMPORARY: &str = "area.measure.disable.temporary";
pub const CLEAR: &str = "area.measure.clear";
pub const CLOSE_POLYGON: &str = "area.measure.closePolygon";
pub const EXIT: &str = "area.measure.exit";
pub const RIDGE_START: &str = "area.measure.ridge.start";
pub const RIDGE_STOP: &str = "area.measure.ridge.stop";
pub const REDO: &str = "area.measure.redo";
pub const SPLIT_SELECT: &str = "area.measure.split.select";
pub const SPLIT_CANCEL: &str = "area.measure.split.cancel";
pub const SPLIT_UNDO: &str = "area.measure.split.undo";
pub const SPLIT_CLEAR_ALL: &str = "area.measure.split.clearAll";

/// Все события инструмента измерения площади
#[derive(Debug, Clone, PartialEq)]
pub enum AreaEvent {
    /// Новый снимок данных от инструмента
    Updated(Box<AreaMeasurementData>),
    Show,
    Hide,
    /// Временно отключить постановку точек (курсор над панелью)
    DisableTemporary,
    Clear,
    ClosePolygon,
    Exit,
    RidgeStart,
    RidgeStop,
    /// Переставить точку с индексом
    Redo(usize),
    /// Выбрать точку для разбиения
    SplitSelect(usize),
    SplitCancel,
    SplitUndo,
    SplitClearAll,
}

impl AreaEvent {
    pub fn updated(data: AreaMeasurementData) -> Self {
        AreaEvent::Updated(Box::new(data))
    }

    pub fn name(&self) -> &'static str {
        match self {
            AreaEvent::Updated(_) => UPDATED,
            AreaEvent::Show => SHOW,
            AreaEvent::Hide => HIDE,
            AreaEvent::DisableTemporary => DISABLE_TEMPORARY,
            AreaEvent::Clear => CLEAR,
            AreaEvent::ClosePolygon => CLOSE_POLYGON,
            AreaEvent::Exit => EXIT,
            AreaEvent::RidgeStart => RIDGE_START,
            AreaEvent::RidgeStop => RIDGE_STOP,
            AreaEvent::Redo(_) => REDO,
            AreaEvent::SplitSelect(_) => SPLIT_SELECT,
            AreaEvent::SplitCancel => SPLIT_CANCEL,
            AreaEvent::SplitUndo => SPLIT_UNDO,
            AreaEvent::SplitClearAll => SPLIT_CLEAR_ALL,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            AreaEvent::Updated(_) | AreaEvent::Show | AreaEvent::Hide => Direction::Inbound,
            AreaEvent::SplitCancel | AreaEvent::RidgeStop => Direction::Both,
            _ => Direction::Outbound,
        }
    }

    /// Индекс точки для событий, которые его несут
    pub fn point_index(&self) -> Option<usize> {
        match self {
            AreaEvent::Redo(i) | AreaEvent::SplitSelect(i) => Some(*i),
            _ => None,
        }
    }

    pub fn to_message(&self) -> BusMessage {
        let payload = match self {
            AreaEvent::Updated(data) => {
                serde_json::to_value(data.as_ref()).unwrap_or(serde_json::Value::Null)
            }
            AreaEvent::Redo(i) | AreaEvent::SplitSelect(i) => serde_json::Value::from(*i),
            _ => serde_json::Value::Null,
        };
        BusMessage::with_payload(self.name(), payload)
    }

    pub fn from_message(msg: &BusMessage) -> Result<Self, EventError> {
        Self::parse(&msg.name, &msg.payload)
    }

    /// Разобрать событие по имени и нагрузке
    pub fn parse(name: &str, payload: &serde_json::Value) -> Result<Self, EventError> {
        let event = match name {
            UPDATED => AreaEvent::Updated(Box::new(required(name, payload)?)),
            SHOW => AreaEvent::Show,
            HIDE => AreaEvent::Hide,
            DISABLE_TEMPORARY => AreaEvent::DisableTemporary,
            CLEAR => AreaEvent::Clear,
            CLOSE_POLYGON => AreaEvent::ClosePolygon,
            EXIT => AreaEvent::Exit,
            RIDGE_START => AreaEvent::RidgeStart,
            RIDGE_STOP => AreaEvent::RidgeStop,
            REDO => AreaEvent::Redo(required(name, payload)?),
            SPLIT_SELECT => AreaEvent::SplitSelect(required(name, payload)?),
            SPLIT_CANCEL => AreaEvent::SplitCancel,
            SPLIT_UNDO => AreaEvent::SplitUndo,
            SPLIT_CLEAR_ALL => AreaEvent::SplitClearAll,
            other => return Err(EventError::UnknownEvent(other.to_string())),
        };
        Ok(event)
    }
}

fn required<T: for<'de> Deserialize<'de>>(
    name: &str,
    payload: &serde_json::Value,
) -> Result<T, EventError> {
    if payload.is_null() {
        return Err(EventError::MissingPayload(name.to_string()));
    }
    serde_json::from_value(payload.clone()).map_err(|source| EventError::InvalidPayload {
        name: name.to_string(),
        source,
    })
}
