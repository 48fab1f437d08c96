//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{AiLevel, PlayerId, WallOrientation, WallPosition};
use crate::error::EngineError;

/// Map an engine error onto `ValueError`.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Parse a 1-based player number.
pub(crate) fn parse_player(n: u8) -> PyResult<PlayerId> {
    PlayerId::from_number(n).ok_or_else(|| PyValueError::new_err(format!("no such player: {n}")))
}

/// Parse "horizontal" / "vertical" (or "h" / "v").
pub(crate) fn parse_orientation(s: &str) -> PyResult<WallOrientation> {
    match s.to_ascii_lowercase().as_str() {
        "horizontal" | "h" => Ok(WallOrientation::Horizontal),
        "vertical" | "v" => Ok(WallOrientation::Vertical),
        other => Err(PyValueError::new_err(format!("unknown orientation: {other}"))),
    }
}

/// Parse "easy" / "medium" / "hard"; anything else raises `ValueError`.
pub(crate) fn parse_ai_level(s: &str) -> PyResult<AiLevel> {
    s.parse().map_err(to_py_err)
}

/// Python wrapper for WallPosition.
#[pyclass(name = "WallPosition")]
#[derive(Clone, Debug)]
pub struct PyWallPosition(pub WallPosition);

#[pymethods]
impl PyWallPosition {
    #[new]
    fn new(x: i32, y: i32, orientation: &str) -> PyResult<Self> {
        Ok(Self(WallPosition::new(x, y, parse_orientation(orientation)?)))
    }

    #[getter]
    fn x(&self) -> i32 {
        self.0.x
    }

    #[getter]
    fn y(&self) -> i32 {
        self.0.y
    }

    #[getter]
    fn orientation(&self) -> String {
        self.0.orientation.to_string()
    }

    fn __repr__(&self) -> String {
        format!("WallPosition({}, {}, '{}')", self.0.x, self.0.y, self.0.orientation)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
