//! Line geometry attached to entities

use std::ops::Range;

use crate::foundation::math::Vec4;
use crate::render::Color;

use super::error::{SceneError, SceneResult};

/// A line between two points of a model, as point indices
pub type Line = (usize, usize);

/// A colored wireframe model in the owning entity's local space
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Color of every line in the model
    pub color: Color,
    points: Vec<Vec4>,
    lines: Vec<Line>,
    original_len: usize,
}

impl Model {
    /// Create a model, rejecting lines that reference missing points
    pub fn new(color: Color, points: Vec<Vec4>, lines: Vec<Line>) -> SceneResult<Self> {
        let len = points.len();
        if let Some(&(a, b)) = lines.iter().find(|&&(a, b)| a >= len || b >= len) {
            return Err(SceneError::NoSuchIndex { index: a.max(b), len });
        }
        Ok(Self { color, original_len: len, points, lines })
    }

    /// Extrude a model along `direction`
    ///
    /// The points are the given ones followed by a replicate of each moved by
    /// `direction`. The lines are the given ones, the same lines between the
    /// replicate points, then one connector from every point to its replicate.
    pub fn extruded(color: Color, points: Vec<Vec4>, lines: Vec<Line>, direction: Vec4) -> SceneResult<Self> {
        let n = points.len();
        let mut model = Self::new(color, points, lines)?;

        model.points.extend_from_within(..);
        for point in &mut model.points[n..] {
            *point += direction;
        }

        let replicate_lines: Vec<Line> = model.lines.iter().map(|&(a, b)| (a + n, b + n)).collect();
        model.lines.extend(replicate_lines);
        model.lines.extend((0..n).map(|i| (i, i + n)));
        Ok(model)
    }

    /// Index range of the points the model was built from
    pub fn original(&self) -> Range<usize> {
        0..self.original_len
    }

    /// Index range of the extruded replicate points, empty unless extruded
    pub fn replicate(&self) -> Range<usize> {
        self.original_len..self.points.len()
    }

    /// Points of the model
    pub fn points(&self) -> &[Vec4] {
        &self.points
    }

    /// Lines of the model
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get the point at `index`
    pub fn point(&self, index: usize) -> SceneResult<Vec4> {
        self.points
            .get(index)
            .copied()
            .ok_or(SceneError::NoSuchIndex { index, len: self.points.len() })
    }

    /// Replace the point at `index`
    pub fn set_point(&mut self, index: usize, value: Vec4) -> SceneResult<()> {
        let len = self.points.len();
        let point = self.points.get_mut(index).ok_or(SceneError::NoSuchIndex { index, len })?;
        *point = value;
        Ok(())
    }

    /// Endpoints of every line, in line order
    pub fn line_endpoints(&self) -> impl Iterator<Item = (Vec4, Vec4)> + '_ {
        self.lines.iter().map(|&(a, b)| (self.points[a], self.points[b]))
    }
}
