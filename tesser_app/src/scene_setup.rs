//! Demo scene geometry

use tesser_engine::prelude::*;

/// Outline of a square as point index pairs
const SQUARE_EDGES: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

/// Cube centered on the origin with the given edge length
///
/// Built by extruding the back face along z.
pub fn cube(size: f32, color: Color) -> Result<Model, SceneError> {
    let half = size * 0.5;
    let face = [(-half, -half), (half, -half), (half, half), (-half, half)]
        .into_iter()
        .map(|(x, y)| Vec4::new(x, y, -half, 1.0))
        .collect();
    Model::extruded(color, face, SQUARE_EDGES.to_vec(), Vec4::new(0.0, 0.0, size, 0.0))
}

/// One single-line model per coordinate axis, colored x = red, y = green, z = blue
pub fn axes(length: f32) -> Result<Vec<Model>, SceneError> {
    let colors = [
        Color::new(1.0, 0.0, 0.0),
        Color::new(0.0, 1.0, 0.0),
        Color::new(0.0, 0.0, 1.0),
    ];
    colors
        .into_iter()
        .enumerate()
        .map(|(axis, color)| {
            let mut end = Vec4::new(0.0, 0.0, 0.0, 1.0);
            end[axis] = length;
            Model::new(color, vec![Vec4::new(0.0, 0.0, 0.0, 1.0), end], vec![(0, 1)])
        })
        .collect()
}

/// Attach demo geometry to whichever of the well-known entities exist
pub fn populate(registry: &mut EntityRegistry) -> Result<(), SceneError> {
    if let Ok(axis) = registry.get("Axis") {
        let entity = registry.entity_mut(axis)?;
        for model in axes(1.0)? {
            entity.add_model(model);
        }
    }
    if let Ok(cube_id) = registry.get("Cube") {
        registry.entity_mut(cube_id)?.add_model(cube(1.0, Color::from_packed(0x00FF_C107))?);
        if let Ok(label) = registry.get("Label") {
            registry.reparent(label, cube_id)?;
            registry.set_translation(label, &[0.0, 0.75, 0.0, 1.0])?;
            registry.entity_mut(label)?.add_model(cube(0.1, Color::BLACK)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_edges() {
        let model = cube(2.0, Color::BLACK).unwrap();
        assert_eq!(model.points().len(), 8);
        assert_eq!(model.line_endpoints().count(), 12);
        assert_eq!(model.replicate(), 4..8);
        assert!(model.line_endpoints().all(|(a, b)| (a - b).norm() == 2.0));
    }

    #[test]
    fn test_populate_default_scene() {
        let mut registry = EntityRegistry::new(["Axis", "Cube", "Label"]).unwrap();
        populate(&mut registry).unwrap();
        let cube = registry.get("Cube").unwrap();
        assert_eq!(registry.child_count(registry.root()).unwrap(), 2);
        assert_eq!(registry.child_count(cube).unwrap(), 1);
        assert_eq!(registry.lookup("Axis").unwrap().models().len(), 3);
    }
}
