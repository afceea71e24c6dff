use glam::{DQuat, DVec3};

use crate::color::Rgba;
use crate::layout::{Layout, align_z_to};

// ---------------------------------------------------------------------------
// Geometry factory – what a host must provide to show a layout
// ---------------------------------------------------------------------------

/// Mesh-primitive factory of a host scene graph.
///
/// Cylinders are created along their local +Z axis and then turned with
/// [`GeometryFactory::orient`].
pub trait GeometryFactory {
    type Handle: Copy;

    fn create_sphere(&mut self, name: &str, center: DVec3, radius: f64) -> Self::Handle;

    fn create_cylinder(
        &mut self,
        name: &str,
        center: DVec3,
        length: f64,
        radius: f64,
    ) -> Self::Handle;

    /// Align the object's local +Z axis with `axis`.
    fn orient(&mut self, handle: Self::Handle, axis: DVec3);

    fn assign_material(&mut self, handle: Self::Handle, color: Rgba);
}

/// Create one sphere per placement, then one cylinder per connector.
///
/// Returns the handles in creation order: balls first, then sticks.
pub fn realize<F: GeometryFactory>(layout: &Layout, factory: &mut F) -> Vec<F::Handle> {
    let mut handles = Vec::with_capacity(layout.placements.len() + layout.connectors.len());

    for p in &layout.placements {
        let h = factory.create_sphere(&format!("Ball_{}", p.index), p.position, p.radius);
        factory.assign_material(h, p.color);
        handles.push(h);
    }

    for c in &layout.connectors {
        let h = factory.create_cylinder(
            &format!("Stick_{}", c.index),
            c.midpoint(),
            c.length(),
            c.radius,
        );
        factory.assign_material(h, c.color);
        factory.orient(h, c.direction());
        handles.push(h);
    }

    handles
}

// ---------------------------------------------------------------------------
// Scene – in-memory host scene graph
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f64 },
    Cylinder { length: f64, radius: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub shape: Shape,
    pub center: DVec3,
    pub rotation: DQuat,
    /// `None` until a material is assigned.
    pub color: Option<Rgba>,
}

impl SceneObject {
    /// Cylinder end points in world space; `None` for spheres.
    pub fn cylinder_ends(&self) -> Option<(DVec3, DVec3)> {
        match self.shape {
            Shape::Cylinder { length, .. } => {
                let half = self.rotation * DVec3::Z * (length * 0.5);
                Some((self.center - half, self.center + half))
            }
            Shape::Sphere { .. } => None,
        }
    }
}

/// Index of an object in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

/// Objects accumulate across visualisations until [`Scene::clear`].
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    fn push(&mut self, name: &str, shape: Shape, center: DVec3) -> ObjectId {
        self.objects.push(SceneObject {
            name: name.to_string(),
            shape,
            center,
            rotation: DQuat::IDENTITY,
            color: None,
        });
        ObjectId(self.objects.len() - 1)
    }
}

impl GeometryFactory for Scene {
    type Handle = ObjectId;

    fn create_sphere(&mut self, name: &str, center: DVec3, radius: f64) -> ObjectId {
        self.push(name, Shape::Sphere { radius }, center)
    }

    fn create_cylinder(&mut self, name: &str, center: DVec3, length: f64, radius: f64) -> ObjectId {
        self.push(name, Shape::Cylinder { length, radius }, center)
    }

    fn orient(&mut self, handle: ObjectId, axis: DVec3) {
        match self.objects.get_mut(handle.0) {
            Some(obj) => obj.rotation = align_z_to(axis),
            None => log::warn!("orient: unknown object {}", handle.0),
        }
    }

    fn assign_material(&mut self, handle: ObjectId, color: Rgba) {
        match self.objects.get_mut(handle.0) {
            Some(obj) => obj.color = Some(color),
            None => log::warn!("assign_material: unknown object {}", handle.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::color::STICK_COLOR;
    use crate::layout::{LayoutParams, Sample, layout_samples};

    /// Records every factory call in order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        next: usize,
    }

    impl GeometryFactory for Recorder {
        type Handle = usize;

        fn create_sphere(&mut self, name: &str, _center: DVec3, _radius: f64) -> usize {
            self.calls.push(format!("sphere {name}"));
            self.next += 1;
            self.next - 1
        }

        fn create_cylinder(&mut self, name: &str, _c: DVec3, length: f64, _r: f64) -> usize {
            self.calls.push(format!("cylinder {name} {length}"));
            self.next += 1;
            self.next - 1
        }

        fn orient(&mut self, handle: usize, _axis: DVec3) {
            self.calls.push(format!("orient {handle}"));
        }

        fn assign_material(&mut self, handle: usize, _color: Rgba) {
            self.calls.push(format!("material {handle}"));
        }
    }

    fn three_point_layout() -> Layout {
        let samples = [
            Sample { index: 0, x: 0.0, y: 0.0 },
            Sample { index: 1, x: 10.0, y: 0.0 },
            Sample { index: 2, x: 10.0, y: 10.0 },
        ];
        let params = LayoutParams {
            spacing: 5.0,
            ball_radius: 0.2,
            stick_radius: 0.05,
        };
        layout_samples(&samples, &params).unwrap()
    }

    #[test]
    fn realize_creates_balls_then_sticks() {
        let mut rec = Recorder::default();
        let handles = realize(&three_point_layout(), &mut rec);
        assert_eq!(handles, vec![0, 1, 2, 3, 4]);
        assert_eq!(
            rec.calls,
            vec![
                "sphere Ball_0",
                "material 0",
                "sphere Ball_1",
                "material 1",
                "sphere Ball_2",
                "material 2",
                "cylinder Stick_0 5",
                "material 3",
                "orient 3",
                "cylinder Stick_1 5",
                "material 4",
                "orient 4",
            ]
        );
    }

    #[test]
    fn scene_objects_carry_geometry_and_material() {
        let mut scene = Scene::default();
        let handles = realize(&three_point_layout(), &mut scene);
        assert_eq!(scene.len(), 5);

        let ball = &scene.objects()[handles[1].0];
        assert_eq!(ball.name, "Ball_1");
        assert_eq!(ball.shape, Shape::Sphere { radius: 0.2 });
        assert_eq!(ball.center, DVec3::new(5.0, 0.0, 0.0));
        assert!(ball.color.is_some());
        assert!(ball.cylinder_ends().is_none());

        let stick = &scene.objects()[handles[4].0];
        assert_eq!(stick.name, "Stick_1");
        assert_eq!(stick.center, DVec3::new(5.0, 2.5, 0.0));
        assert_eq!(stick.color, Some(STICK_COLOR));
        let (a, b) = stick.cylinder_ends().unwrap();
        assert_relative_eq!(a.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(a.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(b.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(b.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn realized_sticks_point_along_their_connector() {
        let mut scene = Scene::default();
        let handles = realize(&three_point_layout(), &mut scene);

        let along_x = scene.objects()[handles[3].0].rotation * DVec3::Z;
        assert_relative_eq!(along_x.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(along_x.y, 0.0, epsilon = 1e-12);

        let along_y = scene.objects()[handles[4].0].rotation * DVec3::Z;
        assert_relative_eq!(along_y.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(along_y.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(along_y.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_stick_keeps_identity_rotation() {
        let samples = [
            Sample { index: 0, x: 1.0, y: 1.0 },
            Sample { index: 1, x: 1.0, y: 1.0 },
        ];
        let params = LayoutParams {
            spacing: 1.0,
            ball_radius: 0.2,
            stick_radius: 0.05,
        };
        let mut scene = Scene::default();
        let handles = realize(&layout_samples(&samples, &params).unwrap(), &mut scene);

        let stick = &scene.objects()[handles[2].0];
        assert_eq!(stick.shape, Shape::Cylinder { length: 0.0, radius: 0.05 });
        assert_eq!(stick.rotation, DQuat::IDENTITY);
    }

    #[test]
    fn repeated_realize_accumulates_until_cleared() {
        let mut scene = Scene::default();
        let layout = three_point_layout();
        realize(&layout, &mut scene);
        realize(&layout, &mut scene);
        assert_eq!(scene.len(), 10);

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn unknown_handle_is_ignored() {
        let mut scene = Scene::default();
        scene.orient(ObjectId(3), DVec3::X);
        scene.assign_material(ObjectId(3), STICK_COLOR);
        assert!(scene.is_empty());
    }
}
