use std::ops::Range;

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};
use wgpu::Device;

use super::vertex::Vertex3D;
use crate::gfx::geometry::{GeometryData, GeometryError, RevolvedSurface};
use crate::gfx::resources::{DrawMesh, GpuMeshHandle, PhongMaterial};
use crate::wgpu_utils::UniformBuffer;

/// Model matrix as uploaded to the vertex shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
}

// GPU resources struct to hold the uploaded mesh and transform binding
pub struct ObjectGpuResources {
    pub mesh: GpuMeshHandle,
    pub transform_buffer: UniformBuffer<TransformUniform>,
    pub transform_bind_group: wgpu::BindGroup,
}

/// A generated surface placed in the scene with its material
pub struct SurfaceObject {
    pub name: String,
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    pub material: PhongMaterial,
    pub transform: Matrix4<f32>, // cgmath 4x4 transformation matrix
    pub gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl SurfaceObject {
    /// Create an object from packed vertices with identity transformation
    pub fn new(name: &str, vertices: Vec<Vertex3D>, indices: Vec<u32>, material: PhongMaterial) -> Self {
        Self {
            name: name.to_string(),
            vertices,
            indices,
            material,
            transform: Matrix4::identity(),
            gpu_resources: None,
        }
    }

    /// Create an object from a revolved surface
    pub fn from_surface(name: &str, surface: &RevolvedSurface, material: PhongMaterial) -> Self {
        Self::new(
            name,
            surface.vertices().to_vec(),
            surface.indices().to_vec(),
            material,
        )
    }

    /// Create an object from generator output
    pub fn from_geometry(
        name: &str,
        data: &GeometryData,
        material: PhongMaterial,
    ) -> Result<Self, GeometryError> {
        Ok(Self::new(name, data.pack()?, data.indices.clone(), material))
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Set translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.transform = Matrix4::from_translation(translation);
    }

    /// Apply translation (multiplies with existing transform)
    pub fn translate(&mut self, translation: Vector3<f32>) {
        self.transform = self.transform * Matrix4::from_translation(translation);
    }

    /// Set non-uniform scale
    pub fn set_scale_xyz(&mut self, scale: Vector3<f32>) {
        self.transform = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
    }

    /// Apply rotation around Y axis
    pub fn rotate_y(&mut self, angle: Deg<f32>) {
        self.transform = self.transform * Matrix4::from_angle_y(angle);
    }

    /// Create a complete transform from translation, rotation about Y, and
    /// per-axis scale
    pub fn set_transform_trs(
        &mut self,
        translation: Vector3<f32>,
        rotation_y: Deg<f32>,
        scale: Vector3<f32>,
    ) {
        let t = Matrix4::from_translation(translation);
        let r = Matrix4::from_angle_y(rotation_y);
        let s = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
        self.transform = t * r * s; // Order matters: T * R * S
    }

    /// Reset to identity matrix
    pub fn reset_transform(&mut self) {
        self.transform = Matrix4::identity();
    }

    /// Column-major model matrix
    pub fn transform_uniform(&self) -> TransformUniform {
        TransformUniform {
            model: self.transform.into(),
        }
    }

    /// Sync the transformation matrix to the GPU if resources exist
    pub fn update_transform(&mut self, queue: &wgpu::Queue) {
        let uniform = self.transform_uniform();
        if let Some(gpu_resources) = &mut self.gpu_resources {
            gpu_resources.transform_buffer.update_content(queue, uniform);
        }
    }

    /// Get the transform bind group for rendering
    pub fn get_transform_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources
            .as_ref()
            .map(|res| &res.transform_bind_group)
    }

    /// Upload the mesh, transform and material
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        let mesh = GpuMeshHandle::upload(device, &self.vertices, &self.indices, &self.name);

        let mut transform_buffer = UniformBuffer::new(device);
        transform_buffer.update_content(queue, self.transform_uniform());

        let transform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Transform Bind Group Layout"),
                entries: &[UniformBuffer::<TransformUniform>::layout_entry(
                    0,
                    wgpu::ShaderStages::VERTEX,
                )],
            });

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Transform Bind Group"),
            layout: &transform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.binding_resource(),
            }],
        });

        self.material.update_gpu_resources(device, queue);

        self.gpu_resources = Some(ObjectGpuResources {
            mesh,
            transform_buffer,
            transform_bind_group,
        });
    }

    /// Drop the GPU copies; the CPU mesh is kept for re-upload
    pub fn release_gpu_resources(&mut self) {
        self.gpu_resources = None;
    }
}

pub trait DrawObject<'a> {
    fn draw_object(&mut self, object: &'a SurfaceObject);
    fn draw_object_instanced(&mut self, object: &'a SurfaceObject, instances: Range<u32>);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_object(&mut self, object: &'b SurfaceObject) {
        self.draw_object_instanced(object, 0..1);
    }

    fn draw_object_instanced(&mut self, object: &'b SurfaceObject, instances: Range<u32>) {
        // Skip drawing if not uploaded
        if let Some(gpu_resources) = &object.gpu_resources {
            self.draw_gpu_mesh_instanced(&gpu_resources.mesh, instances);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{profiles, CurvedWallConfig, RevolveConfig};
    use cgmath::{Vector4, Zero};

    fn roof_object() -> SurfaceObject {
        let surface =
            RevolvedSurface::new(profiles::ROOF_ORNAMENT_PROFILE, RevolveConfig::roof_ornament())
                .unwrap();
        SurfaceObject::from_surface("roof", &surface, PhongMaterial::roof_ornament())
    }

    #[test]
    fn test_new_object_has_identity_transform() {
        let object = roof_object();
        assert_eq!(object.transform, Matrix4::identity());
        assert!(object.gpu_resources.is_none());
        assert!(object.get_transform_bind_group().is_none());
        assert_eq!(object.vertices().len(), 41 * 21);
    }

    #[test]
    fn test_trs_applies_scale_then_rotation_then_translation() {
        let mut object = roof_object();
        object.set_transform_trs(
            Vector3::new(-4.0, 16.0, 0.0),
            Deg(90.0),
            Vector3::new(9.0, 15.0, 9.0),
        );

        // (1, 1, 0) -> scale (9, 15, 0) -> rotate about Y (0, 15, -9) -> translate
        let p = object.transform * Vector4::new(1.0, 1.0, 0.0, 1.0);
        assert!((p.x - -4.0).abs() < 1e-4);
        assert!((p.y - 31.0).abs() < 1e-4);
        assert!((p.z - -9.0).abs() < 1e-4);
    }

    #[test]
    fn test_transform_uniform_is_column_major() {
        let mut object = roof_object();
        object.set_translation(Vector3::new(1.0, 2.0, 3.0));
        let uniform = object.transform_uniform();
        assert_eq!(uniform.model[3], [1.0, 2.0, 3.0, 1.0]);

        object.reset_transform();
        object.translate(Vector3::zero());
        assert_eq!(object.transform, Matrix4::identity());
    }

    #[test]
    fn test_from_geometry_packs_wall() {
        let wall = crate::gfx::geometry::generate_curved_wall(&CurvedWallConfig::default()).unwrap();
        let object = SurfaceObject::from_geometry("wall", &wall, PhongMaterial::default()).unwrap();
        assert_eq!(object.vertices().len(), wall.vertex_count());
        assert_eq!(object.indices(), &wall.indices[..]);
    }

    #[test]
    fn test_from_geometry_rejects_ragged_streams() {
        let mut wall =
            crate::gfx::geometry::generate_curved_wall(&CurvedWallConfig::default()).unwrap();
        wall.normals.pop();
        assert!(matches!(
            SurfaceObject::from_geometry("broken", &wall, PhongMaterial::default()),
            Err(GeometryError::AttributeLengthMismatch { .. })
        ));
    }
}
