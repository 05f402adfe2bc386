//! Material system for Phong shading
//!
//! Provides the ambient/diffuse/specular material carried by each generated
//! surface, together with its GPU uniform buffer and bind group.

use wgpu::Device;

use crate::wgpu_utils::uniform_buffer::UniformBuffer;

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
    _padding: [f32; 3],
}

type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Material bind group management
pub struct MaterialBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl MaterialBindings {
    pub fn new(device: &Device, ubo: &MaterialUBO) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Bind Group Layout"),
            entries: &[MaterialUBO::layout_entry(0, wgpu::ShaderStages::FRAGMENT)],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Material Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        MaterialBindings {
            bind_group_layout,
            bind_group,
        }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Material definition with Phong properties
///
/// Colours are RGBA; the renderer decides whether alpha is used.
pub struct PhongMaterial {
    pub name: String,
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,

    // GPU resources, created on first update
    material_ubo: Option<MaterialUBO>,
    material_bindings: Option<MaterialBindings>,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self::new(
            "Default",
            [1.0, 0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 1.0],
            [0.1, 0.1, 0.1, 0.5],
            32.0,
        )
    }
}

impl PhongMaterial {
    /// Creates a new material
    ///
    /// # Arguments
    /// * `name` - Name for debugging and lookup
    /// * `ambient` - RGBA ambient reflectance
    /// * `diffuse` - RGBA diffuse reflectance
    /// * `specular` - RGBA specular reflectance
    /// * `shininess` - Specular exponent, clamped to be non-negative
    pub fn new(
        name: &str,
        ambient: [f32; 4],
        diffuse: [f32; 4],
        specular: [f32; 4],
        shininess: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            ambient,
            diffuse,
            specular,
            shininess: shininess.max(0.0),
            material_ubo: None,
            material_bindings: None,
        }
    }

    /// Warm sandstone used for the roof ornament
    pub fn roof_ornament() -> Self {
        let sandstone = [0.969, 0.776, 0.561, 1.0];
        Self::new("Roof Ornament", sandstone, sandstone, [1.0, 1.0, 1.0, 1.0], 32.0)
    }

    /// Coral brick tone used for the curved wall
    pub fn curved_wall() -> Self {
        let coral = [1.0, 0.5, 0.31, 1.0];
        Self::new("Curved Wall", coral, coral, [0.5, 0.5, 0.5, 1.0], 32.0)
    }

    /// Builder pattern: Set ambient colour from RGB values
    pub fn with_ambient(mut self, r: f32, g: f32, b: f32) -> Self {
        self.ambient = [r, g, b, self.ambient[3]];
        self
    }

    /// Builder pattern: Set diffuse colour from RGB values
    pub fn with_diffuse(mut self, r: f32, g: f32, b: f32) -> Self {
        self.diffuse = [r, g, b, self.diffuse[3]];
        self
    }

    /// Builder pattern: Set specular colour from RGB values
    pub fn with_specular(mut self, r: f32, g: f32, b: f32) -> Self {
        self.specular = [r, g, b, self.specular[3]];
        self
    }

    /// Builder pattern: Set specular exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess.max(0.0);
        self
    }

    /// Uniform block as laid out for the shader
    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            shininess: self.shininess,
            _padding: [0.0; 3],
        }
    }

    /// Updates GPU resources for this material
    ///
    /// Must be called after material properties change to sync with GPU.
    pub fn update_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        let uniform_data = self.uniform();

        let ubo = self
            .material_ubo
            .get_or_insert_with(|| MaterialUBO::new(device));
        ubo.update_content(queue, uniform_data);

        if self.material_bindings.is_none() {
            self.material_bindings = Some(MaterialBindings::new(device, ubo));
        }
    }

    /// Gets the bind group for rendering
    pub fn get_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.material_bindings.as_ref().map(|b| b.bind_group())
    }

    /// Gets the bind group layout for pipeline creation
    pub fn get_bind_group_layout(&self) -> Option<&wgpu::BindGroupLayout> {
        self.material_bindings
            .as_ref()
            .map(|b| b.bind_group_layout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout_is_aligned() {
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 64);
        assert_eq!(std::mem::size_of::<MaterialUniform>() % 16, 0);
    }

    #[test]
    fn test_builder_keeps_alpha() {
        let material = PhongMaterial::default()
            .with_ambient(0.2, 0.3, 0.4)
            .with_diffuse(0.5, 0.6, 0.7)
            .with_specular(0.9, 0.9, 0.9)
            .with_shininess(-4.0);

        assert_eq!(material.ambient, [0.2, 0.3, 0.4, 1.0]);
        assert_eq!(material.diffuse, [0.5, 0.6, 0.7, 1.0]);
        assert_eq!(material.specular, [0.9, 0.9, 0.9, 0.5]);
        assert_eq!(material.shininess, 0.0);
    }

    #[test]
    fn test_roof_ornament_uniform() {
        let uniform = PhongMaterial::roof_ornament().uniform();
        assert_eq!(uniform.diffuse, [0.969, 0.776, 0.561, 1.0]);
        assert_eq!(uniform.specular, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(uniform.shininess, 32.0);
    }

    #[test]
    fn test_curved_wall_uniform() {
        let uniform = PhongMaterial::curved_wall().uniform();
        assert_eq!(uniform.ambient, [1.0, 0.5, 0.31, 1.0]);
        assert_eq!(uniform.diffuse, uniform.ambient);
        assert_eq!(uniform.specular, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(uniform.shininess, 32.0);
    }

    #[test]
    fn test_no_gpu_resources_before_update() {
        let material = PhongMaterial::default();
        assert!(material.get_bind_group().is_none());
        assert!(material.get_bind_group_layout().is_none());
    }
}
