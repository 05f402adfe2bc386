//! Headless GPU device acquisition
//!
//! Lets meshes be uploaded without a window surface, for tools and for
//! renderers that manage their own surface.

use anyhow::Context;

/// A wgpu device and queue with no presentation surface
pub struct GpuContext {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Requests an adapter and device with default limits
    ///
    /// # Errors
    /// Fails when no adapter is available or the device request is refused.
    pub async fn new_headless() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter found")?;

        let info = adapter.get_info();
        log::info!("Using adapter '{}' ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Lathe Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to request a GPU device")?;

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }

    /// Blocking variant of [`GpuContext::new_headless`]
    pub fn headless() -> anyhow::Result<Self> {
        pollster::block_on(Self::new_headless())
    }
}
