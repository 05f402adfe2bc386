//! Builds the reference surfaces and the curved wall, then logs their sizes.
//!
//! Run with `RUST_LOG=info cargo run --example surface_stats`. Pass `--gpu`
//! to also upload every mesh through a headless device.

use cgmath::{Deg, Vector3};
use lathe::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let upload = std::env::args().any(|arg| arg == "--gpu");

    let roof = RevolvedSurface::new(profiles::ROOF_ORNAMENT_PROFILE, RevolveConfig::roof_ornament())?;
    let sculpture = RevolvedSurface::new(profiles::SCULPTURE_PROFILE, RevolveConfig::sculpture())?;
    let wall = generate_curved_wall(&CurvedWallConfig::default())?;

    for (name, surface) in [("Roof Ornament", &roof), ("Sculpture", &sculpture)] {
        log::info!(
            "{}: degree {}, {} rings x {} verts, {} triangles ({} reversed), {} fallback normals",
            name,
            surface.profile().degree(),
            surface.ring_count(),
            surface.verts_per_ring(),
            surface.triangle_count(),
            surface.reversed_triangle_count(),
            surface.fallback_normal_count()
        );
        log::info!(
            "{}: {} vertex bytes, {} index bytes",
            name,
            surface.vertex_bytes().len(),
            surface.index_bytes().len()
        );
    }
    log::info!(
        "Curved Wall: {} vertices, {} triangles",
        wall.vertex_count(),
        wall.triangle_count()
    );

    let mut objects = vec![
        SurfaceObject::from_surface("Roof Ornament", &roof, PhongMaterial::roof_ornament()),
        SurfaceObject::from_surface("Sculpture", &sculpture, PhongMaterial::default()),
        SurfaceObject::from_geometry("Curved Wall", &wall, PhongMaterial::curved_wall())?,
    ];
    objects[0].set_transform_trs(
        Vector3::new(-4.0, 16.0, 0.0),
        Deg(0.0),
        Vector3::new(9.0, 15.0, 9.0),
    );
    objects[1].set_translation(Vector3::new(20.0, 0.0, 0.0));

    if !upload {
        return Ok(());
    }

    let context = GpuContext::headless()?;
    for object in &mut objects {
        object.init_gpu_resources(&context.device, &context.queue);
    }
    log::info!("Uploaded {} objects", objects.len());

    for object in &mut objects {
        object.release_gpu_resources();
    }
    Ok(())
}
