mod marker;
mod mesh;
mod shader;
mod sphere;
mod vertex;

use marker::LightMarker;
use shader::{PipelineTarget, ShaderProgram, ShaderSource};
use sphere::SphereModel;
use vertex::BufferLayout;

use std::sync::Arc;

use anyhow::Result;
use glam::{Mat4, Vec3};
use orb::{FlyCamera, Vertex};
use winit::window::Window;

use crate::config::ViewerConfig;

/// MSAA sample count (4x anti-aliasing)
const MSAA_SAMPLE_COUNT: u32 = 4;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const VERTEX_SHADER: &str = "scene.vert.wgsl";
const LIGHTING_SHADER: &str = "lighting.frag.wgsl";
const LIGHT_SOURCE_SHADER: &str = "light_source.frag.wgsl";

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Programs
    lighting: ShaderProgram,
    light_source: ShaderProgram,
    // Scene
    sphere: SphereModel,
    marker: LightMarker,
    light_color: Vec3,
    object_color: Vec3,
    clear_color: wgpu::Color,
    near: f32,
    far: f32,
    // Targets
    msaa_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,
    pub size: winit::dpi::PhysicalSize<u32>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, viewer: &ViewerConfig) -> Result<Self> {
        let size = window.inner_size();
        let instance = Self::create_instance();
        let surface = instance.create_surface(window)?;
        let adapter = Self::request_adapter(&instance, &surface).await?;

        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        let wireframe = viewer.wireframe
            && adapter
                .features()
                .contains(wgpu::Features::POLYGON_MODE_LINE);
        if viewer.wireframe && !wireframe {
            log::warn!("Adapter does not support line polygon mode, drawing filled triangles");
        }

        let (device, queue) = Self::request_device(&adapter, wireframe).await?;
        let config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &config);

        let target = PipelineTarget {
            color_format: config.format,
            depth_format: DEPTH_FORMAT,
            sample_count: MSAA_SAMPLE_COUNT,
            polygon_mode: if wireframe {
                wgpu::PolygonMode::Line
            } else {
                wgpu::PolygonMode::Fill
            },
            vertex_layout: Vertex::layout(),
        };

        let shader_dir = viewer.shader_dir.as_deref();
        let lighting_source = ShaderSource::load(shader_dir, VERTEX_SHADER, LIGHTING_SHADER)?;
        let lighting = ShaderProgram::new(&device, &lighting_source, &target)?;
        let light_source_source = ShaderSource::load(shader_dir, VERTEX_SHADER, LIGHT_SOURCE_SHADER)?;
        let light_source = ShaderProgram::new(&device, &light_source_source, &target)?;

        let sphere = SphereModel::new(&device, viewer.sphere_points, viewer.sphere_radius)?;
        let marker = LightMarker::new(&device, viewer.light_position);

        let msaa_view = Self::create_msaa_view(&device, &config);
        let depth_view = Self::create_depth_view(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            lighting,
            light_source,
            sphere,
            marker,
            light_color: viewer.light_color,
            object_color: viewer.object_color,
            clear_color: viewer.clear_color,
            near: viewer.near,
            far: viewer.far,
            msaa_view,
            depth_view,
            size,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.msaa_view = Self::create_msaa_view(&self.device, &self.config);
        self.depth_view = Self::create_depth_view(&self.device, &self.config);
    }

    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    pub fn render(&mut self, camera: &FlyCamera) -> Result<(), wgpu::SurfaceError> {
        self.update_uniforms(camera);

        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&Default::default());
        let mut encoder = self.device.create_command_encoder(&Default::default());

        self.record_scene_pass(&mut encoder, &view);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn update_uniforms(&mut self, camera: &FlyCamera) {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(self.aspect(), self.near, self.far);

        let program = &mut self.light_source;
        program.set_mat4("view", &view);
        program.set_mat4("projection", &projection);
        program.set_mat4("model", &self.marker.model_matrix());
        program.set_vec3("color", self.light_color);

        let program = &mut self.lighting;
        program.set_mat4("view", &view);
        program.set_mat4("projection", &projection);
        program.set_mat4("model", &Mat4::IDENTITY);
        program.set_vec3("object_color", self.object_color);
        program.set_vec3("light_color", self.light_color);
        program.set_vec3("light_pos", self.marker.position());
        program.set_vec3("view_pos", camera.position());
    }

    fn record_scene_pass(&mut self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.msaa_view,
                resolve_target: Some(target),
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        self.light_source.activate(&self.queue, &mut pass);
        self.marker.draw(&mut pass);

        self.lighting.activate(&self.queue, &mut pass);
        self.sphere.draw(&mut pass);
    }

    fn create_instance() -> wgpu::Instance {
        wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'static>,
    ) -> Result<wgpu::Adapter> {
        Ok(instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await?)
    }

    async fn request_device(
        adapter: &wgpu::Adapter,
        wireframe: bool,
    ) -> Result<(wgpu::Device, wgpu::Queue)> {
        let required_features = if wireframe {
            wgpu::Features::POLYGON_MODE_LINE
        } else {
            wgpu::Features::empty()
        };

        Ok(adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features,
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
                experimental_features: wgpu::ExperimentalFeatures::default(),
            })
            .await?)
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_msaa_view(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> wgpu::TextureView {
        Self::create_target_view(device, config, config.format, "MSAA Texture")
    }

    fn create_depth_view(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> wgpu::TextureView {
        Self::create_target_view(device, config, DEPTH_FORMAT, "Depth Texture")
    }

    fn create_target_view(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        format: wgpu::TextureFormat,
        label: &str,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: MSAA_SAMPLE_COUNT,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}
