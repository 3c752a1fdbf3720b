//! Shader programs assembled from a vertex-stage and a fragment-stage WGSL text.
//!
//! The two texts are concatenated, parsed and validated with naga before any
//! GPU object exists, so a broken shader surfaces as a [`ShaderError`] instead
//! of a device error. Uniform blocks are reflected from the module, which lets
//! callers assign uniforms by name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::{Mat4, Vec2, Vec3, Vec4};
use wgpu::naga;

use crate::assets::Assets;

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

const UNIFORM_ALIGNMENT: u64 = 16;

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to read shader file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("embedded shader {0} not found")]
    MissingAsset(String),
    #[error("failed to parse shader {label}:\n{message}")]
    Parse { label: String, message: String },
    #[error("shader {label} failed validation:\n{message}")]
    Validation { label: String, message: String },
    #[error("shader {label} has no {stage} entry point `{name}`")]
    MissingEntryPoint {
        label: String,
        stage: &'static str,
        name: &'static str,
    },
    #[error("shader {label}: uniform `{name}` is bound in group {group}, only group 0 is supported")]
    UnsupportedBinding {
        label: String,
        name: String,
        group: u32,
    },
}

/// Vertex-stage and fragment-stage WGSL text for one program.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    label: String,
    vertex: String,
    fragment: String,
}

impl ShaderSource {
    pub fn new(label: impl Into<String>, vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Load both stages by file name, from `dir` when given, otherwise from the
    /// copies embedded under `assets/shaders/`.
    pub fn load(dir: Option<&Path>, vertex: &str, fragment: &str) -> Result<Self, ShaderError> {
        let label = format!("{vertex} + {fragment}");
        let read = |name: &str| match dir {
            Some(dir) => read_file(&dir.join(name)),
            None => read_asset(name),
        };
        Ok(Self::new(label, read(vertex)?, read(fragment)?))
    }

    /// Parse, validate and reflect the combined program text.
    pub fn link(&self) -> Result<LinkedShader, ShaderError> {
        let text = format!("{}\n{}", self.vertex, self.fragment);

        let module = naga::front::wgsl::parse_str(&text).map_err(|e| ShaderError::Parse {
            label: self.label.clone(),
            message: e.emit_to_string(&text),
        })?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        )
        .validate(&module)
        .map_err(|e| ShaderError::Validation {
            label: self.label.clone(),
            message: e.emit_to_string(&text),
        })?;

        for (stage, name, kind) in [
            ("vertex", VERTEX_ENTRY, naga::ShaderStage::Vertex),
            ("fragment", FRAGMENT_ENTRY, naga::ShaderStage::Fragment),
        ] {
            let found = module
                .entry_points
                .iter()
                .any(|ep| ep.name == name && ep.stage == kind);
            if !found {
                return Err(ShaderError::MissingEntryPoint {
                    label: self.label.clone(),
                    stage,
                    name,
                });
            }
        }

        let layout = UniformLayout::reflect(&module, &self.label)?;

        Ok(LinkedShader {
            label: self.label.clone(),
            text,
            layout,
        })
    }
}

fn read_file(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_asset(name: &str) -> Result<String, ShaderError> {
    let path = format!("shaders/{name}");
    Assets::load_string(&path).ok_or(ShaderError::MissingAsset(path))
}

/// A validated program ready to be turned into a GPU pipeline.
#[derive(Debug, Clone)]
pub struct LinkedShader {
    label: String,
    text: String,
    layout: UniformLayout,
}

impl LinkedShader {
    pub fn layout(&self) -> &UniformLayout {
        &self.layout
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    Float,
    Int,
    Uint,
    Vec2,
    Vec3,
    Vec4,
    Mat4,
}

impl UniformKind {
    pub fn size(self) -> u32 {
        match self {
            Self::Float | Self::Int | Self::Uint => 4,
            Self::Vec2 => 8,
            Self::Vec3 => 12,
            Self::Vec4 => 16,
            Self::Mat4 => 64,
        }
    }

    fn from_naga(inner: &naga::TypeInner) -> Option<Self> {
        use naga::{ScalarKind, TypeInner, VectorSize};

        match *inner {
            TypeInner::Scalar(scalar) if scalar.width == 4 => match scalar.kind {
                ScalarKind::Float => Some(Self::Float),
                ScalarKind::Sint => Some(Self::Int),
                ScalarKind::Uint => Some(Self::Uint),
                _ => None,
            },
            TypeInner::Vector { size, scalar }
                if scalar.kind == ScalarKind::Float && scalar.width == 4 =>
            {
                Some(match size {
                    VectorSize::Bi => Self::Vec2,
                    VectorSize::Tri => Self::Vec3,
                    VectorSize::Quad => Self::Vec4,
                })
            }
            TypeInner::Matrix {
                columns: VectorSize::Quad,
                rows: VectorSize::Quad,
                scalar,
            } if scalar.kind == ScalarKind::Float && scalar.width == 4 => Some(Self::Mat4),
            _ => None,
        }
    }
}

/// Where a named uniform lives: which uniform buffer, at which byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformField {
    pub slot: usize,
    pub offset: u32,
    pub kind: UniformKind,
}

/// One `var<uniform>` binding in group 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformBinding {
    pub binding: u32,
    pub size: u64,
}

#[derive(Debug, Clone, Default)]
pub struct UniformLayout {
    bindings: Vec<UniformBinding>,
    fields: HashMap<String, UniformField>,
}

impl UniformLayout {
    fn reflect(module: &naga::Module, label: &str) -> Result<Self, ShaderError> {
        let mut layout = Self::default();

        for (_, var) in module.global_variables.iter() {
            if var.space != naga::AddressSpace::Uniform {
                continue;
            }
            let Some(binding) = &var.binding else { continue };
            let var_name = var.name.clone().unwrap_or_default();

            if binding.group != 0 {
                return Err(ShaderError::UnsupportedBinding {
                    label: label.to_string(),
                    name: var_name,
                    group: binding.group,
                });
            }

            let slot = layout.bindings.len();
            let size = match &module.types[var.ty].inner {
                naga::TypeInner::Struct { members, span } => {
                    for member in members {
                        let Some(name) = &member.name else { continue };
                        let inner = &module.types[member.ty].inner;
                        match UniformKind::from_naga(inner) {
                            Some(kind) => layout.insert(name, slot, member.offset, kind),
                            None => log::debug!("{label}: uniform member `{name}` has no setter"),
                        }
                    }
                    u64::from(*span)
                }
                inner => match UniformKind::from_naga(inner) {
                    Some(kind) => {
                        layout.insert(&var_name, slot, 0, kind);
                        u64::from(kind.size())
                    }
                    None => {
                        log::debug!("{label}: uniform `{var_name}` has no setter");
                        continue;
                    }
                },
            };

            layout.bindings.push(UniformBinding {
                binding: binding.binding,
                size: size.div_ceil(UNIFORM_ALIGNMENT) * UNIFORM_ALIGNMENT,
            });
        }

        Ok(layout)
    }

    fn insert(&mut self, name: &str, slot: usize, offset: u32, kind: UniformKind) {
        if self.fields.contains_key(name) {
            log::warn!("Uniform `{name}` declared twice, keeping the first declaration");
            return;
        }
        self.fields.insert(name.to_string(), UniformField { slot, offset, kind });
    }

    pub fn bindings(&self) -> &[UniformBinding] {
        &self.bindings
    }

    pub fn field(&self, name: &str) -> Option<UniformField> {
        self.fields.get(name).copied()
    }
}

/// CPU-side copy of a program's uniform buffers, written by name.
///
/// Names that don't exist, or exist with another type, are ignored like a GL
/// uniform location of -1.
#[derive(Debug, Clone)]
pub struct UniformBlock {
    layout: UniformLayout,
    data: Vec<Vec<u8>>,
    dirty: Vec<bool>,
}

impl UniformBlock {
    pub fn new(layout: UniformLayout) -> Self {
        let data = layout
            .bindings
            .iter()
            .map(|b| vec![0u8; b.size as usize])
            .collect();
        let dirty = vec![true; layout.bindings.len()];
        Self {
            layout,
            data,
            dirty,
        }
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.write(name, &[UniformKind::Uint, UniformKind::Int], bytemuck::bytes_of(&u32::from(value)));
    }

    pub fn set_int(&mut self, name: &str, value: i32) {
        self.write(name, &[UniformKind::Int, UniformKind::Uint], bytemuck::bytes_of(&value));
    }

    pub fn set_float(&mut self, name: &str, value: f32) {
        self.write(name, &[UniformKind::Float], bytemuck::bytes_of(&value));
    }

    pub fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.write(name, &[UniformKind::Vec2], bytemuck::cast_slice(&value.to_array()));
    }

    pub fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.write(name, &[UniformKind::Vec3], bytemuck::cast_slice(&value.to_array()));
    }

    pub fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.write(name, &[UniformKind::Vec4], bytemuck::cast_slice(&value.to_array()));
    }

    pub fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.write(name, &[UniformKind::Mat4], bytemuck::cast_slice(&value.to_cols_array()));
    }

    fn write(&mut self, name: &str, accepted: &[UniformKind], bytes: &[u8]) {
        let Some(field) = self.layout.field(name) else {
            log::trace!("Ignoring unknown uniform `{name}`");
            return;
        };
        if !accepted.contains(&field.kind) {
            log::trace!("Ignoring uniform `{name}`: declared as {:?}", field.kind);
            return;
        }
        let start = field.offset as usize;
        self.data[field.slot][start..start + bytes.len()].copy_from_slice(bytes);
        self.dirty[field.slot] = true;
    }

    /// Bytes of each binding that changed since the last call.
    fn take_dirty(&mut self) -> impl Iterator<Item = (usize, &[u8])> {
        self.dirty
            .iter_mut()
            .zip(&self.data)
            .enumerate()
            .filter_map(|(slot, (dirty, data))| std::mem::take(dirty).then_some((slot, data.as_slice())))
    }

    #[cfg(test)]
    fn bytes_of(&self, name: &str) -> Option<&[u8]> {
        let field = self.layout.field(name)?;
        let start = field.offset as usize;
        Some(&self.data[field.slot][start..start + field.kind.size() as usize])
    }
}

/// Fixed-function state shared by every program the viewer builds.
#[derive(Debug, Clone)]
pub struct PipelineTarget {
    pub color_format: wgpu::TextureFormat,
    pub depth_format: wgpu::TextureFormat,
    pub sample_count: u32,
    pub polygon_mode: wgpu::PolygonMode,
    pub vertex_layout: wgpu::VertexBufferLayout<'static>,
}

impl PipelineTarget {
    /// Wireframes keep back faces so the far side of a mesh stays visible.
    pub fn cull_mode(&self) -> Option<wgpu::Face> {
        match self.polygon_mode {
            wgpu::PolygonMode::Fill => Some(wgpu::Face::Back),
            wgpu::PolygonMode::Line | wgpu::PolygonMode::Point => None,
        }
    }
}

/// A linked program on the GPU: pipeline, uniform buffers and their bind group.
pub struct ShaderProgram {
    label: String,
    pipeline: wgpu::RenderPipeline,
    buffers: Vec<wgpu::Buffer>,
    bind_group: wgpu::BindGroup,
    uniforms: UniformBlock,
}

impl ShaderProgram {
    pub fn new(
        device: &wgpu::Device,
        source: &ShaderSource,
        target: &PipelineTarget,
    ) -> Result<Self, ShaderError> {
        let linked = source.link()?;
        let program = Self::from_linked(device, linked, target);
        log::info!("Built shader program {}", program.label);
        Ok(program)
    }

    fn from_linked(device: &wgpu::Device, linked: LinkedShader, target: &PipelineTarget) -> Self {
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(linked.label.as_str()),
            source: wgpu::ShaderSource::Wgsl(linked.text.as_str().into()),
        });

        let bindings = linked.layout().bindings();
        let buffers: Vec<wgpu::Buffer> = bindings
            .iter()
            .map(|b| {
                device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(format!("{} Uniform Buffer {}", linked.label, b.binding).as_str()),
                    size: b.size,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                })
            })
            .collect();

        let layout_entries: Vec<wgpu::BindGroupLayoutEntry> = bindings
            .iter()
            .map(|b| wgpu::BindGroupLayoutEntry {
                binding: b.binding,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            })
            .collect();
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(format!("{} Bind Group Layout", linked.label).as_str()),
            entries: &layout_entries,
        });

        let group_entries: Vec<wgpu::BindGroupEntry> = bindings
            .iter()
            .zip(&buffers)
            .map(|(b, buffer)| wgpu::BindGroupEntry {
                binding: b.binding,
                resource: buffer.as_entire_binding(),
            })
            .collect();
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(format!("{} Bind Group", linked.label).as_str()),
            layout: &bind_group_layout,
            entries: &group_entries,
        });

        let pipeline = Self::create_pipeline(device, &module, &bind_group_layout, target, &linked.label);

        Self {
            label: linked.label,
            pipeline,
            buffers,
            bind_group,
            uniforms: UniformBlock::new(linked.layout),
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        module: &wgpu::ShaderModule,
        bind_group_layout: &wgpu::BindGroupLayout,
        target: &PipelineTarget,
        label: &str,
    ) -> wgpu::RenderPipeline {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[bind_group_layout],
            immediate_size: 0,
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module,
                entry_point: Some(VERTEX_ENTRY),
                buffers: &[target.vertex_layout.clone()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module,
                entry_point: Some(FRAGMENT_ENTRY),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target.color_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: target.cull_mode(),
                polygon_mode: target.polygon_mode,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: target.depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: target.sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview_mask: None,
            cache: None,
        })
    }

    #[allow(dead_code)]
    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.uniforms.set_bool(name, value);
    }

    #[allow(dead_code)]
    pub fn set_int(&mut self, name: &str, value: i32) {
        self.uniforms.set_int(name, value);
    }

    #[allow(dead_code)]
    pub fn set_float(&mut self, name: &str, value: f32) {
        self.uniforms.set_float(name, value);
    }

    #[allow(dead_code)]
    pub fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.uniforms.set_vec2(name, value);
    }

    pub fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.uniforms.set_vec3(name, value);
    }

    #[allow(dead_code)]
    pub fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.uniforms.set_vec4(name, value);
    }

    pub fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.uniforms.set_mat4(name, value);
    }

    /// Upload changed uniforms and make this program current on `pass`.
    pub fn activate(&mut self, queue: &wgpu::Queue, pass: &mut wgpu::RenderPass<'_>) {
        for (slot, bytes) in self.uniforms.take_dirty() {
            queue.write_buffer(&self.buffers[slot], 0, bytes);
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERTEX: &str = r#"
struct Transforms {
    model: mat4x4<f32>,
    tint: vec3<f32>,
    scale: f32,
};

@group(0) @binding(0)
var<uniform> transforms: Transforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = transforms.model * vec4<f32>(position * transforms.scale, 1.0);
    return out;
}
"#;

    const FRAGMENT: &str = r#"
struct Params {
    flag: u32,
    count: i32,
    offset: vec2<f32>,
    color: vec4<f32>,
};

@group(0) @binding(1)
var<uniform> params: Params;

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    var color = params.color;
    if params.flag != 0u {
        color.x = f32(params.count) + params.offset.x;
    }
    return color;
}
"#;

    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytemuck::pod_collect_to_vec(bytes)
    }

    #[test]
    fn test_reflects_uniform_layout() {
        let linked = ShaderSource::new("test", VERTEX, FRAGMENT).link().unwrap();
        let layout = linked.layout();

        assert_eq!(
            layout.bindings(),
            &[
                UniformBinding { binding: 0, size: 80 },
                UniformBinding { binding: 1, size: 32 },
            ]
        );

        let tint = layout.field("tint").unwrap();
        assert_eq!((tint.slot, tint.offset, tint.kind), (0, 64, UniformKind::Vec3));
        assert_eq!(layout.field("scale").unwrap().offset, 76);

        let color = layout.field("color").unwrap();
        assert_eq!((color.slot, color.offset, color.kind), (1, 16, UniformKind::Vec4));
        assert_eq!(layout.field("count").unwrap().kind, UniformKind::Int);
        assert_eq!(layout.field("flag").unwrap().kind, UniformKind::Uint);
        assert!(layout.field("missing").is_none());
    }

    #[test]
    fn test_setters_write_at_reflected_offsets() {
        let linked = ShaderSource::new("test", VERTEX, FRAGMENT).link().unwrap();
        let mut block = UniformBlock::new(linked.layout().clone());

        block.set_mat4("model", &Mat4::from_scale(Vec3::splat(2.0)));
        block.set_vec3("tint", Vec3::new(0.4, 0.1, 0.6));
        block.set_float("scale", 1.5);
        block.set_bool("flag", true);
        block.set_int("count", -3);
        block.set_vec2("offset", Vec2::new(0.5, 0.25));
        block.set_vec4("color", Vec4::new(1.0, 0.0, 0.0, 1.0));

        assert_eq!(floats(block.bytes_of("model").unwrap())[0], 2.0);
        assert_eq!(floats(block.bytes_of("tint").unwrap()), vec![0.4, 0.1, 0.6]);
        assert_eq!(floats(block.bytes_of("scale").unwrap()), vec![1.5]);
        assert_eq!(block.bytes_of("flag").unwrap(), 1u32.to_ne_bytes());
        assert_eq!(block.bytes_of("count").unwrap(), (-3i32).to_ne_bytes());
        assert_eq!(floats(block.bytes_of("offset").unwrap()), vec![0.5, 0.25]);
        assert_eq!(floats(block.bytes_of("color").unwrap()), vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_or_mistyped_uniforms_are_ignored() {
        let linked = ShaderSource::new("test", VERTEX, FRAGMENT).link().unwrap();
        let mut block = UniformBlock::new(linked.layout().clone());
        let before = block.data.clone();

        block.set_vec3("does_not_exist", Vec3::ONE);
        block.set_float("tint", 3.0);
        block.set_vec4("scale", Vec4::ONE);

        assert_eq!(block.data, before);
    }

    #[test]
    fn test_only_changed_bindings_are_uploaded() {
        let linked = ShaderSource::new("test", VERTEX, FRAGMENT).link().unwrap();
        let mut block = UniformBlock::new(linked.layout().clone());

        assert_eq!(block.take_dirty().count(), 2);
        assert_eq!(block.take_dirty().count(), 0);

        block.set_vec4("color", Vec4::ONE);
        let slots: Vec<usize> = block.take_dirty().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![1]);
    }

    #[test]
    fn test_missing_entry_point_fails_to_link() {
        let fragment = FRAGMENT.replace("fn fs_main", "fn shade");
        let err = ShaderSource::new("test", VERTEX, fragment).link().unwrap_err();
        assert!(matches!(
            err,
            ShaderError::MissingEntryPoint {
                name: FRAGMENT_ENTRY,
                ..
            }
        ));
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = ShaderSource::new("broken", VERTEX, "fn fs_main( {")
            .link()
            .unwrap_err();
        let ShaderError::Parse { label, message } = err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert_eq!(label, "broken");
        assert!(!message.is_empty());
    }

    #[test]
    fn test_type_error_fails_validation() {
        let fragment = FRAGMENT.replace("return color;", "return params.offset;");
        let err = ShaderSource::new("test", VERTEX, fragment).link().unwrap_err();
        assert!(matches!(err, ShaderError::Parse { .. } | ShaderError::Validation { .. }));
    }

    #[test]
    fn test_other_bind_groups_are_rejected() {
        let fragment = FRAGMENT.replace("@group(0) @binding(1)", "@group(1) @binding(0)");
        let err = ShaderSource::new("test", VERTEX, fragment).link().unwrap_err();
        assert!(matches!(err, ShaderError::UnsupportedBinding { group: 1, .. }));
    }

    #[test]
    fn test_wireframe_draws_back_faces() {
        let target = |polygon_mode| PipelineTarget {
            color_format: wgpu::TextureFormat::Bgra8UnormSrgb,
            depth_format: wgpu::TextureFormat::Depth32Float,
            sample_count: 4,
            polygon_mode,
            vertex_layout: wgpu::VertexBufferLayout {
                array_stride: 0,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[],
            },
        };

        assert_eq!(target(wgpu::PolygonMode::Fill).cull_mode(), Some(wgpu::Face::Back));
        assert_eq!(target(wgpu::PolygonMode::Line).cull_mode(), None);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = std::env::temp_dir().join("orb-shader-test-does-not-exist");
        let err = ShaderSource::load(Some(&dir), "scene.vert.wgsl", "lighting.frag.wgsl").unwrap_err();
        let ShaderError::Read { path, .. } = err else {
            panic!("expected a read error, got {err:?}");
        };
        assert_eq!(path, dir.join("scene.vert.wgsl"));
    }

    #[test]
    fn test_missing_asset_is_reported() {
        let err = ShaderSource::load(None, "scene.vert.wgsl", "nope.frag.wgsl").unwrap_err();
        assert!(matches!(err, ShaderError::MissingAsset(path) if path == "shaders/nope.frag.wgsl"));
    }

    #[test]
    fn test_bundled_lighting_program_links() {
        let source = ShaderSource::load(None, "scene.vert.wgsl", "lighting.frag.wgsl").unwrap();
        let linked = source.link().unwrap();
        let layout = linked.layout();

        for (name, slot, offset) in [
            ("model", 0, 0),
            ("view", 0, 64),
            ("projection", 0, 128),
            ("object_color", 1, 0),
            ("light_color", 1, 16),
            ("light_pos", 1, 32),
            ("view_pos", 1, 48),
        ] {
            let field = layout.field(name).unwrap();
            assert_eq!((field.slot, field.offset), (slot, offset), "{name}");
        }
    }

    #[test]
    fn test_bundled_light_source_program_links() {
        let source = ShaderSource::load(None, "scene.vert.wgsl", "light_source.frag.wgsl").unwrap();
        let linked = source.link().unwrap();
        assert_eq!(linked.layout().field("color").unwrap().kind, UniformKind::Vec3);
        assert_eq!(linked.layout().bindings()[1].size, 16);
    }
}
