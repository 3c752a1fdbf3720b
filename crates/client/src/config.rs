use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;

#[derive(Parser, Debug)]
#[command(name = "viewer")]
#[command(about = "Lit sphere viewer with a free-fly camera")]
pub struct Args {
    #[arg(
        short,
        long,
        default_value_t = 50,
        help = "Points per latitude ring (even, at least 4)"
    )]
    pub points: u32,

    #[arg(short, long, default_value_t = 2.0)]
    pub radius: f32,

    #[arg(long, default_value_t = 900)]
    pub width: u32,

    #[arg(long, default_value_t = 900)]
    pub height: u32,

    #[arg(long, help = "Load WGSL sources from this directory instead of the embedded ones")]
    pub shader_dir: Option<PathBuf>,

    #[arg(long, help = "Draw filled triangles instead of a wireframe")]
    pub no_wireframe: bool,

    #[arg(long, default_value_t = 0.03, help = "Degrees of rotation per pixel of mouse motion")]
    pub mouse_sensitivity: f32,

    #[arg(long, help = "Print the generated sphere buffers and exit")]
    pub dump_mesh: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub sphere_points: u32,
    pub sphere_radius: f32,
    pub camera_start: Vec3,
    pub light_position: Vec3,
    pub light_color: Vec3,
    pub object_color: Vec3,
    pub clear_color: wgpu::Color,
    pub near: f32,
    pub far: f32,
    pub mouse_sensitivity: f32,
    pub wireframe: bool,
    pub shader_dir: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 900,
            sphere_points: 50,
            sphere_radius: 2.0,
            camera_start: Vec3::new(0.0, 2.0, 5.0),
            light_position: Vec3::new(0.0, 4.0, 3.0),
            light_color: Vec3::ONE,
            object_color: Vec3::new(0.4, 0.1, 0.6),
            clear_color: wgpu::Color {
                r: 0.1,
                g: 0.1,
                b: 0.1,
                a: 1.0,
            },
            near: 0.1,
            far: 100.0,
            mouse_sensitivity: 0.03,
            wireframe: true,
            shader_dir: None,
        }
    }
}

impl From<Args> for ViewerConfig {
    fn from(args: Args) -> Self {
        Self {
            window_width: args.width,
            window_height: args.height,
            sphere_points: args.points,
            sphere_radius: args.radius,
            mouse_sensitivity: args.mouse_sensitivity,
            wireframe: !args.no_wireframe,
            shader_dir: args.shader_dir,
            ..Default::default()
        }
    }
}
