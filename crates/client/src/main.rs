mod app;
mod assets;
mod config;
mod debug;
mod game;
mod render;

use clap::Parser;
use orb::SphereMesh;
use winit::event_loop::EventLoop;

use config::{Args, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let dump_mesh = args.dump_mesh;
    let config = ViewerConfig::from(args);

    if dump_mesh {
        return dump_sphere(&config);
    }

    run_viewer(config)
}

fn dump_sphere(config: &ViewerConfig) -> anyhow::Result<()> {
    let mesh = SphereMesh::new(config.sphere_points, config.sphere_radius)?;
    print!("{}", mesh.vertices_report());
    println!();
    print!("{}", mesh.indices_report());
    Ok(())
}

fn run_viewer(config: ViewerConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = app::App::new(config);
    event_loop.run_app(&mut app)?;
    app.finish()
}
