/// TP3D Terminal Renderer
///
/// Renders an OBJ mesh (or a demo cube) with the painter's-algorithm
/// pipeline. Controls:
///   - Up/Down: Move forward/back
///   - Left/Right: Turn
///   - Q/E: Rise/sink
///   - ESC: Quit

use std::env;
use std::fs;
use std::io;
use tp3d_core::{obj, Mesh};
use tp3d_terminal::TerminalApp;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Stderr keeps log lines out of the rendered frame.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mesh = match args.get(1) {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let mesh = obj::parse_obj(&text);
            if mesh.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("no triangles loaded from {path}"),
                ));
            }
            mesh
        }
        None => {
            eprintln!("No OBJ file provided, using default cube...");
            Mesh::cube(20.0)
        }
    };

    let mut app = TerminalApp::new(mesh)?;
    app.run()
}
