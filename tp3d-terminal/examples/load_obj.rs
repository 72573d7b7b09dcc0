/// Example: Load and render an OBJ file in the terminal
///
/// Usage: cargo run --example load_obj -- path/to/file.obj

use std::env;
use std::fs;
use std::io;
use tp3d_core::obj;
use tp3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file>", args[0]);
        eprintln!("\nNo OBJ file provided, using default cube...");
        let cube = tp3d_core::Mesh::cube(20.0);
        let mut app = TerminalApp::new(cube)?;
        return app.run();
    }

    let obj_path = &args[1];

    println!("Loading OBJ file: {}", obj_path);

    let text = fs::read_to_string(obj_path)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("Failed to read OBJ file: {}", e)))?;

    // Lenient load: malformed face records are dropped, the rest renders.
    let mesh = obj::parse_obj(&text);
    if mesh.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "OBJ file contained no loadable faces",
        ));
    }

    println!("Loaded {} triangles", mesh.triangles.len());
    println!("Starting terminal renderer (press ESC to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(mesh)?;
    app.run()?;

    println!("Thank you for using TP3D Terminal Renderer!");
    Ok(())
}
