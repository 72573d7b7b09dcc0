/// Terminal frontend: frame loop, key-event plumbing and the ASCII surface
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tp3d_core::{Direction, Mesh, Scene};

pub mod renderer;

pub use renderer::CellSurface;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    surface: CellSurface,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        tracing::info!(width, height, triangles = mesh.triangles.len(), "starting renderer");

        Ok(Self {
            scene: Scene::new(mesh, width as f32, height as f32),
            surface: CellSurface::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            // Key release events are needed to stop motion; terminals
            // without the kitty protocol ignore this and keys latch.
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if matches!(code, KeyCode::Esc) {
                self.running = false;
                return Ok(());
            }
            let Some(direction) = direction_for(code) else {
                return Ok(());
            };
            match kind {
                KeyEventKind::Press => self.scene.motion.press(direction),
                KeyEventKind::Release => self.scene.motion.release(direction),
                // A repeat means the key is still held; motion is already set.
                KeyEventKind::Repeat => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.scene
            .tick(&mut self.surface)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.surface.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "TP3D Terminal Renderer | FPS: {:.1} | Controls: Up/Down=Move Left/Right=Turn Q/E=Rise/Sink ESC=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Map key codes to the core's logical movement directions
fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left => Some(Direction::YawLeft),
        KeyCode::Right => Some(Direction::YawRight),
        KeyCode::Up => Some(Direction::Forward),
        KeyCode::Down => Some(Direction::Back),
        KeyCode::Char('q') => Some(Direction::Up),
        KeyCode::Char('e') => Some(Direction::Down),
        _ => None,
    }
}
