mod audio;
mod build_info;
mod config;
mod constants;
mod games;
mod input;
mod trivia;
mod ui;

use config::DashConfig;
use constants::{FRAME_POLL_MS, WON_SCREEN_MS};
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use games::dash::{self, DashEvent, DashGame, RunOutcome};
use games::flashcards::{self, FlashcardGame};
use games::memory::{self, MemoryGame};
use games::message::{self, MessageGame, MessagePhase};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use trivia::TriviaCard;

/// The screen sequence. Each variant owns its screen's state; the main
/// loop consumes the current screen every frame and returns the next one.
enum Screen {
    Start,
    Dash(DashGame),
    /// The run ended in a loss. Keeps the finished game so the scene can
    /// show the final state under the overlay.
    GameOver(DashGame),
    /// Victory interstitial, auto-advances to the memory board.
    Won { game: DashGame, since: Instant },
    Memory {
        game: MemoryGame,
        fetch: Option<JoinHandle<Vec<TriviaCard>>>,
    },
    /// Trivia flashcards. `game` stays None until the background fetch
    /// lands; the loading screen shows in the meantime.
    Trivia {
        game: Option<FlashcardGame>,
        fetch: Option<JoinHandle<Vec<TriviaCard>>>,
    },
    Message(MessageGame),
}

/// Background melody thread plus its shutdown flag.
type Melody = (Arc<AtomicBool>, JoinHandle<()>);

fn start_melody() -> Melody {
    let stop = Arc::new(AtomicBool::new(false));
    let handle = audio::spawn_melody(stop.clone());
    (stop, handle)
}

fn stop_melody(melody: &mut Option<Melody>) {
    if let Some((stop, handle)) = melody.take() {
        stop.store(true, Ordering::Relaxed);
        let _ = handle.join();
    }
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "santa-dash {} ({}, built {})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_COMMIT,
                    build_info::BUILD_DATE
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Santa Dash - A Christmas Arcade for the Terminal\n");
                println!("Usage: santa-dash [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls:");
                println!("  Space/Up   Jump");
                println!("  Down       Duck");
                println!("  Esc        Forfeit the run (press twice)");
                println!("  Q          Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'santa-dash --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Sound is best-effort: a missing output device mutes the game but
    // never blocks it.
    let sfx = audio::Audio::new();
    if sfx.is_none() {
        eprintln!("No audio output device found; running silent.");
    }
    let mut melody: Option<Melody> = None;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut current_screen = Screen::Start;
    let mut last_tick = Instant::now();

    // Main loop: draw, poll one key, tick, transition.
    loop {
        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();

        current_screen = match current_screen {
            Screen::Start => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::start_scene::render_start_scene(frame, area);
                })?;

                let mut next = Screen::Start;
                if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Enter | KeyCode::Char(' ') => {
                                melody = Some(start_melody());
                                next = Screen::Dash(DashGame::new(DashConfig::default()));
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                            _ => {}
                        }
                    }
                }
                next
            }

            Screen::Dash(mut game) => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::dash_scene::render_dash_scene(frame, area, &game);
                })?;

                if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        dash::process_input(&mut game, input::dash_input(key_event));
                    }
                }

                let mut rng = rand::thread_rng();
                for dash_event in dash::tick_dash(&mut game, dt_ms, &mut rng) {
                    if let Some(sfx) = &sfx {
                        match dash_event {
                            DashEvent::Jumped => sfx.jump(),
                            DashEvent::Collected { .. } => sfx.collect(),
                            DashEvent::Hit { .. } => sfx.hit(),
                        }
                    }
                }

                match game.outcome {
                    Some(RunOutcome::Win) => {
                        stop_melody(&mut melody);
                        Screen::Won {
                            game,
                            since: Instant::now(),
                        }
                    }
                    Some(RunOutcome::Loss(_)) => {
                        stop_melody(&mut melody);
                        Screen::GameOver(game)
                    }
                    None => Screen::Dash(game),
                }
            }

            Screen::GameOver(game) => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::dash_scene::render_dash_scene(frame, area, &game);
                })?;

                let mut next = Screen::GameOver(game);
                if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                                melody = Some(start_melody());
                                next = Screen::Dash(DashGame::new(DashConfig::default()));
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                            _ => {}
                        }
                    }
                }
                next
            }

            Screen::Won { game, since } => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::dash_scene::render_dash_scene(frame, area, &game);
                })?;

                let mut advance = since.elapsed() >= Duration::from_millis(WON_SCREEN_MS);
                if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') => break,
                            // Any other key skips the interstitial wait
                            _ => advance = true,
                        }
                    }
                }

                if advance {
                    // Kick off the trivia fetch now so the deck is usually
                    // ready by the time the memory board is cleared.
                    let mut rng = rand::thread_rng();
                    Screen::Memory {
                        game: MemoryGame::new(&mut rng),
                        fetch: Some(trivia::spawn_trivia_fetch()),
                    }
                } else {
                    Screen::Won { game, since }
                }
            }

            Screen::Memory { mut game, fetch } => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::memory_scene::render_memory_scene(frame, area, &game);
                })?;

                if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                            _ => memory::process_input(&mut game, input::memory_input(key_event)),
                        }
                    }
                }

                memory::tick_memory(&mut game, dt_ms);

                if game.complete {
                    Screen::Trivia { game: None, fetch }
                } else {
                    Screen::Memory { game, fetch }
                }
            }

            Screen::Trivia { mut game, mut fetch } => {
                // Collect the fetched deck once the background thread is done
                if game.is_none() {
                    match fetch.take() {
                        Some(handle) if handle.is_finished() => {
                            let deck = handle.join().unwrap_or_else(|_| trivia::fallback_cards());
                            game = Some(FlashcardGame::new(deck));
                        }
                        Some(handle) => fetch = Some(handle),
                        None => game = Some(FlashcardGame::new(trivia::fallback_cards())),
                    }
                }

                terminal.draw(|frame| {
                    let area = frame.size();
                    match &game {
                        Some(game) => ui::flashcard_scene::render_flashcard_scene(frame, area, game),
                        None => ui::flashcard_scene::render_flashcard_loading(frame, area),
                    }
                })?;

                if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                            _ => {
                                if let Some(game) = &mut game {
                                    flashcards::process_input(
                                        game,
                                        input::flashcard_input(key_event),
                                    );
                                }
                            }
                        }
                    }
                }

                match game {
                    Some(game) if game.complete => Screen::Message(MessageGame::new()),
                    game => Screen::Trivia { game, fetch },
                }
            }

            Screen::Message(mut game) => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::message_scene::render_message_scene(frame, area, &game);
                })?;

                let mut next = None;
                if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                            KeyCode::Char('r') | KeyCode::Char('R')
                                if game.phase == MessagePhase::Done =>
                            {
                                // Replay the whole sequence from the top
                                next = Some(Screen::Start);
                            }
                            _ => message::process_input(&mut game, input::message_input(key_event)),
                        }
                    }
                }

                message::tick_message(&mut game, dt_ms);
                match next {
                    Some(screen) => screen,
                    None => Screen::Message(game),
                }
            }
        };
    }

    // Cleanup terminal
    stop_melody(&mut melody);
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Merry Christmas!");

    Ok(())
}
