// coursework: teaching exercises with a terminal browser

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use coursework::exercises::{Catalog, read_input};
use coursework::output::Transcript;
use coursework::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [list | <exercise>]", program_name);
    eprintln!();
    eprintln!("  {}                 # Browse and run exercises in the TUI", program_name);
    eprintln!("  {} list            # List every exercise", program_name);
    eprintln!("  {} pointer-walk    # Run one exercise", program_name);
    eprintln!("  echo 'a,b  c' | {} line-analyzer", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("coursework");

    let catalog = Catalog::standard();

    match args.get(1).map(|s| s.as_str()) {
        None => run_browser(catalog),
        Some("help" | "--help" | "-h") => {
            print_usage(program_name);
            Ok(())
        }
        Some("list") => {
            for exercise in catalog.iter() {
                println!("{}\t{}", exercise.name(), exercise.summary());
            }
            Ok(())
        }
        Some(name) => {
            let Some(exercise) = catalog.get(name) else {
                eprintln!("Error: Unknown exercise '{}'", name);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            };

            let input = match read_input(exercise.input_mode(), &mut io::stdin().lock()) {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let mut out = Transcript::new();
            if let Err(e) = exercise.run(&input, &mut out) {
                // Flush whatever was printed before the failure
                print!("{}", out.as_str());
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }

            let mut stdout = io::stdout().lock();
            stdout.write_all(out.as_str().as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn run_browser(catalog: Catalog) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Loaded {} exercises.", catalog.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(catalog);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
