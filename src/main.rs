/// Native command console for the animation demo
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::{BufRead, Write};
    use std::path::PathBuf;

    use anim_demo::DemoConfig;
    use anim_demo::config::LogLevel;
    use anim_demo::constants::DEFAULT_CARD_COUNT;
    use anim_demo::session::{Command, HELP, Reply, Session};
    use clap::Parser;

    #[derive(Parser)]
    #[command(about = "Drive the animation demo page from the terminal")]
    struct Args {
        /// Config file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured log level (error, warn, info, debug, trace)
        #[arg(long)]
        log_level: Option<String>,

        /// Number of demo cards
        #[arg(long, default_value_t = DEFAULT_CARD_COUNT)]
        cards: usize,
    }

    let args = Args::parse();
    let config = DemoConfig::load_or_default(args.config.as_deref());

    let level = match args.log_level.as_deref() {
        Some(name) => LogLevel::from_name(name).unwrap_or_else(|| {
            eprintln!(
                "Unknown log level '{}' (expected one of {}), using {}",
                name,
                LogLevel::names(),
                config.log_level.name()
            );
            config.log_level
        }),
        None => config.log_level,
    };
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();

    let mut session = Session::new(&config, args.cards, rand::rng());
    println!("{}", HELP);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match session.execute(command) {
            Ok(Reply::Done) => {}
            Ok(Reply::Text(text)) => println!("{}", text),
            Ok(Reply::Quit) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
