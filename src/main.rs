use clap::Parser;
use mini_library::{application::library::LibraryContext, cli, config::Cli, logging};

fn main() {
    let args = Cli::parse();

    // ログ初期化
    logging::init(args.verbose);

    let policy = args.policy();
    tracing::info!(
        capacity = policy.capacity,
        max_title_len = ?policy.max_title_len,
        max_author_len = ?policy.max_author_len,
        "starting mini library"
    );

    let mut ctx = LibraryContext::in_memory(policy);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = cli::run(&mut ctx, stdin.lock(), stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
