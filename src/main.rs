use clap::Parser;

use cdoc_guard::cli::{Cli, Commands};
use cdoc_guard::commands::{run_check, run_format, run_init, run_stub, run_template};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Stub(args) => run_stub(args, &cli),
        Commands::Template(args) => run_template(args, &cli),
        Commands::Format(args) => run_format(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
