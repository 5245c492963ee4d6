use clap::Parser;
use colored::Colorize;
use metar_decoder::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::run(args) {
        eprintln!("{} {error:#}", "Error:".red().bold());
        process::exit(1);
    }
}
