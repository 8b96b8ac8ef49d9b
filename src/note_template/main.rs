use clap::Parser;
use colored::*;
use note_template::api::NoteTemplateApi;
use note_template::commands::{CmdMessage, MessageLevel};
use note_template::config;
use note_template::error::Result;
use note_template::logging;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::resolve(cli.config_layer(), cli.config_file.clone())?;
    logging::init(&config)?;

    let api = NoteTemplateApi::from_config(config)?;
    let result = api.new_notes(cli.templates.as_slice())?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
