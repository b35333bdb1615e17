//! `patterns` - CLI for patternbook
//!
//! This binary lists, describes and runs the pattern and principle
//! demonstrations.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use patternbook::cli::{Cli, Command, ConfigCommand, ListCommand, RunCommand, ShowCommand};
use patternbook::{init_logging, to_json, Catalog, Config, Demo, DemoContext, DemoInfo};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // `config validate` reports problems instead of failing on them
    if let Command::Config(ConfigCommand::Validate { file }) = &cli.command {
        return handle_validate(file.clone().or_else(|| cli.config.clone()));
    }

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;
    let catalog = Catalog::builtin();

    match cli.command {
        Command::List(cmd) => handle_list(&catalog, &cmd),
        Command::Show(cmd) => handle_show(&catalog, &cmd),
        Command::Run(cmd) => handle_run(&catalog, &config, &cmd),
        Command::Config(cmd) => handle_config(&config, &cmd),
    }
}

fn handle_list(catalog: &Catalog, cmd: &ListCommand) -> anyhow::Result<()> {
    let infos: Vec<DemoInfo> = match cmd.category {
        Some(category) => catalog.by_category(category.into()).map(Demo::info).collect(),
        None => catalog.iter().map(Demo::info).collect(),
    };

    let mut out = std::io::stdout().lock();
    if cmd.json {
        writeln!(out, "{}", to_json(&infos)?)?;
        return Ok(());
    }

    let width = infos.iter().map(|i| i.name.len()).max().unwrap_or(0);
    for info in &infos {
        writeln!(
            out,
            "{:<width$}  {:<11}  {}",
            info.name,
            info.category.to_string(),
            info.summary
        )?;
    }
    Ok(())
}

fn handle_show(catalog: &Catalog, cmd: &ShowCommand) -> anyhow::Result<()> {
    let info = catalog.get(&cmd.name)?.info();

    let mut out = std::io::stdout().lock();
    if cmd.json {
        writeln!(out, "{}", to_json(&info)?)?;
    } else {
        writeln!(out, "{}", info.title)?;
        writeln!(out, "  Name:      {}", info.name)?;
        writeln!(out, "  Category:  {}", info.category)?;
        writeln!(out, "  Summary:   {}", info.summary)?;
    }
    Ok(())
}

fn handle_run(catalog: &Catalog, config: &Config, cmd: &RunCommand) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut ctx = DemoContext::new(&mut out, config);

    let count = if cmd.all {
        catalog.run_all(&mut ctx)?
    } else if let Some(category) = cmd.category {
        catalog.run_category(category.into(), &mut ctx)?
    } else if cmd.names.is_empty() {
        catalog.run(config.demos.default.as_slice(), &mut ctx)?
    } else {
        catalog.run(cmd.names.as_slice(), &mut ctx)?
    };

    tracing::debug!(count, "Demos finished");
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                writeln!(out, "{}", to_json(config)?)?;
            } else {
                writeln!(out, "Current Configuration")?;
                writeln!(out, "=====================")?;
                writeln!(out)?;
                writeln!(out, "[Output]")?;
                writeln!(out, "  Separator char:     {:?}", config.output.separator_char)?;
                writeln!(out, "  Separator width:    {}", config.output.separator_width)?;
                writeln!(out, "  Show titles:        {}", config.output.show_titles)?;
                writeln!(out)?;
                writeln!(out, "[Demos]")?;
                writeln!(out, "  Default:            {}", config.demos.default.join(", "))?;
                writeln!(out, "  Credit card:        {}", config.demos.credit_card)?;
                let cuisines: String = config.demos.cuisines.iter().collect();
                writeln!(out, "  Cuisines:           {cuisines}")?;
                writeln!(out)?;
                writeln!(out, "[Journal]")?;
                match &config.journal.path {
                    Some(path) => writeln!(out, "  Path:               {}", path.display())?,
                    None => writeln!(out, "  Path:               (not saved)")?,
                }
                writeln!(out, "  Overwrite:          {}", config.journal.overwrite)?;
            }
        }
        ConfigCommand::Path => {
            writeln!(out, "{}", Config::default_config_path().display())?;
        }
        ConfigCommand::Validate { file } => {
            handle_validate(file.clone())?;
        }
    }
    Ok(())
}

fn handle_validate(file: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let shown = file.clone().unwrap_or_else(Config::default_config_path);
    let mut out = std::io::stdout().lock();
    writeln!(out, "Validating configuration: {}", shown.display())?;
    match Config::load_from(file) {
        Ok(_) => writeln!(out, "Configuration is valid.")?,
        Err(e) => writeln!(out, "Configuration error: {e}")?,
    }
    Ok(())
}
