//! Command dispatch

use std::io::{self, BufRead};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::PollIntervalField;
use crate::cli::args::{Cli, Commands, ConfigCommands, SetCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::DomainId;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::host::TomlConfigHost;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = load_settings(cli)?;
    if let Some(Commands::Config { command }) = &cli.command {
        return cmd_config(&settings, command);
    }

    let container = ServiceContainer::new(settings)?;
    match &cli.command {
        None => cmd_show(&container, false),
        Some(Commands::Show { describe }) => cmd_show(&container, *describe),
        Some(Commands::Domains {
            collapse,
            collapse_all,
            describe,
        }) => cmd_domains(&container, collapse, *collapse_all, *describe),
        Some(Commands::Enable { ids, all }) => cmd_toggle(&container, ids, *all, true),
        Some(Commands::Disable { ids, all }) => cmd_toggle(&container, ids, *all, false),
        Some(Commands::Reset) => cmd_reset(&container),
        Some(Commands::Export) => cmd_export(&container),
        Some(Commands::Set { field }) => cmd_set(&container, field),
        Some(Commands::Config { .. }) | Some(Commands::Completion { .. }) => Ok(()),
    }
}

/// Settings from files and env, then command-line overrides.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config_file.as_deref())?;
    if let Some(path) = &cli.native_config {
        settings.native_config = path.clone();
    }
    if let Some(locale) = cli.locale {
        settings.locale = Some(locale);
    }
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    debug!("effective settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, describe: bool) -> CliResult<()> {
    let host = container.open_host()?;
    let form = container.connection_form();
    let controller = container.selection_controller();
    let selection = controller.current_selection(&host);

    output::info(&output::render_connection(
        &form.view(&host),
        &container.localizer,
        &container.palette,
    ));
    output::info("");
    output::info(&output::render_domain_tree(
        &controller.visible_rows(&selection),
        &container.localizer,
        &container.palette,
        describe,
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_domains(
    container: &ServiceContainer,
    collapse: &[String],
    collapse_all: bool,
    describe: bool,
) -> CliResult<()> {
    let host = container.open_host()?;
    let mut controller = container.selection_controller();
    let forest = container.catalog.forest();

    if collapse_all {
        controller.collapse_all();
    }
    for id in collapse {
        if !forest.contains(id) {
            return Err(CliError::InvalidArgs(format!("unknown domain: {id}")));
        }
        controller.toggle_domain_expansion(&DomainId::from(id.as_str()));
    }

    let selection = controller.current_selection(&host);
    output::info(&output::render_domain_tree(
        &controller.visible_rows(&selection),
        &container.localizer,
        &container.palette,
        describe,
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_toggle(
    container: &ServiceContainer,
    ids: &[String],
    all: bool,
    should_select: bool,
) -> CliResult<()> {
    let mut host = container.open_host()?;
    let controller = container.selection_controller();

    match (all, should_select) {
        (true, true) => controller.enable_all(&mut host),
        (true, false) => controller.disable_all(&mut host),
        (false, _) => {
            for id in ids {
                controller.toggle(&mut host, id, should_select)?;
            }
        }
    }

    let selection = controller.current_selection(&host);
    output::info(&output::render_domain_tree(
        &controller.visible_rows(&selection),
        &container.localizer,
        &container.palette,
        false,
    ));
    save(container, &mut host)
}

#[instrument(skip(container))]
fn cmd_reset(container: &ServiceContainer) -> CliResult<()> {
    let mut host = container.open_host()?;
    container.selection_controller().reset_to_defaults(&mut host);
    save(container, &mut host)
}

fn cmd_export(container: &ServiceContainer) -> CliResult<()> {
    let host = container.open_host()?;
    for id in container.selection_controller().export(&host) {
        output::info(id.as_str());
    }
    Ok(())
}

#[instrument(skip(container, field))]
fn cmd_set(container: &ServiceContainer, field: &SetCommands) -> CliResult<()> {
    let mut host = container.open_host()?;
    let form = container.connection_form();
    let t = &container.localizer;

    match field {
        SetCommands::BaseUrl { url } => {
            if let Some(hint) = form.set_base_url(&mut host, url) {
                output::warning(t.text(hint));
            }
        }
        SetCommands::Token { token } => {
            let token = match token {
                Some(token) => token.clone(),
                None => read_token_from_stdin()?,
            };
            form.set_api_token(&mut host, &token);
        }
        SetCommands::SelfSigned { allow } => form.set_allow_self_signed(&mut host, *allow),
        SetCommands::Interval { value } => {
            let mut field = PollIntervalField::from_host(&host);
            if field.input(&mut host, value).is_none() {
                let coerced = field.blur(&mut host);
                output::warning(&format!(
                    "{}: {:?} -> {}",
                    t.text("hint.poll_interval"),
                    value,
                    coerced
                ));
            }
        }
    }

    save(container, &mut host)
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            output::info(&format!("settings: {global}"));
            output::info(&format!("native:   {}", settings.native_config.display()));
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn read_token_from_stdin() -> CliResult<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CliError::Usage(format!("cannot read token from stdin: {e}")))?;
    let token = line.trim().to_string();
    if token.is_empty() {
        return Err(CliError::InvalidArgs("empty token".to_string()));
    }
    Ok(token)
}

fn save(container: &ServiceContainer, host: &mut TomlConfigHost) -> CliResult<()> {
    let t = &container.localizer;
    if host.save()? {
        output::success(&format!("{}: {}", t.text("status.saved"), host.path().display()));
    } else {
        output::info(t.text("status.unchanged"));
    }
    Ok(())
}
